//! Settings that seed new toplevels and the built-in collaborators.
//!
//! # Example
//!
//! ```toml
//! gravity = ["top", "left"]
//! log_level = "toplevel_core=debug"
//!
//! [initial_geometry]
//! x = 100
//! y = 100
//! width = 0
//! height = 0
//!
//! [decoration]
//! border_size = 4
//! titlebar_height = 30
//! ```
use crate::errors::Result;
use crate::models::{into_edges, Edges, Geometry, ToplevelState};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Geometry of a toplevel that was just picked up, before any plugin placed it.
    pub initial_geometry: Geometry,
    /// Edge names, see [`Config::gravity_edges`].
    pub gravity: Vec<String>,
    pub decoration: DecorationConfig,
    /// An `EnvFilter` directive, handed to [`crate::utils::log::setup_logging`].
    pub log_level: String,
}

/// Frame drawn by the built-in [`Decorator`](crate::handlers::Decorator).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct DecorationConfig {
    pub border_size: i32,
    pub titlebar_height: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_geometry: Geometry::new(100, 100, 0, 0),
            gravity: vec!["top".to_owned(), "left".to_owned()],
            decoration: DecorationConfig::default(),
            log_level: "info".to_owned(),
        }
    }
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            border_size: 4,
            titlebar_height: 30,
        }
    }
}

impl Config {
    /// # Errors
    ///
    /// Fails when `contents` is not valid TOML or does not match the config layout.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// # Errors
    ///
    /// Fails when a gravity entry is not an edge name.
    pub fn gravity_edges(&self) -> Result<Edges> {
        into_edges(&self.gravity)
    }

    /// The state all three buffers of a new toplevel start from.
    ///
    /// # Errors
    ///
    /// Fails when a gravity entry is not an edge name.
    pub fn initial_state(&self) -> Result<ToplevelState> {
        let mut state = ToplevelState::default();
        state.geometry = self.initial_geometry;
        state.gravity = self.gravity_edges()?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CoreError;
    use crate::models::Toplevel;
    use std::io::Write;

    #[test]
    fn defaults_match_a_fresh_toplevel_state() {
        let config = Config::default();
        assert_eq!(config.initial_state().unwrap(), ToplevelState::default());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = Config::from_toml_str("log_level = \"debug\"\n").unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.initial_geometry, Geometry::new(100, 100, 0, 0));
        assert_eq!(config.decoration, DecorationConfig::default());
    }

    #[test]
    fn parses_a_full_config() {
        let contents = r#"
gravity = ["bottom", "right"]

[initial_geometry]
x = 0
y = 0
width = 640
height = 480

[decoration]
border_size = 2
titlebar_height = 24
"#;
        let config = Config::from_toml_str(contents).unwrap();
        assert_eq!(config.gravity_edges().unwrap(), Edges::BOTTOM | Edges::RIGHT);
        assert_eq!(config.initial_geometry, Geometry::new(0, 0, 640, 480));
        assert_eq!(
            config.decoration,
            DecorationConfig {
                border_size: 2,
                titlebar_height: 24
            }
        );
    }

    #[test]
    fn unknown_gravity_is_an_error() {
        let config = Config::from_toml_str("gravity = [\"up\"]\n").unwrap();
        assert!(matches!(
            config.initial_state(),
            Err(CoreError::InvalidEdge(_))
        ));
        assert!(Toplevel::with_config(&config).is_err());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(matches!(
            Config::from_toml_str("gravity = ["),
            Err(CoreError::TomlParse(_))
        ));
    }

    #[test]
    fn loads_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[initial_geometry]\nx = 5\ny = 6\nwidth = 7\nheight = 8").unwrap();
        let config = Config::load(file.path()).unwrap();
        let toplevel = Toplevel::with_config(&config).unwrap();
        assert_eq!(toplevel.current().geometry, Geometry::new(5, 6, 7, 8));
        assert_eq!(toplevel.pending().geometry, Geometry::new(5, 6, 7, 8));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::load(dir.path().join("nope.toml")),
            Err(CoreError::Io(_))
        ));
    }
}
