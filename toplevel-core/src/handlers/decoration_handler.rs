use crate::config::DecorationConfig;
use crate::models::{MarginProducer, Margins, Toplevel, ToplevelState};

/// A plain frame: a border on every side plus a titlebar on top. Fullscreen toplevels are not
/// decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decorator {
    pub border_size: i32,
    pub titlebar_height: i32,
}

impl Decorator {
    #[must_use]
    pub const fn new(border_size: i32, titlebar_height: i32) -> Self {
        Self {
            border_size,
            titlebar_height,
        }
    }

    /// Write this frame's margins into the pending state of `toplevel`. Call right before the
    /// commit.
    pub fn decorate(&self, toplevel: &mut Toplevel) {
        toplevel.apply_margin_producer(self);
    }
}

impl From<&DecorationConfig> for Decorator {
    fn from(config: &DecorationConfig) -> Self {
        Self::new(config.border_size, config.titlebar_height)
    }
}

impl MarginProducer for Decorator {
    fn produce_margins(&self, pending: &ToplevelState) -> Margins {
        if pending.fullscreen {
            return Margins::default();
        }
        Margins::from_triple(
            self.titlebar_height + self.border_size,
            self.border_size,
            self.border_size,
        )
    }
}
