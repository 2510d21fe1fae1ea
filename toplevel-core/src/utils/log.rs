//! Logging setup for compositors embedding this crate.
use crate::errors::Result;
use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

/// Build a subscriber for `level_regex`, an `EnvFilter` directive such as
/// `toplevel_core=trace`.
///
/// An unparsable directive falls back to `debug`; the parse error is handed back so the
/// caller can report it once logging works.
#[must_use]
pub fn parse_log_level(
    level_regex: &str,
) -> (impl Subscriber + Send + Sync + use<>, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .parse(level_regex)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::new("debug")
        });
    (get_subscriber(filter), parse_err)
}

fn get_subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync {
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
}

/// Install the subscriber for `level_regex` as the global default.
///
/// # Errors
///
/// Fails if a global subscriber was already installed.
pub fn setup_logging(level_regex: &str) -> Result<()> {
    let (subscriber, parse_err) = parse_log_level(level_regex);
    tracing::subscriber::set_global_default(subscriber)?;
    if let Some(err) = parse_err {
        tracing::warn!("Invalid log filter {:?}, logging at debug: {}", level_regex, err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_filters_parse_cleanly() {
        let (_, err) = parse_log_level("toplevel_core=trace,warn");
        assert!(err.is_none());
    }

    #[test]
    fn invalid_filters_report_the_error() {
        let (_, err) = parse_log_level("toplevel_core=notalevel");
        assert!(err.is_some());
    }

    #[test]
    fn events_reach_a_local_subscriber() {
        let (subscriber, _) = parse_log_level("trace");
        tracing::subscriber::with_default(subscriber, || {
            let mut toplevel = crate::models::Toplevel::default();
            toplevel.map();
            let commit = toplevel.commit();
            assert_eq!(
                toplevel.acknowledge(commit.serial + 1, commit.client_size()),
                crate::models::AckOutcome::Stale
            );
            assert_eq!(
                toplevel.acknowledge(commit.serial, commit.client_size()),
                crate::models::AckOutcome::Applied
            );
        });
    }
}
