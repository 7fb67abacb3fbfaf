use crate::cli::{
    actions::Action,
    commands::{self, ARG_VERBOSITY},
    dispatch::handler,
    telemetry,
};
use anyhow::Result;
use tracing::Level;

/// Start the CLI
/// # Errors
/// Returns an error if logging cannot be initialized or the arguments are inconsistent.
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    telemetry::init(Some(verbosity_level(
        matches.get_one::<u8>(ARG_VERBOSITY).copied(),
    )))?;

    handler(&matches)
}

/// Maps the `-v` count (or `SIGNUP_LOG_LEVEL`) to a tracing level.
#[must_use]
pub fn verbosity_level(verbosity: Option<u8>) -> Level {
    match verbosity.unwrap_or(0) {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::verbosity_level;
    use tracing::Level;

    #[test]
    fn verbosity_defaults_to_error() {
        assert_eq!(verbosity_level(None), Level::ERROR);
        assert_eq!(verbosity_level(Some(2)), Level::INFO);
        assert_eq!(verbosity_level(Some(9)), Level::TRACE);
    }
}
