// tests/logging_levels.rs

use tracing::Level;

use pullwrap::cli::LogLevel;
use pullwrap::logging::effective_level;

#[test]
fn log_level_priority_is_flag_then_toggles_then_env() {
    assert_eq!(effective_level(Some(LogLevel::Trace), false, true, Some("error")), Level::TRACE);
    assert_eq!(effective_level(None, true, false, Some("error")), Level::DEBUG);
    assert_eq!(effective_level(None, false, true, Some("debug")), Level::WARN);
    assert_eq!(effective_level(None, false, false, Some("Warning")), Level::WARN);
    assert_eq!(effective_level(None, false, false, Some("bogus")), Level::INFO);
    assert_eq!(effective_level(None, false, false, None), Level::INFO);
}
