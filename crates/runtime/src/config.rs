pub const PROGRAM_NAME: &str = "syswrap";

/// Environment variable read by [`crate::logging::init`].
pub const PROGRAM_LOG_LEVEL: &str = "SYSWRAP_LOG_LEVEL";

/// Search pattern that matches every entry name.
pub const DEFAULT_SEARCH_PATTERN: &str = "*";
