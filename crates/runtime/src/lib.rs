mod config;
pub mod logging;

pub use config::{DEFAULT_SEARCH_PATTERN, PROGRAM_LOG_LEVEL, PROGRAM_NAME};

pub use logging::init;
