pub mod config;
pub mod error;
pub mod logging;
pub mod result;

pub use config::{AppConfig, LoggingConfig, StorageConfig};
pub use error::BoardError;
pub use logging::init_logging;
pub use result::BoardResult;
