//! # Hostel Config
//!
//! Configuration types for Hostel Admin, loaded from environment variables:
//!
//! - [`api`]: Backend base URL and HTTP client identity
//! - [`logging`]: Log level, log directory, and file log format
//!
//! # Example
//!
//! ```ignore
//! use hostel_config::{ApiConfig, LoggingConfig};
//!
//! dotenvy::dotenv().ok();
//! let api_config = ApiConfig::from_env();
//! let logging_config = LoggingConfig::from_env();
//! ```

pub mod api;
pub mod logging;

// Re-export commonly used types at crate root
pub use api::ApiConfig;
pub use logging::{LogFormat, LoggingConfig};
