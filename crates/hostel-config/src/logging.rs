use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Level for the rolling file log (`LOG_LEVEL`, default `info`).
    pub level: String,
    pub directory: String,
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            directory: env::var("LOG_DIR").unwrap_or_else(|_| "storage/logs".to_string()),
            format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Compact,
            },
        }
    }
}
