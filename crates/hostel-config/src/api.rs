use std::env;

pub const DEFAULT_API_URL: &str = "https://hostel-management-backend-rc9d.onrender.com/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to, without a trailing slash.
    pub base_url: String,
    pub user_agent: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            user_agent: default_user_agent(),
        }
    }

    pub fn from_env() -> Self {
        Self {
            base_url: normalize_base_url(
                &env::var("HOSTEL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            ),
            user_agent: env::var("HOSTEL_API_USER_AGENT")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(default_user_agent),
        }
    }

    /// Replace the base URL, e.g. from a `--api-url` flag.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(&base_url.into());
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

fn default_user_agent() -> String {
    format!("hostel-admin/{}", env!("CARGO_PKG_VERSION"))
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
