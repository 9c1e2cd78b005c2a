use serde_json::Value;

/// Errors from the hostel backend REST layer.
///
/// Screens do not branch on the variant: they show [`ApiError::user_message`]
/// and leave their state unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The configured base URL cannot have paths appended to it.
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status code.
    #[error("Request failed with status code {status}")]
    Api {
        status: u16,
        /// Raw response body, often the backend's validation message.
        body: String,
    },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request(err) => err.status().map(|s| s.as_u16()),
            Self::InvalidBaseUrl(_) => None,
        }
    }

    /// The message the backend sent with a failed response, if any.
    ///
    /// JSON error bodies are reduced to their `message` or `error` field;
    /// anything else is returned as text.
    pub fn server_message(&self) -> Option<String> {
        let Self::Api { body, .. } = self else {
            return None;
        };
        let body = body.trim();
        if body.is_empty() {
            return None;
        }
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(map)) => ["message", "error"]
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_str))
                .map(str::to_string)
                .or_else(|| Some(body.to_string())),
            Ok(Value::String(text)) => Some(text),
            _ => Some(body.to_string()),
        }
    }

    /// The server-provided message when there is one, else the error itself.
    pub fn user_message(&self) -> String {
        self.server_message().unwrap_or_else(|| self.to_string())
    }
}
