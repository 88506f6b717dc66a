use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Missing agent or csvData")]
    MissingFields,

    #[error("Invalid agent type: {0}")]
    InvalidAgent(String),

    /// Non-success reply from the model API, forwarded to the caller as-is.
    #[error("Upstream API error {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Could not parse AI response as JSON")]
    UnparseableReply,

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ProxyError {
    /// True for errors caused by the caller's request, detected before any upstream call.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ProxyError::MethodNotAllowed | ProxyError::MissingFields | ProxyError::InvalidAgent(_)
        )
    }
}
