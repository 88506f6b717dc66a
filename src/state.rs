use crate::domain::error::ProxyError;
use crate::domain::traits::ModelClient;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::{create_client, AnthropicClient};
use std::sync::Arc;

/// Process-wide, read-only state shared by every request
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub model: Arc<dyn ModelClient>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, ProxyError> {
        let http_client = create_client(&config)?;
        let model = AnthropicClient::new(http_client, config.anthropic.clone());

        Ok(Self {
            config: Arc::new(config),
            model: Arc::new(model),
        })
    }

    pub fn with_model(config: Config, model: Arc<dyn ModelClient>) -> Self {
        Self {
            config: Arc::new(config),
            model,
        }
    }
}
