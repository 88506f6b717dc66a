use crate::domain::error::ProxyError;
use crate::domain::model::ModelReply;
use async_trait::async_trait;

/// Trait for the upstream completion provider
///
/// The translator only ever needs a single prompt in, text segments out.
/// Implementations can be swapped without changing the calling code,
/// which is how the handler tests run without a network.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send one user-role prompt and return the reply's text segments
    async fn complete(&self, prompt: &str) -> Result<ModelReply, ProxyError>;
}
