// HTTP client utilities
use crate::domain::error::ProxyError;
use crate::infrastructure::config::Config;
use reqwest::Client;

/// Create the shared outbound HTTP client
///
/// No request timeout is set; the transport's own limits apply.
pub fn create_client(config: &Config) -> Result<Client, ProxyError> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(std::time::Duration::from_secs(30))
        .user_agent(concat!("agent-proxy/", env!("CARGO_PKG_VERSION")));

    if let Some(proxy) = config.http_proxy.as_deref().filter(|p| !p.is_empty()) {
        builder = builder.proxy(reqwest::Proxy::all(proxy)?);
    }

    Ok(builder.build()?)
}
