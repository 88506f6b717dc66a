pub mod client;
pub mod http;

pub use client::AnthropicClient;
pub use http::create_client;
