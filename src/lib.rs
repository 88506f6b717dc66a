pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod state;

pub use domain::error::ProxyError;
pub use domain::model::{AgentKind, ModelReply, ParseOutcome, ProcessRequest};
pub use domain::traits::ModelClient;
pub use state::AppState;
