use crate::application::normalize::parse_reply;
use crate::application::prompts::render;
use crate::domain::error::ProxyError;
use crate::domain::model::{AgentKind, ParseOutcome, ProcessRequest};
use crate::domain::traits::ModelClient;
use serde_json::Value;
use tracing::{debug, warn};

/// Check required fields, then resolve the agent name.
pub fn validate(request: &ProcessRequest) -> Result<(AgentKind, &str, u64), ProxyError> {
    let agent = request.agent.as_deref().unwrap_or("");
    let csv_data = request.csv_data.as_deref().unwrap_or("");

    if agent.is_empty() || csv_data.is_empty() {
        return Err(ProxyError::MissingFields);
    }

    let kind =
        AgentKind::from_name(agent).ok_or_else(|| ProxyError::InvalidAgent(agent.to_string()))?;

    Ok((kind, csv_data, request.total_rows.unwrap_or(0)))
}

pub async fn process(
    model: &dyn ModelClient,
    request: &ProcessRequest,
) -> Result<Value, ProxyError> {
    // 1. Validation, no upstream call on failure
    let (agent, csv_data, total_rows) = validate(request)?;

    // 2. Template
    let prompt = render(agent, csv_data, total_rows);
    debug!(agent = %agent, prompt_len = prompt.len(), "Rendered prompt");

    // 3. One upstream call
    let reply = model.complete(&prompt).await?;

    // 4. Recover JSON from the reply text
    let outcome = parse_reply(&reply.text());
    match &outcome {
        ParseOutcome::Direct(_) => debug!("Model reply parsed directly"),
        ParseOutcome::Extracted(_) => debug!("Model reply recovered by brace extraction"),
        ParseOutcome::Unparseable => warn!(agent = %agent, "Model reply contained no JSON"),
    }

    outcome.into_result()
}
