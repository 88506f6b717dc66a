// Model reply cleanup and JSON recovery
use crate::domain::model::ParseOutcome;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

// Each marker takes the whitespace right after it
static JSON_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```json\s*").expect("valid json fence pattern"));
static BARE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```\s*").expect("valid bare fence pattern"));

/// Remove every code-fence marker anywhere in the text, then trim.
///
/// "```json" markers go first, then bare "```" in a second pass over the result.
pub fn strip_code_fences(text: &str) -> String {
    let without_json = JSON_FENCE.replace_all(text, "");
    BARE_FENCE.replace_all(&without_json, "").trim().to_string()
}

pub fn parse_direct(text: &str) -> Option<Value> {
    serde_json::from_str(text).ok()
}

/// Greedy brace span: first `{` through last `}`.
pub fn extract_braced(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end > start {
        Some(&text[start..=end])
    } else {
        None
    }
}

/// Clean a raw model reply and recover the JSON document inside it.
pub fn parse_reply(raw: &str) -> ParseOutcome {
    let cleaned = strip_code_fences(raw);

    if let Some(value) = parse_direct(&cleaned) {
        return ParseOutcome::Direct(value);
    }

    match extract_braced(&cleaned).and_then(parse_direct) {
        Some(value) => ParseOutcome::Extracted(value),
        None => ParseOutcome::Unparseable,
    }
}
