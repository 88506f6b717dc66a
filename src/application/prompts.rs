// Prompt templates for each data-processing agent
use crate::domain::model::AgentKind;

/// Categories the category agent may map onto.
pub const CATEGORY_TAXONOMY: &[&str] = &[
    "Electronics",
    "Electronics - Accessories",
    "Furniture",
    "Office Supplies",
    "Clothing",
    "Sports & Outdoors",
    "Food & Beverages",
    "Books & Media",
    "Health & Beauty",
    "Software",
    "Services",
    "Other",
];

/// Render the prompt for `agent` with the caller's data embedded verbatim.
pub fn render(agent: AgentKind, csv_data: &str, total_rows: u64) -> String {
    match agent {
        AgentKind::Cleaning => cleaning(csv_data, total_rows),
        AgentKind::Cases => cases(csv_data, total_rows),
        AgentKind::Category => category(csv_data, total_rows),
        AgentKind::Reshape => reshape(csv_data, total_rows),
        AgentKind::Exceptions => exceptions(csv_data, total_rows),
        AgentKind::Review => review(csv_data, total_rows),
    }
}

fn cleaning(csv_data: &str, total_rows: u64) -> String {
    format!(
        r#"You are a Data Cleaning AI Agent processing an uploaded file.

Return ONLY valid JSON (absolutely no markdown fences, no prose):
{{"metrics":{{"processed":{total_rows},"changed":<int>,"flagged":<int>,"confidence":"<e.g. 0.93>"}},"table":[{{"<col>":"<cleaned value>",...,"_status":"changed|ok|flagged|DUPLICATE","_changes":["describe each change"]}}],"reviewItems":[{{"field":"<col>","original":"<old>","suggested":"<new>","reason":"<why>","confidence":<0-1>}}],"summary":"<one line>"}}
Rules: proper-case names/cities, mark exact duplicate rows as DUPLICATE, flag invalid emails (missing @ or domain) for review, standardise status (active/inactive/pending), trim whitespace.
FILE DATA ({total_rows} total rows, first 100 shown):
{csv_data}"#
    )
}

fn cases(csv_data: &str, total_rows: u64) -> String {
    format!(
        r#"You are a Case List Builder AI Agent.
Return ONLY valid JSON (no fences):
{{"metrics":{{"processed":{total_rows},"changed":<int>,"flagged":<int>,"confidence":"0.91"}},"table":[{{"Case_ID":"CASE-001","Title":"<short>","Category":"Bug|Feature|Urgent|Performance|Security|Request","Priority":"High|Medium|Low","Description":"<one line>","Status":"Open","Assigned_To":"TBD","_status":"new"}}],"reviewItems":[],"summary":"<summary>"}}
FILE DATA:
{csv_data}"#
    )
}

fn category(csv_data: &str, total_rows: u64) -> String {
    let taxonomy = CATEGORY_TAXONOMY.join(", ");
    format!(
        r#"You are a Category Standardizer Agent.
Standard taxonomy: {taxonomy}
Return ONLY valid JSON (no fences):
{{"metrics":{{"processed":{total_rows},"changed":<int>,"flagged":<int>,"confidence":"0.89"}},"table":[{{<all original cols>,"Standardized_Category":"<clean>","Confidence":<0-1>,"_status":"changed|ok|flagged"}}],"reviewItems":[{{"field":"Category","original":"<raw>","suggested":"<clean>","reason":"Standardised","confidence":<0-1>}}],"summary":"<summary>"}}
FILE DATA:
{csv_data}"#
    )
}

fn reshape(csv_data: &str, total_rows: u64) -> String {
    format!(
        r#"You are a Data Reshaper Agent. Convert wide/pivot format to normalised long format.
Return ONLY valid JSON (no fences):
{{"metrics":{{"processed":{total_rows},"changed":<new rows created>,"flagged":0,"confidence":"0.96"}},"table":[{{<normalised: ID/Name col, Metric, Period, Value, Target if present, Variance>,"_status":"new"}}],"reviewItems":[],"summary":"<transformation description>"}}
FILE DATA:
{csv_data}"#
    )
}

fn exceptions(csv_data: &str, total_rows: u64) -> String {
    format!(
        r#"You are an Exception Detector Agent.
Return ONLY valid JSON (no fences):
{{"metrics":{{"processed":{total_rows},"changed":0,"flagged":<count>,"confidence":"0.94"}},"table":[{{<all original cols>,"Exception_Type":"None|Outlier|Invalid|Missing|Suspicious|Duplicate","Severity":"High|Medium|Low|None","Exception_Detail":"<detail or OK>","_status":"flagged|ok"}}],"reviewItems":[{{"field":"<col>","original":"<val>","suggested":"REVIEW","reason":"<why>","confidence":<0-1>}}],"summary":"<summary>"}}
FILE DATA:
{csv_data}"#
    )
}

fn review(csv_data: &str, total_rows: u64) -> String {
    format!(
        r#"You are a Manual Review Agent.
Return ONLY valid JSON (no fences):
{{"metrics":{{"processed":{total_rows},"changed":0,"flagged":<proposals>,"confidence":"0.88"}},"table":[{{<all original cols unchanged>,"_status":"pending|ok"}}],"reviewItems":[{{"field":"<col>","original":"<current>","suggested":"<better>","reason":"<specific reason>","confidence":<0-1>}}],"summary":"<summary>"}}
FILE DATA:
{csv_data}"#
    )
}
