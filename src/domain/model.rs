use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// 数据处理代理类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Cleaning,
    Cases,
    Category,
    Reshape,
    Exceptions,
    Review,
}

impl AgentKind {
    pub const ALL: [AgentKind; 6] = [
        AgentKind::Cleaning,
        AgentKind::Cases,
        AgentKind::Category,
        AgentKind::Reshape,
        AgentKind::Exceptions,
        AgentKind::Review,
    ];

    /// Look up an agent by its wire name. Unknown names are rejected, never defaulted.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "cleaning" => Some(Self::Cleaning),
            "cases" => Some(Self::Cases),
            "category" => Some(Self::Category),
            "reshape" => Some(Self::Reshape),
            "exceptions" => Some(Self::Exceptions),
            "review" => Some(Self::Review),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Cleaning => "cleaning",
            Self::Cases => "cases",
            Self::Category => "category",
            Self::Reshape => "reshape",
            Self::Exceptions => "exceptions",
            Self::Review => "review",
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// 请求体 (POST /api/process)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub agent: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub csv_data: Option<String>,
    #[serde(default, deserialize_with = "lenient_row_count")]
    pub total_rows: Option<u64>,
}

// 非字符串的值按 JSON 文本保留: agent 为 7 时是非法 agent, 而不是缺失字段
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

// totalRows 只用于提示词插值, 接受数字或数字字符串
fn lenient_row_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

impl ProcessRequest {
    pub fn new(agent: &str, csv_data: &str, total_rows: u64) -> Self {
        Self {
            agent: Some(agent.to_string()),
            csv_data: Some(csv_data.to_string()),
            total_rows: Some(total_rows),
        }
    }
}

/// Text segments returned by the model, in upstream order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelReply {
    pub segments: Vec<String>,
}

impl ModelReply {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            segments: vec![text.into()],
        }
    }

    pub fn text(&self) -> String {
        self.segments.concat()
    }
}

/// Result of the two-stage JSON recovery over a model reply.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// The cleaned text parsed as JSON on its own.
    Direct(Value),
    /// Only the first `{` .. last `}` span parsed.
    Extracted(Value),
    Unparseable,
}

impl ParseOutcome {
    pub fn into_result(self) -> Result<Value, crate::domain::error::ProxyError> {
        match self {
            ParseOutcome::Direct(v) | ParseOutcome::Extracted(v) => Ok(v),
            ParseOutcome::Unparseable => Err(crate::domain::error::ProxyError::UnparseableReply),
        }
    }
}
