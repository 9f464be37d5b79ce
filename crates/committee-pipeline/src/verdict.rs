//! Final-verdict schema and chair-output parsing
//!
//! The chair round is asked for a bare JSON object, but model output drifts:
//! it may arrive wrapped in prose or markdown fences, and two field-name
//! conventions circulate for the same logical fields. The parser strips any
//! wrapping down to the outermost object and resolves each field through a
//! fixed alias priority list (canonical name first): `verdict` before
//! `recommendation`, `conviction_level` before `conviction`,
//! `key_considerations` before `considerations`, `risks` before
//! `risk_factors`, `synthesis` before `summary`.

use crate::report::AgentRole;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// The five fixed verdict categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

impl Verdict {
    /// Parse a verdict label, tolerating case, spaces, hyphens, underscores
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized: String = label
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "strongbuy" => Some(Self::StrongBuy),
            "buy" => Some(Self::Buy),
            "hold" | "neutral" => Some(Self::Hold),
            "sell" => Some(Self::Sell),
            "strongsell" => Some(Self::StrongSell),
            _ => None,
        }
    }
}

/// The pipeline's sole externally-visible output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictRecord {
    pub verdict: Verdict,

    /// Conviction on a 1-5 scale
    pub conviction_level: u8,

    /// Short bullet considerations behind the verdict
    pub key_considerations: Vec<String>,

    /// Short risk statements
    pub risks: Vec<String>,

    /// Free-text synthesis of the committee's views
    pub synthesis: String,

    /// Every role's raw output, failure messages included
    pub raw_agent_outputs: BTreeMap<AgentRole, String>,
}

impl VerdictRecord {
    /// The fixed safe default substituted when the chair output is unusable
    pub fn technical_failure() -> Self {
        Self {
            verdict: Verdict::Hold,
            conviction_level: 3,
            key_considerations: Vec::new(),
            risks: Vec::new(),
            synthesis: "Committee synthesis failed for technical reasons; \
                        defaulting to a neutral Hold stance."
                .to_string(),
            raw_agent_outputs: BTreeMap::new(),
        }
    }
}

/// Why a chair reply could not be turned into a [`VerdictRecord`]
#[derive(Debug, Error)]
pub enum VerdictParseError {
    #[error("no JSON object found in chair output")]
    NoJsonObject,

    #[error("invalid JSON in chair output: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("chair output has no usable verdict field")]
    MissingVerdict,
}

/// Parse the chair round's raw text into a normalized record
///
/// `raw_agent_outputs` is left empty; the orchestrator fills it in.
pub fn parse_chair_verdict(raw: &str) -> Result<VerdictRecord, VerdictParseError> {
    let object = extract_json_object(raw).ok_or(VerdictParseError::NoJsonObject)?;
    let value: Value = serde_json::from_str(object)?;

    let verdict = first_field(&value, &["verdict", "recommendation"])
        .and_then(Value::as_str)
        .and_then(Verdict::from_label)
        .ok_or(VerdictParseError::MissingVerdict)?;

    let conviction_level = first_field(&value, &["conviction_level", "conviction"])
        .and_then(as_integer)
        .map_or(3, |n| n.clamp(1, 5) as u8);

    let key_considerations =
        string_list(first_field(&value, &["key_considerations", "considerations"]));
    let risks = string_list(first_field(&value, &["risks", "risk_factors"]));

    let synthesis = first_field(&value, &["synthesis", "summary"])
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(VerdictRecord {
        verdict,
        conviction_level,
        key_considerations,
        risks,
        synthesis,
        raw_agent_outputs: BTreeMap::new(),
    })
}

/// Strip incidental wrapping down to the outermost `{...}` slice
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

/// Return the first present alias, in priority order
fn first_field<'a>(value: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    aliases.iter().find_map(|key| value.get(key))
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        // A lone string is accepted as a single-entry list
        Some(Value::String(s)) => vec![s.clone()],
        _ => Vec::new(),
    }
}
