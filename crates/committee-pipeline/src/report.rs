//! Committee roles, per-round records, and the full run report

use crate::prompts;
use crate::scores::ScoreCard;
use crate::verdict::VerdictRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persona seat on the committee
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    GrowthAnalyst,
    PolicyAnalyst,
    ValueAnalyst,
    ChairPerson,
}

impl AgentRole {
    /// Human-readable title used in prompts and digests
    pub fn title(&self) -> &'static str {
        match self {
            Self::GrowthAnalyst => "Growth Analyst",
            Self::PolicyAnalyst => "Policy Analyst",
            Self::ValueAnalyst => "Value Analyst",
            Self::ChairPerson => "Chairperson",
        }
    }

    /// The persona instructions sent as this role's system prompt
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Self::GrowthAnalyst => prompts::growth_analyst(),
            Self::PolicyAnalyst => prompts::policy_analyst(),
            Self::ValueAnalyst => prompts::value_analyst(),
            Self::ChairPerson => prompts::chair_person(),
        }
    }
}

/// One role's contribution to a run
///
/// Produced exactly once per role; a failed response still carries a
/// non-empty human-readable message in `text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentResponse {
    pub role: AgentRole,
    pub text: String,
    pub failed: bool,
}

impl AgentResponse {
    /// A successful contribution
    pub fn success(role: AgentRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            failed: false,
        }
    }

    /// A failed contribution with a synthetic explanatory message
    pub fn failure(role: AgentRole, message: impl Into<String>) -> Self {
        let mut text = message.into();
        if text.is_empty() {
            text = format!("{} analysis unavailable", role.title());
        }
        Self {
            role,
            text,
            failed: true,
        }
    }
}

/// Record of one executed round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    /// 1-based round number
    pub number: u8,

    /// Responses the round produced, in dispatch order
    pub responses: Vec<AgentResponse>,

    /// Estimated prompt units consumed across the round's calls
    pub prompt_units: usize,
}

/// Full output of one committee run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitteeReport {
    /// Ticker the run analyzed
    pub symbol: String,

    /// The normalized final verdict
    pub verdict: VerdictRecord,

    /// Deterministic rule-based scores, independent of the LLM rounds
    pub scores: ScoreCard,

    /// Ordered record of the executed rounds
    pub rounds: Vec<Round>,

    /// When the run completed
    pub generated_at: DateTime<Utc>,
}
