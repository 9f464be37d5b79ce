//! Committee orchestrator - the round state machine
//!
//! Three strictly ordered rounds: a concurrent fan-out over the growth and
//! policy analysts, a sequential value-analyst round built from round-1
//! digests, and a final chair round whose reply is parsed into the
//! normalized verdict. No error from any inner component escapes `run`; every
//! failure mode degrades into synthetic response text or the neutral default
//! verdict.

use crate::assembler::ContextAssembler;
use crate::budget::estimate;
use crate::context::FactualContext;
use crate::report::{AgentResponse, AgentRole, CommitteeReport, Round};
use crate::scores::score_card;
use crate::verdict::{VerdictRecord, parse_chair_verdict};
use chrono::Utc;
use committee_llm::{ChatRequest, FAILURE_SENTINEL, ModelGateway};
use std::time::Duration;
use tracing::{info, instrument, warn};

const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_MAX_TOKENS: usize = 1024;
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Sequences the deliberation rounds and aggregates the final report
pub struct CommitteeOrchestrator {
    gateway: ModelGateway,
    assembler: ContextAssembler,
    call_timeout: Duration,
    max_tokens: usize,
    temperature: f32,
}

impl CommitteeOrchestrator {
    /// Create an orchestrator with default budgets and call parameters
    pub fn new(gateway: ModelGateway) -> Self {
        Self {
            gateway,
            assembler: ContextAssembler::default(),
            call_timeout: DEFAULT_CALL_TIMEOUT,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Override the per-call deadline
    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    /// Override the prompt assembler (custom budgets)
    pub fn with_assembler(mut self, assembler: ContextAssembler) -> Self {
        self.assembler = assembler;
        self
    }

    /// Override the per-call generation ceiling
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Override the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Run the full committee deliberation for one stock
    ///
    /// Always returns a well-formed report; failures surface only inside
    /// response texts and the verdict's raw-output map.
    #[instrument(skip(self, factual), fields(symbol = %factual.symbol))]
    pub async fn run(&self, factual: &FactualContext) -> CommitteeReport {
        info!(providers = ?self.gateway.provider_names(), "starting committee run");

        // Round 1: concurrent fan-out; neither call cancels the other
        let growth_prompt = self
            .assembler
            .round_prompt(AgentRole::GrowthAnalyst, factual, &[]);
        let policy_prompt = self
            .assembler
            .round_prompt(AgentRole::PolicyAnalyst, factual, &[]);
        let round1_units = estimate(&growth_prompt) + estimate(&policy_prompt);

        let (growth, policy) = tokio::join!(
            self.dispatch(AgentRole::GrowthAnalyst, &growth_prompt),
            self.dispatch(AgentRole::PolicyAnalyst, &policy_prompt),
        );
        let round1 = Round {
            number: 1,
            responses: vec![growth, policy],
            prompt_units: round1_units,
        };

        // Round 2: value analyst over round-1 digests
        let value_prompt =
            self.assembler
                .round_prompt(AgentRole::ValueAnalyst, factual, &round1.responses);
        let value = self.dispatch(AgentRole::ValueAnalyst, &value_prompt).await;
        let round2 = Round {
            number: 2,
            responses: vec![value],
            prompt_units: estimate(&value_prompt),
        };

        // Round 3: chair synthesis over all prior views
        let mut prior = round1.responses.clone();
        prior.extend(round2.responses.iter().cloned());
        let chair_prompt = self
            .assembler
            .round_prompt(AgentRole::ChairPerson, factual, &prior);
        let chair = self.dispatch(AgentRole::ChairPerson, &chair_prompt).await;
        let round3 = Round {
            number: 3,
            responses: vec![chair.clone()],
            prompt_units: estimate(&chair_prompt),
        };

        let mut verdict = if chair.failed {
            warn!("chair round failed; substituting the neutral default verdict");
            VerdictRecord::technical_failure()
        } else {
            parse_chair_verdict(&chair.text).unwrap_or_else(|err| {
                warn!(error = %err, "chair output unparseable; substituting the neutral default verdict");
                VerdictRecord::technical_failure()
            })
        };

        for response in prior.iter().chain(std::iter::once(&chair)) {
            verdict
                .raw_agent_outputs
                .insert(response.role, response.text.clone());
        }

        let scores = score_card(factual);
        info!(
            verdict = ?verdict.verdict,
            conviction = verdict.conviction_level,
            "committee run complete"
        );

        CommitteeReport {
            symbol: factual.symbol.clone(),
            verdict,
            scores,
            rounds: vec![round1, round2, round3],
            generated_at: Utc::now(),
        }
    }

    /// Issue one role's gateway call and fold any failure into the response
    async fn dispatch(&self, role: AgentRole, user_prompt: &str) -> AgentResponse {
        let request = ChatRequest::new(role.system_prompt(), user_prompt)
            .max_tokens(self.max_tokens)
            .temperature(self.temperature);

        match self.gateway.try_complete(&request, self.call_timeout).await {
            Ok(text) => AgentResponse::success(role, text),
            Err(err) => {
                warn!(role = role.title(), error = %err, "agent call failed");
                AgentResponse::failure(
                    role,
                    format!("{FAILURE_SENTINEL} {} analysis failed: {err}", role.title()),
                )
            }
        }
    }
}

/// Run a committee deliberation and return only the normalized verdict
///
/// Entry point for callers that do not need the full report. The identifying
/// arguments override whatever the snapshot already carries.
pub async fn run_committee(
    gateway: ModelGateway,
    symbol: &str,
    stock_name: &str,
    current_price: f64,
    mut factual: FactualContext,
) -> VerdictRecord {
    factual.symbol = symbol.to_string();
    factual.name = stock_name.to_string();
    factual.current_price = current_price;

    CommitteeOrchestrator::new(gateway).run(&factual).await.verdict
}
