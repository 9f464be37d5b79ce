//! Round prompt assembly
//!
//! Builds the user prompt for each round: the shared factual block, plus (for
//! later rounds) budget-clamped digests of the earlier agents' outputs. The
//! two-stage compression is deliberate: each agent sees a short digest of its
//! peers rather than a full replay, and the assembled prompt is then clamped
//! again so total request size stays bounded no matter how much upstream text
//! grew.

use crate::budget::Budget;
use crate::context::FactualContext;
use crate::prompts;
use crate::report::{AgentResponse, AgentRole};

/// Builds the prompt text for each committee round
#[derive(Debug, Clone, Copy)]
pub struct ContextAssembler {
    prompt_budget: Budget,
    summary_budget: Budget,
}

impl Default for ContextAssembler {
    fn default() -> Self {
        Self::new(Budget::prompt(), Budget::agent_summary())
    }
}

impl ContextAssembler {
    /// Create an assembler with explicit budgets
    pub fn new(prompt_budget: Budget, summary_budget: Budget) -> Self {
        Self {
            prompt_budget,
            summary_budget,
        }
    }

    /// Build the user prompt for `role`, folding in prior responses
    ///
    /// The chair's output-format rules are appended after the whole-prompt
    /// clamp so budget pressure can never truncate them away.
    pub fn round_prompt(
        &self,
        role: AgentRole,
        factual: &FactualContext,
        prior: &[AgentResponse],
    ) -> String {
        let mut body = factual.render();

        if !prior.is_empty() {
            body.push_str("\nCommittee views so far:\n");
            for response in prior {
                let digest = self.summary_budget.apply(&response.text);
                body.push_str(&format!("- {}: {digest}\n", response.role.title()));
            }
        }

        let mut prompt = self.prompt_budget.apply(&body);

        if role == AgentRole::ChairPerson {
            prompt.push('\n');
            prompt.push_str(prompts::chair_output_rules());
        }

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::{AGENT_SUMMARY_MAX_CHARS, TRUNCATION_MARKER, estimate};

    fn sample_context() -> FactualContext {
        FactualContext::new("ACME", "Acme Widgets", 42.5)
            .with_industry("Industrial Machinery")
            .ratio("P/E", "11.2")
    }

    #[test]
    fn test_round_one_prompt_has_no_peer_section() {
        let assembler = ContextAssembler::default();
        let prompt = assembler.round_prompt(AgentRole::GrowthAnalyst, &sample_context(), &[]);

        assert!(prompt.contains("Acme Widgets (ACME)"));
        assert!(!prompt.contains("Committee views so far"));
    }

    #[test]
    fn test_later_round_digests_are_clamped() {
        let assembler = ContextAssembler::default();
        let long_view = "growth ".repeat(2000);
        let prior = vec![
            AgentResponse::success(AgentRole::GrowthAnalyst, long_view),
            AgentResponse::success(AgentRole::PolicyAnalyst, "Policy looks benign."),
        ];

        let prompt = assembler.round_prompt(AgentRole::ValueAnalyst, &sample_context(), &prior);

        assert!(prompt.contains("Committee views so far"));
        assert!(prompt.contains("Policy looks benign."));

        let digest_line = prompt
            .lines()
            .find(|line| line.starts_with("- Growth Analyst:"))
            .expect("digest line present");
        assert!(digest_line.chars().count() <= AGENT_SUMMARY_MAX_CHARS + 30);
        assert!(digest_line.contains(TRUNCATION_MARKER));
    }

    #[test]
    fn test_whole_prompt_respects_budget() {
        let assembler = ContextAssembler::new(Budget::new(400, 500), Budget::agent_summary());
        let context = sample_context().with_news("headline ".repeat(500));

        let prompt = assembler.round_prompt(AgentRole::ValueAnalyst, &context, &[]);

        assert!(prompt.chars().count() <= 400);
        assert!(estimate(&prompt) <= 500);
    }

    #[test]
    fn test_chair_rules_survive_budget_pressure() {
        let assembler = ContextAssembler::new(Budget::new(300, 400), Budget::agent_summary());
        let context = sample_context().with_news("headline ".repeat(500));
        let prior = vec![AgentResponse::success(
            AgentRole::GrowthAnalyst,
            "view ".repeat(200),
        )];

        let prompt = assembler.round_prompt(AgentRole::ChairPerson, &context, &prior);

        assert!(prompt.contains("conviction_level"));
        assert!(prompt.contains("single JSON object"));
    }

    #[test]
    fn test_failed_responses_still_appear_as_digests() {
        let assembler = ContextAssembler::default();
        let prior = vec![AgentResponse::failure(
            AgentRole::GrowthAnalyst,
            "growth analysis unavailable: all providers failed",
        )];

        let prompt = assembler.round_prompt(AgentRole::ValueAnalyst, &sample_context(), &prior);
        assert!(prompt.contains("growth analysis unavailable"));
    }
}
