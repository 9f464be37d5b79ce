//! Multi-agent investment committee deliberation pipeline
//!
//! This crate orchestrates a simulated investment committee over a stock's
//! factual snapshot. It includes:
//!
//! - Prompt size budgets with a dense-script-aware size heuristic
//! - Round prompt assembly with per-agent peer digests
//! - A three-round orchestrator (concurrent analyst fan-out, sequential
//!   value round, chair synthesis)
//! - Verdict normalization with field-name alias tolerance and a neutral
//!   safe default
//! - Deterministic rule-based value/quality scores
//!
//! # Architecture
//!
//! `CommitteeOrchestrator` drives the rounds through a `ModelGateway`
//! (provider fallback chain from `committee-llm`). Round 1 fans out to the
//! growth and policy analysts concurrently; round 2 runs the value analyst
//! over digests of round 1; round 3 asks the chair for a machine-readable
//! verdict, which is parsed into a `VerdictRecord`. The pipeline's external
//! contract is that it always returns a well-formed record: every failure
//! mode degrades into synthetic response text or the neutral Hold default.
//!
//! # Example
//!
//! ```rust,ignore
//! use committee_llm::{ModelGateway, OpenAiProvider};
//! use committee_pipeline::{CommitteeOrchestrator, FactualContext};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let gateway = ModelGateway::new(vec![Arc::new(OpenAiProvider::from_env()?)]);
//!     let factual = FactualContext::new("ACME", "Acme Widgets", 42.5)
//!         .with_industry("Industrial Machinery")
//!         .ratio("P/E", "11.2");
//!
//!     let report = CommitteeOrchestrator::new(gateway).run(&factual).await;
//!     println!("{:?}", report.verdict.verdict);
//!     Ok(())
//! }
//! ```

pub mod assembler;
pub mod budget;
pub mod committee;
pub mod context;
pub mod prompts;
pub mod report;
pub mod scores;
pub mod verdict;

// Re-export main types for convenience
pub use assembler::ContextAssembler;
pub use budget::Budget;
pub use committee::{CommitteeOrchestrator, run_committee};
pub use context::FactualContext;
pub use report::{AgentResponse, AgentRole, CommitteeReport, Round};
pub use scores::{ScoreCard, score_card};
pub use verdict::{Verdict, VerdictParseError, VerdictRecord, parse_chair_verdict};
