//! Run a full committee deliberation against live providers
//!
//! Configure at least one backend first:
//!
//! ```bash
//! export OPENAI_API_KEY=sk-...      # primary
//! export DEEPSEEK_API_KEY=sk-...    # fallback
//! cargo run --example run_committee
//! ```

use committee_llm::{DeepSeekProvider, ModelGateway, OpenAiProvider, Provider};
use committee_pipeline::{CommitteeOrchestrator, FactualContext};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    committee_utils::init_tracing();

    // Register providers in fallback priority order; skip the unconfigured
    let mut providers: Vec<Arc<dyn Provider>> = Vec::new();
    match OpenAiProvider::from_env() {
        Ok(provider) => providers.push(Arc::new(provider)),
        Err(err) => eprintln!("skipping openai: {err}"),
    }
    match DeepSeekProvider::from_env() {
        Ok(provider) => providers.push(Arc::new(provider)),
        Err(err) => eprintln!("skipping deepseek: {err}"),
    }
    anyhow::ensure!(!providers.is_empty(), "no provider configured");

    let factual = FactualContext::new("ACME", "Acme Widgets", 42.5)
        .with_industry("Industrial Machinery")
        .ratio("P/E", "11.2")
        .ratio("P/B", "1.4")
        .ratio("Dividend Yield", "3.1%")
        .ratio("ROE", "16.8")
        .ratio("Revenue Growth", "9.2%")
        .ratio("Debt/Equity", "0.6")
        .with_profile("Mid-cap maker of industrial widgets with a growing services arm.")
        .with_news("Announced a multi-year supply agreement with a major OEM.");

    let report = CommitteeOrchestrator::new(ModelGateway::new(providers))
        .run(&factual)
        .await;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
