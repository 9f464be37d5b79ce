//! Factual context shared by every committee round

use serde::{Deserialize, Serialize};

/// Immutable key/value snapshot of everything the committee may cite
///
/// Assembled once per run and consumed read-only by all rounds. Ratios keep
/// insertion order so the rendered block is stable across rounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactualContext {
    /// Ticker symbol
    pub symbol: String,

    /// Company display name
    pub name: String,

    /// Last traded price
    pub current_price: f64,

    /// Industry classification
    pub industry: String,

    /// Financial ratios as display pairs, e.g. ("P/E", "12.5")
    pub ratios: Vec<(String, String)>,

    /// Optional recent-news injection
    pub news: Option<String>,

    /// Optional company-profile injection
    pub profile: Option<String>,
}

impl FactualContext {
    /// Create a snapshot with the identifying fields
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, current_price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            current_price,
            industry: String::new(),
            ratios: Vec::new(),
            news: None,
            profile: None,
        }
    }

    /// Set the industry classification
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = industry.into();
        self
    }

    /// Append a financial ratio
    pub fn ratio(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.ratios.push((key.into(), value.into()));
        self
    }

    /// Attach a recent-news block
    pub fn with_news(mut self, news: impl Into<String>) -> Self {
        self.news = Some(news.into());
        self
    }

    /// Attach a company-profile block
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Look up a ratio's display value
    pub fn ratio_text(&self, key: &str) -> Option<&str> {
        self.ratios
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a ratio as a number, tolerating a trailing percent sign
    pub fn ratio_value(&self, key: &str) -> Option<f64> {
        self.ratio_text(key)?
            .trim()
            .trim_end_matches('%')
            .trim()
            .parse()
            .ok()
    }

    /// Render the shared factual block consumed by every round prompt
    pub fn render(&self) -> String {
        let mut block = format!(
            "Stock: {} ({})\nCurrent price: {:.2}\n",
            self.name, self.symbol, self.current_price
        );

        if !self.industry.is_empty() {
            block.push_str(&format!("Industry: {}\n", self.industry));
        }

        if !self.ratios.is_empty() {
            block.push_str("Key financials:\n");
            for (key, value) in &self.ratios {
                block.push_str(&format!("- {key}: {value}\n"));
            }
        }

        if let Some(profile) = &self.profile {
            block.push_str(&format!("Company profile:\n{profile}\n"));
        }

        if let Some(news) = &self.news {
            block.push_str(&format!("Recent news:\n{news}\n"));
        }

        block
    }
}
