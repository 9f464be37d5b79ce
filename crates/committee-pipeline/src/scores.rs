//! Deterministic rule-based scores
//!
//! Computed straight from the factual snapshot, with no LLM involvement, and
//! attached to the run report alongside the committee verdict. Missing or
//! unparseable ratios simply contribute nothing, leaving the neutral
//! baseline.

use crate::context::FactualContext;
use serde::{Deserialize, Serialize};

/// The two auxiliary scores attached to every report, each 0-100
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreCard {
    /// How attractive the valuation looks (higher is cheaper)
    pub value_score: u8,

    /// How healthy the business fundamentals look
    pub quality_score: u8,
}

/// Compute both scores from the factual snapshot
pub fn score_card(ctx: &FactualContext) -> ScoreCard {
    ScoreCard {
        value_score: value_score(ctx),
        quality_score: quality_score(ctx),
    }
}

fn value_score(ctx: &FactualContext) -> u8 {
    let mut score: i32 = 50;

    if let Some(pe) = ctx.ratio_value("P/E") {
        score += match pe {
            pe if pe <= 0.0 => -20, // negative earnings
            pe if pe < 10.0 => 20,
            pe if pe < 18.0 => 10,
            pe if pe < 35.0 => 0,
            pe if pe < 60.0 => -15,
            _ => -25,
        };
    }

    if let Some(pb) = ctx.ratio_value("P/B") {
        score += match pb {
            pb if pb <= 0.0 => -10,
            pb if pb < 1.0 => 15,
            pb if pb < 3.0 => 5,
            pb if pb < 8.0 => 0,
            _ => -10,
        };
    }

    if let Some(yield_pct) = ctx.ratio_value("Dividend Yield") {
        score += match yield_pct {
            y if y > 4.0 => 15,
            y if y > 2.0 => 5,
            _ => 0,
        };
    }

    score.clamp(0, 100) as u8
}

fn quality_score(ctx: &FactualContext) -> u8 {
    let mut score: i32 = 50;

    if let Some(roe) = ctx.ratio_value("ROE") {
        score += match roe {
            roe if roe > 20.0 => 20,
            roe if roe > 10.0 => 10,
            roe if roe < 5.0 => -10,
            _ => 0,
        };
    }

    if let Some(growth) = ctx.ratio_value("Revenue Growth") {
        score += match growth {
            g if g > 15.0 => 20,
            g if g > 5.0 => 10,
            g if g < 0.0 => -15,
            _ => 0,
        };
    }

    if let Some(leverage) = ctx.ratio_value("Debt/Equity") {
        score += match leverage {
            l if l < 0.5 => 10,
            l if l > 2.0 => -20,
            _ => 0,
        };
    }

    score.clamp(0, 100) as u8
}
