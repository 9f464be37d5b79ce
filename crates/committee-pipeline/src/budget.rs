//! Prompt size budgets
//!
//! Backends meter consumption in tokens, but counting real tokens per model
//! is not worth a tokenizer dependency here. Instead we use a cheap
//! heuristic: dense-script characters (CJK ideographs, kana, hangul,
//! full-width forms) consume roughly twice the model capacity of Latin-script
//! characters, so they are weighted double. The resulting "units" are an
//! approximation, never an exact token count.
//!
//! A [`Budget`] bundles the two ceilings every prompt passes through: an
//! absolute character cap (cheap, applied first) and a weighted-unit cap.
//! Both truncations reserve room for the trailing marker, which makes them
//! idempotent: re-applying a budget to its own output is a no-op.

/// Weight applied to dense-script characters by [`estimate`]
pub const DENSE_WEIGHT: usize = 2;

/// Marker appended to any truncated text to signal loss
pub const TRUNCATION_MARKER: &str = "...[truncated]";

/// Character ceiling for a whole round prompt
pub const PROMPT_MAX_CHARS: usize = 6000;

/// Weighted-unit ceiling for a whole round prompt
pub const PROMPT_MAX_UNITS: usize = 8000;

/// Character ceiling for one peer digest in later rounds
pub const AGENT_SUMMARY_MAX_CHARS: usize = 240;

/// Approximate the model-capacity units consumed by `text`
pub fn estimate(text: &str) -> usize {
    text.chars()
        .map(|c| if is_dense(c) { DENSE_WEIGHT } else { 1 })
        .sum()
}

fn is_dense(c: char) -> bool {
    matches!(c,
        '\u{3000}'..='\u{303F}'   // CJK punctuation
        | '\u{3040}'..='\u{30FF}' // hiragana, katakana
        | '\u{3400}'..='\u{4DBF}' // CJK extension A
        | '\u{4E00}'..='\u{9FFF}' // CJK unified ideographs
        | '\u{AC00}'..='\u{D7AF}' // hangul syllables
        | '\u{F900}'..='\u{FAFF}' // CJK compatibility ideographs
        | '\u{FF00}'..='\u{FFEF}' // half/full-width forms
    )
}

/// A pair of ceilings applied to one text blob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    /// Absolute character ceiling, applied first
    pub max_chars: usize,

    /// Weighted-unit ceiling, applied second
    pub max_units: usize,
}

impl Budget {
    /// Create a budget with explicit ceilings
    pub const fn new(max_chars: usize, max_units: usize) -> Self {
        Self {
            max_chars,
            max_units,
        }
    }

    /// The whole-prompt budget every round prompt must satisfy
    pub const fn prompt() -> Self {
        Self::new(PROMPT_MAX_CHARS, PROMPT_MAX_UNITS)
    }

    /// The short per-agent digest budget used for peer summaries
    ///
    /// Character-capped only; a digest this short cannot threaten the unit
    /// ceiling.
    pub const fn agent_summary() -> Self {
        Self::new(AGENT_SUMMARY_MAX_CHARS, usize::MAX)
    }

    /// Apply both ceilings in sequence
    pub fn apply(&self, text: &str) -> String {
        let clamped = clamp_chars(text, self.max_chars);
        clamp_units(&clamped, self.max_units)
    }
}

/// Truncate `text` to at most `max_chars` characters, marker included
pub fn clamp_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(TRUNCATION_MARKER.chars().count());
    let prefix: String = text.chars().take(keep).collect();
    format!("{prefix}{TRUNCATION_MARKER}")
}

/// Truncate `text` so its estimated size fits `max_units`, marker included
///
/// The cut position divides the unit ceiling by the dense weight, so the kept
/// prefix fits the ceiling even if every kept character is dense-script.
pub fn clamp_units(text: &str, max_units: usize) -> String {
    if estimate(text) <= max_units {
        return text.to_string();
    }
    let keep = max_units.saturating_sub(estimate(TRUNCATION_MARKER)) / DENSE_WEIGHT;
    let prefix: String = text.chars().take(keep).collect();
    format!("{prefix}{TRUNCATION_MARKER}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_script_weighs_double() {
        assert_eq!(estimate("hello"), 5);
        assert_eq!(estimate("股票分析"), 8);
        assert_eq!(estimate("P/E 比率"), 8); // "P/E " = 4, two ideographs = 4
    }

    #[test]
    fn test_clamp_chars_no_op_under_limit() {
        assert_eq!(clamp_chars("short", 100), "short");
    }

    #[test]
    fn test_clamp_chars_bounds_and_marker() {
        let text = "x".repeat(500);
        let clamped = clamp_chars(&text, 100);
        assert_eq!(clamped.chars().count(), 100);
        assert!(clamped.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_clamp_chars_idempotent() {
        let text = "y".repeat(300);
        let once = clamp_chars(&text, 80);
        let twice = clamp_chars(&once, 80);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_clamp_units_bounds_estimate() {
        let text = "深".repeat(400); // 800 units
        let clamped = clamp_units(&text, 100);
        assert!(estimate(&clamped) <= 100);
        assert!(clamped.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_clamp_units_idempotent() {
        let text = "mixed 混合 text 文本 ".repeat(50);
        let once = clamp_units(&text, 120);
        let twice = clamp_units(&once, 120);
        assert_eq!(once, twice);
        assert!(estimate(&once) <= 120);
    }

    #[test]
    fn test_budget_apply_composes_both_ceilings() {
        let budget = Budget::new(200, 150);
        let text = "值".repeat(1000);
        let clamped = budget.apply(&text);
        assert!(clamped.chars().count() <= 200);
        assert!(estimate(&clamped) <= 150);
        assert_eq!(budget.apply(&clamped), clamped);
    }

    #[test]
    fn test_budget_apply_no_op_for_small_text() {
        let budget = Budget::prompt();
        assert_eq!(budget.apply("fits easily"), "fits easily");
    }

    #[test]
    fn test_agent_summary_budget_is_short() {
        let budget = Budget::agent_summary();
        let digest = budget.apply(&"a".repeat(10_000));
        assert!(digest.chars().count() <= AGENT_SUMMARY_MAX_CHARS);
    }
}
