//! HighlightCortex - Key-point sentence selection via Regex
//!
//! Four topical patterns are tried in fixed priority order, each claiming
//! the first sentence it matches:
//! - METHOD: "we propose", "we present", "we introduce", "we develop"
//! - RESULT: "results show", "we find", "our results", "we observe"
//! - LIMITATION: "limitation(s)", "future work", "we leave", "open question"
//! - DATA: "dataset", "data", "benchmark", "evaluation", "experiment"
//!
//! With three or more pattern hits the matched sentences are returned in
//! priority order. Below that threshold the pattern picks are discarded and
//! the first few document-order sentences are used instead, truncated with
//! an ellipsis where they run long.

use regex::Regex;

use crate::digest::config::DigestConfig;
use crate::digest::segment::truncate_chars;

/// Key-point sentence selector
pub struct HighlightCortex {
    // Pre-compiled priority patterns, highest first
    method_re: Regex,
    result_re: Regex,
    limitation_re: Regex,
    data_re: Regex,
}

impl Default for HighlightCortex {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightCortex {
    /// Create a new HighlightCortex with all patterns compiled
    pub fn new() -> Self {
        let method_re =
            Regex::new(r"(?i)we propose|we present|we introduce|we develop").unwrap();
        let result_re =
            Regex::new(r"(?i)results show|we find|our results|we observe").unwrap();
        let limitation_re =
            Regex::new(r"(?i)limitation|limitations|future work|we leave|open question")
                .unwrap();
        let data_re =
            Regex::new(r"(?i)dataset|data|benchmark|evaluation|experiment").unwrap();

        Self {
            method_re,
            result_re,
            limitation_re,
            data_re,
        }
    }

    /// Number of priority patterns
    pub fn pattern_count(&self) -> usize {
        4
    }

    /// Select up to `max_highlights` key sentences, order-preserving.
    pub fn select(&self, sentences: &[String], config: &DigestConfig) -> Vec<String> {
        let patterns = [
            &self.method_re,
            &self.result_re,
            &self.limitation_re,
            &self.data_re,
        ];

        let candidates: Vec<String> = patterns
            .iter()
            .filter_map(|pattern| Self::first_matching(sentences, pattern))
            .collect();

        if candidates.len() >= config.min_pattern_hits {
            return candidates
                .into_iter()
                .take(config.max_highlights)
                .collect();
        }

        // Fallback: a few early sentences, kept short.
        sentences
            .iter()
            .take(config.max_highlights)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| {
                if s.chars().count() > config.highlight_max_chars {
                    format!("{}…", truncate_chars(s, config.highlight_max_chars))
                } else {
                    s.to_string()
                }
            })
            .take(config.max_highlights)
            .collect()
    }

    fn first_matching(sentences: &[String], pattern: &Regex) -> Option<String> {
        sentences
            .iter()
            .find(|s| pattern.is_match(s))
            .map(|s| s.trim().to_string())
    }
}

// =============================================================================
// Tests
// =============================================================================
