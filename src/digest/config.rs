//! Configuration types and defaults for the digest pipeline
//!
//! The demo constants (650ms latency, 12k input cap) are deliberately
//! ordinary-looking product numbers; they live here rather than inline so a
//! host can tune them without touching the analysis code.

use serde::{Deserialize, Serialize};

/// Digest pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestConfig {
    /// Artificial latency before validation/analysis, in ms. Default: 650
    pub latency_ms: u32,
    /// Maximum trimmed input length in characters. Default: 12000
    pub max_input_chars: usize,
    /// Number of leading sentences joined into the summary. Default: 2
    pub summary_sentences: usize,
    /// Summary truncation length in characters. Default: 320
    pub summary_max_chars: usize,
    /// Highlight truncation length in characters (fallback mode). Default: 240
    pub highlight_max_chars: usize,
    /// Maximum number of highlights returned. Default: 4
    pub max_highlights: usize,
    /// Minimum pattern hits required to use pattern-based highlights;
    /// below this the first sentences are used instead. Default: 3
    pub min_pattern_hits: usize,
    /// Maximum number of tags returned. Default: 4
    pub max_tags: usize,
    /// Strict lower bound (in chars) for medium confidence. Default: 400
    pub medium_confidence_chars: usize,
    /// Strict lower bound (in chars) for high confidence. Default: 1200
    pub high_confidence_chars: usize,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            latency_ms: 650,
            max_input_chars: 12_000,
            summary_sentences: 2,
            summary_max_chars: 320,
            highlight_max_chars: 240,
            max_highlights: 4,
            min_pattern_hits: 3,
            max_tags: 4,
            medium_confidence_chars: 400,
            high_confidence_chars: 1200,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
