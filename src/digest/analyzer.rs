//! DigestCortex: Unified Note Analyzer
//!
//! Single analyze() call for the whole digest:
//! - Validation (empty / oversize input)
//! - Sentence segmentation (via segment)
//! - Summary (leading sentences, truncated)
//! - Key points (via HighlightCortex)
//! - Topical tags (via TagCortex)
//! - Confidence (length-derived)
//!
//! Pure and deterministic: no state survives between calls, and identical
//! input yields an identical result. The artificial latency of the demo
//! lives in the pipeline, not here.

use crate::digest::config::DigestConfig;
use crate::digest::error::{DigestError, DigestResult};
use crate::digest::highlight::HighlightCortex;
use crate::digest::segment::{split_sentences, truncate_chars};
use crate::digest::tags::TagCortex;
use crate::digest::types::{AnalysisResult, AnalyzeRequest, Confidence};

/// Unified note analyzer
pub struct DigestCortex {
    highlight_cortex: HighlightCortex,
    tag_cortex: TagCortex,
    config: DigestConfig,
}

impl Default for DigestCortex {
    fn default() -> Self {
        Self::new()
    }
}

impl DigestCortex {
    pub fn new() -> Self {
        Self::with_config(DigestConfig::default())
    }

    pub fn with_config(config: DigestConfig) -> Self {
        Self {
            highlight_cortex: HighlightCortex::new(),
            tag_cortex: TagCortex::new(),
            config,
        }
    }

    pub fn config(&self) -> &DigestConfig {
        &self.config
    }

    /// Analyze a note. Validation runs on the trimmed text; all length
    /// checks and truncations count characters, not bytes.
    pub fn analyze(&self, request: &AnalyzeRequest) -> DigestResult<AnalysisResult> {
        let trimmed = request.text.trim();

        if trimmed.is_empty() {
            return Err(DigestError::EmptyInput);
        }

        let char_count = trimmed.chars().count();
        if char_count > self.config.max_input_chars {
            return Err(DigestError::TooLong);
        }

        let sentences = split_sentences(trimmed);

        let summary = self.build_summary(&sentences, trimmed);
        let highlights = self.highlight_cortex.select(&sentences, &self.config);
        let tags = self.tag_cortex.infer(trimmed, &self.config);
        let confidence = Confidence::from_char_count(char_count, &self.config);

        Ok(AnalysisResult {
            summary,
            highlights,
            tags,
            confidence,
        })
    }

    /// First sentences joined by a single space, truncated. Text without a
    /// single sentence boundary falls back to the head of the trimmed input.
    fn build_summary(&self, sentences: &[String], trimmed: &str) -> String {
        if sentences.is_empty() {
            return truncate_chars(trimmed, self.config.summary_max_chars).to_string();
        }

        let joined = sentences
            .iter()
            .take(self.config.summary_sentences)
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        truncate_chars(&joined, self.config.summary_max_chars).to_string()
    }
}

// =============================================================================
// Tests
// =============================================================================
