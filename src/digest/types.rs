//! Core data structures for the digest pipeline
//!
//! Field set mirrors what the note UI renders: a summary paragraph,
//! up to four key-point sentences, up to four topical tags, and a
//! coarse length-derived confidence level.

use serde::{Deserialize, Serialize};

use crate::digest::config::DigestConfig;

// ==================== TYPE DEFINITIONS ====================

/// Analysis input. No identity, no persistence - the text is all there is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Topical tag inferred from note vocabulary
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Tag {
    Method,
    Finding,
    Limitation,
    NextStep,
    Definition,
    Claim,
}

impl Tag {
    /// All tags in inference-check order. The order is part of the
    /// contract: tags are appended in this sequence and capped after four.
    pub const ALL: [Tag; 6] = [
        Tag::Method,
        Tag::Finding,
        Tag::Limitation,
        Tag::NextStep,
        Tag::Definition,
        Tag::Claim,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Method => "method",
            Tag::Finding => "finding",
            Tag::Limitation => "limitation",
            Tag::NextStep => "next-step",
            Tag::Definition => "definition",
            Tag::Claim => "claim",
        }
    }
}

/// Coarse proxy for how much text was analyzed
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }

    /// Derive confidence from the trimmed character count.
    /// Both thresholds are strict: exactly `medium_confidence_chars`
    /// characters is still `Low`.
    pub fn from_char_count(chars: usize, config: &DigestConfig) -> Self {
        if chars > config.high_confidence_chars {
            Confidence::High
        } else if chars > config.medium_confidence_chars {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// Immutable analysis output, produced fresh per call.
/// Identical input yields an identical (`==`) result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub summary: String,
    pub highlights: Vec<String>,
    pub tags: Vec<Tag>,
    pub confidence: Confidence,
}

// =============================================================================
// Tests
// =============================================================================
