//! TagCortex - Topical tag inference via Aho-Corasick
//!
//! One automaton over all six tag vocabularies, matched case-insensitively
//! against the full trimmed text. Presence of any vocabulary entry marks the
//! tag; tags are emitted in fixed check order and capped after four. With no
//! hits at all the default pair `[method, finding]` is returned.
//!
//! # Vocabularies (34 patterns)
//! - METHOD: method, approach, architecture, pipeline, algorithm, model
//! - FINDING: result, improve, increase, decrease, outperform, accuracy, auc, f1
//! - LIMITATION: limit, limitation, trade-off/tradeoff, caveat, bias
//! - NEXT-STEP: future, next, "we plan", "we will", follow-up/followup
//! - DEFINITION: define, definition, "we call", "we refer to"
//! - CLAIM: "we argue", "we claim", "suggests that", therefore

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};

use crate::digest::config::DigestConfig;
use crate::digest::types::Tag;

// ==================== DICTIONARIES ====================

const METHOD_VOCAB: &[&str] = &[
    "method", "approach", "architecture", "pipeline", "algorithm", "model",
];

const FINDING_VOCAB: &[&str] = &[
    "result", "improve", "increase", "decrease", "outperform", "accuracy", "auc", "f1",
];

// "limit" already covers "limitation"; both stay listed so the vocabulary
// reads the same as the product copy it came from.
const LIMITATION_VOCAB: &[&str] = &[
    "limit", "limitation", "trade-off", "tradeoff", "caveat", "bias",
];

const NEXT_STEP_VOCAB: &[&str] = &[
    "future", "next", "we plan", "we will", "follow-up", "followup",
];

const DEFINITION_VOCAB: &[&str] = &["define", "definition", "we call", "we refer to"];

const CLAIM_VOCAB: &[&str] = &["we argue", "we claim", "suggests that", "therefore"];

// ==================== MAIN IMPLEMENTATION ====================

/// Topical tag matcher
pub struct TagCortex {
    automaton: AhoCorasick,
    /// Tag for each pattern index in the automaton
    pattern_tags: Vec<Tag>,
}

impl Default for TagCortex {
    fn default() -> Self {
        Self::new()
    }
}

impl TagCortex {
    /// Create a new TagCortex with the vocabulary automaton built
    pub fn new() -> Self {
        let vocabularies: [(Tag, &[&str]); 6] = [
            (Tag::Method, METHOD_VOCAB),
            (Tag::Finding, FINDING_VOCAB),
            (Tag::Limitation, LIMITATION_VOCAB),
            (Tag::NextStep, NEXT_STEP_VOCAB),
            (Tag::Definition, DEFINITION_VOCAB),
            (Tag::Claim, CLAIM_VOCAB),
        ];

        let mut patterns = Vec::new();
        let mut pattern_tags = Vec::new();
        for (tag, vocab) in vocabularies {
            for entry in vocab {
                patterns.push(*entry);
                pattern_tags.push(tag);
            }
        }

        // Standard match kind so overlapping vocabulary entries all report;
        // presence per tag is what matters, not span ownership.
        let automaton = AhoCorasickBuilder::new()
            .match_kind(MatchKind::Standard)
            .ascii_case_insensitive(true)
            .build(&patterns)
            .unwrap();

        Self {
            automaton,
            pattern_tags,
        }
    }

    /// Get the number of vocabulary patterns
    pub fn pattern_count(&self) -> usize {
        self.pattern_tags.len()
    }

    /// Infer tags for the full trimmed text, in fixed check order.
    /// Never empty: with no vocabulary hits the default pair is returned.
    pub fn infer(&self, text: &str, config: &DigestConfig) -> Vec<Tag> {
        let mut seen = [false; Tag::ALL.len()];
        let mut remaining = Tag::ALL.len();

        for m in self.automaton.find_overlapping_iter(text) {
            let tag = self.pattern_tags[m.pattern().as_usize()];
            if !seen[tag as usize] {
                seen[tag as usize] = true;
                remaining -= 1;
                if remaining == 0 {
                    break;
                }
            }
        }

        let tags: Vec<Tag> = Tag::ALL
            .iter()
            .copied()
            .filter(|tag| seen[*tag as usize])
            .take(config.max_tags)
            .collect();

        if tags.is_empty() {
            vec![Tag::Method, Tag::Finding]
        } else {
            tags
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
