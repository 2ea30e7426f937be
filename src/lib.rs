//! NoteCore: Research Note Digest Engine
//!
//! A Rust/WASM implementation of the KittClouds research-note analysis flow.
//!
//! # Architecture
//!
//! ## Digest Components
//! - `digest/segment.rs` - Sentence segmentation (whitespace collapse + boundary scan)
//! - `digest/highlight.rs` - HighlightCortex: Key-point selection (4 priority patterns)
//! - `digest/tags.rs` - TagCortex: Topical tag inference via Aho-Corasick
//! - `digest/analyzer.rs` - DigestCortex: **Unified analyzer** - single analyze() per note
//! - `digest/config.rs` - Configuration types and demo defaults
//! - `digest/error.rs` - User-facing error taxonomy
//!
//! ## Guard Components
//! - `guard/sequencer.rs` - CallSequencer: latest-call-wins publication gate
//! - `guard/state.rs` - CallState: loading/value/error snapshot
//! - `guard/timer.rs` - setTimeout-backed artificial latency
//!
//! ## Pipeline
//! - `pipeline.rs` - NotePipeline: WASM entry combining guard + analyzer
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { NotePipeline } from 'notecore';
//!
//! await init();
//!
//! const pipeline = new NotePipeline();
//!
//! // Kick off an analysis; only the latest call's outcome is published
//! const result = await pipeline.analyze("We propose a method. Results show gains.");
//!
//! console.log(result.summary);
//! console.log(result.highlights);  // Up to 4 key sentences
//! console.log(result.tags);        // e.g. ["method", "finding"]
//! console.log(result.confidence);  // "low" | "medium" | "high"
//!
//! // Observable snapshot for UI rendering
//! console.log(pipeline.state());   // { loading, value, error }
//! ```

pub mod digest;
pub mod guard;
pub mod pipeline;

// Public exports - Digest
pub use digest::*;

// Public exports - Guard
pub use guard::*;

// Public exports - Pipeline
pub use pipeline::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("notecore v{}", env!("CARGO_PKG_VERSION"))
}
