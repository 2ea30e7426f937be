//! NotePipeline: Guarded Analysis Entry Point
//!
//! Combines the digest analyzer with the latest-call-wins sequencer behind
//! a single WASM surface:
//! - `analyze(text)` returns a Promise for that call's own outcome
//! - the published `state()` snapshot only ever reflects the most recently
//!   started call, however completions interleave
//! - `reset()` invalidates any in-flight call and clears the snapshot
//!
//! Designed for a single-threaded host (the browser event loop); the
//! sequencer sits behind `Rc<RefCell<...>>` and borrows never cross an
//! await point.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::digest::{
    AnalysisResult, AnalyzeRequest, DigestConfig, DigestCortex, DigestResult,
};
use crate::guard::{sleep, CallSequencer, CallState};

/// Guarded note-analysis pipeline
#[wasm_bindgen]
pub struct NotePipeline {
    cortex: Rc<DigestCortex>,
    sequencer: Rc<RefCell<CallSequencer<AnalysisResult>>>,
}

impl Default for NotePipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl NotePipeline {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_config(DigestConfig::default())
    }

    /// Construct with a JS-provided config object (JS binding)
    #[wasm_bindgen(js_name = withConfig)]
    pub fn js_with_config(config: JsValue) -> Result<NotePipeline, JsValue> {
        let config: DigestConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?;
        Ok(Self::with_config(config))
    }

    /// Analyze a note (JS binding).
    ///
    /// The returned promise settles with this call's own outcome whether or
    /// not a newer call supersedes it; only the published state is gated.
    #[wasm_bindgen(js_name = analyze)]
    pub fn js_analyze(&self, text: &str) -> js_sys::Promise {
        let cortex = self.cortex.clone();
        let sequencer = self.sequencer.clone();
        let text = text.to_string();

        future_to_promise(async move {
            let started = instant::Instant::now();
            let (call_id, published, outcome) = Self::run(cortex, sequencer, text).await;

            web_sys::console::debug_1(
                &format!(
                    "[NotePipeline] call #{} settled in {}ms ({})",
                    call_id,
                    started.elapsed().as_millis(),
                    if published { "published" } else { "superseded" }
                )
                .into(),
            );

            match outcome {
                Ok(result) => serde_wasm_bindgen::to_value(&result).map_err(|e| {
                    web_sys::console::error_1(
                        &format!("[NotePipeline] Serialization failed: {:?}", e).into(),
                    );
                    JsValue::from_str("Serialization failed")
                }),
                Err(err) => Err(JsValue::from_str(&err.to_string())),
            }
        })
    }

    /// Invalidate any in-flight call and clear the published state
    #[wasm_bindgen(js_name = reset)]
    pub fn js_reset(&self) {
        self.sequencer.borrow_mut().reset();
    }

    /// Published state snapshot for UI rendering (JS binding)
    #[wasm_bindgen(js_name = state)]
    pub fn js_state(&self) -> JsValue {
        match serde_wasm_bindgen::to_value(self.sequencer.borrow().snapshot()) {
            Ok(v) => v,
            Err(e) => {
                web_sys::console::error_1(
                    &format!("[NotePipeline] Serialization failed: {:?}", e).into(),
                );
                JsValue::NULL
            }
        }
    }

    /// Get total number of calls started
    #[wasm_bindgen(js_name = startedCount)]
    pub fn started_count(&self) -> u64 {
        self.sequencer.borrow().started_count()
    }

    /// Get stale completions as a percentage of calls started
    #[wasm_bindgen(js_name = staleRate)]
    pub fn stale_rate(&self) -> f64 {
        self.sequencer.borrow().stale_rate()
    }

    /// Get the configured artificial latency in ms
    #[wasm_bindgen(js_name = latencyMs)]
    pub fn latency_ms(&self) -> u32 {
        self.cortex.config().latency_ms
    }
}

impl NotePipeline {
    pub fn with_config(config: DigestConfig) -> Self {
        Self {
            cortex: Rc::new(DigestCortex::with_config(config)),
            sequencer: Rc::new(RefCell::new(CallSequencer::new())),
        }
    }

    /// Run one guarded call: publish loading, wait out the artificial
    /// latency, analyze, then publish the outcome if still current.
    /// Always returns the outcome to the direct caller.
    pub async fn execute(&self, text: &str) -> DigestResult<AnalysisResult> {
        let (_, _, outcome) =
            Self::run(self.cortex.clone(), self.sequencer.clone(), text.to_string()).await;
        outcome
    }

    /// The published snapshot, cloned for the caller
    pub fn snapshot(&self) -> CallState<AnalysisResult> {
        self.sequencer.borrow().snapshot().clone()
    }

    async fn run(
        cortex: Rc<DigestCortex>,
        sequencer: Rc<RefCell<CallSequencer<AnalysisResult>>>,
        text: String,
    ) -> (u64, bool, DigestResult<AnalysisResult>) {
        // Borrows must not be held across the await below
        let call_id = sequencer.borrow_mut().begin();

        sleep(cortex.config().latency_ms).await;

        let outcome = cortex.analyze(&AnalyzeRequest { text });

        let published = match &outcome {
            Ok(result) => sequencer
                .borrow_mut()
                .settle_value(call_id, result.clone()),
            Err(err) => sequencer.borrow_mut().settle_error(call_id, err.to_string()),
        };

        (call_id, published, outcome)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::DigestError;

    /// Drive a future on the current thread. The pipeline targets a
    /// single-threaded cooperative host, so a bare poll loop is the whole
    /// runtime.
    fn block_on<F: std::future::Future>(fut: F) -> F::Output {
        use std::task::{Context, Poll, Waker};

        let mut fut = std::pin::pin!(fut);
        let mut cx = Context::from_waker(Waker::noop());
        loop {
            if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
                return out;
            }
        }
    }

    fn test_pipeline() -> NotePipeline {
        NotePipeline::with_config(DigestConfig {
            latency_ms: 0,
            ..DigestConfig::default()
        })
    }

    // -------------------------------------------------------------------------
    // Requirement 1: A completed call publishes its result
    // -------------------------------------------------------------------------
    #[test]
    fn test_execute_publishes_result() {
        let pipeline = test_pipeline();

        let result = block_on(pipeline.execute("We propose a method. Results show gains."));
        let result = result.unwrap();
        assert_eq!(result.summary, "We propose a method. Results show gains.");

        let state = pipeline.snapshot();
        assert!(!state.loading);
        assert_eq!(state.value, Some(result));
        assert!(state.error.is_none());
    }

    // -------------------------------------------------------------------------
    // Requirement 2: Failures publish the message and propagate to the caller
    // -------------------------------------------------------------------------
    #[test]
    fn test_execute_publishes_error() {
        let pipeline = test_pipeline();

        let outcome = block_on(pipeline.execute("   "));
        assert_eq!(outcome.unwrap_err(), DigestError::EmptyInput);

        let state = pipeline.snapshot();
        assert!(!state.loading);
        assert!(state.value.is_none());
        assert_eq!(
            state.error.as_deref(),
            Some("Please paste some text to analyze.")
        );
    }

    // -------------------------------------------------------------------------
    // Requirement 3: reset clears the published state
    // -------------------------------------------------------------------------
    #[test]
    fn test_reset_returns_to_idle() {
        let pipeline = test_pipeline();

        block_on(pipeline.execute("Some note text.")).unwrap();
        assert!(pipeline.snapshot().value.is_some());

        pipeline.js_reset();
        assert!(pipeline.snapshot().is_idle());
    }

    // -------------------------------------------------------------------------
    // Requirement 4: Sequential calls each publish in turn
    // -------------------------------------------------------------------------
    #[test]
    fn test_sequential_calls_publish_each() {
        let pipeline = test_pipeline();

        block_on(pipeline.execute("First note.")).unwrap();
        assert_eq!(
            pipeline.snapshot().value.unwrap().summary,
            "First note."
        );

        block_on(pipeline.execute("Second note.")).unwrap();
        assert_eq!(
            pipeline.snapshot().value.unwrap().summary,
            "Second note."
        );

        assert_eq!(pipeline.started_count(), 2);
        assert!((pipeline.stale_rate() - 0.0).abs() < f64::EPSILON);
    }

    // -------------------------------------------------------------------------
    // Requirement 5: Config flows through to validation
    // -------------------------------------------------------------------------
    #[test]
    fn test_custom_config_applies() {
        let pipeline = NotePipeline::with_config(DigestConfig {
            latency_ms: 0,
            max_input_chars: 5,
            ..DigestConfig::default()
        });

        let outcome = block_on(pipeline.execute("too long for the cap"));
        assert_eq!(outcome.unwrap_err(), DigestError::TooLong);
        assert_eq!(pipeline.latency_ms(), 0);
    }
}

// =============================================================================
// Browser tests (Promise path)
// =============================================================================

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fast_pipeline() -> NotePipeline {
        NotePipeline::with_config(DigestConfig {
            latency_ms: 20,
            ..DigestConfig::default()
        })
    }

    #[wasm_bindgen_test]
    async fn analyze_resolves_with_result() {
        let pipeline = fast_pipeline();
        let value = JsFuture::from(pipeline.js_analyze("A note. Another line."))
            .await
            .unwrap();

        let result: AnalysisResult = serde_wasm_bindgen::from_value(value).unwrap();
        assert_eq!(result.summary, "A note. Another line.");
    }

    #[wasm_bindgen_test]
    async fn overlapping_calls_publish_only_the_latest() {
        let pipeline = fast_pipeline();

        // Equal latencies: the first-started call settles first, stale
        let first = pipeline.js_analyze("Old note.");
        let second = pipeline.js_analyze("New note.");

        // Each promise still resolves with its own call's outcome
        let first_value = JsFuture::from(first).await.unwrap();
        let first_result: AnalysisResult = serde_wasm_bindgen::from_value(first_value).unwrap();
        assert_eq!(first_result.summary, "Old note.");

        JsFuture::from(second).await.unwrap();

        let state = pipeline.snapshot();
        assert_eq!(state.value.unwrap().summary, "New note.");
        assert_eq!(pipeline.started_count(), 2);
    }

    #[wasm_bindgen_test]
    async fn reset_drops_pending_completion() {
        let pipeline = fast_pipeline();

        let pending = pipeline.js_analyze("Doomed note.");
        pipeline.js_reset();

        // The invalidated call still resolves for its direct caller
        JsFuture::from(pending).await.unwrap();

        assert!(pipeline.snapshot().is_idle());
    }

    #[wasm_bindgen_test]
    async fn rejected_analyze_carries_the_message() {
        let pipeline = fast_pipeline();

        let err = JsFuture::from(pipeline.js_analyze("   ")).await.unwrap_err();
        assert_eq!(
            err.as_string().as_deref(),
            Some("Please paste some text to analyze.")
        );
    }
}
