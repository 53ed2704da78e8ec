//! Application controller: the transient state behind the window.
//!
//! Owns the selected image, the analysis result, and the loading/error
//! flags, and sequences intake -> analyze -> display. Every selection bumps
//! a generation counter; analysis completions carry the generation they
//! were started under and are discarded when it no longer matches, so a
//! slow analysis for a replaced image can never overwrite newer state.

use crate::models::{AnalysisResult, SelectedImage};

/// The one user-facing message shown for any analysis failure.
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Failed to analyze the image. Please check your internet connection or try a different image.";

/// Observable lifecycle phase, derived from the underlying state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No image selected.
    Idle,
    /// Image selected, nothing in flight, no result yet.
    Ready,
    /// One analysis in flight.
    Analyzing,
    /// Result present.
    Done,
    /// Last attempt failed; retryable, equivalent to Ready.
    Failed,
}

/// Tag tying an analysis completion to the selection it was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptId(u64);

/// Payload handed to the analysis service for one attempt.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub attempt: AttemptId,
    pub base64_data: String,
    pub mime_type: String,
}

#[derive(Debug, Default)]
pub struct Controller {
    selected: Option<SelectedImage>,
    result: Option<AnalysisResult>,
    error: Option<String>,
    loading: bool,
    generation: u64,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.selected.is_none() {
            Phase::Idle
        } else if self.loading {
            Phase::Analyzing
        } else if self.result.is_some() {
            Phase::Done
        } else if self.error.is_some() {
            Phase::Failed
        } else {
            Phase::Ready
        }
    }

    pub fn selected_image(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True when the analyze action should be offered (image present, no
    /// result yet, nothing in flight).
    pub fn can_analyze(&self) -> bool {
        self.selected.is_some() && self.result.is_none() && !self.loading
    }

    /// Removal is disabled while an analysis is in flight.
    pub fn can_remove_image(&self) -> bool {
        self.selected.is_some() && !self.loading
    }

    /// Replace the selection, clearing any prior result, error, and
    /// in-flight attempt (its completion becomes stale).
    pub fn select_image(&mut self, image: SelectedImage) {
        tracing::info!("Selected image: {}", image.file_name);
        self.selected = Some(image);
        self.result = None;
        self.error = None;
        self.loading = false;
        self.generation += 1;
    }

    /// Clear the selection. No-op while an analysis is in flight.
    pub fn remove_image(&mut self) {
        if self.loading {
            return;
        }
        self.selected = None;
        self.result = None;
        self.error = None;
        self.generation += 1;
    }

    /// Start an analysis for the current selection.
    ///
    /// Returns the tagged payload to hand to the analysis service, or
    /// `None` (a no-op) when there is no selection or one is already in
    /// flight.
    pub fn begin_analysis(&mut self) -> Option<AnalysisRequest> {
        if self.loading {
            return None;
        }
        let image = self.selected.as_ref()?;

        self.loading = true;
        self.error = None;
        self.result = None;

        Some(AnalysisRequest {
            attempt: AttemptId(self.generation),
            base64_data: image.base64_data.clone(),
            mime_type: image.mime_type.clone(),
        })
    }

    /// Record an analysis completion.
    ///
    /// Stale completions (the selection changed since the attempt started)
    /// are discarded and `false` is returned. Otherwise exactly one of the
    /// two exits happens: success stores the result, failure stores the
    /// generic user-facing message; both clear the loading flag.
    pub fn finish_analysis(
        &mut self,
        attempt: AttemptId,
        outcome: std::result::Result<AnalysisResult, String>,
    ) -> bool {
        if attempt.0 != self.generation || !self.loading {
            tracing::debug!("Discarding stale analysis completion");
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
            }
            Err(cause) => {
                tracing::warn!("Analysis failed: {}", cause);
                self.error = Some(ANALYSIS_FAILED_MESSAGE.to_string());
            }
        }
        true
    }
}
