use crate::view_model::{AppViewModel, PhaseView};
use crate::{
    AnalysisError, AnalysisPayload, AnalysisRequest, ExclusionTracker, Mode, ModeContext,
    RequestState,
};

/// Tag attached to every accepted submission; responses carrying an older
/// generation are dropped.
pub type Generation = u64;

/// Coarse controller phase derived from the request state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Done,
}

/// Everything the orchestration controller owns for one page session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: String,
    mode: ModeContext,
    exclusions: ExclusionTracker,
    request: RequestState,
    /// Mode the pending request was sent with; drives the loading text.
    in_flight_mode: Mode,
    generation: Generation,
    loading_frame: usize,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let mode = self.mode.mode();
        let phase = match &self.request {
            RequestState::Idle => PhaseView::Idle,
            RequestState::Pending => {
                let messages = self.in_flight_mode.loading_messages();
                PhaseView::Pending {
                    loading_text: messages[self.loading_frame % messages.len()].to_string(),
                }
            }
            RequestState::Succeeded(AnalysisPayload::Educational(result)) => {
                PhaseView::educational(result)
            }
            RequestState::Succeeded(AnalysisPayload::Prank(link)) => PhaseView::prank(link),
            RequestState::Failed(err) => PhaseView::error(err),
        };
        AppViewModel {
            mode,
            mode_description: mode.description().to_string(),
            action_label: mode.action_label().to_string(),
            input: self.input.clone(),
            phase,
            excluded_count: self.exclusions.len(),
            dirty: self.dirty,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.request {
            RequestState::Idle => Phase::Idle,
            RequestState::Pending => Phase::Pending,
            RequestState::Succeeded(_) | RequestState::Failed(_) => Phase::Done,
        }
    }

    pub fn request_state(&self) -> &RequestState {
        &self.request
    }

    pub fn mode(&self) -> Mode {
        self.mode.mode()
    }

    pub fn exclusions(&self) -> &ExclusionTracker {
        &self.exclusions
    }

    /// Generation of the most recently accepted submission (0 before any).
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Returns whether anything visible changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        if self.mode.mode() != mode {
            self.mode.set_mode(mode);
            self.mark_dirty();
        }
    }

    /// Link as it would be submitted right now.
    pub(crate) fn submitted_link(&self) -> &str {
        self.input.trim()
    }

    /// Moves to Pending and builds the request for the current input.
    pub(crate) fn begin_request(&mut self) -> (Generation, AnalysisRequest) {
        self.generation += 1;
        self.loading_frame = 0;
        self.request = RequestState::Pending;
        self.in_flight_mode = self.mode.mode();
        self.mark_dirty();
        let request = AnalysisRequest {
            link: self.submitted_link().to_string(),
            mode: self.mode.mode(),
            exclude: self.exclusions.snapshot().to_vec(),
        };
        (self.generation, request)
    }

    pub(crate) fn reject_submission(&mut self, err: AnalysisError) {
        self.request = RequestState::Failed(err);
        self.mark_dirty();
    }

    pub(crate) fn complete_success(&mut self, payload: AnalysisPayload) {
        if let AnalysisPayload::Educational(result) = &payload {
            self.exclusions.record(result.technique.clone());
            self.exclusions.maybe_reset();
        }
        self.request = RequestState::Succeeded(payload);
        self.mark_dirty();
    }

    pub(crate) fn complete_failure(&mut self, err: AnalysisError) {
        self.request = RequestState::Failed(err);
        self.mark_dirty();
    }

    pub(crate) fn advance_loading(&mut self) {
        self.loading_frame = self.loading_frame.wrapping_add(1);
        self.mark_dirty();
    }

    pub(crate) fn return_to_idle(&mut self) {
        self.request = RequestState::Idle;
        self.mark_dirty();
    }
}
