use crate::{AnalysisError, AnalysisPayload, Generation, Mode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the link input box.
    InputChanged(String),
    /// User picked a mode explicitly.
    ModeSelected(Mode),
    /// User flipped the mode toggle.
    ModeToggled,
    /// User submitted the current link (button or Enter).
    SubmitClicked,
    /// Engine finished the request tagged with `generation`.
    AnalysisCompleted {
        generation: Generation,
        outcome: Result<AnalysisPayload, AnalysisError>,
    },
    /// User closed the result or error view (close button, overlay, Escape).
    Dismissed,
    /// User pressed Retry on the error view.
    RetryClicked,
    /// UI tick; rotates the loading text while pending.
    Tick,
    NoOp,
}
