use crate::{AnalysisError, AnalysisRequest, AnalysisResult, Generation};

/// Side effects requested by [`crate::update`], executed by the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ShowPending,
    SendAnalysis {
        generation: Generation,
        request: AnalysisRequest,
    },
    ShowEducationalResult(AnalysisResult),
    ShowPrankResult(String),
    ShowError(AnalysisError),
    /// The result or error view should be closed.
    HideResult,
}
