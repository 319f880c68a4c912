use crate::{AnalysisError, AnalysisResult, Mode, UNEXPECTED_ERROR_MESSAGE};

/// Rendered in place of an empty result field.
pub const PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub mode: Mode,
    pub mode_description: String,
    pub action_label: String,
    pub input: String,
    pub phase: PhaseView,
    pub excluded_count: usize,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PhaseView {
    #[default]
    Idle,
    Pending {
        loading_text: String,
    },
    EducationalResult(AnalysisResult),
    PrankResult(String),
    Error(String),
}

impl PhaseView {
    pub(crate) fn educational(result: &AnalysisResult) -> Self {
        PhaseView::EducationalResult(AnalysisResult {
            original_link: or_placeholder(&result.original_link),
            fake_link: or_placeholder(&result.fake_link),
            technique: or_placeholder(&result.technique),
            explanation: or_placeholder(&result.explanation),
        })
    }

    pub(crate) fn prank(link: &str) -> Self {
        PhaseView::PrankResult(or_placeholder(link))
    }

    pub(crate) fn error(err: &AnalysisError) -> Self {
        if err.message.trim().is_empty() {
            PhaseView::Error(UNEXPECTED_ERROR_MESSAGE.to_string())
        } else {
            PhaseView::Error(err.message.clone())
        }
    }
}

fn or_placeholder(value: &str) -> String {
    if value.trim().is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}
