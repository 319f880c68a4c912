use crate::Mode;

/// Shown when the user submits an empty or whitespace-only link.
pub const EMPTY_LINK_MESSAGE: &str = "Please enter a URL or domain before analyzing.";
/// Shown when the service could not be reached or gave no message of its own.
pub const CONNECTIVITY_MESSAGE: &str = "Failed to reach the server. Check your connection.";
/// Shown in place of an error that arrived without any text.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Outbound request, built fresh for every accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub link: String,
    pub mode: Mode,
    pub exclude: Vec<String>,
}

/// Educational breakdown returned by the analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisResult {
    pub original_link: String,
    pub fake_link: String,
    pub technique: String,
    pub explanation: String,
}

/// Successful response, shaped by the mode the request was sent with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisPayload {
    Educational(AnalysisResult),
    /// The generated prank link.
    Prank(String),
}

impl AnalysisPayload {
    pub fn mode(&self) -> Mode {
        match self {
            AnalysisPayload::Educational(_) => Mode::Educational,
            AnalysisPayload::Prank(_) => Mode::Prank,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisError {
    pub message: String,
}

impl AnalysisError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn empty_link() -> Self {
        Self::new(EMPTY_LINK_MESSAGE)
    }

    pub fn connectivity() -> Self {
        Self::new(CONNECTIVITY_MESSAGE)
    }
}

/// Lifecycle of a single submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Succeeded(AnalysisPayload),
    Failed(AnalysisError),
}
