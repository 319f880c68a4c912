//! JSON bodies exchanged with the analysis service.
use phake_core::{AnalysisPayload, AnalysisRequest, AnalysisResult, Mode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct AnalyzeRequestBody<'a> {
    link: &'a str,
    mode: &'a str,
    exclude: &'a [String],
}

#[derive(Debug, Deserialize)]
struct EducationalResponseBody {
    #[serde(default)]
    link: String,
    fake_link: String,
    technique: String,
    #[serde(default)]
    explanation: String,
}

#[derive(Debug, Deserialize)]
struct PrankResponseBody {
    fake_link: String,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorResponseBody {
    #[serde(default)]
    message: Option<String>,
    /// Machine-readable code; logged, never shown.
    #[serde(default)]
    error: Option<String>,
}

pub(crate) fn encode_request(request: &AnalysisRequest) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec(&AnalyzeRequestBody {
        link: &request.link,
        mode: request.mode.as_str(),
        exclude: &request.exclude,
    })
}

/// Parses a success body into the shape expected for the request's mode.
pub(crate) fn decode_success(
    request: &AnalysisRequest,
    body: &[u8],
) -> serde_json::Result<AnalysisPayload> {
    match request.mode {
        Mode::Educational => {
            let body: EducationalResponseBody = serde_json::from_slice(body)?;
            let original_link = if body.link.is_empty() {
                request.link.clone()
            } else {
                body.link
            };
            Ok(AnalysisPayload::Educational(AnalysisResult {
                original_link,
                fake_link: body.fake_link,
                technique: body.technique,
                explanation: body.explanation,
            }))
        }
        Mode::Prank => {
            let body: PrankResponseBody = serde_json::from_slice(body)?;
            Ok(AnalysisPayload::Prank(body.fake_link))
        }
    }
}

/// Extracts `(message, error code)` from a failure body, if it is JSON at all.
pub(crate) fn decode_error(body: &[u8]) -> (Option<String>, Option<String>) {
    let parsed: ErrorResponseBody = serde_json::from_slice(body).unwrap_or_default();
    (parsed.message, parsed.error)
}
