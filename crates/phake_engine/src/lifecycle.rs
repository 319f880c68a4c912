use std::sync::Arc;

use phake_core::{AnalysisError, AnalysisPayload, AnalysisRequest, RequestState};
use phake_logging::{phake_info, phake_warn};

use crate::AnalysisClient;

/// Executes one analysis request and maps the outcome to a terminal state.
///
/// Stateless per call; serialization of submissions is the controller's job.
/// No retries happen here.
#[derive(Clone)]
pub struct RequestLifecycle {
    client: Arc<dyn AnalysisClient>,
}

impl RequestLifecycle {
    pub fn new(client: Arc<dyn AnalysisClient>) -> Self {
        Self { client }
    }

    /// Issues exactly one call and resolves to `Succeeded` or `Failed`.
    pub async fn execute(&self, request: &AnalysisRequest) -> RequestState {
        match self.run(request).await {
            Ok(payload) => RequestState::Succeeded(payload),
            Err(err) => RequestState::Failed(err),
        }
    }

    /// Same as [`Self::execute`], as a plain result.
    pub async fn run(&self, request: &AnalysisRequest) -> Result<AnalysisPayload, AnalysisError> {
        match self.client.analyze(request).await {
            Ok(payload) => {
                phake_info!("Analysis for {} returned mode={}", request.link, payload.mode());
                Ok(payload)
            }
            Err(err) => {
                phake_warn!("Analysis for {} failed: {}", request.link, err);
                Err(err.into())
            }
        }
    }
}
