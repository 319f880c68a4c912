use phake_logging::{phake_debug, phake_info, phake_warn};

use crate::{AnalysisError, AnalysisPayload, AppState, Effect, Msg, Phase, RequestState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::ModeSelected(mode) => {
            state.set_mode(mode);
            Vec::new()
        }
        Msg::ModeToggled => {
            let next = state.mode().toggled();
            state.set_mode(next);
            Vec::new()
        }
        Msg::SubmitClicked => submit(&mut state),
        Msg::AnalysisCompleted {
            generation,
            outcome,
        } => {
            // Serialization invariant: only the request we are waiting on may
            // touch the exclusion history or the visible result.
            if state.phase() != Phase::Pending || generation != state.generation() {
                phake_warn!(
                    "Dropping stale analysis response generation={} current={} phase={:?}",
                    generation,
                    state.generation(),
                    state.phase()
                );
                return (state, Vec::new());
            }
            match outcome {
                Ok(payload) => {
                    phake_info!(
                        "Analysis generation={} succeeded mode={}",
                        generation,
                        payload.mode()
                    );
                    let effect = match &payload {
                        AnalysisPayload::Educational(result) => {
                            Effect::ShowEducationalResult(result.clone())
                        }
                        AnalysisPayload::Prank(link) => Effect::ShowPrankResult(link.clone()),
                    };
                    state.complete_success(payload);
                    vec![effect]
                }
                Err(err) => {
                    phake_info!(
                        "Analysis generation={} failed: {}",
                        generation,
                        err.message
                    );
                    state.complete_failure(err.clone());
                    vec![Effect::ShowError(err)]
                }
            }
        }
        Msg::Dismissed => {
            if state.phase() == Phase::Done {
                state.return_to_idle();
                vec![Effect::HideResult]
            } else {
                Vec::new()
            }
        }
        Msg::RetryClicked => {
            if matches!(state.request_state(), RequestState::Failed(_)) {
                state.return_to_idle();
                vec![Effect::HideResult]
            } else {
                Vec::new()
            }
        }
        Msg::Tick => {
            if state.phase() == Phase::Pending {
                state.advance_loading();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    let mut effects = Vec::new();
    match state.phase() {
        Phase::Pending => {
            phake_debug!(
                "Submission ignored; generation {} still pending",
                state.generation()
            );
            return effects;
        }
        Phase::Done => {
            // A fresh submission dismisses whatever was on screen.
            state.return_to_idle();
            effects.push(Effect::HideResult);
        }
        Phase::Idle => {}
    }

    if state.submitted_link().is_empty() {
        phake_info!("Submission rejected: empty link");
        let err = AnalysisError::empty_link();
        state.reject_submission(err.clone());
        effects.push(Effect::ShowError(err));
        return effects;
    }

    let (generation, request) = state.begin_request();
    phake_info!(
        "Submission accepted generation={} mode={} exclude_count={}",
        generation,
        request.mode,
        request.exclude.len()
    );
    effects.push(Effect::ShowPending);
    effects.push(Effect::SendAnalysis {
        generation,
        request,
    });
    effects
}
