use std::sync::Once;

use phake_core::{
    update, AnalysisError, AnalysisPayload, AnalysisResult, AppState, Effect, Mode, Msg,
    EXCLUSION_CAPACITY,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(phake_logging::initialize_for_tests);
}

fn educational(technique: &str) -> AnalysisPayload {
    AnalysisPayload::Educational(AnalysisResult {
        original_link: "example.com".to_string(),
        fake_link: "examp1e.com".to_string(),
        technique: technique.to_string(),
        explanation: "Looks alike.".to_string(),
    })
}

/// Runs one full submit/complete/dismiss cycle and returns the exclusion list
/// that was sent with the request.
fn cycle(state: AppState, outcome: Result<AnalysisPayload, AnalysisError>) -> (AppState, Vec<String>) {
    let (state, _) = update(state, Msg::InputChanged("example.com".to_string()));
    let (state, effects) = update(state, Msg::SubmitClicked);
    let (generation, sent) = effects
        .into_iter()
        .find_map(|effect| match effect {
            Effect::SendAnalysis {
                generation,
                request,
            } => Some((generation, request.exclude)),
            _ => None,
        })
        .expect("send effect");
    let (state, _) = update(
        state,
        Msg::AnalysisCompleted {
            generation,
            outcome,
        },
    );
    let (state, _) = update(state, Msg::Dismissed);
    (state, sent)
}

#[test]
fn educational_success_appends_technique() {
    init_logging();
    let (state, sent) = cycle(AppState::new(), Ok(educational("Homoglyph Spoofing")));

    assert!(sent.is_empty());
    assert_eq!(state.exclusions().snapshot(), ["Homoglyph Spoofing"]);
}

#[test]
fn next_request_carries_previous_techniques_in_order() {
    init_logging();
    let (state, _) = cycle(AppState::new(), Ok(educational("Homoglyph Spoofing")));
    let (state, sent) = cycle(state, Ok(educational("Typosquatting")));

    assert_eq!(sent, vec!["Homoglyph Spoofing".to_string()]);
    assert_eq!(
        state.exclusions().snapshot(),
        ["Homoglyph Spoofing", "Typosquatting"]
    );
}

#[test]
fn history_clears_when_capacity_is_reached() {
    init_logging();
    let mut state = AppState::new();
    for i in 1..EXCLUSION_CAPACITY {
        state = cycle(state, Ok(educational(&format!("T{i}")))).0;
    }
    assert_eq!(state.exclusions().len(), EXCLUSION_CAPACITY - 1);

    let (state, sent) = cycle(state, Ok(educational("T16")));
    assert_eq!(sent.len(), EXCLUSION_CAPACITY - 1);
    assert!(state.exclusions().is_empty());

    let (state, sent) = cycle(state, Ok(educational("T17")));
    assert!(sent.is_empty());
    assert_eq!(state.exclusions().snapshot(), ["T17"]);
}

#[test]
fn exclusion_list_never_exceeds_capacity_at_submission() {
    init_logging();
    let mut state = AppState::new();
    for i in 0..(EXCLUSION_CAPACITY * 3) {
        let (next, sent) = cycle(state, Ok(educational(&format!("T{i}"))));
        assert!(sent.len() <= EXCLUSION_CAPACITY);
        state = next;
    }
}

#[test]
fn prank_and_failures_leave_history_untouched() {
    init_logging();
    let (state, _) = cycle(AppState::new(), Ok(educational("Homoglyph Spoofing")));
    let before = state.exclusions().clone();

    let (state, _) = update(state, Msg::ModeSelected(Mode::Prank));
    let (state, _) = cycle(state, Ok(AnalysisPayload::Prank("http://x.example".to_string())));
    assert_eq!(state.exclusions(), &before);

    let (state, _) = update(state, Msg::ModeSelected(Mode::Educational));
    let (state, _) = cycle(state, Err(AnalysisError::new("rate limited")));
    assert_eq!(state.exclusions(), &before);
}
