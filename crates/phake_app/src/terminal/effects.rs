use phake_core::{AppViewModel, Effect, Msg, PhaseView};
use phake_engine::{EngineEvent, EngineHandle};
use phake_logging::phake_info;

use super::presenter::Presenter;

/// Executes core effects: network work goes to the engine, everything else
/// to the presenter.
pub struct EffectRunner<P: Presenter> {
    engine: EngineHandle,
    presenter: P,
}

impl<P: Presenter> EffectRunner<P> {
    pub fn new(engine: EngineHandle, presenter: P) -> Self {
        Self { engine, presenter }
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    #[cfg(test)]
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Runs `effects` against the view produced by the same update, so the
    /// presenter sees placeholder-filled values.
    pub fn run(&mut self, effects: Vec<Effect>, view: &AppViewModel) {
        for effect in effects {
            match effect {
                Effect::ShowPending => match &view.phase {
                    PhaseView::Pending { loading_text } => self.presenter.show_pending(loading_text),
                    _ => self.presenter.show_pending(""),
                },
                Effect::SendAnalysis {
                    generation,
                    request,
                } => {
                    phake_info!(
                        "SendAnalysis generation={} mode={} link_len={}",
                        generation,
                        request.mode,
                        request.link.len()
                    );
                    self.engine.submit(generation, request);
                }
                Effect::ShowEducationalResult(result) => match &view.phase {
                    PhaseView::EducationalResult(shown) => {
                        self.presenter.show_educational_result(shown)
                    }
                    _ => self.presenter.show_educational_result(&result),
                },
                Effect::ShowPrankResult(link) => match &view.phase {
                    PhaseView::PrankResult(shown) => self.presenter.show_prank_result(shown),
                    _ => self.presenter.show_prank_result(&link),
                },
                Effect::ShowError(error) => self.presenter.show_error(&error),
                Effect::HideResult => self.presenter.hide_result(),
            }
        }
    }

    /// Next completed request from the engine, as a message for the core.
    pub fn poll_engine(&self) -> Option<Msg> {
        self.engine.try_recv().map(|event| match event {
            EngineEvent::AnalysisCompleted {
                generation,
                outcome,
            } => Msg::AnalysisCompleted {
                generation,
                outcome,
            },
        })
    }
}
