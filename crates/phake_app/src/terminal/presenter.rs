use std::fmt;
use std::io::Write;

use phake_core::{AnalysisError, AnalysisResult, AppViewModel, Mode, PhaseView};
use phake_logging::phake_warn;

/// Capabilities the core needs from whatever draws the UI. All calls are
/// fire-and-forget.
pub trait Presenter {
    fn show_pending(&mut self, loading_text: &str);
    fn show_educational_result(&mut self, result: &AnalysisResult);
    fn show_prank_result(&mut self, link: &str);
    fn show_error(&mut self, error: &AnalysisError);
    fn hide_result(&mut self);
    /// Redraw after a change that produced no effect (mode switch, tick).
    fn refresh(&mut self, view: &AppViewModel);
}

pub struct TerminalPresenter<W: Write> {
    out: W,
    shown_mode: Option<Mode>,
    shown_loading: Option<String>,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            shown_mode: None,
            shown_loading: None,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn message(&mut self, text: &str) {
        self.line(format_args!("{text}"));
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(err) = writeln!(self.out, "{args}").and_then(|_| self.out.flush()) {
            phake_warn!("Failed to write to terminal: {}", err);
        }
    }

    fn show_mode(&mut self, view: &AppViewModel) {
        self.shown_mode = Some(view.mode);
        self.line(format_args!(
            "MODE://{} [{}]",
            view.mode.as_str().to_ascii_uppercase(),
            view.action_label
        ));
        self.line(format_args!("  {}", view.mode_description));
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn show_pending(&mut self, loading_text: &str) {
        self.shown_loading = Some(loading_text.to_string());
        self.line(format_args!("... {loading_text}"));
    }

    fn show_educational_result(&mut self, result: &AnalysisResult) {
        self.shown_loading = None;
        self.line(format_args!("// ANALYSIS COMPLETE"));
        self.line(format_args!("  original link : {}", result.original_link));
        self.line(format_args!("  generated fake: {}", result.fake_link));
        self.line(format_args!("  technique     : {}", result.technique));
        self.line(format_args!("  explanation   : {}", result.explanation));
    }

    fn show_prank_result(&mut self, link: &str) {
        self.shown_loading = None;
        self.line(format_args!("// PRANK LINK GENERATED"));
        self.line(format_args!("  {link}"));
    }

    fn show_error(&mut self, error: &AnalysisError) {
        self.shown_loading = None;
        self.line(format_args!("// ERROR: {}", error.message));
        self.line(format_args!("  (retry or close, then submit again)"));
    }

    fn hide_result(&mut self) {
        self.shown_loading = None;
    }

    fn refresh(&mut self, view: &AppViewModel) {
        if self.shown_mode != Some(view.mode) {
            self.show_mode(view);
        }
        if let PhaseView::Pending { loading_text } = &view.phase {
            if self.shown_loading.as_deref() != Some(loading_text.as_str()) {
                self.show_pending(loading_text);
            }
        }
    }
}
