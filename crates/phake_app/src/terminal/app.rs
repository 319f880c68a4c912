use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use phake_core::{update, AppState, Msg};
use phake_engine::{ClientSettings, EngineHandle};
use phake_logging::{phake_info, phake_warn};

use super::commands::{self, Command, HELP};
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::presenter::{Presenter, TerminalPresenter};

/// Rotation period of the loading text.
const TICK_INTERVAL: Duration = Duration::from_millis(900);
/// How long the main loop waits for input before checking the engine.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::from_env());

    let settings = ClientSettings::from_env();
    phake_info!("Starting PhakeLinks; endpoint={}", settings.endpoint);
    let engine = EngineHandle::new(settings);
    let mut app = App::new(engine, TerminalPresenter::new(io::stdout()));
    app.start();

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();

    let input_tx = cmd_tx.clone();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if input_tx.send(commands::parse(&line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    phake_warn!("Failed to read stdin: {}", err);
                    break;
                }
            }
        }
        let _ = input_tx.send(Command::Quit);
    });

    // Background tick to rotate the loading text.
    thread::spawn(move || {
        while cmd_tx.send(Command::Dispatch(vec![Msg::Tick])).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    loop {
        match cmd_rx.recv_timeout(POLL_INTERVAL) {
            Ok(Command::Quit) | Err(RecvTimeoutError::Disconnected) => break,
            Ok(Command::Help) => app.help(),
            Ok(Command::Dispatch(msgs)) => {
                for msg in msgs {
                    app.dispatch_msg(msg);
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
        }
        app.pump_engine();
    }

    phake_info!("Shutting down");
    io::stdout().flush().context("flushing terminal output")?;
    Ok(())
}

/// Owns the controller state and routes messages through `update`.
pub struct App<P: Presenter> {
    state: AppState,
    runner: EffectRunner<P>,
}

impl<W: Write> App<TerminalPresenter<W>> {
    pub fn help(&mut self) {
        self.runner.presenter_mut().message(HELP);
    }
}

impl<P: Presenter> App<P> {
    pub fn new(engine: EngineHandle, presenter: P) -> Self {
        Self {
            state: AppState::new(),
            runner: EffectRunner::new(engine, presenter),
        }
    }

    /// Draws the initial mode banner.
    pub fn start(&mut self) {
        let view = self.state.view();
        self.runner.presenter_mut().refresh(&view);
    }

    pub fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        if effects.is_empty() {
            if was_dirty {
                self.runner.presenter_mut().refresh(&view);
            }
        } else {
            self.runner.run(effects, &view);
        }
    }

    /// Feeds every finished request back into the core. Returns how many.
    pub fn pump_engine(&mut self) -> usize {
        let mut count = 0;
        while let Some(msg) = self.runner.poll_engine() {
            self.dispatch_msg(msg);
            count += 1;
        }
        count
    }

    #[cfg(test)]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub fn into_presenter(self) -> P {
        self.runner.into_presenter()
    }
}
