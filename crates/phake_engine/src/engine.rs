use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use phake_core::{AnalysisRequest, Generation};

use crate::{AnalysisClient, ClientSettings, EngineEvent, ReqwestAnalysisClient, RequestLifecycle};

enum EngineCommand {
    Analyze {
        generation: Generation,
        request: AnalysisRequest,
    },
}

/// Background worker owning the async runtime. Commands go in over one
/// channel, completed requests come back over another.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Self {
        Self::with_client(Arc::new(ReqwestAnalysisClient::new(settings)))
    }

    pub fn with_client(client: Arc<dyn AnalysisClient>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let lifecycle = RequestLifecycle::new(client);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let lifecycle = lifecycle.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(&lifecycle, command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit(&self, generation: Generation, request: AnalysisRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Analyze {
            generation,
            request,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    lifecycle: &RequestLifecycle,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Analyze {
            generation,
            request,
        } => {
            let outcome = lifecycle.run(&request).await;
            let _ = event_tx.send(EngineEvent::AnalysisCompleted {
                generation,
                outcome,
            });
        }
    }
}
