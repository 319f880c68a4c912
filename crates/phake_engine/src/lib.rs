//! PhakeLinks engine: talks to the analysis service and executes effects.
mod client;
mod engine;
mod lifecycle;
mod types;
mod wire;

pub use client::{AnalysisClient, ClientSettings, ReqwestAnalysisClient, DEFAULT_ENDPOINT};
pub use engine::EngineHandle;
pub use lifecycle::RequestLifecycle;
pub use types::{ClientError, EngineEvent};
