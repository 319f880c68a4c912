//! PhakeLinks core: pure submission state machine and view-model helpers.
mod effect;
mod exclusion;
mod mode;
mod msg;
mod request;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use exclusion::{ExclusionTracker, EXCLUSION_CAPACITY};
pub use mode::{Mode, ModeContext};
pub use msg::Msg;
pub use request::{
    AnalysisError, AnalysisPayload, AnalysisRequest, AnalysisResult, RequestState,
    CONNECTIVITY_MESSAGE, EMPTY_LINK_MESSAGE, UNEXPECTED_ERROR_MESSAGE,
};
pub use state::{AppState, Generation, Phase};
pub use update::update;
pub use view_model::{AppViewModel, PhaseView, PLACEHOLDER};
