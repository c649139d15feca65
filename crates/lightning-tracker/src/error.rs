use lightning_core::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Phase {0} not found")]
    UnknownPhase(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Unknown phase: {0}")]
    UnknownPhase(String),

    #[error("Step {step} has duration {duration:?}; expected \"<integer> hours\"")]
    InvalidDuration { step: String, duration: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}
