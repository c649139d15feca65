pub mod error;
pub mod log;
pub mod plan;
pub mod progress;
pub mod report;

pub use error::{PlanError, TrackerError};
pub use log::{ImplementationLog, Phase, Status, Step};
pub use plan::{PhasePlan, PlanGenerator, PlanId, PlanStep};
pub use progress::{ProgressTracker, ProjectStatus};
pub use report::HandoffNotes;

#[cfg(test)]
mod tests;
