//! Mode dispatch and subsystem startup.
mod startup;
mod subsystems;

pub use startup::{dispatch, launch, RuntimeExit};
pub use subsystems::{StandaloneSubsystems, Subsystems};
