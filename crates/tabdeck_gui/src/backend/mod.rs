//! Simulation worker wiring for the GUI.
//!
//! This module exposes the command/event protocol plus the worker spawn helper
//! used by the egui UI thread.

mod protocol;
mod worker;

pub use protocol::{MountId, SimCmd, SimEvent};
pub use worker::{spawn_sim, SimDelays, SimHandle};
