//! Thermodynamic property modeling consumed by the cycle solver.
//!
//! A model names its fluid through [`ThermoModel`](capability::ThermoModel)
//! and advertises what it can do through capability traits: which input
//! pairs it can build a [`State`] from, and which properties it can report
//! for a state. Solvers bound on exactly the capabilities they need.

mod error;
mod quality;
mod state;

pub mod capability;
pub mod fluid;
pub mod model;

pub use error::PropertyError;
pub use quality::VaporQuality;
pub use state::State;
