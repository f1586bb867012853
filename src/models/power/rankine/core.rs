//! Four-point ideal Rankine cycle with pump and turbine inefficiencies.
//!
//! The cycle is resolved point by point against a thermo model that provides
//! the [`RankineThermoModel`] capabilities. Parameters are validated when
//! [`CycleParameters`] is built, before any property lookup is issued.

mod diagram;
mod error;
mod input;
mod parameters;
mod performance;
mod point;
mod results;
mod solve;
mod traits;

#[cfg(test)]
pub(super) mod test_support;

pub use error::RankineError;
pub use input::{CycleInput, DEFAULT_EFFICIENCY};
pub use parameters::CycleParameters;
pub use performance::Performance;
pub use point::{CyclePoint, PressureLevel};
pub use results::{CycleResult, ThermodynamicState};
pub use traits::RankineThermoModel;

pub(super) use solve::solve;
