//! Capability traits used to query and construct thermodynamic states.
//!
//! Together these form the property lookup interface: [`StateFrom`] resolves
//! a state from two independent properties, and the `Has*` traits report a
//! dependent property of that state.

mod base;
mod properties;
mod state_from;

pub use base::ThermoModel;
pub use properties::{HasEnthalpy, HasEntropy};
pub use state_from::StateFrom;
