//! Supporting utilities used by models.
//!
//! These modules are public because callers need them to build inputs and
//! plug in thermodynamic models, but their APIs are not stable.

pub mod constraint;
pub mod thermo;
pub mod units;
