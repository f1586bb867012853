//! Canonical fluid identifiers.
//!
//! A fluid type names a substance. Each model decides how to interpret that
//! name, for example as backend identifiers for
//! [`CoolProp`](crate::support::thermo::model) when the `coolprop` feature is enabled.

mod water;

pub use water::Water;
