#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Twine Rankine
//!
//! Ideal Rankine cycle state solver built on [Twine](https://github.com/isentropic-dev/twine)
//! thermodynamic models.
//!
//! Given boiler and condenser pressures, a turbine-inlet temperature, and
//! pump/turbine isentropic efficiencies, the solver resolves temperature,
//! pressure, specific enthalpy, specific entropy, and specific volume at the
//! four canonical cycle points (condenser exit, pump exit, boiler exit, and
//! turbine exit).
//!
//! ## Crate layout
//!
//! - [`models`]: The [`twine_core::Model`] adapter for the cycle solver.
//! - [`support`]: Numeric constraints, unit extensions, and the thermodynamic
//!   capability traits the solver consumes.
//!
//! ## Features
//!
//! - `coolprop`: Enables the CoolProp-backed water model via `rfluids`.
//! - `serde`: Enables deserializing [`CycleInput`] from its legacy JSON shape
//!   and serializing cycle results.

pub mod models;
pub mod support;

pub use models::power::rankine::{
    CycleInput, CycleParameters, CyclePoint, CycleResult, DEFAULT_EFFICIENCY, Performance,
    PressureLevel, RankineCycle, RankineError, RankineThermoModel, ThermodynamicState,
};
