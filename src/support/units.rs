//! Extensions to [`uom`].
//!
//! All physical quantities in this crate are [`uom`] types. [`uom`] has no
//! named quantities for mass-specific enthalpy and entropy, so this module
//! provides them.
//!
//! The product of a specific volume and a pressure difference is a
//! [`SpecificEnthalpy`], which is how reversible pump work is expressed:
//!
//! ```
//! use twine_rankine::support::units::SpecificEnthalpy;
//! use uom::si::{
//!     available_energy::kilojoule_per_kilogram,
//!     f64::{Pressure, SpecificVolume},
//!     pressure::bar,
//!     specific_volume::cubic_meter_per_kilogram,
//! };
//!
//! let v = SpecificVolume::new::<cubic_meter_per_kilogram>(0.001);
//! let dp = Pressure::new::<bar>(100.0);
//! let w: SpecificEnthalpy = v * dp;
//! assert!((w.get::<kilojoule_per_kilogram>() - 10.0).abs() < 1e-9);
//! ```

mod quantities;

pub use quantities::{SpecificEnthalpy, SpecificEntropy};
