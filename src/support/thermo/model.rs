//! Thermodynamic property models.
//!
//! The crate ships one real-fluid model, [`CoolProp`], behind the `coolprop`
//! feature. Any type implementing the capability traits in
//! [`capability`](crate::support::thermo::capability) can stand in for it.

#[cfg(feature = "coolprop")]
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub mod coolprop;

#[cfg(feature = "coolprop")]
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub use coolprop::CoolProp;
