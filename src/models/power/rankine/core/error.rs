use thiserror::Error;
use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::constraint::ConstraintError;

use super::CyclePoint;

/// Errors that can occur while building cycle parameters or solving a cycle.
///
/// A solve either returns all four states or one of these errors; partial
/// results are never returned.
#[derive(Debug, Error)]
pub enum RankineError {
    /// A pressure or efficiency is outside its allowed range.
    #[error("invalid {parameter}: {source}")]
    InvalidParameter {
        /// Name of the offending parameter.
        parameter: &'static str,

        #[source]
        source: ConstraintError,
    },

    /// The turbine-inlet temperature is not a finite, positive absolute temperature.
    #[error("invalid turbine-inlet temperature: {temperature:?}")]
    InvalidTemperature { temperature: ThermodynamicTemperature },

    /// The condenser pressure is not strictly below the boiler pressure.
    #[error(
        "condenser pressure ({condenser:?}) must be below boiler pressure ({boiler:?})"
    )]
    PressureOrder {
        boiler: Pressure,
        condenser: Pressure,
    },

    /// The turbine-inlet temperature does not exceed the condenser saturation temperature.
    #[error(
        "turbine-inlet temperature ({turbine_inlet:?}) must exceed the condenser saturation temperature ({saturation:?})"
    )]
    TurbineInletBelowSaturation {
        turbine_inlet: ThermodynamicTemperature,
        saturation: ThermodynamicTemperature,
    },

    /// A thermodynamic model lookup failed.
    ///
    /// The underlying model error is kept as the source, and its message is
    /// repeated verbatim at the end of this error's message.
    #[error("property lookup failed at {point} ({context}): {source}")]
    PropertyLookup {
        /// Cycle point being resolved when the lookup failed.
        point: CyclePoint,

        /// Which lookup failed.
        context: String,

        /// Underlying thermodynamic model error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl RankineError {
    /// Creates a parameter error for a violated constraint.
    pub(super) fn invalid(parameter: &'static str, source: ConstraintError) -> Self {
        Self::InvalidParameter { parameter, source }
    }

    /// Creates a property lookup failure with context.
    pub(super) fn lookup_failed(
        point: CyclePoint,
        context: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::PropertyLookup {
            point,
            context: context.into(),
            source: Box::new(err),
        }
    }
}
