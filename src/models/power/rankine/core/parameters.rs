use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::{
    Constrained, Constraint, StrictlyPositive, UnitIntervalLowerOpen,
};

use super::{PressureLevel, RankineError};

/// Validated operating parameters for a simple Rankine cycle, in SI units.
///
/// Construction enforces every precondition that can be checked without a
/// property model:
///
/// - both pressures are strictly positive,
/// - the condenser pressure is strictly below the boiler pressure,
/// - the turbine-inlet temperature is a finite, positive absolute temperature,
/// - both efficiencies lie in `(0, 1]`.
///
/// The turbine-inlet temperature is checked against the condenser saturation
/// temperature during the solve, once that temperature is known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleParameters {
    boiler_pressure: Constrained<Pressure, StrictlyPositive>,
    condenser_pressure: Constrained<Pressure, StrictlyPositive>,
    turbine_inlet_temperature: ThermodynamicTemperature,
    pump_efficiency: Constrained<Ratio, UnitIntervalLowerOpen>,
    turbine_efficiency: Constrained<Ratio, UnitIntervalLowerOpen>,
}

impl CycleParameters {
    /// Validates and creates cycle parameters.
    ///
    /// # Errors
    ///
    /// - [`RankineError::InvalidParameter`] if a pressure is not strictly
    ///   positive or an efficiency is outside `(0, 1]`.
    /// - [`RankineError::PressureOrder`] if `condenser_pressure >= boiler_pressure`.
    /// - [`RankineError::InvalidTemperature`] if the turbine-inlet temperature
    ///   is not finite and positive.
    pub fn new(
        boiler_pressure: Pressure,
        condenser_pressure: Pressure,
        turbine_inlet_temperature: ThermodynamicTemperature,
        pump_efficiency: Ratio,
        turbine_efficiency: Ratio,
    ) -> Result<Self, RankineError> {
        let boiler_pressure = StrictlyPositive::new(boiler_pressure)
            .map_err(|e| RankineError::invalid("boiler pressure", e))?;
        let condenser_pressure = StrictlyPositive::new(condenser_pressure)
            .map_err(|e| RankineError::invalid("condenser pressure", e))?;

        if condenser_pressure.as_ref() >= boiler_pressure.as_ref() {
            return Err(RankineError::PressureOrder {
                boiler: boiler_pressure.into_inner(),
                condenser: condenser_pressure.into_inner(),
            });
        }

        let t_kelvin = turbine_inlet_temperature.get::<kelvin>();
        if !t_kelvin.is_finite() || StrictlyPositive::check(&t_kelvin).is_err() {
            return Err(RankineError::InvalidTemperature {
                temperature: turbine_inlet_temperature,
            });
        }

        let pump_efficiency = UnitIntervalLowerOpen::new(pump_efficiency)
            .map_err(|e| RankineError::invalid("pump efficiency", e))?;
        let turbine_efficiency = UnitIntervalLowerOpen::new(turbine_efficiency)
            .map_err(|e| RankineError::invalid("turbine efficiency", e))?;

        Ok(Self {
            boiler_pressure,
            condenser_pressure,
            turbine_inlet_temperature,
            pump_efficiency,
            turbine_efficiency,
        })
    }

    /// Boiler pressure, used at points 2 and 3.
    #[must_use]
    pub fn boiler_pressure(&self) -> Pressure {
        *self.boiler_pressure.as_ref()
    }

    /// Condenser pressure, used at points 1 and 4.
    #[must_use]
    pub fn condenser_pressure(&self) -> Pressure {
        *self.condenser_pressure.as_ref()
    }

    /// Turbine-inlet (boiler exit) temperature.
    #[must_use]
    pub fn turbine_inlet_temperature(&self) -> ThermodynamicTemperature {
        self.turbine_inlet_temperature
    }

    /// Pump isentropic efficiency, `0 < η ≤ 1`.
    #[must_use]
    pub fn pump_efficiency(&self) -> Ratio {
        *self.pump_efficiency.as_ref()
    }

    /// Turbine isentropic efficiency, `0 < η ≤ 1`.
    #[must_use]
    pub fn turbine_efficiency(&self) -> Ratio {
        *self.turbine_efficiency.as_ref()
    }

    /// Returns the pressure for a boiler- or condenser-side point.
    #[must_use]
    pub fn pressure_at(&self, level: PressureLevel) -> Pressure {
        match level {
            PressureLevel::Boiler => self.boiler_pressure(),
            PressureLevel::Condenser => self.condenser_pressure(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{pressure::bar, ratio::ratio, thermodynamic_temperature::degree_celsius};

    use crate::support::constraint::ConstraintError;

    fn build(
        p_boiler: f64,
        p_condenser: f64,
        t_inlet: f64,
        eta_pump: f64,
        eta_turbine: f64,
    ) -> Result<CycleParameters, RankineError> {
        CycleParameters::new(
            Pressure::new::<bar>(p_boiler),
            Pressure::new::<bar>(p_condenser),
            ThermodynamicTemperature::new::<degree_celsius>(t_inlet),
            Ratio::new::<ratio>(eta_pump),
            Ratio::new::<ratio>(eta_turbine),
        )
    }

    #[test]
    fn accepts_typical_cycle() {
        let params = build(80.0, 0.08, 450.0, 0.85, 0.85).unwrap();
        assert!(params.boiler_pressure() > params.condenser_pressure());
        assert_eq!(
            params.pressure_at(PressureLevel::Condenser),
            params.condenser_pressure()
        );
    }

    #[test]
    fn rejects_condenser_at_or_above_boiler_pressure() {
        assert!(matches!(
            build(10.0, 10.0, 450.0, 0.85, 0.85),
            Err(RankineError::PressureOrder { .. })
        ));
        assert!(matches!(
            build(10.0, 20.0, 450.0, 0.85, 0.85),
            Err(RankineError::PressureOrder { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_pressures() {
        assert!(matches!(
            build(80.0, 0.0, 450.0, 0.85, 0.85),
            Err(RankineError::InvalidParameter {
                parameter: "condenser pressure",
                source: ConstraintError::Zero,
            })
        ));
        assert!(matches!(
            build(-1.0, 0.08, 450.0, 0.85, 0.85),
            Err(RankineError::InvalidParameter {
                parameter: "boiler pressure",
                source: ConstraintError::Negative,
            })
        ));
    }

    #[test]
    fn rejects_out_of_range_efficiencies() {
        assert!(matches!(
            build(80.0, 0.08, 450.0, 0.0, 0.85),
            Err(RankineError::InvalidParameter {
                parameter: "pump efficiency",
                source: ConstraintError::BelowMinimum,
            })
        ));
        assert!(matches!(
            build(80.0, 0.08, 450.0, 0.85, 1.05),
            Err(RankineError::InvalidParameter {
                parameter: "turbine efficiency",
                source: ConstraintError::AboveMaximum,
            })
        ));
    }

    #[test]
    fn rejects_non_physical_temperature() {
        assert!(matches!(
            build(80.0, 0.08, -300.0, 0.85, 0.85),
            Err(RankineError::InvalidTemperature { .. })
        ));
        assert!(matches!(
            build(80.0, 0.08, f64::INFINITY, 0.85, 0.85),
            Err(RankineError::InvalidTemperature { .. })
        ));
    }
}
