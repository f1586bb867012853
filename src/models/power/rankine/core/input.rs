use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    pressure::pascal,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use super::{CycleParameters, RankineError};

/// Pump and turbine isentropic efficiency used when none is given.
pub const DEFAULT_EFFICIENCY: f64 = 0.85;

const PASCAL_PER_BAR: f64 = 1e5;
const KELVIN_OFFSET: f64 = 273.15;

/// Cycle operating point in caller units: pressures in bar, temperature in °C.
///
/// This is the configuration surface of the solver. Converting it into
/// [`CycleParameters`] applies the fixed conversions `bar × 1e5 → Pa` and
/// `°C + 273.15 → K` and then validates the result.
///
/// With the `serde` feature enabled, it deserializes from the JSON shape
/// existing callers send, with efficiencies optional:
///
/// ```json
/// { "P_boiler": 80, "P_condenser": 0.08, "T_turbine_inlet": 450 }
/// ```
///
/// # Example
///
/// ```
/// use twine_rankine::{CycleInput, CycleParameters};
/// use uom::si::pressure::pascal;
///
/// let input = CycleInput::new(80.0, 0.08, 450.0).with_turbine_efficiency(0.9);
/// let params = CycleParameters::try_from(input).unwrap();
/// assert_eq!(params.condenser_pressure().get::<pascal>(), 8000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleInput {
    /// Boiler pressure, bar.
    #[cfg_attr(feature = "serde", serde(rename = "P_boiler"))]
    pub boiler_pressure_bar: f64,

    /// Condenser pressure, bar.
    #[cfg_attr(feature = "serde", serde(rename = "P_condenser"))]
    pub condenser_pressure_bar: f64,

    /// Turbine-inlet temperature, °C.
    #[cfg_attr(feature = "serde", serde(rename = "T_turbine_inlet"))]
    pub turbine_inlet_temperature_celsius: f64,

    /// Pump isentropic efficiency, `0 < η ≤ 1`.
    #[cfg_attr(feature = "serde", serde(default = "default_efficiency"))]
    pub pump_efficiency: f64,

    /// Turbine isentropic efficiency, `0 < η ≤ 1`.
    #[cfg_attr(feature = "serde", serde(default = "default_efficiency"))]
    pub turbine_efficiency: f64,
}

#[cfg(feature = "serde")]
fn default_efficiency() -> f64 {
    DEFAULT_EFFICIENCY
}

impl CycleInput {
    /// Creates an input with both efficiencies at [`DEFAULT_EFFICIENCY`].
    #[must_use]
    pub fn new(
        boiler_pressure_bar: f64,
        condenser_pressure_bar: f64,
        turbine_inlet_temperature_celsius: f64,
    ) -> Self {
        Self {
            boiler_pressure_bar,
            condenser_pressure_bar,
            turbine_inlet_temperature_celsius,
            pump_efficiency: DEFAULT_EFFICIENCY,
            turbine_efficiency: DEFAULT_EFFICIENCY,
        }
    }

    #[must_use]
    pub fn with_pump_efficiency(self, pump_efficiency: f64) -> Self {
        Self {
            pump_efficiency,
            ..self
        }
    }

    #[must_use]
    pub fn with_turbine_efficiency(self, turbine_efficiency: f64) -> Self {
        Self {
            turbine_efficiency,
            ..self
        }
    }
}

impl TryFrom<CycleInput> for CycleParameters {
    type Error = RankineError;

    fn try_from(input: CycleInput) -> Result<Self, Self::Error> {
        CycleParameters::new(
            Pressure::new::<pascal>(input.boiler_pressure_bar * PASCAL_PER_BAR),
            Pressure::new::<pascal>(input.condenser_pressure_bar * PASCAL_PER_BAR),
            ThermodynamicTemperature::new::<kelvin>(
                input.turbine_inlet_temperature_celsius + KELVIN_OFFSET,
            ),
            Ratio::new::<ratio>(input.pump_efficiency),
            Ratio::new::<ratio>(input.turbine_efficiency),
        )
    }
}

impl TryFrom<&CycleInput> for CycleParameters {
    type Error = RankineError;

    fn try_from(input: &CycleInput) -> Result<Self, Self::Error> {
        CycleParameters::try_from(*input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn converts_bar_and_celsius_exactly() {
        let input = CycleInput::new(100.0, 0.1, 500.0)
            .with_pump_efficiency(1.0)
            .with_turbine_efficiency(1.0);
        let params = CycleParameters::try_from(input).unwrap();

        assert_eq!(params.boiler_pressure().get::<pascal>(), 1.0e7);
        assert_eq!(params.condenser_pressure().get::<pascal>(), 1.0e4);
        assert_eq!(params.turbine_inlet_temperature().get::<kelvin>(), 773.15);
        assert_eq!(params.pump_efficiency().get::<ratio>(), 1.0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn efficiencies_default() {
        let input = CycleInput::new(80.0, 0.08, 450.0);
        assert_eq!(input.pump_efficiency, 0.85);
        assert_eq!(input.turbine_efficiency, 0.85);
    }

    #[test]
    fn invalid_input_fails_conversion() {
        let input = CycleInput::new(0.08, 80.0, 450.0);
        assert!(matches!(
            CycleParameters::try_from(&input),
            Err(RankineError::PressureOrder { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    #[allow(clippy::float_cmp)]
    fn deserializes_legacy_json_shape() {
        let input: CycleInput = serde_json::from_str(
            r#"{ "P_boiler": 80, "P_condenser": 0.08, "T_turbine_inlet": 450, "turbine_efficiency": 0.9 }"#,
        )
        .unwrap();

        assert_eq!(input, CycleInput::new(80.0, 0.08, 450.0).with_turbine_efficiency(0.9));
        assert_eq!(input.pump_efficiency, DEFAULT_EFFICIENCY);
    }
}
