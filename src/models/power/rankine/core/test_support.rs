use std::cell::RefCell;

use uom::si::{
    available_energy::{joule_per_kilogram, kilojoule_per_kilogram},
    f64::{MassDensity, Pressure, SpecificVolume, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::{kilopascal, pascal},
    specific_heat_capacity::joule_per_kilogram_kelvin,
    specific_volume::cubic_meter_per_kilogram,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    thermo::{
        PropertyError, State, VaporQuality,
        capability::{HasEnthalpy, HasEntropy, StateFrom, ThermoModel},
    },
    units::{SpecificEnthalpy, SpecificEntropy},
};

use super::{CyclePoint, CycleResult, ThermodynamicState};

/// Gas constant of water vapor, J/kg·K.
const R: f64 = 461.5;
/// Constant-pressure heat capacity, J/kg·K.
const CP: f64 = 2000.0;
/// Latent heat used by the saturation curve, J/kg.
const H_FG: f64 = 2.257e6;
/// Saturated liquid density, kg/m³.
const RHO_LIQUID: f64 = 1000.0;
/// Reference state for enthalpy and entropy.
const T_REF: f64 = 273.16;
const P_REF: f64 = 611.657;
/// Normal boiling point used to anchor the saturation curve.
const T_BOIL: f64 = 373.15;
const P_BOIL: f64 = 101_325.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct TestFluid;

/// A property lookup as seen by the model, in raw SI values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Lookup {
    PressureQuality { pressure: f64, quality: f64 },
    PressureEnthalpy { pressure: f64, enthalpy: f64 },
    TemperaturePressure { temperature: f64, pressure: f64 },
    PressureEntropy { pressure: f64, entropy: f64 },
}

/// A dependent-property call on a resolved state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PropertyCall {
    Enthalpy,
    Entropy,
}

/// Deterministic thermo model that records every state lookup.
///
/// Properties follow a calorically perfect gas (`h = cp·(T − T_ref)`,
/// `s = cp·ln(T/T_ref) − R·ln(P/P_ref)` with `P = ρRT`), except that
/// quality lookups land on a Clausius–Clapeyron saturation curve with a
/// fixed liquid density. The numbers are not water, but every lookup is
/// self-consistent, which is all the solver's control flow needs.
#[derive(Debug, Default)]
pub(crate) struct TestThermoModel {
    lookups: RefCell<Vec<Lookup>>,
    fail_at: Option<usize>,
    property_calls: RefCell<Vec<PropertyCall>>,
    fail_property: Option<(PropertyCall, usize)>,
}

impl TestThermoModel {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns a model whose `n`th state lookup (0-based) fails.
    pub(crate) fn failing_at(n: usize) -> Self {
        Self {
            fail_at: Some(n),
            ..Self::default()
        }
    }

    /// Returns a model whose `n`th call (0-based) of the given property fails.
    pub(crate) fn failing_property(call: PropertyCall, n: usize) -> Self {
        Self {
            fail_property: Some((call, n)),
            ..Self::default()
        }
    }

    /// State lookups issued so far, in order.
    pub(crate) fn lookups(&self) -> Vec<Lookup> {
        self.lookups.borrow().clone()
    }

    /// Saturation temperature at `pressure` from the Clausius–Clapeyron relation.
    pub(crate) fn saturation_temperature(pressure: Pressure) -> ThermodynamicTemperature {
        let ln_p = (pressure.get::<pascal>() / P_BOIL).ln();
        ThermodynamicTemperature::new::<kelvin>(1.0 / (1.0 / T_BOIL - R / H_FG * ln_p))
    }

    fn record(&self, lookup: Lookup) -> Result<(), PropertyError> {
        let mut lookups = self.lookups.borrow_mut();
        lookups.push(lookup);
        if self.fail_at == Some(lookups.len() - 1) {
            return Err(PropertyError::OutOfDomain {
                context: format!("test model refused {lookup:?}"),
            });
        }
        Ok(())
    }

    fn record_property(&self, call: PropertyCall) -> Result<(), PropertyError> {
        let mut calls = self.property_calls.borrow_mut();
        let n = calls.iter().filter(|&&c| c == call).count();
        calls.push(call);
        if self.fail_property == Some((call, n)) {
            return Err(PropertyError::Calculation {
                context: format!("test model refused {call:?} call {n}"),
            });
        }
        Ok(())
    }
}

fn gas_state(t: f64, p: f64) -> State<TestFluid> {
    State::new(
        ThermodynamicTemperature::new::<kelvin>(t),
        MassDensity::new::<kilogram_per_cubic_meter>(p / (R * t)),
        TestFluid,
    )
}

impl ThermoModel for TestThermoModel {
    type Fluid = TestFluid;
}

impl HasEnthalpy for TestThermoModel {
    fn enthalpy(&self, state: &State<Self::Fluid>) -> Result<SpecificEnthalpy, PropertyError> {
        self.record_property(PropertyCall::Enthalpy)?;
        let t = state.temperature.get::<kelvin>();
        Ok(SpecificEnthalpy::new::<joule_per_kilogram>(CP * (t - T_REF)))
    }
}

impl HasEntropy for TestThermoModel {
    fn entropy(&self, state: &State<Self::Fluid>) -> Result<SpecificEntropy, PropertyError> {
        self.record_property(PropertyCall::Entropy)?;
        let t = state.temperature.get::<kelvin>();
        let p = state.density.get::<kilogram_per_cubic_meter>() * R * t;
        Ok(SpecificEntropy::new::<joule_per_kilogram_kelvin>(
            CP * (t / T_REF).ln() - R * (p / P_REF).ln(),
        ))
    }
}

impl StateFrom<(TestFluid, Pressure, VaporQuality)> for TestThermoModel {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, pressure, quality): (TestFluid, Pressure, VaporQuality),
    ) -> Result<State<TestFluid>, Self::Error> {
        let p = pressure.get::<pascal>();
        self.record(Lookup::PressureQuality {
            pressure: p,
            quality: quality.fraction(),
        })?;

        let temperature = Self::saturation_temperature(pressure);
        let v_liquid = 1.0 / RHO_LIQUID;
        let v_vapor = R * temperature.get::<kelvin>() / p;
        let v = v_liquid + quality.fraction() * (v_vapor - v_liquid);
        Ok(State::new(
            temperature,
            MassDensity::new::<kilogram_per_cubic_meter>(1.0 / v),
            fluid,
        ))
    }
}

impl StateFrom<(TestFluid, Pressure, SpecificEnthalpy)> for TestThermoModel {
    type Error = PropertyError;

    fn state_from(
        &self,
        (_, pressure, enthalpy): (TestFluid, Pressure, SpecificEnthalpy),
    ) -> Result<State<TestFluid>, Self::Error> {
        let p = pressure.get::<pascal>();
        let h = enthalpy.get::<joule_per_kilogram>();
        self.record(Lookup::PressureEnthalpy {
            pressure: p,
            enthalpy: h,
        })?;
        Ok(gas_state(T_REF + h / CP, p))
    }
}

impl StateFrom<(TestFluid, ThermodynamicTemperature, Pressure)> for TestThermoModel {
    type Error = PropertyError;

    fn state_from(
        &self,
        (_, temperature, pressure): (TestFluid, ThermodynamicTemperature, Pressure),
    ) -> Result<State<TestFluid>, Self::Error> {
        let t = temperature.get::<kelvin>();
        let p = pressure.get::<pascal>();
        self.record(Lookup::TemperaturePressure {
            temperature: t,
            pressure: p,
        })?;
        Ok(gas_state(t, p))
    }
}

impl StateFrom<(TestFluid, Pressure, SpecificEntropy)> for TestThermoModel {
    type Error = PropertyError;

    fn state_from(
        &self,
        (_, pressure, entropy): (TestFluid, Pressure, SpecificEntropy),
    ) -> Result<State<TestFluid>, Self::Error> {
        let p = pressure.get::<pascal>();
        let s = entropy.get::<joule_per_kilogram_kelvin>();
        self.record(Lookup::PressureEntropy {
            pressure: p,
            entropy: s,
        })?;
        let t = T_REF * ((s + R * (p / P_REF).ln()) / CP).exp();
        Ok(gas_state(t, p))
    }
}

/// Builds a result with the given enthalpies (kJ/kg) and fixed, plausible
/// values for every other property.
pub(crate) fn result_with_enthalpies(h_kj_per_kg: [f64; 4]) -> CycleResult {
    let boiler = Pressure::new::<kilopascal>(8000.0);
    let condenser = Pressure::new::<kilopascal>(8.0);
    let rows = [
        (314.66, condenser, 592.6, 0.001_008_4),
        (316.0, boiler, 600.0, 0.001_005_6),
        (723.15, boiler, 6_555.9, 0.038_17),
        (314.66, condenser, 7_330.0, 15.4),
    ];

    let states = std::array::from_fn(|i| {
        let (t, pressure, s, v) = rows[i];
        ThermodynamicState {
            point: CyclePoint::ALL[i],
            temperature: ThermodynamicTemperature::new::<kelvin>(t),
            pressure,
            enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(h_kj_per_kg[i]),
            entropy: SpecificEntropy::new::<joule_per_kilogram_kelvin>(s),
            specific_volume: SpecificVolume::new::<cubic_meter_per_kilogram>(v),
        }
    });
    CycleResult::new(states)
}
