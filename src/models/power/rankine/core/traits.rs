//! Internal traits for Rankine cycle solving.

use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::{
    thermo::{
        VaporQuality,
        capability::{HasEnthalpy, HasEntropy, StateFrom, ThermoModel},
    },
    units::{SpecificEnthalpy, SpecificEntropy},
};

/// Required thermo model bounds for the Rankine cycle solver.
///
/// This is the solver's entire view of the property backend: four ways to
/// resolve a state from two independent properties, plus enthalpy and
/// entropy of a resolved state. Temperature and specific volume come from
/// the state itself.
///
/// | Lookup                         | Used for                              |
/// |--------------------------------|---------------------------------------|
/// | (pressure, vapor quality)      | saturated liquid at the condenser     |
/// | (pressure, enthalpy)           | real pump and turbine outlets         |
/// | (temperature, pressure)        | turbine inlet                         |
/// | (pressure, entropy)            | isentropic turbine outlet             |
pub trait RankineThermoModel<Fluid>:
    ThermoModel<Fluid = Fluid>
    + HasEnthalpy
    + HasEntropy
    + StateFrom<(Fluid, Pressure, VaporQuality)>
    + StateFrom<(Fluid, Pressure, SpecificEnthalpy)>
    + StateFrom<(Fluid, ThermodynamicTemperature, Pressure)>
    + StateFrom<(Fluid, Pressure, SpecificEntropy)>
{
}

impl<Fluid, T> RankineThermoModel<Fluid> for T where
    T: ThermoModel<Fluid = Fluid>
        + HasEnthalpy
        + HasEntropy
        + StateFrom<(Fluid, Pressure, VaporQuality)>
        + StateFrom<(Fluid, Pressure, SpecificEnthalpy)>
        + StateFrom<(Fluid, ThermodynamicTemperature, Pressure)>
        + StateFrom<(Fluid, Pressure, SpecificEntropy)>
{
}
