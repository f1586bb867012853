//! Core Rankine cycle solver.

use tracing::{debug, trace};
use uom::si::{
    available_energy::joule_per_kilogram, f64::Pressure, pressure::pascal, ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    thermo::{State, VaporQuality},
    units::SpecificEnthalpy,
};

use super::{
    CycleParameters, CyclePoint, CycleResult, RankineError, ThermodynamicState,
    traits::RankineThermoModel,
};

/// Solves the four cycle states for the given parameters.
///
/// Points are resolved in flow order and the first failure stops the solve:
///
/// 1. Saturated liquid (`Q = 0`) at the condenser pressure. The turbine-inlet
///    temperature must then exceed this saturation temperature.
/// 2. Pump exit. Reversible pump work is approximated as `v1·ΔP`
///    (incompressible liquid), and `h2 = h1 + (h2s − h1) / η_pump`.
/// 3. Boiler exit at the boiler pressure and turbine-inlet temperature.
/// 4. Turbine exit. `h4s` is the isentropic expansion to the condenser
///    pressure, and `h4 = h3 − η_turbine·(h3 − h4s)`.
///
/// # Errors
///
/// Returns [`RankineError::TurbineInletBelowSaturation`] if the turbine inlet
/// is not above the condenser saturation temperature, or
/// [`RankineError::PropertyLookup`] for the first thermo model failure.
pub(crate) fn solve<Fluid, Thermo>(
    params: &CycleParameters,
    fluid: &Fluid,
    thermo: &Thermo,
) -> Result<CycleResult, RankineError>
where
    Fluid: Clone,
    Thermo: RankineThermoModel<Fluid>,
{
    let condenser_exit = condenser_exit(params, fluid, thermo)?;

    if params.turbine_inlet_temperature() <= condenser_exit.temperature {
        return Err(RankineError::TurbineInletBelowSaturation {
            turbine_inlet: params.turbine_inlet_temperature(),
            saturation: condenser_exit.temperature,
        });
    }

    let pump_exit = pump_exit(params, &condenser_exit, fluid, thermo)?;
    let boiler_exit = boiler_exit(params, fluid, thermo)?;
    let turbine_exit = turbine_exit(params, &boiler_exit, fluid, thermo)?;

    Ok(CycleResult::new([
        condenser_exit,
        pump_exit,
        boiler_exit,
        turbine_exit,
    ]))
}

/// Point 1: saturated liquid leaving the condenser.
fn condenser_exit<Fluid, Thermo>(
    params: &CycleParameters,
    fluid: &Fluid,
    thermo: &Thermo,
) -> Result<ThermodynamicState, RankineError>
where
    Fluid: Clone,
    Thermo: RankineThermoModel<Fluid>,
{
    let point = CyclePoint::CondenserExit;
    let pressure = params.condenser_pressure();

    trace!(%point, "state_from(pressure, quality)");
    let state = thermo
        .state_from((fluid.clone(), pressure, VaporQuality::saturated_liquid()))
        .map_err(|err| RankineError::lookup_failed(point, "state_from(pressure, quality)", err))?;

    let enthalpy = thermo
        .enthalpy(&state)
        .map_err(|err| RankineError::lookup_failed(point, "enthalpy", err))?;

    finish(thermo, point, pressure, &state, enthalpy)
}

/// Point 2: compressed liquid leaving the pump.
fn pump_exit<Fluid, Thermo>(
    params: &CycleParameters,
    inlet: &ThermodynamicState,
    fluid: &Fluid,
    thermo: &Thermo,
) -> Result<ThermodynamicState, RankineError>
where
    Fluid: Clone,
    Thermo: RankineThermoModel<Fluid>,
{
    let point = CyclePoint::PumpExit;
    let pressure = params.boiler_pressure();
    let eta = params.pump_efficiency().get::<ratio>();

    let h_ideal = inlet.enthalpy + inlet.specific_volume * (pressure - inlet.pressure);
    let enthalpy = inlet.enthalpy + (h_ideal - inlet.enthalpy) / eta;

    trace!(%point, "state_from(pressure, enthalpy)");
    let state = thermo
        .state_from((fluid.clone(), pressure, enthalpy))
        .map_err(|err| RankineError::lookup_failed(point, "state_from(pressure, enthalpy)", err))?;

    finish(thermo, point, pressure, &state, enthalpy)
}

/// Point 3: steam leaving the boiler at the turbine-inlet temperature.
fn boiler_exit<Fluid, Thermo>(
    params: &CycleParameters,
    fluid: &Fluid,
    thermo: &Thermo,
) -> Result<ThermodynamicState, RankineError>
where
    Fluid: Clone,
    Thermo: RankineThermoModel<Fluid>,
{
    let point = CyclePoint::BoilerExit;
    let pressure = params.boiler_pressure();
    let temperature = params.turbine_inlet_temperature();

    trace!(%point, "state_from(temperature, pressure)");
    let state = thermo
        .state_from((fluid.clone(), temperature, pressure))
        .map_err(|err| {
            RankineError::lookup_failed(point, "state_from(temperature, pressure)", err)
        })?;

    let enthalpy = thermo
        .enthalpy(&state)
        .map_err(|err| RankineError::lookup_failed(point, "enthalpy", err))?;

    // The inlet temperature is a given, not a model output.
    let state = State { temperature, ..state };
    finish(thermo, point, pressure, &state, enthalpy)
}

/// Point 4: wet or superheated steam leaving the turbine.
fn turbine_exit<Fluid, Thermo>(
    params: &CycleParameters,
    inlet: &ThermodynamicState,
    fluid: &Fluid,
    thermo: &Thermo,
) -> Result<ThermodynamicState, RankineError>
where
    Fluid: Clone,
    Thermo: RankineThermoModel<Fluid>,
{
    let point = CyclePoint::TurbineExit;
    let pressure = params.condenser_pressure();
    let eta = params.turbine_efficiency().get::<ratio>();

    trace!(%point, "state_from(pressure, entropy)");
    let isentropic = thermo
        .state_from((fluid.clone(), pressure, inlet.entropy))
        .map_err(|err| RankineError::lookup_failed(point, "state_from(pressure, entropy)", err))?;
    let h_ideal = thermo
        .enthalpy(&isentropic)
        .map_err(|err| RankineError::lookup_failed(point, "isentropic enthalpy", err))?;

    let enthalpy = inlet.enthalpy - (inlet.enthalpy - h_ideal) * eta;

    trace!(%point, "state_from(pressure, enthalpy)");
    let state = thermo
        .state_from((fluid.clone(), pressure, enthalpy))
        .map_err(|err| RankineError::lookup_failed(point, "state_from(pressure, enthalpy)", err))?;

    finish(thermo, point, pressure, &state, enthalpy)
}

/// Looks up entropy for a resolved state and assembles the point record.
fn finish<Fluid, Thermo>(
    thermo: &Thermo,
    point: CyclePoint,
    pressure: Pressure,
    state: &State<Fluid>,
    enthalpy: SpecificEnthalpy,
) -> Result<ThermodynamicState, RankineError>
where
    Thermo: RankineThermoModel<Fluid>,
{
    let entropy = thermo
        .entropy(state)
        .map_err(|err| RankineError::lookup_failed(point, "entropy", err))?;

    debug!(
        %point,
        temperature_k = state.temperature.get::<kelvin>(),
        pressure_pa = pressure.get::<pascal>(),
        enthalpy_j_per_kg = enthalpy.get::<joule_per_kilogram>(),
        "resolved cycle point"
    );

    Ok(ThermodynamicState {
        point,
        temperature: state.temperature,
        pressure,
        enthalpy,
        entropy,
        specific_volume: state.specific_volume(),
    })
}
