//! Simple (non-reheat, non-regenerative) Rankine power cycle.
//!
//! [`RankineCycle`] pairs a thermo model with a working fluid and exposes the
//! cycle solver both as inherent methods and as a [`twine_core::Model`] whose
//! input is a [`CycleInput`] in bar and °C.
//!
//! # Example
//!
//! ```ignore
//! use twine_rankine::{CycleInput, CyclePoint, RankineCycle};
//! use twine_rankine::support::thermo::{fluid::Water, model::CoolProp};
//!
//! let cycle = RankineCycle::new(CoolProp::<Water>::new()?);
//! let result = cycle.solve_input(&CycleInput::new(80.0, 0.08, 450.0))?;
//! let turbine_exit = result.state(CyclePoint::TurbineExit);
//! ```

mod core;

pub use self::core::{
    CycleInput, CycleParameters, CyclePoint, CycleResult, DEFAULT_EFFICIENCY, Performance,
    PressureLevel, RankineError, RankineThermoModel, ThermodynamicState,
};

use tracing::debug;
use twine_core::Model;

use self::core::solve;
use crate::support::thermo::capability::ThermoModel;

/// A Rankine cycle solver bound to a thermo model and working fluid.
#[derive(Debug, Clone)]
pub struct RankineCycle<Thermo: ThermoModel> {
    thermo: Thermo,
    fluid: Thermo::Fluid,
}

impl<Thermo> RankineCycle<Thermo>
where
    Thermo: ThermoModel,
    Thermo::Fluid: Clone,
{
    /// Creates a solver using the model's default fluid value.
    pub fn new(thermo: Thermo) -> Self
    where
        Thermo::Fluid: Default,
    {
        Self::with_fluid(thermo, Thermo::Fluid::default())
    }

    /// Creates a solver with an explicit fluid value.
    pub fn with_fluid(thermo: Thermo, fluid: Thermo::Fluid) -> Self {
        Self { thermo, fluid }
    }

    /// Returns the underlying thermo model.
    pub fn thermo(&self) -> &Thermo {
        &self.thermo
    }
}

impl<Thermo, Fluid> RankineCycle<Thermo>
where
    Thermo: ThermoModel<Fluid = Fluid> + RankineThermoModel<Fluid>,
    Fluid: Clone,
{
    /// Solves the cycle for validated SI parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RankineError`] if the turbine inlet is not superheated relative
    /// to the condenser or if any property lookup fails.
    pub fn solve(&self, params: &CycleParameters) -> Result<CycleResult, RankineError> {
        solve(params, &self.fluid, &self.thermo).inspect_err(|err| {
            debug!(error = %err, "rankine cycle solve failed");
        })
    }

    /// Converts caller units, validates, and solves the cycle.
    ///
    /// # Errors
    ///
    /// Returns [`RankineError`] if the input is invalid or the solve fails.
    pub fn solve_input(&self, input: &CycleInput) -> Result<CycleResult, RankineError> {
        let params = CycleParameters::try_from(input).inspect_err(|err| {
            debug!(error = %err, ?input, "rejected rankine cycle input");
        })?;
        self.solve(&params)
    }
}

impl<Thermo, Fluid> Model for RankineCycle<Thermo>
where
    Thermo: ThermoModel<Fluid = Fluid> + RankineThermoModel<Fluid>,
    Fluid: Clone,
{
    type Input = CycleInput;
    type Output = CycleResult;
    type Error = RankineError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.solve_input(input)
    }
}
