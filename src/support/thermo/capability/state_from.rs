use crate::support::thermo::State;

use super::ThermoModel;

/// Capability for constructing a [`State`] from a typed input.
///
/// `StateFrom<Input>` expresses, at compile time, which pairs of independent
/// properties a model can resolve a state from. A model that does not
/// implement `StateFrom<Input>` simply does not support that input, so there
/// are no runtime "unsupported pair" errors.
///
/// ## Input patterns used by the cycle solver
///
/// - `(Fluid, Pressure, VaporQuality)`: a point on the saturation dome
/// - `(Fluid, Pressure, SpecificEnthalpy)`: outlet of a real pump or turbine
/// - `(Fluid, ThermodynamicTemperature, Pressure)`: superheated turbine inlet
/// - `(Fluid, Pressure, SpecificEntropy)`: end of an isentropic process
///
/// ## Default fluid convenience
///
/// If a model implements `StateFrom<(Fluid, A, B)>` and `Fluid: Default`, it
/// also implements `StateFrom<(A, B)>` by filling in `Fluid::default()`. This
/// allows calls like `thermo.state_from((p, h))` for marker fluids such as
/// [`Water`](crate::support::thermo::fluid::Water).
pub trait StateFrom<Input>: ThermoModel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a thermodynamic state from the provided input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be created from `input`.
    fn state_from(&self, input: Input) -> Result<State<Self::Fluid>, Self::Error>;
}

/// Default-fluid convenience impl.
impl<M, A, B> StateFrom<(A, B)> for M
where
    M: ThermoModel + StateFrom<(<M as ThermoModel>::Fluid, A, B)>,
    <M as ThermoModel>::Fluid: Default,
{
    type Error = <M as StateFrom<(<M as ThermoModel>::Fluid, A, B)>>::Error;

    fn state_from(&self, (a, b): (A, B)) -> Result<State<Self::Fluid>, Self::Error> {
        self.state_from((<M as ThermoModel>::Fluid::default(), a, b))
    }
}
