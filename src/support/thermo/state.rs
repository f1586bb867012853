use uom::si::{
    f64::{MassDensity, SpecificVolume, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    specific_volume::cubic_meter_per_kilogram,
};

/// The thermodynamic state of a fluid.
///
/// Temperature and density fix the state of a pure fluid; every other
/// property is evaluated from them by a capability-based model.
///
/// The `Fluid` type parameter is usually a marker such as
/// [`Water`](crate::support::thermo::fluid::Water), but may carry
/// state-defining data for models that need it.
///
/// # Example
///
/// ```
/// use twine_rankine::support::thermo::{State, fluid::Water};
/// use uom::si::{
///     f64::{MassDensity, ThermodynamicTemperature},
///     mass_density::kilogram_per_cubic_meter,
///     specific_volume::cubic_meter_per_kilogram,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let state = State::new(
///     ThermodynamicTemperature::new::<degree_celsius>(41.5),
///     MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
///     Water,
/// );
/// let v = state.specific_volume().get::<cubic_meter_per_kilogram>();
/// assert!((v - 0.001).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<Fluid> {
    pub temperature: ThermodynamicTemperature,
    pub density: MassDensity,
    pub fluid: Fluid,
}

impl<Fluid> State<Fluid> {
    /// Creates a new state with the given temperature, density, and fluid.
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, density: MassDensity, fluid: Fluid) -> Self {
        Self {
            temperature,
            density,
            fluid,
        }
    }

    /// Returns the specific volume, the reciprocal of density.
    #[must_use]
    pub fn specific_volume(&self) -> SpecificVolume {
        SpecificVolume::new::<cubic_meter_per_kilogram>(
            1.0 / self.density.get::<kilogram_per_cubic_meter>(),
        )
    }
}
