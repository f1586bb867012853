//! Projections of a solved cycle onto property planes.
//!
//! Each series lists the four states in flow order and repeats point 1 at
//! the end so the cycle draws as a closed loop.

use uom::si::f64::{Pressure, SpecificVolume, ThermodynamicTemperature};

use crate::support::units::SpecificEntropy;

use super::{CycleResult, ThermodynamicState};

impl CycleResult {
    /// Returns the closed (entropy, temperature) series.
    #[must_use]
    pub fn ts_diagram(&self) -> [(SpecificEntropy, ThermodynamicTemperature); 5] {
        self.closed_series(|state| (state.entropy, state.temperature))
    }

    /// Returns the closed (specific volume, pressure) series.
    #[must_use]
    pub fn pv_diagram(&self) -> [(SpecificVolume, Pressure); 5] {
        self.closed_series(|state| (state.specific_volume, state.pressure))
    }

    fn closed_series<T>(&self, project: impl Fn(&ThermodynamicState) -> T) -> [T; 5] {
        let states = self.states();
        std::array::from_fn(|i| project(&states[i % states.len()]))
    }
}
