//! Results types for Rankine cycle solving.

use uom::si::f64::{Pressure, SpecificVolume, ThermodynamicTemperature};

use crate::support::units::{SpecificEnthalpy, SpecificEntropy};

use super::CyclePoint;

/// Fully resolved thermodynamic state at one cycle point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ThermodynamicState {
    /// Cycle point this state belongs to.
    pub point: CyclePoint,

    /// Temperature, K.
    pub temperature: ThermodynamicTemperature,

    /// Pressure, Pa (boiler or condenser pressure, per the point).
    pub pressure: Pressure,

    /// Specific enthalpy, J/kg.
    pub enthalpy: SpecificEnthalpy,

    /// Specific entropy, J/(kg·K).
    pub entropy: SpecificEntropy,

    /// Specific volume, m³/kg.
    pub specific_volume: SpecificVolume,
}

/// The four cycle states, in flow order.
///
/// The states are fixed at construction: index `i` always holds
/// [`CyclePoint::ALL[i]`](CyclePoint::ALL), and each state's pressure is the
/// boiler or condenser pressure according to its point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CycleResult {
    states: [ThermodynamicState; 4],
}

impl CycleResult {
    pub(super) fn new(states: [ThermodynamicState; 4]) -> Self {
        debug_assert!(
            states
                .iter()
                .zip(CyclePoint::ALL)
                .all(|(state, point)| state.point == point),
            "cycle states must be in flow order"
        );
        Self { states }
    }

    /// Returns all four states in flow order.
    #[must_use]
    pub fn states(&self) -> &[ThermodynamicState; 4] {
        &self.states
    }

    /// Returns the state at `point`.
    #[must_use]
    pub fn state(&self, point: CyclePoint) -> &ThermodynamicState {
        &self.states[usize::from(point.index() - 1)]
    }

    /// Returns an iterator over the states in flow order.
    pub fn iter(&self) -> std::slice::Iter<'_, ThermodynamicState> {
        self.states.iter()
    }
}

impl IntoIterator for CycleResult {
    type Item = ThermodynamicState;
    type IntoIter = std::array::IntoIter<ThermodynamicState, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.into_iter()
    }
}

impl<'a> IntoIterator for &'a CycleResult {
    type Item = &'a ThermodynamicState;
    type IntoIter = std::slice::Iter<'a, ThermodynamicState>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
