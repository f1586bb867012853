use uom::si::{available_energy::joule_per_kilogram, f64::Ratio, ratio::ratio};

use crate::support::units::SpecificEnthalpy;

use super::{CyclePoint, CycleResult};

/// Mass-specific energy balance of a solved cycle.
///
/// Work and heat terms are per unit mass of working fluid and are positive
/// in their conventional direction (work into the pump, work out of the
/// turbine, heat into the boiler, heat out of the condenser).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Performance {
    /// `h2 − h1`
    pub pump_work: SpecificEnthalpy,
    /// `h3 − h4`
    pub turbine_work: SpecificEnthalpy,
    /// `h3 − h2`
    pub heat_added: SpecificEnthalpy,
    /// `h4 − h1`
    pub heat_rejected: SpecificEnthalpy,
    /// `w_turbine − w_pump`
    pub net_work: SpecificEnthalpy,
    /// `w_net / q_in`
    pub thermal_efficiency: Ratio,
    /// `w_pump / w_turbine`
    pub back_work_ratio: Ratio,
}

impl CycleResult {
    /// Computes the cycle energy balance from the four state enthalpies.
    ///
    /// No property lookups are performed.
    #[must_use]
    pub fn performance(&self) -> Performance {
        let h = |point| self.state(point).enthalpy;
        let h1 = h(CyclePoint::CondenserExit);
        let h2 = h(CyclePoint::PumpExit);
        let h3 = h(CyclePoint::BoilerExit);
        let h4 = h(CyclePoint::TurbineExit);

        let pump_work = h2 - h1;
        let turbine_work = h3 - h4;
        let heat_added = h3 - h2;
        let net_work = turbine_work - pump_work;

        Performance {
            pump_work,
            turbine_work,
            heat_added,
            heat_rejected: h4 - h1,
            net_work,
            thermal_efficiency: ratio_of(net_work, heat_added),
            back_work_ratio: ratio_of(pump_work, turbine_work),
        }
    }
}

fn ratio_of(numerator: SpecificEnthalpy, denominator: SpecificEnthalpy) -> Ratio {
    Ratio::new::<ratio>(
        numerator.get::<joule_per_kilogram>() / denominator.get::<joule_per_kilogram>(),
    )
}
