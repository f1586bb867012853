use std::fmt;

/// The four canonical state points of a simple Rankine cycle, in flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CyclePoint {
    /// Condenser exit / pump inlet, saturated liquid at condenser pressure.
    CondenserExit = 1,
    /// Pump exit / boiler inlet, compressed liquid at boiler pressure.
    PumpExit = 2,
    /// Boiler exit / turbine inlet, at boiler pressure.
    BoilerExit = 3,
    /// Turbine exit / condenser inlet, at condenser pressure.
    TurbineExit = 4,
}

/// Which of the two cycle pressures a point sits at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureLevel {
    Boiler,
    Condenser,
}

impl CyclePoint {
    /// All points in flow order.
    pub const ALL: [CyclePoint; 4] = [
        CyclePoint::CondenserExit,
        CyclePoint::PumpExit,
        CyclePoint::BoilerExit,
        CyclePoint::TurbineExit,
    ];

    /// Returns the conventional 1-based point number.
    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the pressure this point sits at.
    #[must_use]
    pub fn pressure_level(self) -> PressureLevel {
        match self {
            CyclePoint::CondenserExit | CyclePoint::TurbineExit => PressureLevel::Condenser,
            CyclePoint::PumpExit | CyclePoint::BoilerExit => PressureLevel::Boiler,
        }
    }
}

impl fmt::Display for CyclePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CyclePoint::CondenserExit => "condenser exit",
            CyclePoint::PumpExit => "pump exit",
            CyclePoint::BoilerExit => "boiler exit",
            CyclePoint::TurbineExit => "turbine exit",
        };
        write!(f, "point {} ({label})", self.index())
    }
}
