use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::constraint::{Constrained, ConstraintError, UnitInterval};

/// Vapor mass fraction of a saturated mixture, `0 ≤ Q ≤ 1`.
///
/// Used as the second independent property alongside pressure when resolving
/// a state on the saturation dome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VaporQuality(Constrained<Ratio, UnitInterval>);

impl VaporQuality {
    /// Creates a vapor quality from a mass fraction.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError`] if `fraction` is outside `[0, 1]` or NaN.
    pub fn new(fraction: f64) -> Result<Self, ConstraintError> {
        UnitInterval::new(Ratio::new::<ratio>(fraction)).map(Self)
    }

    /// Saturated liquid, `Q = 0`.
    #[must_use]
    pub fn saturated_liquid() -> Self {
        Self(UnitInterval::zero())
    }

    /// Saturated vapor, `Q = 1`.
    #[must_use]
    pub fn saturated_vapor() -> Self {
        Self(UnitInterval::one())
    }

    /// Returns the vapor mass fraction.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.0.as_ref().get::<ratio>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn endpoints() {
        assert_eq!(VaporQuality::saturated_liquid().fraction(), 0.0);
        assert_eq!(VaporQuality::saturated_vapor().fraction(), 1.0);
    }

    #[test]
    fn rejects_fractions_outside_the_dome() {
        assert!(VaporQuality::new(0.5).is_ok());
        assert!(matches!(
            VaporQuality::new(-0.1),
            Err(ConstraintError::BelowMinimum)
        ));
        assert!(matches!(
            VaporQuality::new(1.5),
            Err(ConstraintError::AboveMaximum)
        ));
    }
}
