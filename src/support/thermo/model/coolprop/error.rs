use std::sync::PoisonError;

use thiserror::Error;

use crate::support::thermo::PropertyError;

/// Errors returned by the [`CoolProp`](super::CoolProp) model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoolPropError {
    #[error(transparent)]
    Rfluids(#[from] rfluids::native::CoolPropError),
    #[error("CoolProp abstract state mutex poisoned")]
    Poisoned,
}

impl<T> From<PoisonError<T>> for CoolPropError {
    fn from(_: PoisonError<T>) -> Self {
        CoolPropError::Poisoned
    }
}

impl From<CoolPropError> for PropertyError {
    fn from(error: CoolPropError) -> Self {
        match error {
            CoolPropError::Rfluids(source) => classify(source.to_string()),
            CoolPropError::Poisoned => PropertyError::Calculation {
                context: "CoolProp abstract state mutex poisoned".to_string(),
            },
        }
    }
}

type Variant = fn(String) -> PropertyError;

/// Substring markers used to classify CoolProp messages, checked in order.
///
/// `rfluids` surfaces CoolProp failures as plain strings, so classification
/// is best-effort. Unmatched messages become [`PropertyError::Calculation`].
const MARKERS: &[(&[&str], Variant)] = &[
    (&["not defined"], undefined),
    (
        &[
            "not in range",
            "out of range",
            "outside the range of validity",
            "must be in range",
            "must be between",
            "quality must be",
            "above the critical",
        ],
        out_of_domain,
    ),
    (
        &["not a valid number", "invalid state", "invalid number"],
        invalid_state,
    ),
];

/// Maps a CoolProp message to a [`PropertyError`], keeping it verbatim as context.
fn classify(message: String) -> PropertyError {
    let lowered = message.to_lowercase();
    let variant = MARKERS
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| lowered.contains(needle)))
        .map_or(calculation as Variant, |&(_, variant)| variant);
    variant(message)
}

fn undefined(context: String) -> PropertyError {
    PropertyError::Undefined { context }
}

fn out_of_domain(context: String) -> PropertyError {
    PropertyError::OutOfDomain { context }
}

fn invalid_state(context: String) -> PropertyError {
    PropertyError::InvalidState { context }
}

fn calculation(context: String) -> PropertyError {
    PropertyError::Calculation { context }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_undefined() {
        let error = classify("inputs are not defined for this region".into());
        assert!(matches!(error, PropertyError::Undefined { .. }));
    }

    #[test]
    fn classifies_pressure_outside_saturation_range() {
        let message = "Pressure to PQ_flash [3e+07 Pa] must be in range [611.655, 2.2064e+07 Pa]";
        let error = classify(message.into());
        assert!(matches!(error, PropertyError::OutOfDomain { .. }));
        assert_eq!(error.context(), message);
    }

    #[test]
    fn classifies_invalid_state() {
        let error = classify("p is not a valid number".into());
        assert!(matches!(error, PropertyError::InvalidState { .. }));
    }

    #[test]
    fn falls_back_to_calculation() {
        let error = classify("phase envelope did not converge".into());
        assert!(matches!(error, PropertyError::Calculation { .. }));
    }
}
