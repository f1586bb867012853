use thiserror::Error;

/// Errors that may occur when evaluating thermodynamic properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The property is undefined at the given state.
    #[error("undefined property: {context}")]
    Undefined { context: String },

    /// The input is outside the model's valid domain.
    ///
    /// For example, a quality input at a pressure above the critical point.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The provided state is invalid or inconsistent.
    #[error("invalid state: {context}")]
    InvalidState { context: String },

    /// The calculation failed due to a numerical or internal error.
    ///
    /// For example, a flash calculation that does not converge.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}

impl PropertyError {
    /// Returns the message reported by the model, without the variant prefix.
    #[must_use]
    pub fn context(&self) -> &str {
        match self {
            Self::Undefined { context }
            | Self::OutOfDomain { context }
            | Self::InvalidState { context }
            | Self::Calculation { context } => context,
        }
    }
}
