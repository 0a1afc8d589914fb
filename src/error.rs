use core::{error::Error, fmt};

/// Reasons a checked operation can refuse to produce a value. The unchecked operations never
/// return these, they silently fall back to zero instead.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError
{
    /// Square root of a negative number.
    NegativeRadicand,

    /// Normalizing or inverting something with a magnitude of exactly zero.
    ZeroMagnitude,
}

impl Error for MathError {}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NegativeRadicand => write!(f, "Cannot take the square root of a negative value"),
            Self::ZeroMagnitude => write!(f, "Magnitude is zero"),
        }
    }
}
