//! Error type shared across the crate.

use thiserror::Error;

/// Convenience alias for results carrying a [`HomError`].
pub type HomResult<T> = Result<T, HomError>;

/// Failures raised while constructing models or evaluating coincidences.
#[derive(Debug, Error)]
pub enum HomError {
    /// A physical parameter was non-positive or non-finite.
    #[error("invalid parameter `{name}`: expected a positive finite value, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Sampled arrays passed to an evaluator do not agree with each other.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A wavelength lies outside the domain of a Sellmeier model, where the
    /// squared index would be negative.
    #[error("wavelength {wavelength} μm is outside the Sellmeier domain (n² = {radicand})")]
    OutOfRange { wavelength: f64, radicand: f64 },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("npz write error: {0}")]
    Npz(#[from] ndarray_npy::WriteNpzError),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

/// Return `value` if it is strictly positive and finite, otherwise an
/// [`HomError::InvalidParameter`] naming it.
pub fn positive(name: &'static str, value: f64) -> HomResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(HomError::InvalidParameter { name, value })
    }
}

/// Like [`positive`], for sample counts.
pub fn nonzero(name: &'static str, value: usize) -> HomResult<usize> {
    if value > 0 {
        Ok(value)
    } else {
        Err(HomError::InvalidParameter { name, value: value as f64 })
    }
}
