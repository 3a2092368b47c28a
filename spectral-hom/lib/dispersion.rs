//! Material dispersion.
//!
//! Refractive indices follow the four-coefficient Sellmeier form
//! ```text
//! n²(λ) = A1 + A2 / (λ² - A3) - A4 λ²
//! ```
//! with λ in micrometers.

use std::f64::consts::TAU;
use ndarray::{ self as nd, Dimension };
use serde::{ Deserialize, Serialize };
use crate::{
    consts::{ C, UM },
    error::{ HomError, HomResult },
};

/// A material with a wavelength-dependent refractive index.
pub trait RefractiveIndex {
    /// Refractive index at vacuum wavelength `wavelength` (μm).
    ///
    /// Outside a model's domain of validity this may be NaN.
    fn index(&self, wavelength: f64) -> f64;
}

/// Sellmeier coefficients for a single material and polarization.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sellmeier {
    pub a1: f64,
    pub a2: f64,
    pub a3: f64,
    pub a4: f64,
}

impl Sellmeier {
    pub fn new(a1: f64, a2: f64, a3: f64, a4: f64) -> Self {
        Self { a1, a2, a3, a4 }
    }

    /// The trivial model, `n = 1` at every positive wavelength.
    ///
    /// At `λ = 0` the resonance term is `0 / 0`, so the index there is NaN.
    pub fn vacuum() -> Self { Self::new(1.0, 0.0, 0.0, 0.0) }

    /// Squared refractive index at `wavelength` (μm).
    pub fn radicand(&self, wavelength: f64) -> f64 {
        let l2 = wavelength.powi(2);
        self.a1 + self.a2 / (l2 - self.a3) - self.a4 * l2
    }

    /// Like [`RefractiveIndex::index`], but failing with
    /// [`OutOfRange`][HomError::OutOfRange] where the model gives no real,
    /// finite index.
    pub fn index_checked(&self, wavelength: f64) -> HomResult<f64> {
        let radicand = self.radicand(wavelength);
        if radicand.is_finite() && radicand >= 0.0 {
            Ok(radicand.sqrt())
        } else {
            Err(HomError::OutOfRange { wavelength, radicand })
        }
    }

    /// Refractive index over an array of wavelengths (μm).
    pub fn index_array<S, D>(&self, wavelength: &nd::ArrayBase<S, D>)
        -> nd::Array<f64, D>
    where
        S: nd::Data<Elem = f64>,
        D: Dimension,
    {
        wavelength.mapv(|l| self.index(l))
    }
}

impl RefractiveIndex for Sellmeier {
    fn index(&self, wavelength: f64) -> f64 { self.radicand(wavelength).sqrt() }
}

/// Vacuum wavelength (μm) of light at angular frequency `frequency` (rad/s).
pub fn wavelength_um(frequency: f64) -> f64 { TAU * C / frequency / UM }

/// Wave number (rad/m) in a dispersive medium at angular frequency
/// `frequency` (rad/s), `k = ω n(λ) / c`.
pub fn wave_number<M>(model: &M, frequency: f64) -> f64
where M: RefractiveIndex + ?Sized
{
    frequency * model.index(wavelength_um(frequency)) / C
}

/// [`wave_number`] over an array of angular frequencies (rad/s).
pub fn wave_number_array<M, S, D>(model: &M, frequency: &nd::ArrayBase<S, D>)
    -> nd::Array<f64, D>
where
    M: RefractiveIndex + ?Sized,
    S: nd::Data<Elem = f64>,
    D: Dimension,
{
    frequency.mapv(|w| wave_number(model, w))
}
