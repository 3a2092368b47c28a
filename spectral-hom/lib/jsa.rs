//! Double-Gaussian joint spectral amplitude of a correlated photon pair.
//!
//! The pair is described by a pump-envelope factor in the sum frequency,
//! with width set by the effective pulse duration `T_p`, and a phase-matching
//! factor in the difference frequency, with width set by the coherence time
//! `T_c`:
//! ```text
//! f(ω1, ω2) = √(T_p T_c / π)
//!     · exp(-(ω1 - ω2)² T_c² / 4)
//!     · exp(-(ω1 + ω2 - 2ω_c)² T_p² / 4)
//! ```

use std::f64::consts::PI;
use ndarray::{ self as nd, Dimension };
use serde::{ Deserialize, Serialize };
use crate::{
    consts::PS,
    error::{ HomError, HomResult, nonzero, positive },
    nd_utils::centered_range,
    pulse::center_frequency,
};

/// Default number of points in the frequency axis.
pub const JOINT_SAMPLES: usize = 100;

/// Half-width of the frequency axis in units of `1 / T_c`.
pub const JOINT_SPAN: f64 = 2.0;

fn default_samples() -> usize { JOINT_SAMPLES }

/// Physical inputs to a [`DoubleGaussianJsa`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JointParams {
    /// Central wavelength of the pair (nm).
    pub lambda_c: f64,
    /// Effective pulse duration `T_p` (ps).
    pub pulse_duration: f64,
    /// Coherence time `T_c` (ps).
    pub coherence_time: f64,
    /// Number of points in the frequency axis.
    #[serde(default = "default_samples")]
    pub samples: usize,
}

impl JointParams {
    pub fn new(lambda_c: f64, pulse_duration: f64, coherence_time: f64)
        -> Self
    {
        Self { lambda_c, pulse_duration, coherence_time, samples: JOINT_SAMPLES }
    }

    /// Set the number of points in the frequency axis.
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }
}

/// Joint spectral amplitude of a photon pair with Gaussian pump envelope and
/// Gaussian phase matching.
#[derive(Clone, Debug, PartialEq)]
pub struct DoubleGaussianJsa {
    params: JointParams,
    omega_c: f64,
    t_p: f64,
    t_c: f64,
    freq_range: nd::Array1<f64>,
}

impl DoubleGaussianJsa {
    /// Create a new JSA model, deriving its time constants and frequency axis.
    ///
    /// Fails with [`InvalidParameter`][HomError::InvalidParameter] if any of
    /// the wavelength, `T_p`, or `T_c` is not positive and finite, or if the
    /// sample count is zero.
    pub fn new(params: JointParams) -> HomResult<Self> {
        let lambda_c = positive("lambda_c", params.lambda_c)?;
        let t_p = positive("pulse_duration", params.pulse_duration)? * PS;
        let t_c = positive("coherence_time", params.coherence_time)? * PS;
        let samples = nonzero("samples", params.samples)?;
        let omega_c = center_frequency(lambda_c);
        let freq_range = centered_range(omega_c, JOINT_SPAN / t_c, samples);
        Ok(Self { params, omega_c, t_p, t_c, freq_range })
    }

    /// Shorthand for `DoubleGaussianJsa::new(JointParams::new(..))` with the
    /// default sample count.
    pub fn from_parts(lambda_c: f64, pulse_duration: f64, coherence_time: f64)
        -> HomResult<Self>
    {
        Self::new(JointParams::new(lambda_c, pulse_duration, coherence_time))
    }

    pub fn params(&self) -> JointParams { self.params }

    /// Central wavelength (nm).
    pub fn lambda_c(&self) -> f64 { self.params.lambda_c }

    /// Center angular frequency (rad/s).
    pub fn omega_c(&self) -> f64 { self.omega_c }

    /// Pulse duration `T_p` (s).
    pub fn t_p(&self) -> f64 { self.t_p }

    /// Coherence time `T_c` (s).
    pub fn t_c(&self) -> f64 { self.t_c }

    /// Frequency axis, `ωc ± 2/T_c` (rad/s).
    pub fn freq_range(&self) -> &nd::Array1<f64> { &self.freq_range }

    /// Uniform step of [`Self::freq_range`].
    pub fn dfreq(&self) -> f64 {
        2.0 * JOINT_SPAN / self.t_c / self.freq_range.len() as f64
    }

    /// Evaluate the JSA at a single frequency pair (rad/s).
    pub fn joint_spectral_amplitude(&self, omega_1: f64, omega_2: f64) -> f64 {
        let pre_factor = (self.t_p * self.t_c / PI).sqrt();
        let diff = (-(omega_1 - omega_2).powi(2) * self.t_c.powi(2) / 4.0).exp();
        let sum = (
            -(omega_1 + omega_2 - 2.0 * self.omega_c).powi(2)
            * self.t_p.powi(2) / 4.0
        ).exp();
        pre_factor * diff * sum
    }

    /// Evaluate the JSA elementwise over two equally shaped arrays, e.g. the
    /// outputs of [`meshgrid`][crate::nd_utils::meshgrid].
    pub fn joint_spectral_amplitude_array<S1, S2, D>(
        &self,
        omega_1: &nd::ArrayBase<S1, D>,
        omega_2: &nd::ArrayBase<S2, D>,
    ) -> HomResult<nd::Array<f64, D>>
    where
        S1: nd::Data<Elem = f64>,
        S2: nd::Data<Elem = f64>,
        D: Dimension,
    {
        if omega_1.shape() != omega_2.shape() {
            return Err(HomError::InvalidInput(format!(
                "frequency arrays have shapes {:?} and {:?}",
                omega_1.shape(),
                omega_2.shape(),
            )));
        }
        Ok(
            nd::Zip::from(omega_1).and(omega_2)
                .map_collect(|w1, w2| self.joint_spectral_amplitude(*w1, *w2))
        )
    }

    /// Evaluate the JSA on the outer product of two frequency axes, with
    /// `grid[[i, j]] = f(freq1[i], freq2[j])`.
    pub fn jsa_grid(&self, freq1: &nd::Array1<f64>, freq2: &nd::Array1<f64>)
        -> nd::Array2<f64>
    {
        nd::Array2::from_shape_fn(
            (freq1.len(), freq2.len()),
            |(i, j)| self.joint_spectral_amplitude(freq1[i], freq2[j]),
        )
    }
}
