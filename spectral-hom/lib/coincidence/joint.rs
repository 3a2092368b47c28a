//! Coincidences for a spectrally correlated pair with a double-Gaussian joint
//! spectral amplitude.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    coincidence::{ DELAY_SAMPLES, P_UNCORRELATED, TwoPhotonState, delay_span },
    error::HomResult,
    jsa::DoubleGaussianJsa,
    nd_utils::centered_range,
};

/// Default half-width of the delay axis in units of the coherence time.
pub const JOINT_DELAY_SPAN: f64 = 5.0;

/// Coincidence probability for a [`DoubleGaussianJsa`] pair,
/// `p(τ) = 1/2 - 1/2 exp(-τ² / 2T_c²)`.
///
/// The JSA is symmetric under exchange of the photons, so the dip always
/// reaches zero and its width depends only on `T_c`.
#[derive(Clone, Debug)]
pub struct JointCoincidence<'a> {
    jsa: &'a DoubleGaussianJsa,
    delay_range: nd::Array1<f64>,
}

impl<'a> JointCoincidence<'a> {
    /// Create a new `JointCoincidence` with a delay axis spanning ±5 `T_c`.
    pub fn new(jsa: &'a DoubleGaussianJsa) -> Self {
        let delay_range
            = centered_range(0.0, JOINT_DELAY_SPAN * jsa.t_c(), DELAY_SAMPLES);
        Self { jsa, delay_range }
    }

    /// Replace the delay axis with one spanning `±span` times `T_c`.
    pub fn with_delay_span(mut self, span: f64) -> HomResult<Self> {
        let span = delay_span(span)?;
        self.delay_range
            = centered_range(0.0, span * self.jsa.t_c(), DELAY_SAMPLES);
        Ok(self)
    }

    pub fn model(&self) -> &'a DoubleGaussianJsa { self.jsa }
}

impl<'a> TwoPhotonState for JointCoincidence<'a> {
    fn freq_range(&self) -> &nd::Array1<f64> { self.jsa.freq_range() }

    fn dfreq(&self) -> f64 { self.jsa.dfreq() }

    fn delay_range(&self) -> &nd::Array1<f64> { &self.delay_range }

    fn jsa(&self, omega_1: f64, omega_2: f64) -> C64 {
        c!(self.jsa.joint_spectral_amplitude(omega_1, omega_2))
    }

    fn coincidence_at(&self, delay: f64) -> f64 {
        P_UNCORRELATED
            - P_UNCORRELATED * (-delay.powi(2) / 2.0 / self.jsa.t_c().powi(2)).exp()
    }
}
