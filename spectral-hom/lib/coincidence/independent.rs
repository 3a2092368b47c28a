//! Coincidences between two independent photons with Gaussian amplitudes.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    consts::PS,
    coincidence::{ DELAY_SAMPLES, P_UNCORRELATED, TwoPhotonState, delay_span },
    error::HomResult,
    nd_utils::centered_range,
    pulse::{ GaussianPulse, PULSE_SAMPLES, PULSE_SPAN },
};

/// Default half-width of the delay axis in units of the larger FWHM.
pub const PAIRWISE_DELAY_SPAN: f64 = 2.5;

/// Coincidence probability for two independent [`GaussianPulse`]s.
///
/// The joint spectral amplitude of the pair is the product
/// `φ_a(ω1) φ_b(ω2)`, for which the coincidence probability has the closed
/// form
/// ```text
/// p(τ) = 1/2 - σa σb / (σa² + σb²)
///     · exp(-σa² σb² τ² / (σa² + σb²))
///     · exp(-(ωa - ωb)² / (σa² + σb²))
/// ```
#[derive(Clone, Debug)]
pub struct PairwiseCoincidence<'a> {
    a: &'a GaussianPulse,
    b: &'a GaussianPulse,
    fwhm_max: f64,
    delay_range: nd::Array1<f64>,
    freq_range: nd::Array1<f64>,
}

impl<'a> PairwiseCoincidence<'a> {
    /// Create a new `PairwiseCoincidence` with a delay axis spanning
    /// ±2.5 times the larger of the two FWHMs.
    pub fn new(a: &'a GaussianPulse, b: &'a GaussianPulse) -> Self {
        let fwhm_max = a.fwhm().max(b.fwhm());
        let delay_range = centered_range(
            0.0, PAIRWISE_DELAY_SPAN * fwhm_max * PS, DELAY_SAMPLES);
        // a common frequency axis covering both spectra, at twice the default
        // single-pulse resolution
        let center = (a.omega_c() + b.omega_c()) / 2.0;
        let half_width
            = PULSE_SPAN * a.sigma().max(b.sigma())
            + a.detuning(b).abs() / 2.0;
        let freq_range = centered_range(center, half_width, 2 * PULSE_SAMPLES);
        Self { a, b, fwhm_max, delay_range, freq_range }
    }

    /// Replace the delay axis with one spanning `±span` times the larger
    /// FWHM.
    pub fn with_delay_span(mut self, span: f64) -> HomResult<Self> {
        let span = delay_span(span)?;
        self.delay_range
            = centered_range(0.0, span * self.fwhm_max * PS, DELAY_SAMPLES);
        Ok(self)
    }

    pub fn pulse_a(&self) -> &'a GaussianPulse { self.a }

    pub fn pulse_b(&self) -> &'a GaussianPulse { self.b }

    /// Larger of the two FWHMs (ps).
    pub fn fwhm_max(&self) -> f64 { self.fwhm_max }

    /// Depth of the dip for perfectly overlapping spectra,
    /// `σa σb / (σa² + σb²)`; at most 1/2.
    pub fn pre_factor(&self) -> f64 {
        let (sa, sb) = (self.a.sigma(), self.b.sigma());
        sa * sb / (sa * sa + sb * sb)
    }

    /// Reduction of the dip depth from the mismatch between center
    /// frequencies.
    pub fn spectral_factor(&self) -> f64 {
        let s2 = self.a.sigma().powi(2) + self.b.sigma().powi(2);
        (-self.a.detuning(self.b).powi(2) / s2).exp()
    }
}

impl<'a> TwoPhotonState for PairwiseCoincidence<'a> {
    fn freq_range(&self) -> &nd::Array1<f64> { &self.freq_range }

    fn dfreq(&self) -> f64 {
        self.freq_range[1] - self.freq_range[0]
    }

    fn delay_range(&self) -> &nd::Array1<f64> { &self.delay_range }

    fn jsa(&self, omega_1: f64, omega_2: f64) -> C64 {
        c!(self.a.amplitude_freq_at(omega_1) * self.b.amplitude_freq_at(omega_2))
    }

    fn coincidence_at(&self, delay: f64) -> f64 {
        let (sa2, sb2) = (self.a.sigma().powi(2), self.b.sigma().powi(2));
        let temporal = (-sa2 * sb2 * delay.powi(2) / (sa2 + sb2)).exp();
        P_UNCORRELATED - self.pre_factor() * temporal * self.spectral_factor()
    }
}
