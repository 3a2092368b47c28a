//! Gaussian single-photon wavepackets.
//!
//! A pulse is specified by its central wavelength and the full width at half
//! maximum of its temporal intensity. All other quantities (center angular
//! frequency, spectral width, and the default sampling axes) are derived once
//! at construction.

use std::f64::consts::{ PI, TAU };
use ndarray::{ self as nd, Dimension };
use num_complex::Complex64 as C64;
use serde::{ Deserialize, Serialize };
use crate::{
    consts::{ C, FWHM_SIGMA, NM, PS },
    error::{ HomResult, positive },
    nd_utils::centered_range,
};

/// Number of points in the default time and frequency axes.
pub const PULSE_SAMPLES: usize = 100;

/// Half-width of the default sampling axes, in units of the spectral standard
/// deviation (frequency) or its inverse (time).
pub const PULSE_SPAN: f64 = 3.5;

/// Angular frequency (rad/s) of light with a given vacuum wavelength (nm).
pub fn center_frequency(wavelength_nm: f64) -> f64 {
    TAU * C / (wavelength_nm * NM)
}

/// Physical inputs to a [`GaussianPulse`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PulseParams {
    /// Central wavelength (nm).
    pub lambda_c: f64,
    /// Full width at half maximum of the temporal intensity (ps).
    pub fwhm: f64,
}

impl PulseParams {
    pub fn new(lambda_c: f64, fwhm: f64) -> Self { Self { lambda_c, fwhm } }
}

/// A transform-limited photon wavepacket with a Gaussian envelope.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianPulse {
    params: PulseParams,
    omega_c: f64,
    sigma: f64,
    freq_range: nd::Array1<f64>,
    time_range: nd::Array1<f64>,
}

impl GaussianPulse {
    /// Create a new pulse, deriving its spectral parameters.
    ///
    /// Fails with [`InvalidParameter`][crate::error::HomError::InvalidParameter]
    /// if the wavelength or FWHM is not positive and finite.
    pub fn new(params: PulseParams) -> HomResult<Self> {
        let lambda_c = positive("lambda_c", params.lambda_c)?;
        let fwhm = positive("fwhm", params.fwhm)?;
        let omega_c = center_frequency(lambda_c);
        let sigma = FWHM_SIGMA / (fwhm * PS);
        let freq_range
            = centered_range(omega_c, PULSE_SPAN * sigma, PULSE_SAMPLES);
        let time_range
            = centered_range(0.0, PULSE_SPAN / sigma, PULSE_SAMPLES);
        Ok(Self { params, omega_c, sigma, freq_range, time_range })
    }

    /// Shorthand for `GaussianPulse::new(PulseParams { lambda_c, fwhm })`.
    pub fn from_parts(lambda_c: f64, fwhm: f64) -> HomResult<Self> {
        Self::new(PulseParams { lambda_c, fwhm })
    }

    pub fn params(&self) -> PulseParams { self.params }

    /// Central wavelength (nm).
    pub fn lambda_c(&self) -> f64 { self.params.lambda_c }

    /// Intensity FWHM (ps).
    pub fn fwhm(&self) -> f64 { self.params.fwhm }

    /// Center angular frequency (rad/s).
    pub fn omega_c(&self) -> f64 { self.omega_c }

    /// Spectral standard deviation of the amplitude (rad/s).
    pub fn sigma(&self) -> f64 { self.sigma }

    /// Default frequency axis, `ωc ± 3.5σ` (rad/s).
    pub fn freq_range(&self) -> &nd::Array1<f64> { &self.freq_range }

    /// Default time axis, `±3.5/σ` (s).
    pub fn time_range(&self) -> &nd::Array1<f64> { &self.time_range }

    /// Uniform step of [`Self::freq_range`].
    pub fn dfreq(&self) -> f64 {
        2.0 * PULSE_SPAN * self.sigma / PULSE_SAMPLES as f64
    }

    /// Uniform step of [`Self::time_range`].
    pub fn dtime(&self) -> f64 {
        2.0 * PULSE_SPAN / self.sigma / PULSE_SAMPLES as f64
    }

    /// Difference in center angular frequency, `self - other`.
    pub fn detuning(&self, other: &Self) -> f64 { self.omega_c - other.omega_c }

    /// Temporal amplitude at time `t` (s).
    pub fn amplitude_time_at(&self, t: f64) -> C64 {
        let s2 = self.sigma.powi(2);
        (s2 / PI).powf(0.25)
            * (-s2 * t.powi(2) / 2.0 - c!(i self.omega_c * t)).exp()
    }

    /// Spectral amplitude at angular frequency `omega` (rad/s).
    pub fn amplitude_freq_at(&self, omega: f64) -> f64 {
        let s2 = self.sigma.powi(2);
        (1.0 / (PI * s2)).powf(0.25)
            * (-(omega - self.omega_c).powi(2) / (2.0 * s2)).exp()
    }

    /// Temporal amplitude over an array of times (s).
    pub fn amplitude_time<S, D>(&self, time: &nd::ArrayBase<S, D>)
        -> nd::Array<C64, D>
    where
        S: nd::Data<Elem = f64>,
        D: Dimension,
    {
        time.mapv(|t| self.amplitude_time_at(t))
    }

    /// Spectral amplitude over an array of angular frequencies (rad/s).
    pub fn amplitude_freq<S, D>(&self, omega: &nd::ArrayBase<S, D>)
        -> nd::Array<f64, D>
    where
        S: nd::Data<Elem = f64>,
        D: Dimension,
    {
        omega.mapv(|w| self.amplitude_freq_at(w))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{ Rng, SeedableRng, rngs::StdRng };
    use crate::{ error::HomError, nd_utils::riemann };

    fn pulse() -> GaussianPulse { GaussianPulse::from_parts(800.0, 1.0).unwrap() }

    #[test]
    fn derived_parameters() {
        let p = pulse();
        assert!((p.omega_c() - 2.354_564_459_136e15).abs() / p.omega_c() < 1e-9);
        assert!((p.sigma() - 2.0 * 2.0_f64.ln().sqrt() / 1e-12).abs() < 1.0);
        assert_eq!(p.freq_range().len(), PULSE_SAMPLES);
        assert_eq!(p.time_range().len(), PULSE_SAMPLES);
        assert!((p.time_range()[0] + 3.5 / p.sigma()).abs() < 1e-24);
        assert!((p.freq_range()[1] - p.freq_range()[0] - p.dfreq()).abs() < 1.0);
    }

    #[test]
    fn peak_magnitude() {
        let p = pulse();
        let expected = (p.sigma().powi(2) / PI).powf(0.25);
        assert!((p.amplitude_time_at(0.0).norm() - expected).abs() / expected < 1e-12);
        let expected = (1.0 / (PI * p.sigma().powi(2))).powf(0.25);
        assert!((p.amplitude_freq_at(p.omega_c()) - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn normalized_over_sampled_range() {
        for fwhm in [0.3, 1.0, 4.0] {
            let p = GaussianPulse::from_parts(1550.0, fwhm).unwrap();
            let at = p.amplitude_time(p.time_range()).mapv(|a| a.norm_sqr());
            assert!((riemann(&at, p.dtime()) - 1.0).abs() < 1e-2);
            let af = p.amplitude_freq(p.freq_range()).mapv(|a| a * a);
            assert!((riemann(&af, p.dfreq()) - 1.0).abs() < 1e-2);
        }
    }

    #[test]
    fn spectrum_symmetric_about_center() {
        let p = pulse();
        let mut rng = StdRng::seed_from_u64(10546);
        for _ in 0..100 {
            let delta: f64 = rng.gen_range(0.0..5.0) * p.sigma();
            let hi = p.amplitude_freq_at(p.omega_c() + delta);
            let lo = p.amplitude_freq_at(p.omega_c() - delta);
            assert!((hi - lo).abs() <= 1e-9 * hi.max(lo).max(1e-300));
        }
    }

    #[test]
    fn phase_rotates_at_center_frequency() {
        let p = pulse();
        let t = 0.37 / p.sigma();
        let a = p.amplitude_time_at(t) * c!(i p.omega_c() * t).exp();
        assert!(a.im.abs() < 1e-9 * a.re);
        let envelope = (p.sigma().powi(2) / PI).powf(0.25)
            * (-p.sigma().powi(2) * t * t / 2.0).exp();
        assert!((a.re - envelope).abs() / envelope < 1e-9);
    }

    #[test]
    fn array_evaluation_keeps_shape() {
        let p = pulse();
        let t = nd::Array2::<f64>::zeros((3, 4));
        assert_eq!(p.amplitude_time(&t).dim(), (3, 4));
        assert_eq!(p.amplitude_freq(&t.view()).dim(), (3, 4));
    }

    #[test]
    fn rejects_nonpositive_parameters() {
        match GaussianPulse::from_parts(0.0, 1.0) {
            Err(HomError::InvalidParameter { name, .. }) => assert_eq!(name, "lambda_c"),
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
        assert!(matches!(
            GaussianPulse::from_parts(800.0, -1.0),
            Err(HomError::InvalidParameter { name: "fwhm", .. }),
        ));
        assert!(GaussianPulse::from_parts(800.0, f64::NAN).is_err());
    }
}
