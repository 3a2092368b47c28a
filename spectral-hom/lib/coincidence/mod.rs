//! Two-photon coincidence probabilities at the output of a balanced beam
//! splitter, as a function of the relative delay between the photons.
//!
//! Both kinds of two-photon source modeled here (a pair of independent pulses
//! and a spectrally correlated pair) implement [`TwoPhotonState`], which gives
//! closed-form coincidence probabilities alongside a numerical evaluation of
//! the same quantity from the source's sampled joint spectral amplitude.

use ndarray::{ self as nd, Dimension };
use num_complex::Complex64 as C64;
use crate::error::{ HomResult, positive };

pub mod independent;
pub mod joint;
pub mod generic;

pub use independent::PairwiseCoincidence;
pub use joint::JointCoincidence;
pub use generic::{ general_coincidence, general_coincidence_fn };

/// Number of points in default delay axes.
pub const DELAY_SAMPLES: usize = 100;

/// Coincidence probability far from the dip, where the photons no longer
/// overlap in time.
pub const P_UNCORRELATED: f64 = 0.5;

/// A two-photon state entering both ports of a balanced beam splitter.
pub trait TwoPhotonState {
    /// Frequency axis (rad/s) on which the state's joint spectral amplitude
    /// is sampled, used for both photons.
    fn freq_range(&self) -> &nd::Array1<f64>;

    /// Uniform step of [`Self::freq_range`].
    fn dfreq(&self) -> f64;

    /// Default delay axis (s).
    fn delay_range(&self) -> &nd::Array1<f64>;

    /// Joint spectral amplitude of the pair at angular frequencies
    /// `(omega_1, omega_2)`.
    fn jsa(&self, omega_1: f64, omega_2: f64) -> C64;

    /// Closed-form coincidence probability at delay `delay` (s).
    fn coincidence_at(&self, delay: f64) -> f64;

    /// Closed-form coincidence probability over an array of delays (s).
    fn coincidence_probability<S, D>(&self, delay: &nd::ArrayBase<S, D>)
        -> nd::Array<f64, D>
    where
        Self: Sized,
        S: nd::Data<Elem = f64>,
        D: Dimension,
    {
        delay.mapv(|tau| self.coincidence_at(tau))
    }

    /// Interference visibility, `1 - 2 p(0)`; equal to 1 for perfectly
    /// indistinguishable photons.
    fn visibility(&self) -> f64 {
        1.0 - self.coincidence_at(0.0) / P_UNCORRELATED
    }

    /// Joint spectral amplitude on the outer product of two frequency axes,
    /// with `grid[[i, j]] = f(freq1[i], freq2[j])`.
    fn jsa_grid(&self, freq1: &nd::Array1<f64>, freq2: &nd::Array1<f64>)
        -> nd::Array2<C64>
    where Self: Sized
    {
        nd::Array2::from_shape_fn(
            (freq1.len(), freq2.len()),
            |(i, j)| self.jsa(freq1[i], freq2[j]),
        )
    }

    /// Coincidence probability over an array of delays (s), computed by
    /// [`general_coincidence`] from the joint spectral amplitude sampled on
    /// [`Self::freq_range`] instead of in closed form.
    fn coincidence_numerical<S>(&self, delay: &nd::ArrayBase<S, nd::Ix1>)
        -> HomResult<nd::Array1<f64>>
    where
        Self: Sized,
        S: nd::Data<Elem = f64>,
    {
        let w = self.freq_range();
        let dw = self.dfreq();
        let grid = self.jsa_grid(w, w);
        general_coincidence(w, dw, w, dw, &grid, delay)
    }
}

/// Check a delay-axis half-width, in units of the source's natural time
/// scale.
pub(crate) fn delay_span(span: f64) -> HomResult<f64> {
    positive("delay_span", span)
}
