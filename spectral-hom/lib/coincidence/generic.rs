//! Coincidence probability for an arbitrary sampled joint spectral amplitude.
//!
//! For a JSA `f(ω1, ω2)` the coincidence probability is
//! ```text
//! p(τ) = 1/2 - 1/2 Re ∫∫ f*(ω1, ω2) f(ω2, ω1) exp(-i(ω1 - ω2)τ) dω1 dω2
//! ```
//! which is approximated here by a Riemann sum over a dense grid. Nothing
//! checks that the grid resolves the JSA or covers its support; that is left
//! to the caller.

use ndarray::{ self as nd, s };
use num_complex::Complex64 as C64;
use num_traits::Zero;
use crate::{
    coincidence::P_UNCORRELATED,
    error::{ HomError, HomResult, positive },
};

// two frequency axes are taken to be the same if all their points agree to
// within this fraction of a step
const AXIS_RTOL: f64 = 1e-6;

/// Compute the coincidence probability at each delay from a JSA sampled on
/// the outer product of two frequency axes, with
/// `jsa[[i, j]] = f(freq1[i], freq2[j])`.
///
/// Exchanging the photons maps grid point `(i, j)` to `(j, i)`, so the
/// exchanged amplitude `f(ω2, ω1)` is only available from the grid if both
/// axes are the same; otherwise this fails with
/// [`InvalidInput`][HomError::InvalidInput] and [`general_coincidence_fn`]
/// should be used instead. A `jsa` whose shape is not
/// `(freq1.len(), freq2.len())` is also an `InvalidInput`.
///
/// The imaginary part of each sum, which is pure roundoff for a physical JSA,
/// is discarded.
pub fn general_coincidence<S>(
    freq1: &nd::Array1<f64>,
    dfreq1: f64,
    freq2: &nd::Array1<f64>,
    dfreq2: f64,
    jsa: &nd::Array2<C64>,
    delay: &nd::ArrayBase<S, nd::Ix1>,
) -> HomResult<nd::Array1<f64>>
where S: nd::Data<Elem = f64>
{
    let dfreq1 = positive("dfreq1", dfreq1)?;
    let dfreq2 = positive("dfreq2", dfreq2)?;
    if jsa.dim() != (freq1.len(), freq2.len()) {
        return Err(HomError::InvalidInput(format!(
            "JSA grid has shape {:?} but the frequency axes have lengths \
            ({}, {})",
            jsa.shape(),
            freq1.len(),
            freq2.len(),
        )));
    }
    let same_axes
        = freq1.len() == freq2.len()
        && freq1.iter().zip(freq2)
            .all(|(w1, w2)| (w1 - w2).abs() <= AXIS_RTOL * dfreq1);
    if !same_axes {
        return Err(HomError::InvalidInput(
            "exchanging photons on a grid requires identical frequency axes"
            .to_string()
        ));
    }
    let overlap: nd::Array2<C64>
        = nd::Zip::from(jsa).and(jsa.t())
        .map_collect(|f12, f21| f12.conj() * f21);
    Ok(sum_overlap(freq1, freq2, &overlap, dfreq1 * dfreq2, delay))
}

/// Like [`general_coincidence`], but sampling the JSA from a function so that
/// the exchanged amplitude `f(ω2, ω1)` can be evaluated on any pair of axes.
pub fn general_coincidence_fn<S, F>(
    freq1: &nd::Array1<f64>,
    dfreq1: f64,
    freq2: &nd::Array1<f64>,
    dfreq2: f64,
    jsa: F,
    delay: &nd::ArrayBase<S, nd::Ix1>,
) -> HomResult<nd::Array1<f64>>
where
    S: nd::Data<Elem = f64>,
    F: Fn(f64, f64) -> C64,
{
    let dfreq1 = positive("dfreq1", dfreq1)?;
    let dfreq2 = positive("dfreq2", dfreq2)?;
    let overlap: nd::Array2<C64>
        = nd::Array2::from_shape_fn(
            (freq1.len(), freq2.len()),
            |(i, j)| {
                let (w1, w2) = (freq1[i], freq2[j]);
                jsa(w1, w2).conj() * jsa(w2, w1)
            },
        );
    Ok(sum_overlap(freq1, freq2, &overlap, dfreq1 * dfreq2, delay))
}

// evaluate the double sum for each delay independently
fn sum_overlap<S>(
    freq1: &nd::Array1<f64>,
    freq2: &nd::Array1<f64>,
    overlap: &nd::Array2<C64>,
    darea: f64,
    delay: &nd::ArrayBase<S, nd::Ix1>,
) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    delay.mapv(|tau| {
        let mut acc = C64::zero();
        for (k, &w1) in freq1.iter().enumerate() {
            let row = overlap.slice(s![k, ..]);
            for (&w2, &o) in freq2.iter().zip(row.iter()) {
                acc += o * c!(i -(w1 - w2) * tau).exp();
            }
        }
        P_UNCORRELATED - P_UNCORRELATED * acc.re * darea
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        coincidence::{ JointCoincidence, PairwiseCoincidence, TwoPhotonState },
        jsa::DoubleGaussianJsa,
        pulse::GaussianPulse,
    };

    fn max_abs_diff(a: &nd::Array1<f64>, b: &nd::Array1<f64>) -> f64 {
        a.iter().zip(b).fold(0.0, |acc, (x, y)| acc.max((x - y).abs()))
    }

    #[test]
    fn reproduces_joint_gaussian_closed_form() {
        let model = DoubleGaussianJsa::from_parts(800.0, 1.0, 0.5).unwrap();
        let joint = JointCoincidence::new(&model);
        let w = model.freq_range();
        let dw = model.dfreq();
        let grid = model.jsa_grid(w, w).mapv(C64::from);
        let delay = joint.delay_range();
        let numerical
            = general_coincidence(w, dw, w, dw, &grid, delay).unwrap();
        let exact = joint.coincidence_probability(delay);
        assert!(max_abs_diff(&numerical, &exact) < 5e-3);
        for (n, e) in numerical.iter().zip(exact.iter()) {
            if *e > 0.05 { assert!((n - e).abs() / e < 1e-2); }
        }
        // same result through the trait
        let via_trait = joint.coincidence_numerical(delay).unwrap();
        assert!(max_abs_diff(&via_trait, &numerical) < 1e-12);
    }

    #[test]
    fn reproduces_independent_pulse_closed_form() {
        let a = GaussianPulse::from_parts(800.0, 1.0).unwrap();
        let b = GaussianPulse::from_parts(800.0, 2.0).unwrap();
        let pair = PairwiseCoincidence::new(&a, &b);
        let delay = pair.delay_range();
        let numerical = pair.coincidence_numerical(delay).unwrap();
        let exact = pair.coincidence_probability(delay);
        assert!(max_abs_diff(&numerical, &exact) < 5e-3);
    }

    #[test]
    fn detuned_pulses_keep_residual_coincidences() {
        let a = GaussianPulse::from_parts(800.0, 1.0).unwrap();
        let b = GaussianPulse::from_parts(800.4, 1.0).unwrap();
        let pair = PairwiseCoincidence::new(&a, &b);
        let delay = nd::array![0.0, 0.5e-12, -0.5e-12];
        let numerical = pair.coincidence_numerical(&delay).unwrap();
        let exact = pair.coincidence_probability(&delay);
        assert!(exact[0] > 0.01);
        assert!(max_abs_diff(&numerical, &exact) < 5e-3);
    }

    #[test]
    fn function_form_matches_grid_form() {
        let model = DoubleGaussianJsa::from_parts(1550.0, 2.0, 0.8).unwrap();
        let w = model.freq_range();
        let dw = model.dfreq();
        let grid = model.jsa_grid(w, w).mapv(C64::from);
        let delay = nd::Array1::linspace(-3e-12, 3e-12, 13);
        let from_grid
            = general_coincidence(w, dw, w, dw, &grid, &delay).unwrap();
        let from_fn = general_coincidence_fn(
            w, dw, w, dw,
            |w1, w2| C64::from(model.joint_spectral_amplitude(w1, w2)),
            &delay,
        ).unwrap();
        assert!(max_abs_diff(&from_grid, &from_fn) < 1e-12);
    }

    #[test]
    fn function_form_accepts_distinct_axes() {
        let model = DoubleGaussianJsa::from_parts(800.0, 1.0, 0.5).unwrap();
        let joint = JointCoincidence::new(&model);
        let w1 = model.freq_range().clone();
        // same support, offset by half a step
        let dw = model.dfreq();
        let w2 = w1.mapv(|w| w + dw / 2.0);
        let delay = joint.delay_range();
        let numerical = general_coincidence_fn(
            &w1, dw, &w2, dw,
            |a, b| C64::from(model.joint_spectral_amplitude(a, b)),
            delay,
        ).unwrap();
        let exact = joint.coincidence_probability(delay);
        assert!(max_abs_diff(&numerical, &exact) < 5e-3);

        let grid = model.jsa_grid(&w1, &w2).mapv(C64::from);
        assert!(matches!(
            general_coincidence(&w1, dw, &w2, dw, &grid, delay),
            Err(HomError::InvalidInput(_)),
        ));
    }

    // double-Gaussian JSA times a phase exp(i phase(w1, w2))
    fn phased_grid<F>(model: &DoubleGaussianJsa, phase: F) -> nd::Array2<C64>
    where F: Fn(f64, f64) -> f64
    {
        let w = model.freq_range();
        nd::Array2::from_shape_fn(
            (w.len(), w.len()),
            |(k, l)| {
                model.joint_spectral_amplitude(w[k], w[l])
                    * c!(i phase(w[k], w[l])).exp()
            },
        )
    }

    #[test]
    fn exchange_symmetric_phase_leaves_dip_unchanged() {
        let model = DoubleGaussianJsa::from_parts(800.0, 1.0, 0.5).unwrap();
        let w = model.freq_range();
        let dw = model.dfreq();
        let wc = model.omega_c();
        let alpha = 0.3 * model.t_p().powi(2);
        let phase = |w1: f64, w2: f64| alpha * (w1 + w2 - 2.0 * wc).powi(2);
        let delay = nd::Array1::linspace(-2.5e-12, 2.5e-12, 41);

        let real = model.jsa_grid(w, w).mapv(C64::from);
        let expected
            = general_coincidence(w, dw, w, dw, &real, &delay).unwrap();
        let grid = phased_grid(&model, phase);
        // the phase is far from trivial over the support
        assert!(grid.iter().any(|z| z.im.abs() > 0.1 * z.norm() && z.norm() > 0.0));
        let from_grid
            = general_coincidence(w, dw, w, dw, &grid, &delay).unwrap();
        let from_fn = general_coincidence_fn(
            w, dw, w, dw,
            |w1, w2| model.joint_spectral_amplitude(w1, w2) * c!(i phase(w1, w2)).exp(),
            &delay,
        ).unwrap();
        assert!(max_abs_diff(&from_grid, &expected) < 1e-9);
        assert!(max_abs_diff(&from_fn, &expected) < 1e-9);
    }

    #[test]
    fn exchange_antisymmetric_phase_shifts_dip() {
        let model = DoubleGaussianJsa::from_parts(800.0, 1.0, 0.5).unwrap();
        let w = model.freq_range();
        let dw = model.dfreq();
        // exp(i alpha (w1 - w2)) delays the dip to tau = -2 alpha
        let alpha = 0.5e-12;
        let phase = |w1: f64, w2: f64| alpha * (w1 - w2);
        let delay = nd::Array1::linspace(-2.5e-12, 2.5e-12, 41);

        let real = model.jsa_grid(w, w).mapv(C64::from);
        let shifted = delay.mapv(|tau| tau + 2.0 * alpha);
        let expected
            = general_coincidence(w, dw, w, dw, &real, &shifted).unwrap();
        let from_grid = general_coincidence(
            w, dw, w, dw, &phased_grid(&model, phase), &delay).unwrap();
        let from_fn = general_coincidence_fn(
            w, dw, w, dw,
            |w1, w2| model.joint_spectral_amplitude(w1, w2) * c!(i phase(w1, w2)).exp(),
            &delay,
        ).unwrap();
        assert!(max_abs_diff(&from_grid, &expected) < 1e-9);
        assert!(max_abs_diff(&from_fn, &expected) < 1e-9);

        // dip moved from 0 to -1 ps
        let joint = JointCoincidence::new(&model);
        let at = |p: &nd::Array1<f64>, tau: f64| -> f64 {
            let k = delay.iter().position(|t| (t - tau).abs() < 1e-15).unwrap();
            p[k]
        };
        assert!(at(&from_grid, -1e-12) < 5e-3);
        assert!((at(&from_grid, 0.0) - joint.coincidence_at(1e-12)).abs() < 5e-3);
        assert!(at(&from_grid, 0.0) > 0.4);
    }

    #[test]
    fn rejects_mismatched_grid() {
        let w = nd::Array1::linspace(0.0, 1.0, 10);
        let grid = nd::Array2::<C64>::zeros((10, 9));
        let delay = nd::array![0.0];
        assert!(matches!(
            general_coincidence(&w, 0.1, &w, 0.1, &grid, &delay),
            Err(HomError::InvalidInput(_)),
        ));
        let grid = nd::Array2::<C64>::zeros((10, 10));
        assert!(matches!(
            general_coincidence(&w, 0.0, &w, 0.1, &grid, &delay),
            Err(HomError::InvalidParameter { name: "dfreq1", .. }),
        ));
    }
}
