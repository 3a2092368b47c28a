//! Sampling axes and grid helpers over `ndarray` arrays.

use ndarray::{ self as nd, Dimension };

/// Generate `n` uniformly spaced samples `start + k * step` for `k` in
/// `0..n`.
///
/// Unlike [`nd::Array1::range`], the number of samples is fixed up front, so
/// rounding in `(stop - start) / step` can never add or drop a point.
pub fn sample_range(start: f64, step: f64, n: usize) -> nd::Array1<f64> {
    (0..n).map(|k| start + k as f64 * step).collect()
}

/// Generate `n` samples covering `[center - half_width, center + half_width)`
/// with step `2 * half_width / n`.
///
/// The upper end is excluded, so the axis is not symmetric about `center`: it
/// holds `center - half_width` but stops one step short of
/// `center + half_width`.
pub fn centered_range(center: f64, half_width: f64, n: usize)
    -> nd::Array1<f64>
{
    sample_range(center - half_width, 2.0 * half_width / n as f64, n)
}

/// Return the uniform step of a sampled axis, or `None` if the axis has fewer
/// than two points or its spacing varies by more than `rtol` relative to the
/// first step.
#[cfg(test)]
pub(crate) fn uniform_step(x: &nd::Array1<f64>, rtol: f64) -> Option<f64> {
    if x.len() < 2 { return None; }
    let dx = x[1] - x[0];
    x.iter().zip(x.iter().skip(1))
        .all(|(xk, xkp1)| ((*xkp1 - *xk) - dx).abs() <= rtol * dx.abs())
        .then_some(dx)
}

/// Return coordinate matrices for a 2D grid in "xy" order: both outputs have
/// shape `(y.len(), x.len())`, with `X[[i, j]] = x[j]` and `Y[[i, j]] = y[i]`.
pub fn meshgrid(x: &nd::Array1<f64>, y: &nd::Array1<f64>)
    -> (nd::Array2<f64>, nd::Array2<f64>)
{
    let shape = (y.len(), x.len());
    let X = nd::Array2::from_shape_fn(shape, |(_, j)| x[j]);
    let Y = nd::Array2::from_shape_fn(shape, |(i, _)| y[i]);
    (X, Y)
}

/// Riemann sum `Σ y * dx` of a uniformly sampled function.
#[cfg(test)]
pub(crate) fn riemann<S, D>(y: &nd::ArrayBase<S, D>, dx: f64) -> f64
where
    S: nd::Data<Elem = f64>,
    D: Dimension,
{
    y.sum() * dx
}

/// Divide every element by the largest magnitude in the array.
///
/// Arrays that are empty or identically zero are returned unchanged.
pub fn normalize_peak<S, D>(a: &nd::ArrayBase<S, D>) -> nd::Array<f64, D>
where
    S: nd::Data<Elem = f64>,
    D: Dimension,
{
    let peak: f64 = a.iter().fold(0.0, |acc, x| acc.max(x.abs()));
    if peak > 0.0 { a.mapv(|x| x / peak) } else { a.to_owned() }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn centered_range_has_fixed_length() {
        // 7σ / (7σ / 100) can round past 100 in floating point; the sample
        // count must not follow it
        let sigma = 1.665109222315395e12;
        let w = centered_range(2.35e15, 3.5 * sigma, 100);
        assert_eq!(w.len(), 100);
        assert!((w[0] - (2.35e15 - 3.5 * sigma)).abs() < 1.0);
        let step = uniform_step(&w, 1e-6).unwrap();
        assert!((step - 7.0 * sigma / 100.0).abs() / step < 1e-9);
        assert!(w[99] < 2.35e15 + 3.5 * sigma);
    }

    #[test]
    fn uniform_step_detects_irregular_axes() {
        let x = nd::array![0.0, 1.0, 2.0, 3.5];
        assert_eq!(uniform_step(&x, 1e-9), None);
        assert_eq!(uniform_step(&nd::array![1.0], 1e-9), None);
        assert_eq!(uniform_step(&nd::array![0.0, 0.5, 1.0], 1e-9), Some(0.5));
    }

    #[test]
    fn meshgrid_xy_order() {
        let x = nd::array![1.0, 2.0, 3.0];
        let y = nd::array![10.0, 20.0];
        let (xx, yy) = meshgrid(&x, &y);
        assert_eq!(xx.dim(), (2, 3));
        assert_eq!(xx[[1, 2]], 3.0);
        assert_eq!(yy[[1, 2]], 20.0);
    }

    #[test]
    fn normalize_peak_uses_magnitude() {
        let a = nd::array![-4.0, 1.0, 2.0];
        assert_eq!(normalize_peak(&a), nd::array![-1.0, 0.25, 0.5]);
        let z = nd::Array1::<f64>::zeros(3);
        assert_eq!(normalize_peak(&z), z);
    }
}
