//! Physical constants and unit scale factors.

// speed of light in vacuum [m / s]
pub const C: f64 = 299_792_458.0;

// unit scales, multiply a value in the named unit to get SI
pub const NM: f64 = 1e-9;
pub const UM: f64 = 1e-6;
pub const PS: f64 = 1e-12;
pub const GHZ: f64 = 1e9;

// FWHM of a Gaussian intensity profile times the spectral standard deviation
// of its amplitude [dimensionless]; equal to 2√(ln 2)
pub const FWHM_SIGMA: f64 = 1.665_109_222_315_395_5;
