//! Collection of pre-defined two-photon sources.

use spectral_hom::{
    jsa::JointParams,
    pulse::PulseParams,
};

/// Center wavelength shared by most presets (nm).
pub const LAMBDA_C: f64 = 800.0;

/// Two identical 1 ps pulses at 800 nm; the dip reaches zero.
pub fn identical_pulses() -> (PulseParams, PulseParams) {
    (PulseParams::new(LAMBDA_C, 1.0), PulseParams::new(LAMBDA_C, 1.0))
}

/// Two 1 ps pulses with centers 0.4 nm apart.
pub fn detuned_pulses() -> (PulseParams, PulseParams) {
    (PulseParams::new(LAMBDA_C, 1.0), PulseParams::new(LAMBDA_C + 0.4, 1.0))
}

/// 1 ps and 2 ps pulses at the same center wavelength.
pub fn unequal_pulses() -> (PulseParams, PulseParams) {
    (PulseParams::new(LAMBDA_C, 1.0), PulseParams::new(LAMBDA_C, 2.0))
}

/// Correlated pair from a 1 ps pump with 0.5 ps coherence time, sampled
/// finely enough for the numerical check.
pub fn correlated_pair() -> JointParams {
    JointParams::new(LAMBDA_C, 1.0, 0.5).with_samples(400)
}

/// Ordinary-axis Sellmeier coefficients of β-barium borate.
pub mod bbo {
    use spectral_hom::dispersion::Sellmeier;

    pub fn ordinary() -> Sellmeier { Sellmeier::new(2.7359, 0.01878, 0.01822, 0.01354) }

    pub fn extraordinary() -> Sellmeier { Sellmeier::new(2.3753, 0.01224, 0.01667, 0.01516) }
}
