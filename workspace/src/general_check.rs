//! Cross-check the closed-form coincidence probabilities against the
//! numerical double sum over each source's sampled JSA.

use std::path::{ Path, PathBuf };
use ndarray as nd;
use spectral_hom::{
    mkdir,
    write_npz,
    coincidence::{ JointCoincidence, PairwiseCoincidence, TwoPhotonState },
    consts::PS,
    jsa::DoubleGaussianJsa,
    pulse::GaussianPulse,
};
use tracing::{ info, warn };
use lib::{ logging::init_tracing, presets };

// largest acceptable |numerical - exact| at any delay
const TOL: f64 = 5e-3;

fn check<T>(name: &str, state: &T, outdir: &Path) -> anyhow::Result<f64>
where T: TwoPhotonState
{
    let tau = state.delay_range();
    let exact: nd::Array1<f64> = state.coincidence_probability(tau);
    let numerical: nd::Array1<f64> = state.coincidence_numerical(tau)?;
    let err
        = exact.iter().zip(numerical.iter())
        .map(|(e, n)| (e - n).abs())
        .fold(0.0, f64::max);
    write_npz!(
        outdir.join(format!("{}.npz", name)),
        arrays: {
            "tau_ps" => &(tau / PS),
            "exact" => &exact,
            "numerical" => &numerical,
        }
    )?;
    if err > TOL {
        warn!(figure = name, max_error = err, tol = TOL, "numerical result disagrees");
    } else {
        info!(figure = name, max_error = err);
    }
    Ok(err)
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let outdir = PathBuf::from("output/general_check");
    mkdir!(outdir)?;

    let model = DoubleGaussianJsa::new(presets::correlated_pair())?;
    let mut worst = check("correlated", &JointCoincidence::new(&model), &outdir)?;

    for (name, (a, b)) in [
        ("identical", presets::identical_pulses()),
        ("detuned", presets::detuned_pulses()),
        ("unequal", presets::unequal_pulses()),
    ] {
        let a = GaussianPulse::new(a)?;
        let b = GaussianPulse::new(b)?;
        worst = worst.max(check(name, &PairwiseCoincidence::new(&a, &b), &outdir)?);
    }

    info!(max_error = worst, "done");
    Ok(())
}
