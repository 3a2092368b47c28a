//! Visibility of the dip between a fixed 1 ps pulse and a second pulse over a
//! grid of center detunings and widths.

use std::path::PathBuf;
use itertools::Itertools;
use ndarray as nd;
use rayon::prelude::*;
use spectral_hom::{
    mkdir,
    write_npz,
    coincidence::{ PairwiseCoincidence, TwoPhotonState },
    pulse::{ GaussianPulse, PulseParams },
};
use tracing::info;
use lib::{ logging::init_tracing, presets::LAMBDA_C };

const FWHM_A: f64 = 1.0; // ps
const N_DETUNE: usize = 201;
const N_FWHM: usize = 100;

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let outdir = PathBuf::from("output/detuning_scan");
    mkdir!(outdir)?;

    let detuning: nd::Array1<f64> = nd::Array1::linspace(-1.0, 1.0, N_DETUNE); // nm
    let fwhm_b: nd::Array1<f64> = nd::Array1::linspace(0.2, 5.0, N_FWHM); // ps
    let a = GaussianPulse::new(PulseParams::new(LAMBDA_C, FWHM_A))?;

    let visibility: Vec<f64>
        = detuning.iter().cartesian_product(fwhm_b.iter())
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|(dl, fb)| -> anyhow::Result<f64> {
            let b = GaussianPulse::new(PulseParams::new(LAMBDA_C + dl, *fb))?;
            Ok(PairwiseCoincidence::new(&a, &b).visibility())
        })
        .collect::<anyhow::Result<_>>()?;
    let visibility: nd::Array2<f64>
        = nd::Array2::from_shape_vec((N_DETUNE, N_FWHM), visibility)?;
    let best
        = visibility.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    info!(points = visibility.len(), max_visibility = best);

    write_npz!(
        outdir.join("data.npz"),
        arrays: {
            "detuning_nm" => &detuning,
            "fwhm_b_ps" => &fwhm_b,
            "visibility" => &visibility,
        }
    )?;

    info!("done");
    Ok(())
}
