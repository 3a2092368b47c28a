use std::path::PathBuf;
use spectral_hom::{
    coincidence::{ PairwiseCoincidence, TwoPhotonState },
    pulse::GaussianPulse,
    report::{ RenderStyle, independent_pair_figure },
};
use tracing::info;
use lib::{ logging::init_tracing, presets };

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let outdir = PathBuf::from("output/independent_gaussian");

    let pairs = [
        ("identical", presets::identical_pulses()),
        ("detuned", presets::detuned_pulses()),
        ("unequal", presets::unequal_pulses()),
    ];
    for (name, (a, b)) in pairs {
        let a = GaussianPulse::new(a)?;
        let b = GaussianPulse::new(b)?;
        let pair = PairwiseCoincidence::new(&a, &b);
        info!(
            figure = name,
            fwhm_a = a.fwhm(),
            fwhm_b = b.fwhm(),
            p0 = pair.coincidence_at(0.0),
            visibility = pair.visibility()
        );
        let fig = independent_pair_figure(name, &pair, RenderStyle::default());
        let path = fig.save(&outdir)?;
        info!(path = %path.display(), "saved");
    }

    info!("done");
    Ok(())
}
