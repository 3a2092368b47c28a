use std::path::PathBuf;
use ndarray as nd;
use spectral_hom::report::{ RenderStyle, dispersion_figure };
use tracing::{ info, warn };
use lib::{ logging::init_tracing, presets::bbo };

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let outdir = PathBuf::from("output/dispersion");

    let wavelength: nd::Array1<f64> = nd::Array1::linspace(0.2, 3.0, 300); // μm
    for (name, model) in [("bbo_o", bbo::ordinary()), ("bbo_e", bbo::extraordinary())] {
        let invalid
            = wavelength.iter()
            .filter(|l| model.index_checked(**l).is_err())
            .count();
        if invalid > 0 {
            warn!(figure = name, invalid, "wavelengths outside the Sellmeier domain");
        }
        let fig = dispersion_figure(name, &model, &wavelength, RenderStyle::default());
        let path = fig.save(&outdir)?;
        info!(figure = name, n_800 = model.index_checked(0.8)?, path = %path.display());
    }

    info!("done");
    Ok(())
}
