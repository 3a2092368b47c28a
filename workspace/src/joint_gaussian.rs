use std::path::PathBuf;
use spectral_hom::{
    coincidence::{ JointCoincidence, TwoPhotonState },
    consts::PS,
    jsa::DoubleGaussianJsa,
    report::{ RenderStyle, joint_pair_figure },
};
use tracing::info;
use lib::{ logging::init_tracing, presets };

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let outdir = PathBuf::from("output/joint_gaussian");

    let model = DoubleGaussianJsa::new(presets::correlated_pair())?;
    let joint = JointCoincidence::new(&model);
    info!(
        t_p_ps = model.t_p() / PS,
        t_c_ps = model.t_c() / PS,
        samples = model.freq_range().len(),
        visibility = joint.visibility()
    );
    let fig = joint_pair_figure("correlated", &joint, RenderStyle::default())?;
    let path = fig.save(&outdir)?;
    info!(path = %path.display(), "saved");

    info!("done");
    Ok(())
}
