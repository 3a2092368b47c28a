//! Figure data for an external plotting program.
//!
//! Nothing here draws. Each figure is a set of named `f64` arrays, in the
//! units they should be plotted in, written to `<name>.npz`, plus a
//! `<name>.toml` sidecar holding the [`RenderStyle`] and any scalar
//! annotations (pulse widths, detunings, ...) the plot should display.

use std::{
    f64::consts::TAU,
    fs,
    path::{ Path, PathBuf },
};
use indexmap::IndexMap;
use ndarray::{ self as nd, Dimension };
use ndarray_npy::NpzWriter;
use serde::{ Deserialize, Serialize };
use tracing::debug;
use crate::{
    coincidence::{ JointCoincidence, PairwiseCoincidence, TwoPhotonState },
    consts::{ C, GHZ, PS, UM },
    dispersion::{ Sellmeier, wave_number_array },
    error::HomResult,
    nd_utils::{ meshgrid, normalize_peak },
};

/// Styling handed to the renderer along with each figure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub font_family: String,
    pub math_font: String,
    pub font_size: f64,
    pub tick_size: f64,
    pub legend_size: f64,
    pub cmap: String,
    pub dpi: u32,
    /// Image file extension the renderer should produce.
    pub format: String,
    /// Size (inches) of line-plot figures.
    pub line_figsize: [f64; 2],
    /// Size (inches) of color-map figures.
    pub map_figsize: [f64; 2],
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            font_family: "serif".to_string(),
            math_font: "cm".to_string(),
            font_size: 14.0,
            tick_size: 11.0,
            legend_size: 12.0,
            cmap: "GnBu".to_string(),
            dpi: 300,
            format: "pdf".to_string(),
            line_figsize: [12.0, 3.0],
            map_figsize: [4.5, 4.0],
        }
    }
}

/// Contents of a figure's `.toml` sidecar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FigureMeta {
    pub name: String,
    pub arrays: Vec<String>,
    pub style: RenderStyle,
    pub annotations: IndexMap<String, f64>,
}

/// Named arrays and annotations making up a single figure.
#[derive(Clone, Debug)]
pub struct FigureData {
    name: String,
    style: RenderStyle,
    arrays: IndexMap<String, nd::ArrayD<f64>>,
    annotations: IndexMap<String, f64>,
}

impl FigureData {
    pub fn new(name: impl Into<String>, style: RenderStyle) -> Self {
        Self {
            name: name.into(),
            style,
            arrays: IndexMap::new(),
            annotations: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn style(&self) -> &RenderStyle { &self.style }

    /// Add an array, replacing any previous one with the same key.
    pub fn add_array<D>(&mut self, key: impl Into<String>, array: nd::Array<f64, D>)
        -> &mut Self
    where D: Dimension
    {
        self.arrays.insert(key.into(), array.into_dyn());
        self
    }

    /// Add a scalar annotation, replacing any previous one with the same key.
    pub fn annotate(&mut self, key: impl Into<String>, value: f64) -> &mut Self {
        self.annotations.insert(key.into(), value);
        self
    }

    pub fn array(&self, key: &str) -> Option<&nd::ArrayD<f64>> {
        self.arrays.get(key)
    }

    pub fn annotation(&self, key: &str) -> Option<f64> {
        self.annotations.get(key).copied()
    }

    pub fn meta(&self) -> FigureMeta {
        FigureMeta {
            name: self.name.clone(),
            arrays: self.arrays.keys().cloned().collect(),
            style: self.style.clone(),
            annotations: self.annotations.clone(),
        }
    }

    /// Write `<name>.npz` and `<name>.toml` to `dir`, creating it if needed,
    /// and return the path to the `.npz` file.
    pub fn save<P>(&self, dir: P) -> HomResult<PathBuf>
    where P: AsRef<Path>
    {
        let dir = dir.as_ref();
        mkdir!(dir)?;
        let npz_path = dir.join(format!("{}.npz", self.name));
        let mut npz = NpzWriter::new(fs::File::create(&npz_path)?);
        for (key, array) in self.arrays.iter() {
            npz.add_array(key.as_str(), array)?;
        }
        npz.finish()?;
        let meta_path = dir.join(format!("{}.toml", self.name));
        fs::write(&meta_path, toml::to_string(&self.meta())?)?;
        debug!(
            figure = %self.name,
            arrays = self.arrays.len(),
            path = %npz_path.display(),
            "wrote figure data"
        );
        Ok(npz_path)
    }
}

// (ω - ω_ref) / 2π in GHz
fn detuning_ghz<S, D>(omega: &nd::ArrayBase<S, D>, omega_ref: f64)
    -> nd::Array<f64, D>
where
    S: nd::Data<Elem = f64>,
    D: Dimension,
{
    omega.mapv(|w| (w - omega_ref) / TAU / GHZ)
}

/// Temporal and spectral amplitudes of both pulses and their coincidence
/// probability.
///
/// The time axis is taken from the pulse with the larger FWHM and the
/// frequency axis from the other, so that both panels show the broader of
/// the two profiles in full. Amplitudes are magnitudes normalized to their
/// peaks; frequencies are offsets from pulse `a`'s center in GHz.
pub fn independent_pair_figure(
    name: impl Into<String>,
    pair: &PairwiseCoincidence,
    style: RenderStyle,
) -> FigureData {
    let (a, b) = (pair.pulse_a(), pair.pulse_b());
    let (tt, ww)
        = if a.fwhm() > b.fwhm() {
            (a.time_range(), b.freq_range())
        } else {
            (b.time_range(), a.freq_range())
        };
    let mut fig = FigureData::new(name, style);
    fig.add_array("t_ps", tt / PS)
        .add_array("amp_time_a", normalize_peak(&a.amplitude_time(tt).mapv(|z| z.norm())))
        .add_array("amp_time_b", normalize_peak(&b.amplitude_time(tt).mapv(|z| z.norm())))
        .add_array("detuning_ghz", detuning_ghz(ww, a.omega_c()))
        .add_array("amp_freq_a", normalize_peak(&a.amplitude_freq(ww)))
        .add_array("amp_freq_b", normalize_peak(&b.amplitude_freq(ww)))
        .add_array("tau_ps", pair.delay_range() / PS)
        .add_array("coincidence", pair.coincidence_probability(pair.delay_range()))
        .annotate("fwhm_a_ps", a.fwhm())
        .annotate("fwhm_b_ps", b.fwhm())
        .annotate("detuning_ghz", a.detuning(b) / TAU / GHZ)
        .annotate("visibility", pair.visibility());
    fig
}

/// Magnitude of the joint spectral amplitude over the model's frequency grid
/// and the coincidence probability.
///
/// `w1_ghz` and `w2_ghz` are "xy"-ordered coordinate matrices (see
/// [`meshgrid`]) of offsets from the center frequency in GHz; `jsa_abs` is
/// normalized to its peak.
pub fn joint_pair_figure(
    name: impl Into<String>,
    joint: &JointCoincidence,
    style: RenderStyle,
) -> HomResult<FigureData> {
    let model = joint.model();
    let ww = model.freq_range();
    let (w1, w2) = meshgrid(ww, ww);
    let jsa = model.joint_spectral_amplitude_array(&w1, &w2)?;
    let mut fig = FigureData::new(name, style);
    fig.add_array("w1_ghz", detuning_ghz(&w1, model.omega_c()))
        .add_array("w2_ghz", detuning_ghz(&w2, model.omega_c()))
        .add_array("jsa_abs", normalize_peak(&jsa.mapv(f64::abs)))
        .add_array("tau_ps", joint.delay_range() / PS)
        .add_array("coincidence", joint.coincidence_probability(joint.delay_range()))
        .annotate("t_p_ps", model.t_p() / PS)
        .annotate("t_c_ps", model.t_c() / PS)
        .annotate("visibility", joint.visibility());
    Ok(fig)
}

/// Refractive index and wave number of a Sellmeier model over a wavelength
/// sweep (μm).
///
/// Wavelengths outside the model's domain appear as NaN in both arrays.
pub fn dispersion_figure(
    name: impl Into<String>,
    model: &Sellmeier,
    wavelength: &nd::Array1<f64>,
    style: RenderStyle,
) -> FigureData {
    let omega = wavelength.mapv(|l| TAU * C / (l * UM));
    let mut fig = FigureData::new(name, style);
    fig.add_array("wavelength_um", wavelength.clone())
        .add_array("index", model.index_array(wavelength))
        .add_array("wave_number", wave_number_array(model, &omega))
        .annotate("a1", model.a1)
        .annotate("a2", model.a2)
        .annotate("a3", model.a3)
        .annotate("a4", model.a4);
    fig
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{ jsa::DoubleGaussianJsa, pulse::GaussianPulse };

    #[test]
    fn independent_figure_axes() {
        let a = GaussianPulse::from_parts(800.0, 1.0).unwrap();
        let b = GaussianPulse::from_parts(800.0, 2.0).unwrap();
        let pair = PairwiseCoincidence::new(&a, &b);
        let fig = independent_pair_figure("fig2", &pair, RenderStyle::default());
        // time axis from the wider pulse
        let t = fig.array("t_ps").unwrap();
        assert!((t[[0]] + 3.5 / b.sigma() / PS).abs() < 1e-9);
        let amp = fig.array("amp_time_b").unwrap();
        assert!(amp.iter().all(|x| *x <= 1.0) && amp.iter().any(|x| *x > 0.999));
        assert_eq!(fig.array("coincidence").unwrap().len(), 100);
        assert_eq!(fig.annotation("fwhm_b_ps"), Some(2.0));
        assert_eq!(fig.annotation("detuning_ghz"), Some(0.0));
    }

    #[test]
    fn joint_figure_grid() {
        let model = DoubleGaussianJsa::from_parts(800.0, 1.0, 0.5).unwrap();
        let joint = JointCoincidence::new(&model);
        let fig = joint_pair_figure("fig3", &joint, RenderStyle::default()).unwrap();
        let jsa = fig.array("jsa_abs").unwrap();
        assert_eq!(jsa.shape(), &[100, 100]);
        assert!((jsa.iter().cloned().fold(0.0, f64::max) - 1.0).abs() < 1e-15);
        let w1 = fig.array("w1_ghz").unwrap();
        // -2/T_c from center, in GHz
        let expected = -2.0 / model.t_c() / TAU / GHZ;
        assert!((w1[[0, 0]] - expected).abs() < 1e-6);
        assert_eq!(fig.annotation("t_c_ps"), Some(0.5));
    }

    #[test]
    fn dispersion_figure_marks_invalid_wavelengths() {
        let model = Sellmeier::new(2.7359, 0.01878, 0.01822, 0.01354);
        let l = nd::array![0.8, 15.0];
        let fig = dispersion_figure("bbo", &model, &l, RenderStyle::default());
        let n = fig.array("index").unwrap();
        assert!(n[[0]] > 1.6 && n[[1]].is_nan());
        let k = fig.array("wave_number").unwrap();
        assert!(k[[1]].is_nan());
        let k_800 = crate::dispersion::wave_number(&model, TAU * C / (0.8 * UM));
        assert!((k[[0]] - k_800).abs() <= 1e-12 * k_800);
    }

    #[test]
    fn save_writes_data_and_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let mut fig = FigureData::new("test_fig", RenderStyle::default());
        fig.add_array("x", nd::Array1::linspace(0.0, 1.0, 4))
            .add_array("y", nd::Array2::<f64>::zeros((2, 2)))
            .annotate("k", 1.5);
        let out = dir.path().join("nested");
        let npz = fig.save(&out).unwrap();
        assert_eq!(npz, out.join("test_fig.npz"));
        assert!(npz.is_file());
        let text = fs::read_to_string(out.join("test_fig.toml")).unwrap();
        let meta: FigureMeta = toml::from_str(&text).unwrap();
        assert_eq!(meta, fig.meta());
        assert_eq!(meta.arrays, vec!["x".to_string(), "y".to_string()]);
    }
}
