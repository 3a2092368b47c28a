//! Run configuration read from TOML.
//!
//! ```toml
//! [output]
//! dir = "output/hom"
//!
//! [render]
//! font_size = 16.0
//!
//! [sources.identical]
//! kind = "independent"
//! a = { lambda_c = 800.0, fwhm = 1.0 }
//! b = { lambda_c = 800.0, fwhm = 1.0 }
//!
//! [sources.entangled]
//! kind = "joint"
//! lambda_c = 800.0
//! pulse_duration = 1.0
//! coherence_time = 0.5
//! samples = 400
//!
//! [materials.bbo_o]
//! a1 = 2.7359
//! a2 = 0.01878
//! a3 = 0.01822
//! a4 = 0.01354
//! wavelengths = { start = 0.4, stop = 2.0, samples = 200 }
//! ```
//!
//! Sources and materials are kept in the order they appear in the file.

use std::{ fs, path::{ Path, PathBuf } };
use indexmap::IndexMap;
use ndarray as nd;
use serde::{ Deserialize, Serialize };
use tracing::debug;
use crate::{
    coincidence::{ JointCoincidence, PairwiseCoincidence },
    dispersion::Sellmeier,
    error::{ HomResult, nonzero, positive },
    jsa::{ DoubleGaussianJsa, JointParams },
    pulse::{ GaussianPulse, PulseParams },
    report::{
        FigureData,
        RenderStyle,
        dispersion_figure,
        independent_pair_figure,
        joint_pair_figure,
    },
};

/// Where figure data is written.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self { Self { dir: PathBuf::from("output") } }
}

/// A two-photon source to evaluate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    /// Two independent Gaussian pulses.
    Independent {
        a: PulseParams,
        b: PulseParams,
        /// Delay-axis half-width in units of the larger FWHM.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        delay_span: Option<f64>,
    },
    /// A correlated pair with a double-Gaussian JSA.
    Joint {
        #[serde(flatten)]
        params: JointParams,
        /// Delay-axis half-width in units of `T_c`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        delay_span: Option<f64>,
    },
}

impl SourceConfig {
    /// Build the source's models and compute its figure data.
    ///
    /// Invalid physical parameters surface here as
    /// [`InvalidParameter`][crate::error::HomError::InvalidParameter].
    pub fn figure(&self, name: &str, style: &RenderStyle)
        -> HomResult<FigureData>
    {
        match self {
            Self::Independent { a, b, delay_span } => {
                let a = GaussianPulse::new(*a)?;
                let b = GaussianPulse::new(*b)?;
                let mut pair = PairwiseCoincidence::new(&a, &b);
                if let Some(span) = delay_span {
                    pair = pair.with_delay_span(*span)?;
                }
                Ok(independent_pair_figure(name, &pair, style.clone()))
            },
            Self::Joint { params, delay_span } => {
                let model = DoubleGaussianJsa::new(*params)?;
                let mut joint = JointCoincidence::new(&model);
                if let Some(span) = delay_span {
                    joint = joint.with_delay_span(*span)?;
                }
                joint_pair_figure(name, &joint, style.clone())
            },
        }
    }
}

/// A uniform wavelength sweep (μm), endpoints included.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sweep {
    pub start: f64,
    pub stop: f64,
    pub samples: usize,
}

impl Default for Sweep {
    fn default() -> Self { Self { start: 0.4, stop: 2.0, samples: 200 } }
}

impl Sweep {
    pub fn to_array(&self) -> HomResult<nd::Array1<f64>> {
        let start = positive("start", self.start)?;
        let stop = positive("stop", self.stop)?;
        let samples = nonzero("samples", self.samples)?;
        Ok(nd::Array1::linspace(start, stop, samples))
    }
}

/// Sellmeier coefficients of a material and the wavelengths to tabulate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialConfig {
    #[serde(flatten)]
    pub sellmeier: Sellmeier,
    #[serde(default)]
    pub wavelengths: Sweep,
}

impl MaterialConfig {
    pub fn figure(&self, name: &str, style: &RenderStyle)
        -> HomResult<FigureData>
    {
        let wavelength = self.wavelengths.to_array()?;
        Ok(dispersion_figure(name, &self.sellmeier, &wavelength, style.clone()))
    }
}

/// Top-level run configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomConfig {
    pub output: OutputConfig,
    pub render: RenderStyle,
    pub sources: IndexMap<String, SourceConfig>,
    pub materials: IndexMap<String, MaterialConfig>,
}

impl HomConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> HomResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a configuration file.
    pub fn load<P>(path: P) -> HomResult<Self>
    where P: AsRef<Path>
    {
        let path = path.as_ref();
        let config = Self::from_toml(&fs::read_to_string(path)?)?;
        debug!(
            path = %path.display(),
            sources = config.sources.len(),
            materials = config.materials.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Render the configuration as TOML text.
    pub fn to_toml(&self) -> HomResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Compute figure data for every source and material, in file order.
    ///
    /// Stops at the first entry whose parameters are invalid.
    pub fn figures(&self) -> HomResult<Vec<FigureData>> {
        let sources
            = self.sources.iter()
            .map(|(name, source)| source.figure(name, &self.render));
        let materials
            = self.materials.iter()
            .map(|(name, material)| material.figure(name, &self.render));
        sources.chain(materials).collect()
    }
}
