#![allow(non_snake_case)]

//! Hong-Ou-Mandel interference of photon pairs with Gaussian spectra.
//!
//! Two-photon sources are described by their joint spectral amplitude. The
//! [`coincidence`] module computes the probability of detecting one photon at
//! each output of a balanced beam splitter as a function of the delay between
//! them, both in closed form for the Gaussian sources in [`pulse`] and [`jsa`]
//! and numerically for arbitrary sampled amplitudes. [`report`] turns the
//! results into arrays for plotting, and [`config`] drives whole runs from a
//! TOML file.

#[doc(hidden)]
pub use num_complex;
#[doc(hidden)]
pub use ndarray_npy;

#[macro_use]
pub mod utils;
pub mod consts;
pub mod error;
pub mod nd_utils;
pub mod pulse;
pub mod jsa;
pub mod coincidence;
pub mod dispersion;
pub mod report;
pub mod config;

pub use error::{ HomError, HomResult };
