pub mod logging;
pub mod presets;
