//! tilde-core: the Tilde approximate-arithmetic model.
//!
//! Maps the beta slider, sizes the correction LUT, evaluates the four
//! approximate operations over bounded unsigned integers, and estimates the
//! hardware cost and error bound a given beta implies. Everything is a pure
//! function of its inputs.
pub mod config;
pub mod constants;
pub mod error;
pub mod hardware;
pub mod lut;
pub mod model;
pub mod operation;
pub mod params;
pub mod presets;
pub mod slider;
pub mod sweep;
pub mod traits;

pub use config::{ModelConfig, Validation};
pub use error::{Result, TildeError};
pub use hardware::{alpha_add, alpha_carry, error_percent, gate_counts, GateCounts};
pub use lut::{lut_length, lut_table, lut_value, LutMode, LutTable};
pub use model::{evaluate, evaluate_raw, Evaluation, Inputs, RawInputs};
pub use operation::{operation_grid, Operation};
pub use params::{Beta, BitWidth, HardwareParams};
pub use presets::Preset;
pub use slider::{beta_to_slider, slider_to_beta};
pub use sweep::{BetaPoint, BetaSweep, WidthPoint, WidthSweep};
pub use traits::{ModelParams, SeriesOps, SweepModel};
