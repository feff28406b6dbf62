/// Tilde numerical constants and model contract.
///
/// Centralises all fixed values used throughout the model. The gate-count
/// coefficients reproduce the published cost heuristic and must not be tuned.

// -- Beta domain --

/// Smallest accepted base. The slider's left end maps here.
pub const BETA_MIN: f64 = 1.02;

/// Largest accepted base. The slider's right end maps here.
pub const BETA_MAX: f64 = 30.0;

/// Beta at or above which a single carry condition replaces the full LUT.
pub const EFFICIENCY_THRESHOLD: f64 = 2.0;

// -- Slider mapping --

/// Slider range covered by the logarithmic mapping.
pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 100.0;

/// `beta - 1` at the left end of the slider.
pub const SLIDER_SPAN_LOW: f64 = 0.02;

/// `beta - 1` at the right end of the slider.
pub const SLIDER_SPAN_HIGH: f64 = 29.0;

// -- LUT model --

/// Numerator of the Full LUT mode length formula: L = floor(8 / (beta - 1)).
pub const LUT_LENGTH_SCALE: f64 = 8.0;

/// Operand gap from which `add` drops the LUT correction.
pub const ADD_GAP_LIMIT: u64 = 8;

/// Absorbs representation error before flooring, so 8 / (1.1 - 1) gives 80.
pub const FLOOR_EPSILON: f64 = 1e-9;

// -- Bit width --

/// Narrowest accepted operand width.
pub const MIN_BIT_WIDTH: u32 = 1;

/// Widest accepted operand width; `2^w - 1` must fit in a u64.
pub const MAX_BIT_WIDTH: u32 = 64;

/// Width range offered by presentation controls.
pub const UI_BIT_WIDTH_RANGE: (u32, u32) = (2, 12);

/// Widest width for which a full result grid is produced (256 x 256 cells).
pub const MAX_GRID_BIT_WIDTH: u32 = 8;

// -- Gate-count heuristic (coefficient per bit, fixed offset) --

pub const SHARED_GATES: (u64, u64) = (6, 32);
pub const ADD_GATES: (u64, u64) = (3, 16);
pub const SUB_GATES: (u64, u64) = (4, 20);
pub const MUL_GATES: (u64, u64) = (2, 12);
pub const DIV_GATES: (u64, u64) = (2, 12);

/// Operation decoder cost.
pub const DECODER_GATES: u64 = 12;

/// Result multiplexer cost per bit.
pub const MUX_GATES_PER_BIT: u64 = 6;

/// Gates per LUT entry in Simplified mode.
pub const LUT_GATES_SIMPLIFIED: u64 = 4;

/// Gates per LUT entry in Full LUT mode.
pub const LUT_GATES_FULL: u64 = 12;

// -- Model contract constants --

/// Input names in order, as used by array conversions.
pub const PARAM_NAMES: &[&str] = &["beta", "bit_width"];

/// Input bounds as (min, max) tuples, in PARAM_NAMES order.
pub const PARAM_BOUNDS: &[(f64, f64)] = &[
    (BETA_MIN, BETA_MAX),                         // beta
    (MIN_BIT_WIDTH as f64, MAX_BIT_WIDTH as f64), // bit_width
];

/// Number of points in a default slider sweep (one per slider step).
pub const DEFAULT_SWEEP_POINTS: usize = 101;
