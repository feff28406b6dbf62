/// LUT sizing and lookup.
///
/// The correction table an approximate adder needs, as a function of beta.
/// Below the efficiency threshold the table grows as beta approaches 1
/// (Full LUT mode); at or above it a single carry condition suffices
/// (Simplified mode). `lut_length` and `lut_value` share that threshold but
/// are independent formulas: neither is derived from the other.
use std::fmt;

use smallvec::SmallVec;

use crate::constants::{FLOOR_EPSILON, LUT_LENGTH_SCALE};
use crate::params::Beta;

/// Operating regime selected by beta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LutMode {
    Simplified,
    Full,
}

impl LutMode {
    pub fn of(beta: Beta) -> Self {
        if beta.is_simplified() {
            LutMode::Simplified
        } else {
            LutMode::Full
        }
    }
}

impl fmt::Display for LutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LutMode::Simplified => write!(f, "Simplified Mode"),
            LutMode::Full => write!(f, "Full LUT Mode"),
        }
    }
}

/// Floor with a small upward nudge so exact quotients like 8 / (1.1 - 1)
/// are not lost to representation error.
#[inline]
fn floor_snapped(x: f64) -> f64 {
    (x + FLOOR_EPSILON).floor()
}

/// Number of LUT entries the hardware needs for `beta`. Always >= 1.
pub fn lut_length(beta: Beta) -> u64 {
    if beta.is_simplified() {
        return 1;
    }
    let entries = floor_snapped(LUT_LENGTH_SCALE / (beta.value() - 1.0));
    (entries as u64).max(1)
}

/// LUT correction at operand gap `d`. Zero at d = 0 for every beta.
pub fn lut_value(d: u64, beta: Beta) -> u64 {
    if beta.is_simplified() && d > 0 {
        return 1;
    }
    let steps = floor_snapped((d as f64 + 1.0).ln() / beta.value().ln());
    (steps as u64).min(d)
}

/// Table contents: `lut_value(d, beta)` for d in 0..lut_length(beta).
#[derive(Debug, Clone, PartialEq)]
pub struct LutTable {
    pub mode: LutMode,
    pub entries: SmallVec<[u64; 16]>,
}

impl LutTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn lut_table(beta: Beta) -> LutTable {
    let len = lut_length(beta);
    LutTable {
        mode: LutMode::of(beta),
        entries: (0..len).map(|d| lut_value(d, beta)).collect(),
    }
}
