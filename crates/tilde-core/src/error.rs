//! Typed errors for model inputs.
//!
//! Every entry point validates before any formula runs, so a bad input is a
//! declared error rather than a NaN or a silently clamped result.

use thiserror::Error;

use crate::constants::{BETA_MAX, BETA_MIN, MAX_BIT_WIDTH, MIN_BIT_WIDTH};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TildeError {
    #[error("beta = {value} is out of bounds [{}, {}]", BETA_MIN, BETA_MAX)]
    BetaOutOfRange { value: f64 },

    #[error("bit_width = {value} is out of bounds [{}, {}]", MIN_BIT_WIDTH, MAX_BIT_WIDTH)]
    BitWidthOutOfRange { value: i64 },

    #[error("{name} = {value} is out of bounds [0, {max}]")]
    OperandOutOfRange {
        name: &'static str,
        value: i128,
        max: u64,
    },

    #[error("unknown operation '{0}', expected one of add, sub, mul, div")]
    InvalidOperation(String),

    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error("slider position is not a finite number")]
    SliderNotFinite,

    #[error("a sweep needs at least 2 points, got {requested}")]
    SweepTooShort { requested: usize },

    #[error("result grid is limited to bit_width <= {max}, got {bit_width}")]
    GridTooWide { bit_width: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, TildeError>;
