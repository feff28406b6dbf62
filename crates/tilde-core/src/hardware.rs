//! Derived hardware and error metrics.
//!
//! Cost-estimation heuristics, not synthesis results: the gate-count
//! coefficients are reproduced exactly as published.

use crate::constants::{
    ADD_GATES, DECODER_GATES, DIV_GATES, LUT_GATES_FULL, LUT_GATES_SIMPLIFIED, MUL_GATES,
    MUX_GATES_PER_BIT, SHARED_GATES, SUB_GATES,
};
use crate::lut::lut_length;
use crate::params::{Beta, BitWidth};

/// -ln(0.5 (beta - 1)) / ln(beta). Positive below beta = 3, negative above.
#[inline]
fn alpha_ratio(beta: Beta) -> f64 {
    let b = beta.value();
    -(0.5 * (b - 1.0)).ln() / b.ln()
}

/// Number of LUT entries that matter for addition.
pub fn alpha_add(beta: Beta) -> i64 {
    alpha_ratio(beta).ceil() as i64
}

/// Number of LUT entries that matter for carry propagation.
pub fn alpha_carry(beta: Beta) -> i64 {
    alpha_ratio(beta).floor() as i64
}

/// Modelled relative error bound in percent, 100 (beta - 1) / (beta + 1).
pub fn error_percent(beta: Beta) -> f64 {
    let b = beta.value();
    100.0 * (b - 1.0) / (b + 1.0)
}

/// Gate-count breakdown for a w-bit Tilde ALU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GateCounts {
    pub shared: u64,
    pub add: u64,
    pub sub: u64,
    pub mul: u64,
    pub div: u64,
    /// Decoder plus result multiplexer.
    pub control: u64,
    pub lut: u64,
    pub total: u64,
}

#[inline]
fn linear((per_bit, offset): (u64, u64), w: u64) -> u64 {
    per_bit * w + offset
}

pub fn gate_counts(bit_width: BitWidth, beta: Beta) -> GateCounts {
    let w = bit_width.bits() as u64;
    let lut_entries = lut_length(beta);
    let per_entry = if beta.is_simplified() {
        LUT_GATES_SIMPLIFIED
    } else {
        LUT_GATES_FULL
    };

    let shared = linear(SHARED_GATES, w);
    let add = linear(ADD_GATES, w);
    let sub = linear(SUB_GATES, w);
    let mul = linear(MUL_GATES, w);
    let div = linear(DIV_GATES, w);
    let control = DECODER_GATES + MUX_GATES_PER_BIT * w;
    let lut = per_entry * lut_entries;

    GateCounts {
        shared,
        add,
        sub,
        mul,
        div,
        control,
        lut,
        total: shared + add + sub + mul + div + control + lut,
    }
}
