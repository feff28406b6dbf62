/// The model's call interface.
///
/// - `evaluate()`: full derived-value set for validated inputs
/// - `evaluate_raw()`: same, from unvalidated primitives under a `ModelConfig`
///
/// Stateless: every call recomputes everything from its inputs.
use tracing::{debug, warn};

use crate::config::ModelConfig;
use crate::error::{Result, TildeError};
use crate::hardware::{alpha_add, alpha_carry, error_percent, gate_counts, GateCounts};
use crate::lut::{lut_length, LutMode};
use crate::operation::Operation;
use crate::params::{Beta, BitWidth};

/// Validated inputs for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inputs {
    pub beta: Beta,
    pub bit_width: BitWidth,
    pub a: u64,
    pub b: u64,
    pub operation: Operation,
}

impl Inputs {
    /// Create Inputs, rejecting anything out of range.
    pub fn new(beta: f64, bit_width: i64, a: u64, b: u64, operation: Operation) -> Result<Self> {
        let beta = Beta::new(beta)?;
        let bit_width = BitWidth::new(bit_width)?;
        let a = check_operand("a", a as i128, bit_width, false)?;
        let b = check_operand("b", b as i128, bit_width, false)?;
        Ok(Self {
            beta,
            bit_width,
            a,
            b,
            operation,
        })
    }
}

/// Unvalidated inputs as a presentation layer holds them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawInputs<'a> {
    pub beta: f64,
    pub bit_width: i64,
    pub a: i128,
    pub b: i128,
    pub operation: &'a str,
}

/// Every derived value for one (beta, w, a, b, operation) tuple.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    pub result: u64,
    /// `2^w - 1`, the saturation value.
    pub max_value: u64,
    pub mode: LutMode,
    pub lut_length: u64,
    pub alpha_add: i64,
    pub alpha_carry: i64,
    pub error_percent: f64,
    pub gate_counts: GateCounts,
}

fn check_operand(name: &'static str, value: i128, bit_width: BitWidth, lenient: bool) -> Result<u64> {
    let max = bit_width.max_value();
    if (0..=max as i128).contains(&value) {
        return Ok(value as u64);
    }
    if !lenient {
        return Err(TildeError::OperandOutOfRange { name, value, max });
    }
    let clamped = value.clamp(0, max as i128) as u64;
    warn!(operand = name, value = %value, clamped, "operand out of range, clamping");
    Ok(clamped)
}

fn derived_values(beta: Beta, bit_width: BitWidth, result: u64) -> Evaluation {
    Evaluation {
        result,
        max_value: bit_width.max_value(),
        mode: LutMode::of(beta),
        lut_length: lut_length(beta),
        alpha_add: alpha_add(beta),
        alpha_carry: alpha_carry(beta),
        error_percent: error_percent(beta),
        gate_counts: gate_counts(bit_width, beta),
    }
}

/// Evaluate validated inputs.
///
/// `Inputs` fields are public, so operands are rechecked against the width:
/// strict config rejects, lenient config clamps.
pub fn evaluate(inputs: &Inputs, config: &ModelConfig) -> Result<Evaluation> {
    let lenient = config.is_lenient();
    let a = check_operand("a", inputs.a as i128, inputs.bit_width, lenient)?;
    let b = check_operand("b", inputs.b as i128, inputs.bit_width, lenient)?;

    let result = inputs
        .operation
        .apply(a, b, inputs.beta, inputs.bit_width);
    debug!(
        beta = inputs.beta.value(),
        bit_width = inputs.bit_width.bits(),
        a,
        b,
        op = %inputs.operation,
        result,
        "evaluated"
    );
    Ok(derived_values(inputs.beta, inputs.bit_width, result))
}

/// Evaluate unvalidated primitives under the configured policy.
pub fn evaluate_raw(raw: &RawInputs<'_>, config: &ModelConfig) -> Result<Evaluation> {
    if !config.is_lenient() {
        let bit_width = BitWidth::new(raw.bit_width)?;
        let inputs = Inputs {
            beta: Beta::new(raw.beta)?,
            bit_width,
            a: check_operand("a", raw.a, bit_width, false)?,
            b: check_operand("b", raw.b, bit_width, false)?,
            operation: raw.operation.parse()?,
        };
        return evaluate(&inputs, config);
    }

    let beta = Beta::clamped(raw.beta)?;
    if beta.value() != raw.beta {
        warn!(value = raw.beta, clamped = beta.value(), "beta out of range, clamping");
    }
    let bit_width = BitWidth::clamped(raw.bit_width);
    if i64::from(bit_width.bits()) != raw.bit_width {
        warn!(value = raw.bit_width, clamped = bit_width.bits(), "bit_width out of range, clamping");
    }
    let a = check_operand("a", raw.a, bit_width, true)?;
    let b = check_operand("b", raw.b, bit_width, true)?;

    match raw.operation.parse::<Operation>() {
        Ok(operation) => evaluate(
            &Inputs {
                beta,
                bit_width,
                a,
                b,
                operation,
            },
            config,
        ),
        Err(e) => {
            warn!(error = %e, "unknown operation, result defaults to 0");
            Ok(derived_values(beta, bit_width, 0))
        }
    }
}
