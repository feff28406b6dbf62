/// Validated model parameters.
///
/// - `Beta`: base of the Tilde scheme, in [1.02, 30.0]
/// - `BitWidth`: operand width in bits, in [1, 64]
/// - `HardwareParams`: the (beta, width) pair the hardware metrics depend on
///
/// Every formula takes these types rather than raw numbers, so the beta = 1
/// singularity is rejected before a logarithm sees it.
use crate::constants::{
    BETA_MAX, BETA_MIN, EFFICIENCY_THRESHOLD, MAX_BIT_WIDTH, MIN_BIT_WIDTH, PARAM_BOUNDS,
    PARAM_NAMES,
};
use crate::error::{Result, TildeError};
use crate::traits::ModelParams;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Beta(f64);

impl Beta {
    /// Create a Beta, returning an error if the value is not in [1.02, 30.0].
    pub fn new(value: f64) -> Result<Self> {
        if !(BETA_MIN..=BETA_MAX).contains(&value) {
            return Err(TildeError::BetaOutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Create a Beta, clamping finite or infinite values into range.
    ///
    /// NaN has no sensible clamp and is still rejected.
    pub fn clamped(value: f64) -> Result<Self> {
        if value.is_nan() {
            return Err(TildeError::BetaOutOfRange { value });
        }
        Ok(Self(value.clamp(BETA_MIN, BETA_MAX)))
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// True in the Simplified regime, where one carry condition replaces the LUT.
    #[inline]
    pub fn is_simplified(self) -> bool {
        self.0 >= EFFICIENCY_THRESHOLD
    }
}

impl TryFrom<f64> for Beta {
    type Error = TildeError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Beta> for f64 {
    fn from(beta: Beta) -> f64 {
        beta.0
    }
}

/// Operand width in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i64", into = "u32")
)]
pub struct BitWidth(u32);

impl BitWidth {
    /// Create a BitWidth, returning an error outside [1, 64].
    pub fn new(value: i64) -> Result<Self> {
        if !(MIN_BIT_WIDTH as i64..=MAX_BIT_WIDTH as i64).contains(&value) {
            return Err(TildeError::BitWidthOutOfRange { value });
        }
        Ok(Self(value as u32))
    }

    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(MIN_BIT_WIDTH as i64, MAX_BIT_WIDTH as i64) as u32)
    }

    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Largest representable operand, `2^w - 1`.
    #[inline]
    pub fn max_value(self) -> u64 {
        if self.0 >= u64::BITS {
            u64::MAX
        } else {
            (1u64 << self.0) - 1
        }
    }
}

impl TryFrom<i64> for BitWidth {
    type Error = TildeError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<BitWidth> for u32 {
    fn from(width: BitWidth) -> u32 {
        width.0
    }
}

/// The inputs the hardware estimates depend on.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HardwareParams {
    pub beta: Beta,
    pub bit_width: BitWidth,
}

impl HardwareParams {
    pub fn new(beta: f64, bit_width: i64) -> Result<Self> {
        Ok(Self {
            beta: Beta::new(beta)?,
            bit_width: BitWidth::new(bit_width)?,
        })
    }
}

impl ModelParams for HardwareParams {
    const N_PARAMS: usize = 2;
    const PARAM_NAMES: &'static [&'static str] = PARAM_NAMES;
    const PARAM_BOUNDS: &'static [(f64, f64)] = PARAM_BOUNDS;

    fn from_array(arr: &[f64]) -> Result<Self> {
        if arr.len() != Self::N_PARAMS {
            return Err(TildeError::InvalidParams(format!(
                "expected {} parameters, got {}",
                Self::N_PARAMS,
                arr.len()
            )));
        }
        let width = arr[1];
        if width.fract() != 0.0 || !width.is_finite() {
            return Err(TildeError::InvalidParams(format!(
                "bit_width must be an integer, got {width}"
            )));
        }
        Self::new(arr[0], width as i64)
    }

    fn to_array(&self) -> Vec<f64> {
        vec![self.beta.value(), self.bit_width.bits() as f64]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_beta() {
        let b = Beta::new(2.5).unwrap();
        assert_eq!(b.value(), 2.5);
        assert!(b.is_simplified());
    }

    #[test]
    fn boundary_values_are_valid() {
        assert!(Beta::new(BETA_MIN).is_ok());
        assert!(Beta::new(BETA_MAX).is_ok());
        assert!(BitWidth::new(1).is_ok());
        assert!(BitWidth::new(64).is_ok());
    }

    #[test]
    fn beta_singularity_rejected() {
        assert_eq!(
            Beta::new(1.0),
            Err(TildeError::BetaOutOfRange { value: 1.0 })
        );
        assert!(Beta::new(0.5).is_err());
        assert!(Beta::new(30.5).is_err());
        assert!(Beta::new(f64::NAN).is_err());
        assert!(Beta::new(f64::INFINITY).is_err());
    }

    #[test]
    fn clamped_beta() {
        assert_eq!(Beta::clamped(1.0).unwrap().value(), BETA_MIN);
        assert_eq!(Beta::clamped(-4.0).unwrap().value(), BETA_MIN);
        assert_eq!(Beta::clamped(f64::INFINITY).unwrap().value(), BETA_MAX);
        assert_eq!(Beta::clamped(3.0).unwrap().value(), 3.0);
        assert!(Beta::clamped(f64::NAN).is_err());
    }

    #[test]
    fn threshold_is_simplified() {
        assert!(Beta::new(2.0).unwrap().is_simplified());
        assert!(!Beta::new(1.999).unwrap().is_simplified());
    }

    #[test]
    fn bit_width_bounds() {
        assert!(BitWidth::new(0).is_err());
        assert!(BitWidth::new(-3).is_err());
        assert!(BitWidth::new(65).is_err());
        assert_eq!(BitWidth::clamped(0).bits(), 1);
        assert_eq!(BitWidth::clamped(200).bits(), 64);
    }

    #[test]
    fn max_value() {
        assert_eq!(BitWidth::new(1).unwrap().max_value(), 1);
        assert_eq!(BitWidth::new(4).unwrap().max_value(), 15);
        assert_eq!(BitWidth::new(12).unwrap().max_value(), 4095);
        assert_eq!(BitWidth::new(64).unwrap().max_value(), u64::MAX);
    }

    #[test]
    fn from_array_valid() {
        let p = HardwareParams::from_array(&[2.5, 4.0]).unwrap();
        assert_eq!(p.beta.value(), 2.5);
        assert_eq!(p.bit_width.bits(), 4);
        assert_eq!(p.to_array(), vec![2.5, 4.0]);
    }

    #[test]
    fn from_array_wrong_length() {
        assert!(HardwareParams::from_array(&[2.5]).is_err());
        assert!(HardwareParams::from_array(&[2.5, 4.0, 1.0]).is_err());
    }

    #[test]
    fn from_array_fractional_width() {
        assert!(HardwareParams::from_array(&[2.5, 4.5]).is_err());
    }
}
