//! Validation policy for raw inputs.
//!
//! `Strict` rejects anything out of range with a typed error. `Lenient`
//! reproduces the calculator UI: inputs are clamped into range and an
//! unknown operation evaluates to 0. NaN beta is rejected in both modes.

use std::str::FromStr;

use crate::error::{Result, TildeError};

/// Environment variable read by [`ModelConfig::from_env`].
pub const VALIDATION_ENV: &str = "TILDE_VALIDATION";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Validation {
    #[default]
    Strict,
    Lenient,
}

impl FromStr for Validation {
    type Err = TildeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Validation::Strict),
            "lenient" => Ok(Validation::Lenient),
            other => Err(TildeError::InvalidParams(format!(
                "{VALIDATION_ENV} must be 'strict' or 'lenient', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct ModelConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub validation: Validation,
}

impl ModelConfig {
    pub const fn strict() -> Self {
        Self {
            validation: Validation::Strict,
        }
    }

    pub const fn lenient() -> Self {
        Self {
            validation: Validation::Lenient,
        }
    }

    #[inline]
    pub fn is_lenient(&self) -> bool {
        self.validation == Validation::Lenient
    }

    /// Read the policy from `TILDE_VALIDATION`, defaulting to strict when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var(VALIDATION_ENV) {
            Ok(v) => Ok(Self {
                validation: v.parse()?,
            }),
            Err(_) => Ok(Self::default()),
        }
    }
}
