//! Named starting points offered by the calculator.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TildeError};
use crate::model::Inputs;
use crate::operation::Operation;
use crate::params::{Beta, BitWidth};

/// Width every preset starts from.
pub const PRESET_BIT_WIDTH: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Preset {
    /// Deep in Full LUT mode: small error, large table.
    Fine,
    Balanced,
    /// The efficiency threshold itself, the first Simplified beta.
    Threshold,
    Coarse,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Fine,
        Preset::Balanced,
        Preset::Threshold,
        Preset::Coarse,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Fine => "fine",
            Preset::Balanced => "balanced",
            Preset::Threshold => "threshold",
            Preset::Coarse => "coarse",
        }
    }

    fn beta_value(self) -> f64 {
        match self {
            Preset::Fine => 1.1,
            Preset::Balanced => 1.5,
            Preset::Threshold => 2.0,
            Preset::Coarse => 4.0,
        }
    }

    pub fn beta(self) -> Result<Beta> {
        Beta::new(self.beta_value())
    }

    pub fn bit_width(self) -> Result<BitWidth> {
        BitWidth::new(i64::from(PRESET_BIT_WIDTH))
    }

    /// Build validated inputs at this preset's beta and width.
    pub fn inputs(self, a: u64, b: u64, operation: Operation) -> Result<Inputs> {
        Inputs::new(
            self.beta_value(),
            i64::from(PRESET_BIT_WIDTH),
            a,
            b,
            operation,
        )
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = TildeError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| TildeError::InvalidParams(format!("unknown preset '{s}'")))
    }
}
