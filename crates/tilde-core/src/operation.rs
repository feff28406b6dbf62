/// Approximate binary operations.
///
/// Not true arithmetic: a hardware-cost proxy. Addition and subtraction of
/// near neighbours are corrected from the LUT; multiplication and division
/// reduce to index arithmetic on the exponent representation (`a + b - 1`,
/// `a - b + 1`). Every result is clamped into [0, 2^w - 1].
use std::fmt;
use std::str::FromStr;

use crate::constants::{ADD_GAP_LIMIT, MAX_GRID_BIT_WIDTH};
use crate::error::{Result, TildeError};
use crate::lut::lut_value;
use crate::params::{Beta, BitWidth};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Div => "div",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Sub => "−",
            Operation::Mul => "×",
            Operation::Div => "÷",
        }
    }

    /// Apply the operation to validated operands.
    ///
    /// Callers guarantee `a, b <= bit_width.max_value()`.
    pub fn apply(self, a: u64, b: u64, beta: Beta, bit_width: BitWidth) -> u64 {
        let max_value = bit_width.max_value();
        let (a, b) = (a as i128, b as i128);
        let d = (a - b).unsigned_abs() as u64;
        let m = a.max(b);

        let res: i128 = match self {
            Operation::Add => {
                if a == 0 || b == 0 {
                    m
                } else if d < ADD_GAP_LIMIT {
                    m + lut_value(d, beta) as i128
                } else {
                    m
                }
            }
            Operation::Sub => {
                if a == b {
                    0
                } else if a == 0 || b == 0 {
                    m
                } else {
                    m - lut_value(d, beta) as i128
                }
            }
            Operation::Mul => {
                if a == 0 || b == 0 {
                    0
                } else if a == 1 || b == 1 {
                    m
                } else {
                    a + b - 1
                }
            }
            Operation::Div => {
                if a == 0 {
                    0
                } else if b == 0 {
                    // Saturate: stands in for infinity.
                    max_value as i128
                } else if a == b {
                    1
                } else {
                    a - b + 1
                }
            }
        };

        res.clamp(0, max_value as i128) as u64
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = TildeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(Operation::Add),
            "sub" | "-" | "−" => Ok(Operation::Sub),
            "mul" | "*" | "×" => Ok(Operation::Mul),
            "div" | "/" | "÷" => Ok(Operation::Div),
            _ => Err(TildeError::InvalidOperation(s.to_string())),
        }
    }
}

/// Full result table for every operand pair, row-major with `a` as the row.
///
/// Limited to narrow widths: a w-bit grid has 4^w cells.
pub fn operation_grid(op: Operation, beta: Beta, bit_width: BitWidth) -> Result<Vec<Vec<u64>>> {
    if bit_width.bits() > MAX_GRID_BIT_WIDTH {
        return Err(TildeError::GridTooWide {
            bit_width: bit_width.bits(),
            max: MAX_GRID_BIT_WIDTH,
        });
    }
    let max_value = bit_width.max_value();
    Ok((0..=max_value)
        .map(|a| {
            (0..=max_value)
                .map(|b| op.apply(a, b, beta, bit_width))
                .collect()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beta(v: f64) -> Beta {
        Beta::new(v).unwrap()
    }

    fn width(w: i64) -> BitWidth {
        BitWidth::new(w).unwrap()
    }

    fn run(op: Operation, a: u64, b: u64) -> u64 {
        op.apply(a, b, beta(2.5), width(4))
    }

    // -- Add --

    #[test]
    fn add_near_neighbours_use_lut() {
        // d = 2, m = 5, lut_value(2, 2.5) = 1
        assert_eq!(run(Operation::Add, 5, 3), 6);
    }

    #[test]
    fn add_with_zero_returns_max_operand() {
        assert_eq!(run(Operation::Add, 0, 9), 9);
        assert_eq!(run(Operation::Add, 9, 0), 9);
    }

    #[test]
    fn add_equal_operands_gets_no_correction() {
        // d = 0 -> lut_value = 0
        assert_eq!(run(Operation::Add, 6, 6), 6);
    }

    #[test]
    fn add_wide_gap_drops_correction() {
        // d = 8 is at the cutoff
        assert_eq!(run(Operation::Add, 10, 2), 10);
        // d = 7 still corrected
        assert_eq!(run(Operation::Add, 9, 2), 10);
    }

    #[test]
    fn add_clamps_at_max_value() {
        assert_eq!(run(Operation::Add, 15, 14), 15);
    }

    #[test]
    fn add_full_lut_mode() {
        // beta = 1.5: lut_value(3, 1.5) = 3
        assert_eq!(Operation::Add.apply(7, 4, beta(1.5), width(8)), 10);
    }

    // -- Sub --

    #[test]
    fn sub_equal_is_zero() {
        assert_eq!(run(Operation::Sub, 7, 7), 0);
        assert_eq!(run(Operation::Sub, 0, 0), 0);
    }

    #[test]
    fn sub_with_zero_returns_max_operand() {
        assert_eq!(run(Operation::Sub, 0, 5), 5);
        assert_eq!(run(Operation::Sub, 5, 0), 5);
    }

    #[test]
    fn sub_subtracts_lut_value() {
        assert_eq!(run(Operation::Sub, 9, 3), 8);
        assert_eq!(Operation::Sub.apply(7, 4, beta(1.5), width(8)), 4);
    }

    // -- Mul --

    #[test]
    fn mul_known_values() {
        assert_eq!(run(Operation::Mul, 0, 9), 0);
        assert_eq!(run(Operation::Mul, 1, 9), 9);
        assert_eq!(run(Operation::Mul, 3, 4), 6);
    }

    #[test]
    fn mul_clamps_at_max_value() {
        assert_eq!(run(Operation::Mul, 12, 13), 15);
    }

    // -- Div --

    #[test]
    fn div_known_values() {
        assert_eq!(run(Operation::Div, 0, 5), 0);
        assert_eq!(run(Operation::Div, 5, 0), 15);
        assert_eq!(run(Operation::Div, 5, 5), 1);
        assert_eq!(run(Operation::Div, 7, 3), 5);
    }

    #[test]
    fn div_clamps_at_zero() {
        // 2 - 9 + 1 = -6
        assert_eq!(run(Operation::Div, 2, 9), 0);
    }

    #[test]
    fn full_width_does_not_overflow() {
        let w = width(64);
        let max = u64::MAX;
        assert_eq!(Operation::Mul.apply(max, max, beta(2.5), w), max);
        assert_eq!(Operation::Div.apply(max, 0, beta(2.5), w), max);
        assert_eq!(Operation::Div.apply(1, max, beta(2.5), w), 0);
        assert_eq!(Operation::Add.apply(max, max - 1, beta(2.5), w), max);
    }

    #[test]
    fn results_stay_in_range() {
        for &b in &[1.02, 1.5, 2.0, 30.0] {
            for w in 1..=5 {
                let grid_width = width(w);
                let max = grid_width.max_value();
                for op in Operation::ALL {
                    for a in 0..=max {
                        for bb in 0..=max {
                            assert!(op.apply(a, bb, beta(b), grid_width) <= max);
                        }
                    }
                }
            }
        }
    }

    // -- Parsing --

    #[test]
    fn parse_names_and_symbols() {
        assert_eq!("add".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!(" SUB ".parse::<Operation>().unwrap(), Operation::Sub);
        assert_eq!("×".parse::<Operation>().unwrap(), Operation::Mul);
        assert_eq!("/".parse::<Operation>().unwrap(), Operation::Div);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            "pow".parse::<Operation>(),
            Err(TildeError::InvalidOperation("pow".into()))
        );
        assert!("".parse::<Operation>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
            assert_eq!(op.symbol().parse::<Operation>().unwrap(), op);
        }
    }

    // -- Grid --

    #[test]
    fn grid_shape_and_cells() {
        let grid = operation_grid(Operation::Div, beta(2.5), width(3)).unwrap();
        assert_eq!(grid.len(), 8);
        assert!(grid.iter().all(|row| row.len() == 8));
        assert_eq!(grid[7][3], 5);
        assert_eq!(grid[5][0], 7);
        assert_eq!(grid[0][5], 0);
    }

    #[test]
    fn grid_rejects_wide_widths() {
        assert_eq!(
            operation_grid(Operation::Add, beta(2.5), width(9)),
            Err(TildeError::GridTooWide {
                bit_width: 9,
                max: 8
            })
        );
    }
}
