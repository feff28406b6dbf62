/// Metric sweeps for chart series.
///
/// - `BetaSweep`: every beta-dependent metric along a list of beta values
/// - `WidthSweep`: the gate-count breakdown along a list of bit widths, at fixed beta
///
/// Points are flat `f64` records so the derived series can hand columns
/// straight to a plotting layer.
use tilde_macros::Columns;

use crate::constants::SLIDER_MAX;
use crate::error::{Result, TildeError};
use crate::hardware::{alpha_add, alpha_carry, error_percent, gate_counts};
use crate::lut::lut_length;
use crate::params::{Beta, BitWidth};
use crate::slider::{beta_to_slider, slider_to_beta};
use crate::traits::{SeriesOps, SweepModel};

/// Beta-dependent metrics at one beta.
#[derive(Debug, Clone, Copy, PartialEq, Columns)]
pub struct BetaPoint {
    pub beta: f64,
    pub slider: f64,
    pub lut_length: f64,
    pub alpha_add: f64,
    pub alpha_carry: f64,
    pub error_percent: f64,
    pub lut_gates: f64,
    pub total_gates: f64,
}

/// Gate-count breakdown at one bit width.
#[derive(Debug, Clone, Copy, PartialEq, Columns)]
pub struct WidthPoint {
    pub bit_width: f64,
    pub shared: f64,
    pub add: f64,
    pub sub: f64,
    pub mul: f64,
    pub div: f64,
    pub control: f64,
    pub lut: f64,
    pub total: f64,
}

impl SeriesOps<BetaPoint> for BetaPointSeries {
    fn with_capacity(n: usize) -> Self {
        BetaPointSeries::with_capacity(n)
    }
    fn push(&mut self, p: &BetaPoint) {
        BetaPointSeries::push(self, p)
    }
    fn len(&self) -> usize {
        BetaPointSeries::len(self)
    }
    fn is_empty(&self) -> bool {
        BetaPointSeries::is_empty(self)
    }
}

impl SeriesOps<WidthPoint> for WidthPointSeries {
    fn with_capacity(n: usize) -> Self {
        WidthPointSeries::with_capacity(n)
    }
    fn push(&mut self, p: &WidthPoint) {
        WidthPointSeries::push(self, p)
    }
    fn len(&self) -> usize {
        WidthPointSeries::len(self)
    }
    fn is_empty(&self) -> bool {
        WidthPointSeries::is_empty(self)
    }
}

/// Sweep over beta at a fixed bit width (the width only affects `total_gates`).
#[derive(Debug, Clone, Copy)]
pub struct BetaSweep {
    pub bit_width: BitWidth,
}

impl SweepModel for BetaSweep {
    type Axis = Beta;
    type Point = BetaPoint;
    type Series = BetaPointSeries;

    fn point(&self, beta: Beta) -> BetaPoint {
        let gates = gate_counts(self.bit_width, beta);
        BetaPoint {
            beta: beta.value(),
            // Beta is already validated, so the mapping cannot fail.
            slider: beta_to_slider(beta.value()).unwrap_or_default(),
            lut_length: lut_length(beta) as f64,
            alpha_add: alpha_add(beta) as f64,
            alpha_carry: alpha_carry(beta) as f64,
            error_percent: error_percent(beta),
            lut_gates: gates.lut as f64,
            total_gates: gates.total as f64,
        }
    }
}

/// Sweep over bit width at a fixed beta.
#[derive(Debug, Clone, Copy)]
pub struct WidthSweep {
    pub beta: Beta,
}

impl SweepModel for WidthSweep {
    type Axis = BitWidth;
    type Point = WidthPoint;
    type Series = WidthPointSeries;

    fn point(&self, bit_width: BitWidth) -> WidthPoint {
        let g = gate_counts(bit_width, self.beta);
        WidthPoint {
            bit_width: bit_width.bits() as f64,
            shared: g.shared as f64,
            add: g.add as f64,
            sub: g.sub as f64,
            mul: g.mul as f64,
            div: g.div as f64,
            control: g.control as f64,
            lut: g.lut as f64,
            total: g.total as f64,
        }
    }
}

/// `n` beta values evenly spaced in slider space, both ends included.
pub fn slider_betas(n: usize) -> Result<Vec<Beta>> {
    if n < 2 {
        return Err(TildeError::SweepTooShort { requested: n });
    }
    let step = SLIDER_MAX / (n - 1) as f64;
    (0..n).map(|i| slider_to_beta(i as f64 * step)).collect()
}

/// Every width in `lo..=hi`, validated.
pub fn width_range(lo: i64, hi: i64) -> Result<Vec<BitWidth>> {
    (lo..=hi).map(BitWidth::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BETA_MAX, BETA_MIN, DEFAULT_SWEEP_POINTS};
    use approx::assert_relative_eq;

    #[test]
    fn slider_betas_span_range() {
        let betas = slider_betas(DEFAULT_SWEEP_POINTS).unwrap();
        assert_eq!(betas.len(), 101);
        assert_relative_eq!(betas[0].value(), BETA_MIN, epsilon = 1e-12);
        assert_relative_eq!(betas[100].value(), BETA_MAX, epsilon = 1e-12);
        assert!(betas.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn slider_betas_too_short() {
        assert_eq!(
            slider_betas(1),
            Err(TildeError::SweepTooShort { requested: 1 })
        );
    }

    #[test]
    fn beta_sweep_columns() {
        let sweep = BetaSweep {
            bit_width: BitWidth::new(4).unwrap(),
        };
        let betas = [Beta::new(1.5).unwrap(), Beta::new(2.5).unwrap()];
        let series = sweep.sweep(&betas);
        assert_eq!(series.len(), 2);
        assert_eq!(series.lut_length, vec![16.0, 1.0]);
        assert_eq!(series.lut_gates, vec![192.0, 4.0]);
        assert_eq!(series.total_gates, vec![388.0, 200.0]);
        assert_eq!(series.column("alpha_add"), Some(&[4.0, 1.0][..]));
    }

    #[test]
    fn beta_sweep_slider_column_matches_mapping() {
        let sweep = BetaSweep {
            bit_width: BitWidth::new(8).unwrap(),
        };
        let betas = slider_betas(11).unwrap();
        let series = sweep.sweep(&betas);
        for (i, s) in series.slider.iter().enumerate() {
            assert_relative_eq!(*s, i as f64 * 10.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn width_sweep_totals() {
        let sweep = WidthSweep {
            beta: Beta::new(2.5).unwrap(),
        };
        let widths = width_range(2, 12).unwrap();
        let series = sweep.sweep(&widths);
        assert_eq!(series.len(), 11);
        assert_eq!(series.bit_width[2], 4.0);
        assert_eq!(series.total[2], 200.0);
        // Each extra bit adds 6 + 3 + 4 + 2 + 2 + 6 = 23 gates
        assert!(series.total.windows(2).all(|w| w[1] - w[0] == 23.0));
    }

    #[test]
    fn width_range_rejects_invalid() {
        assert!(width_range(0, 4).is_err());
        assert!(width_range(60, 65).is_err());
        assert!(width_range(5, 4).unwrap().is_empty());
    }

    #[test]
    fn empty_sweep_is_empty() {
        let sweep = WidthSweep {
            beta: Beta::new(2.5).unwrap(),
        };
        assert!(sweep.sweep(&[]).is_empty());
    }

    #[test]
    fn column_names_in_field_order() {
        assert_eq!(WidthPoint::column_names()[0], "bit_width");
        assert_eq!(BetaPoint::column_names().len(), 8);
    }
}
