use numpy::PyReadonlyArray1;
use pyo3::prelude::*;

use crate::convert::{checked_slice_min, to_py_err};
use tilde_core::constants::{DEFAULT_SWEEP_POINTS, UI_BIT_WIDTH_RANGE};
use tilde_core::sweep::{slider_betas, width_range};
use tilde_core::{Beta, BetaSweep, BitWidth, SweepModel, TildeError, WidthSweep};

define_series_result! {
    /// Beta sweep results with typed numpy array attributes.
    pub struct BetaSweepResult from tilde_core::sweep::BetaPointSeries {
        beta, slider, lut_length, alpha_add, alpha_carry,
        error_percent, lut_gates, total_gates,
    }
}

define_series_result! {
    /// Bit-width sweep results with typed numpy array attributes.
    pub struct WidthSweepResult from tilde_core::sweep::WidthPointSeries {
        bit_width, shared, add, sub, mul, div, control, lut, total,
    }
}

/// Sweep beta at a fixed width.
///
/// Uses the given `betas` when provided, otherwise `n` points evenly spaced
/// along the slider.
#[pyfunction]
#[pyo3(signature = (bit_width, n=DEFAULT_SWEEP_POINTS, betas=None))]
fn beta_sweep(
    py: Python<'_>,
    bit_width: i64,
    n: usize,
    betas: Option<PyReadonlyArray1<'_, f64>>,
) -> PyResult<BetaSweepResult> {
    let sweep = BetaSweep {
        bit_width: BitWidth::new(bit_width).map_err(to_py_err)?,
    };
    let axis = match &betas {
        Some(arr) => checked_slice_min(arr, 2, "betas")?
            .iter()
            .map(|&b| Beta::new(b))
            .collect::<Result<Vec<_>, TildeError>>()
            .map_err(to_py_err)?,
        None => slider_betas(n).map_err(to_py_err)?,
    };
    Ok(BetaSweepResult::from_series(py, sweep.sweep(&axis)))
}

/// Sweep bit width over `lo..=hi` at a fixed beta.
#[pyfunction]
#[pyo3(signature = (beta, lo=UI_BIT_WIDTH_RANGE.0 as i64, hi=UI_BIT_WIDTH_RANGE.1 as i64))]
fn width_sweep(py: Python<'_>, beta: f64, lo: i64, hi: i64) -> PyResult<WidthSweepResult> {
    let sweep = WidthSweep {
        beta: Beta::new(beta).map_err(to_py_err)?,
    };
    let axis = width_range(lo, hi).map_err(to_py_err)?;
    Ok(WidthSweepResult::from_series(py, sweep.sweep(&axis)))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "sweep")?;
    m.add_function(wrap_pyfunction!(beta_sweep, &m)?)?;
    m.add_function(wrap_pyfunction!(width_sweep, &m)?)?;
    m.add_class::<BetaSweepResult>()?;
    m.add_class::<WidthSweepResult>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
