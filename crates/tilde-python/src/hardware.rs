use numpy::PyReadonlyArray1;
use pyo3::prelude::*;

use crate::convert::{checked_slice, to_py_err};
use tilde_core::{Beta, BitWidth, HardwareParams, ModelParams};

define_record_result! {
    /// Gate-count breakdown for a w-bit Tilde ALU.
    pub struct GateCounts from tilde_core::GateCounts as u64 {
        shared, add, sub, mul, div, control, lut, total,
    }
}

#[pyfunction]
fn alpha_add(beta: f64) -> PyResult<i64> {
    Ok(tilde_core::alpha_add(Beta::new(beta).map_err(to_py_err)?))
}

#[pyfunction]
fn alpha_carry(beta: f64) -> PyResult<i64> {
    Ok(tilde_core::alpha_carry(Beta::new(beta).map_err(to_py_err)?))
}

#[pyfunction]
fn error_percent(beta: f64) -> PyResult<f64> {
    Ok(tilde_core::error_percent(Beta::new(beta).map_err(to_py_err)?))
}

#[pyfunction]
fn gate_counts(beta: f64, bit_width: i64) -> PyResult<GateCounts> {
    let beta = Beta::new(beta).map_err(to_py_err)?;
    let bit_width = BitWidth::new(bit_width).map_err(to_py_err)?;
    Ok(GateCounts::from_core(&tilde_core::gate_counts(bit_width, beta)))
}

/// Gate counts from a `[beta, bit_width]` parameter array.
#[pyfunction]
fn gate_counts_from_params(params: PyReadonlyArray1<'_, f64>) -> PyResult<GateCounts> {
    let p_slice = checked_slice(&params, HardwareParams::N_PARAMS, "params")?;
    let p = HardwareParams::from_array(p_slice).map_err(to_py_err)?;
    Ok(GateCounts::from_core(&tilde_core::gate_counts(
        p.bit_width,
        p.beta,
    )))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "hardware")?;
    m.add_function(wrap_pyfunction!(alpha_add, &m)?)?;
    m.add_function(wrap_pyfunction!(alpha_carry, &m)?)?;
    m.add_function(wrap_pyfunction!(error_percent, &m)?)?;
    m.add_function(wrap_pyfunction!(gate_counts, &m)?)?;
    m.add_function(wrap_pyfunction!(gate_counts_from_params, &m)?)?;
    m.add_class::<GateCounts>()?;
    m.add("PARAM_NAMES", HardwareParams::PARAM_NAMES.to_vec())?;
    parent.add_submodule(&m)?;
    Ok(())
}
