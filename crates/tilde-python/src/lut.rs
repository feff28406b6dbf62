use numpy::{PyArray1, PyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::convert::to_py_err;
use tilde_core::{Beta, BitWidth, LutMode, Operation};

#[pyfunction]
fn lut_length(beta: f64) -> PyResult<u64> {
    Ok(tilde_core::lut_length(Beta::new(beta).map_err(to_py_err)?))
}

#[pyfunction]
fn lut_value(d: u64, beta: f64) -> PyResult<u64> {
    Ok(tilde_core::lut_value(d, Beta::new(beta).map_err(to_py_err)?))
}

/// Table contents as a uint64 array of length `lut_length(beta)`.
#[pyfunction]
fn lut_table<'py>(py: Python<'py>, beta: f64) -> PyResult<Bound<'py, PyArray1<u64>>> {
    let table = tilde_core::lut_table(Beta::new(beta).map_err(to_py_err)?);
    Ok(PyArray1::from_vec(py, table.entries.into_vec()))
}

/// "Simplified Mode" or "Full LUT Mode".
#[pyfunction]
fn lut_mode(beta: f64) -> PyResult<String> {
    Ok(LutMode::of(Beta::new(beta).map_err(to_py_err)?).to_string())
}

/// Result grid for every operand pair; rows are `a`, columns are `b`.
#[pyfunction]
fn operation_grid<'py>(
    py: Python<'py>,
    operation: &str,
    beta: f64,
    bit_width: i64,
) -> PyResult<Bound<'py, PyArray2<u64>>> {
    let op: Operation = operation.parse().map_err(to_py_err)?;
    let beta = Beta::new(beta).map_err(to_py_err)?;
    let bit_width = BitWidth::new(bit_width).map_err(to_py_err)?;
    let grid = tilde_core::operation_grid(op, beta, bit_width).map_err(to_py_err)?;
    PyArray2::from_vec2(py, &grid).map_err(|e| PyValueError::new_err(e.to_string()))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "lut")?;
    m.add_function(wrap_pyfunction!(lut_length, &m)?)?;
    m.add_function(wrap_pyfunction!(lut_value, &m)?)?;
    m.add_function(wrap_pyfunction!(lut_table, &m)?)?;
    m.add_function(wrap_pyfunction!(lut_mode, &m)?)?;
    m.add_function(wrap_pyfunction!(operation_grid, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
