use pyo3::prelude::*;

use crate::convert::to_py_err;
use crate::hardware::GateCounts;
use tilde_core::{evaluate_raw, ModelConfig, Preset, RawInputs};

/// Every derived value for one evaluation.
#[pyclass(frozen)]
pub struct Evaluation {
    #[pyo3(get)]
    pub result: u64,
    #[pyo3(get)]
    pub max_value: u64,
    #[pyo3(get)]
    pub mode: String,
    #[pyo3(get)]
    pub lut_length: u64,
    #[pyo3(get)]
    pub alpha_add: i64,
    #[pyo3(get)]
    pub alpha_carry: i64,
    #[pyo3(get)]
    pub error_percent: f64,
    #[pyo3(get)]
    pub gate_counts: Py<GateCounts>,
}

impl Evaluation {
    fn from_core(py: Python<'_>, e: &tilde_core::Evaluation) -> PyResult<Self> {
        Ok(Self {
            result: e.result,
            max_value: e.max_value,
            mode: e.mode.to_string(),
            lut_length: e.lut_length,
            alpha_add: e.alpha_add,
            alpha_carry: e.alpha_carry,
            error_percent: e.error_percent,
            gate_counts: Py::new(py, GateCounts::from_core(&e.gate_counts))?,
        })
    }
}

/// Evaluate one operation and every derived metric.
///
/// With `lenient=True` out-of-range inputs are clamped and an unknown
/// operation yields 0, as the calculator UI does. Otherwise they raise
/// `ValueError`.
#[pyfunction]
#[pyo3(signature = (beta, bit_width, a, b, operation, lenient=false))]
fn evaluate(
    py: Python<'_>,
    beta: f64,
    bit_width: i64,
    a: i128,
    b: i128,
    operation: &str,
    lenient: bool,
) -> PyResult<Evaluation> {
    let config = if lenient {
        ModelConfig::lenient()
    } else {
        ModelConfig::strict()
    };
    let raw = RawInputs {
        beta,
        bit_width,
        a,
        b,
        operation,
    };
    let e = evaluate_raw(&raw, &config).map_err(to_py_err)?;
    Evaluation::from_core(py, &e)
}

/// `(beta, bit_width)` for a named preset.
#[pyfunction]
fn preset(name: &str) -> PyResult<(f64, u32)> {
    let p: Preset = name.parse().map_err(to_py_err)?;
    let beta = p.beta().map_err(to_py_err)?;
    let width = p.bit_width().map_err(to_py_err)?;
    Ok((beta.value(), width.bits()))
}

#[pyfunction]
fn preset_names() -> Vec<&'static str> {
    Preset::ALL.iter().map(|p| p.name()).collect()
}

#[pyfunction]
fn beta_to_slider(beta: f64) -> PyResult<f64> {
    tilde_core::beta_to_slider(beta).map_err(to_py_err)
}

#[pyfunction]
fn slider_to_beta(slider: f64) -> PyResult<f64> {
    tilde_core::slider_to_beta(slider)
        .map(|b| b.value())
        .map_err(to_py_err)
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "model")?;
    m.add_function(wrap_pyfunction!(evaluate, &m)?)?;
    m.add_function(wrap_pyfunction!(preset, &m)?)?;
    m.add_function(wrap_pyfunction!(preset_names, &m)?)?;
    m.add_function(wrap_pyfunction!(beta_to_slider, &m)?)?;
    m.add_function(wrap_pyfunction!(slider_to_beta, &m)?)?;
    m.add_class::<Evaluation>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
