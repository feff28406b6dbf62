/// Generate a frozen `#[pyclass]` struct where each field is a `Py<PyArray1<f64>>`.
///
/// Also generates a `from_series()` method that converts from a core series
/// struct generated by `#[derive(Columns)]`.
macro_rules! define_series_result {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident from $core_type:ty {
            $($field:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[pyo3::pyclass(frozen)]
        $vis struct $name {
            $(
                #[pyo3(get)]
                pub $field: Py<numpy::PyArray1<f64>>,
            )+
        }

        impl $name {
            pub fn from_series(py: pyo3::Python<'_>, series: $core_type) -> Self {
                Self {
                    $(
                        $field: numpy::PyArray1::from_vec(py, series.$field).unbind(),
                    )+
                }
            }
        }
    };
}

/// Generate a frozen `#[pyclass]` struct whose fields all share one scalar type.
///
/// Also generates a `from_core()` method that copies values from the
/// corresponding Rust record.
macro_rules! define_record_result {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident from $core_type:ty as $ty:ty {
            $($field:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[pyo3::pyclass(frozen)]
        $vis struct $name {
            $(
                #[pyo3(get)]
                pub $field: $ty,
            )+
        }

        impl $name {
            pub fn from_core(r: &$core_type) -> Self {
                Self {
                    $(
                        $field: r.$field,
                    )+
                }
            }
        }
    };
}
