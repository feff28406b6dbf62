use crate::error::Result;

/// A validated parameter set with a fixed array representation.
///
/// Lets bindings and sweeps move parameters through flat `f64` slices
/// without knowing the concrete type.
pub trait ModelParams: Sized {
    const N_PARAMS: usize;
    const PARAM_NAMES: &'static [&'static str];
    const PARAM_BOUNDS: &'static [(f64, f64)];

    /// Build from a slice in `PARAM_NAMES` order, validating every entry.
    fn from_array(arr: &[f64]) -> Result<Self>;

    fn to_array(&self) -> Vec<f64>;
}

/// Core trait for metric sweeps.
///
/// A sweep evaluates the model at each position along one axis (beta,
/// bit width, ...) and collects the resulting points into a columnar series.
pub trait SweepModel {
    /// Value varied along the sweep.
    type Axis: Copy;
    /// Metrics computed at one axis position.
    type Point;
    type Series: SeriesOps<Self::Point>;

    /// Evaluate the model at a single axis position.
    fn point(&self, at: Self::Axis) -> Self::Point;

    /// Evaluate over every axis position, in order.
    ///
    /// Default implementation: preallocate the series and push one point per
    /// position.
    fn sweep(&self, axis: &[Self::Axis]) -> Self::Series {
        let mut series = Self::Series::with_capacity(axis.len());
        for &at in axis {
            series.push(&self.point(at));
        }
        series
    }
}

/// Operations required on the series collection type.
pub trait SeriesOps<P> {
    fn with_capacity(n: usize) -> Self;
    fn push(&mut self, p: &P);
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}
