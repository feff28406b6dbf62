use tilde_macros::Columns;

#[derive(Debug, Clone, Copy, Columns)]
pub struct TestPoint {
    pub beta: f64,
    pub lut_length: f64,
    pub total_gates: f64,
}

fn main() {
    let p = TestPoint { beta: 2.5, lut_length: 1.0, total_gates: 200.0 };
    let mut series = TestPointSeries::with_capacity(10);
    series.push(&p);
    assert_eq!(series.len(), 1);
    assert!(!series.is_empty());
    assert_eq!(series.column("total_gates"), Some(&[200.0][..]));
    assert_eq!(series.column("missing"), None);
    assert_eq!(TestPoint::column_names(), &["beta", "lut_length", "total_gates"]);
}
