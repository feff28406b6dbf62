use tilde_macros::Columns;

#[derive(Debug, Clone, Copy, Columns)]
#[columns(series_name = "GateTable")]
pub struct GateRow {
    pub bit_width: f64,
    pub total: f64,
}

fn main() {
    let row = GateRow { bit_width: 4.0, total: 200.0 };
    let mut table = GateTable::with_capacity(5);
    table.push(&row);
    assert_eq!(table.len(), 1);
    assert_eq!(GateRow::column_names(), &["bit_width", "total"]);
}
