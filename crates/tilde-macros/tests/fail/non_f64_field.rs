use tilde_macros::Columns;

#[derive(Columns)]
pub struct BadPoint {
    pub beta: f64,
    pub lut_length: u64,
}

fn main() {}
