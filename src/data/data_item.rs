/// One training example: an input vector and the target it should map to.
#[derive(Debug, Clone, PartialEq)]
pub struct DataItem {
    input: Vec<f64>,
    output: Vec<f64>,
}

impl DataItem {
    pub fn new(input: Vec<f64>, output: Vec<f64>) -> DataItem {
        DataItem { input, output }
    }

    pub fn input(&self) -> &[f64] {
        &self.input
    }

    pub fn output(&self) -> &[f64] {
        &self.output
    }
}
