/// A training set: `rows x cols` input matrix, `rows` outputs, and a
/// variable name per column. Shared read-only across a run, except the
/// private copy a Lexicase worker clones for case-removal.
#[derive(Clone, Debug)]
pub struct Dataset {
    variables: Vec<String>,
    input: Vec<Vec<f64>>,
    output: Vec<f64>,
}

impl Dataset {
    pub fn new(variables: Vec<String>, input: Vec<Vec<f64>>, output: Vec<f64>) -> Self {
        return Dataset { variables, input, output };
    }

    pub fn variables(&self) -> &[String] {
        return &self.variables;
    }

    pub fn cols(&self) -> usize {
        return self.variables.len();
    }

    pub fn rows(&self) -> usize {
        return self.output.len();
    }

    pub fn row(&self, i: usize) -> (&[f64], f64) {
        return (&self.input[i], self.output[i]);
    }
}
