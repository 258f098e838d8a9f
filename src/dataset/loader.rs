use super::core::Dataset;
use super::error::DatasetError;
use std::fs;

/// Parses a flat comma-separated text file with no header row: every
/// column but the last is an input, the last is the expected output.
/// Variable names are synthesized as `x0..x{cols-1}` from the first row.
pub fn load(path: &str) -> Result<Dataset, DatasetError> {
    let contents = fs::read_to_string(path)?;
    let mut input: Vec<Vec<f64>> = Vec::new();
    let mut output: Vec<f64> = Vec::new();
    let mut expected_cols: Option<usize> = None;

    for (lineno, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        let mut row = Vec::with_capacity(fields.len());
        for field in &fields {
            let value: f64 = field
                .trim()
                .parse()
                .map_err(|source| DatasetError::ParseError { line: lineno + 1, source })?;
            row.push(value);
        }
        let out = row.pop().expect("split on comma yields at least one field");
        let cols = row.len();
        match expected_cols {
            None => expected_cols = Some(cols),
            Some(expected) if expected != cols => {
                return Err(DatasetError::ArityMismatch { line: lineno + 1, expected, found: cols });
            }
            _ => {}
        }
        input.push(row);
        output.push(out);
    }

    if input.is_empty() {
        return Err(DatasetError::EmptyDataset);
    }

    let cols = expected_cols.unwrap();
    let variables = (0..cols).map(|i| format!("x{}", i)).collect();
    return Ok(Dataset::new(variables, input, output));
}
