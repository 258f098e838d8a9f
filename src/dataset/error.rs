use std::error::Error;
use std::fmt;
use std::io;
use std::num::ParseFloatError;

#[derive(Debug)]
pub enum DatasetError {
    Io(io::Error),
    EmptyDataset,
    ArityMismatch { line: usize, expected: usize, found: usize },
    ParseError { line: usize, source: ParseFloatError },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io(e) => write!(f, "dataset io error: {}", e),
            DatasetError::EmptyDataset => write!(f, "dataset file contains no records"),
            DatasetError::ArityMismatch { line, expected, found } => {
                write!(f, "line {}: expected {} input columns, found {}", line, expected, found)
            }
            DatasetError::ParseError { line, source } => write!(f, "line {}: {}", line, source),
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DatasetError::Io(e) => Some(e),
            DatasetError::ParseError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for DatasetError {
    fn from(e: io::Error) -> Self {
        DatasetError::Io(e)
    }
}
