use std::{fmt, io};

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("vertex {0:?} does not exist")]
pub struct VertexNotFound<I: fmt::Debug>(pub I);

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading edge list failed: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Malformed(#[from] MalformedRecord),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed record on line {line}: {kind}")]
pub struct MalformedRecord {
    /// One-based line number in the source.
    pub line: usize,
    pub kind: MalformedRecordKind,
}

impl MalformedRecord {
    pub fn new(line: usize, kind: MalformedRecordKind) -> Self {
        Self { line, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MalformedRecordKind {
    /// The record does not have two or three fields. Holds the actual count.
    FieldCount(usize),
    InvalidWeight,
    InvalidId,
}

impl fmt::Display for MalformedRecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedRecordKind::FieldCount(count) => {
                write!(f, "expected 2 or 3 fields, found {count}")
            }
            MalformedRecordKind::InvalidWeight => f.write_str("weight is not an integer"),
            MalformedRecordKind::InvalidId => f.write_str("vertex id could not be parsed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_record_message() {
        let error = MalformedRecord::new(3, MalformedRecordKind::FieldCount(1));
        assert_eq!(
            error.to_string(),
            "malformed record on line 3: expected 2 or 3 fields, found 1"
        );
    }

    #[test]
    fn load_error_from_malformed() {
        let error: LoadError = MalformedRecord::new(1, MalformedRecordKind::InvalidWeight).into();
        assert_eq!(
            error.to_string(),
            "malformed record on line 1: weight is not an integer"
        );
    }

    #[test]
    fn vertex_not_found_message() {
        assert_eq!(
            VertexNotFound("FOOD").to_string(),
            "vertex \"FOOD\" does not exist"
        );
    }
}
