use std::path::PathBuf;

use thiserror::Error;

/// Malformed description content. Every variant names the 1-based line it
/// was found on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("line {line}: unknown transform type '{found}', expected Affine2D or Julia")]
    UnknownTransformType { line: usize, found: String },
    #[error("line {line}: missing {section}")]
    MissingSection { line: usize, section: &'static str },
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: &'static str,
        found: usize,
    },
    #[error("line {line}: '{value}' is not a number")]
    InvalidNumber { line: usize, value: String },
    #[error("line {line}: julia sign must be 1 or -1, got '{value}'")]
    InvalidSign { line: usize, value: String },
    #[error("line {line}: a julia description has exactly one transform line")]
    UnexpectedLine { line: usize },
}

impl ParseError {
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::UnknownTransformType { line, .. }
            | Self::MissingSection { line, .. }
            | Self::FieldCount { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::InvalidSign { line, .. }
            | Self::UnexpectedLine { line } => *line,
        }
    }
}

#[derive(Debug, Error)]
pub enum DescriptionFileError {
    #[error("could not access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse description: {0}")]
    Parse(#[from] ParseError),
    #[error("cannot serialize a description that mixes transform kinds")]
    MixedTransformKinds,
    #[error("cannot serialize a julia description with {0} transforms")]
    MultipleJuliaTransforms(usize),
}
