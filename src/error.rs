use thiserror::Error;

// Unified error type for linmat

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    #[error("shape mismatch: {lhs:?} vs {rhs:?}")]
    ShapeMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    #[error("incompatible shapes for multiplication: {lhs:?} * {rhs:?}")]
    IncompatibleShape {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    #[error("operation requires a square matrix, got {height}x{width}")]
    NotSquare { height: usize, width: usize },
    #[error("position ({row}, {col}) is out of range for shape {shape:?}")]
    OutOfRange {
        row: usize,
        col: usize,
        shape: (usize, usize),
    },
    #[error("singular matrix (determinant is zero)")]
    Singular,
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
}
