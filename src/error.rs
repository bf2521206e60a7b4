//! The error type shared by every container in this crate.

use thiserror::Error;

use super::{DType};

/// Why a [`Vector`] operation rejected its right operand.
///
/// [`Vector`]: super::Vector
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CategoryMismatch {
    /// The operand is a plain [`Array`](super::Array), not a `Vector`.
    NotAVector,
    /// Both operands are `Vector`s, but their lengths differ.
    LengthMismatch { left: usize, right: usize },
}

impl std::fmt::Display for CategoryMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAVector => write!(f, "operand is not a Vector"),
            Self::LengthMismatch {left, right} => write!(f, "lengths {} and {} differ", left, right),
        }
    }
}

/// Every failure that an [`Array`], [`Vector`] or [`Matrix`] can report.
///
/// Errors are returned at the call that caused them. Nothing is retried and no
/// partial result is produced.
///
/// [`Array`]: super::Array
/// [`Vector`]: super::Vector
/// [`Matrix`]: super::Matrix
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinaError {
    /// A container was constructed from no usable data.
    #[error("{container} data cannot be empty")]
    EmptyInput { container: &'static str },

    /// A linear index was outside `0..len`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A matrix row index was outside `0..rows`.
    #[error("row {row} out of range for {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },

    /// A value of the wrong type-category was stored into a container.
    #[error("element must be of type {expected}, got {found} instead")]
    TypeMismatch { expected: DType, found: DType },

    /// The operands of a binary operation have incompatible shapes.
    #[error("shape mismatch in {op}: {left:?} vs {right:?}")]
    ShapeMismatch { op: &'static str, left: Vec<usize>, right: Vec<usize> },

    /// A `Vector` operation received an operand it cannot combine with.
    #[error("cannot {op} vectors: {reason}")]
    TypeCategory { op: &'static str, reason: CategoryMismatch },

    /// Strict arithmetic touched a text element.
    #[error("cannot {op} text element at index {index}")]
    NonNumericOperand { op: &'static str, index: usize },

    /// Integer arithmetic left the range of `i64`.
    #[error("integer overflow in {op}")]
    ArithmeticOverflow { op: &'static str },
}

pub type Result<T> = std::result::Result<T, LinaError>;
