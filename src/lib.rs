//! A small library of linear-algebra containers.
//!
//! [`Array`] is an ordered, non-empty sequence of [`Element`]s, each of which
//! is an integer, a float or a piece of text. An `Array` records a [`DType`],
//! which defaults to the type-category of its first element and is enforced
//! when an element is replaced with [`Array::set()`]. Arithmetic on an `Array`
//! is permissive: text elements pass through unchanged.
//!
//! [`Vector`] stores its elements in the same way but is meant for numbers.
//! Its arithmetic is strict: touching text is an error. It also requires the
//! other operand to be a `Vector` of the same length, and it adds
//! [`Vector::dot()`].
//!
//! [`Matrix`] is a sequence of row `Array`s with 2-dimensional indexing,
//! [`Matrix::transpose()`] and a few matrix utilities.
//!
//! Every arithmetic operation returns a new container; only `set()` mutates.
//! Failures are reported as a [`LinaError`].
//!
//! The two numeric policies are spelled out in [`ops`] as
//! [`ops::PermissivePassthrough`] and [`ops::StrictNumeric`], and the
//! operators themselves as uninhabited types implementing [`ops::Binary`].
//!
//! ```
//! use linalg_containers::{Array, Vector, Matrix, Element, LinaError};
//!
//! let a = Array::new([1, 2, 3, 4]).unwrap();
//! assert_eq!(a.add(&a).unwrap(), Array::new([2, 4, 6, 8]).unwrap());
//!
//! let v = Vector::new(["a", "b"]).unwrap();
//! assert!(matches!(v.add(&v), Err(LinaError::NonNumericOperand {..})));
//!
//! let m = Matrix::new([[1, 2], [3, 4]]).unwrap();
//! assert_eq!(m.transpose()[(0, 1)], Element::Int(3));
//! ```

mod element;
pub use element::{DType, Element, Scalar};

mod error;
pub use error::{LinaError, CategoryMismatch, Result};

pub mod ops;

mod view;
pub use view::{View, Family};

mod array;
pub use array::{Array};

mod vector;
pub use vector::{Vector};

mod matrix;
pub use matrix::{Matrix};
