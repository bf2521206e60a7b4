//! Generic programming over arithmetic operators and numeric policies.
//!
//! For each supported binary operator this module contains a type of the same
//! name that cannot be instantiated and that implements [`Binary`]. For
//! example, [`Add`] corresponds to [`std::ops::Add`]. These can be passed as
//! type parameters to the elementwise helpers used by the containers.
//!
//! A [`NumericPolicy`] decides what happens when an operator meets a text
//! element. [`Array`] uses [`PermissivePassthrough`]; [`Vector`] uses
//! [`StrictNumeric`].
//!
//! [`Array`]: super::Array
//! [`Vector`]: super::Vector

use super::{Element, Scalar, LinaError, Result};

/// A function that combines two numeric values.
///
/// Integers combine to an integer; if either side is a float, both are
/// promoted and the result is a float.
///
/// This trait has no methods that take `self`. It makes sense to implement it
/// for types that cannot be instantiated, such as empty enumerations.
pub trait Binary {
    /// The verb used in error messages.
    const NAME: &'static str;

    /// Returns `None` on overflow.
    fn ints(a: i64, b: i64) -> Option<i64>;

    fn floats(a: f64, b: f64) -> f64;

    fn call(a: Scalar, b: Scalar) -> Result<Scalar> {
        match (a, b) {
            (Scalar::Int(a), Scalar::Int(b)) => Self::ints(a, b)
                .map(Scalar::Int)
                .ok_or(LinaError::ArithmeticOverflow {op: Self::NAME}),
            (a, b) => Ok(Scalar::Float(Self::floats(a.to_f64(), b.to_f64()))),
        }
    }
}

// ----------------------------------------------------------------------------

pub enum Add {}

impl Binary for Add {
    const NAME: &'static str = "add";
    #[inline(always)]
    fn ints(a: i64, b: i64) -> Option<i64> { a.checked_add(b) }
    #[inline(always)]
    fn floats(a: f64, b: f64) -> f64 { a + b }
}

// ----------------------------------------------------------------------------

pub enum Sub {}

impl Binary for Sub {
    const NAME: &'static str = "subtract";
    #[inline(always)]
    fn ints(a: i64, b: i64) -> Option<i64> { a.checked_sub(b) }
    #[inline(always)]
    fn floats(a: f64, b: f64) -> f64 { a - b }
}

// ----------------------------------------------------------------------------

pub enum Mul {}

impl Binary for Mul {
    const NAME: &'static str = "multiply";
    #[inline(always)]
    fn ints(a: i64, b: i64) -> Option<i64> { a.checked_mul(b) }
    #[inline(always)]
    fn floats(a: f64, b: f64) -> f64 { a * b }
}

// ----------------------------------------------------------------------------

/// Decides how a [`Binary`] operator treats [`Element`]s that are not numbers.
pub trait NumericPolicy {
    /// Combine `left` and `right`, which are found at `index` in their
    /// containers.
    fn combine<B: Binary>(index: usize, left: &Element, right: &Element) -> Result<Element>;
}

/// If either operand is text, the result is `left`, unchanged.
pub enum PermissivePassthrough {}

impl NumericPolicy for PermissivePassthrough {
    fn combine<B: Binary>(_: usize, left: &Element, right: &Element) -> Result<Element> {
        match (left.as_scalar(), right.as_scalar()) {
            (Some(a), Some(b)) => B::call(a, b).map(Element::from),
            _ => Ok(left.clone()),
        }
    }
}

/// If either operand is text, the operation fails with
/// [`LinaError::NonNumericOperand`].
pub enum StrictNumeric {}

impl NumericPolicy for StrictNumeric {
    fn combine<B: Binary>(index: usize, left: &Element, right: &Element) -> Result<Element> {
        match (left.as_scalar(), right.as_scalar()) {
            (Some(a), Some(b)) => B::call(a, b).map(Element::from),
            _ => Err(LinaError::NonNumericOperand {op: B::NAME, index}),
        }
    }
}

// ----------------------------------------------------------------------------

/// Combine `left` and `right` pointwise. The caller checks the lengths.
pub(crate) fn zip<P: NumericPolicy, B: Binary>(
    left: &[Element],
    right: &[Element],
) -> Result<Vec<Element>> {
    debug_assert_eq!(left.len(), right.len());
    left.iter().zip(right).enumerate()
        .map(|(i, (a, b))| P::combine::<B>(i, a, b))
        .collect()
}

/// Combine every element of `items` with `scalar`.
pub(crate) fn broadcast<P: NumericPolicy, B: Binary>(
    items: &[Element],
    scalar: Scalar,
) -> Result<Vec<Element>> {
    let scalar = Element::from(scalar);
    items.iter().enumerate()
        .map(|(i, a)| P::combine::<B>(i, a, &scalar))
        .collect()
}

/// Multiply `left` and `right` pointwise and sum the products, starting from
/// integer zero.
pub(crate) fn sum_of_products<P: NumericPolicy>(
    left: &[Element],
    right: &[Element],
) -> Result<Element> {
    zip::<P, Mul>(left, right)?.iter().enumerate()
        .try_fold(Element::Int(0), |acc, (i, x)| P::combine::<Add>(i, &acc, x))
}

// ----------------------------------------------------------------------------
