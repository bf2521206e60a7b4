use super::{Array, DType, Element, Scalar, LinaError, CategoryMismatch, Result, View, Family};
use super::ops::{self, Binary, StrictNumeric};

/// A numeric [`Array`] with a dot product.
///
/// Storage, indexing and `dtype` behave exactly as for `Array`, and
/// construction is just as permissive. The difference is in the arithmetic,
/// which follows [`StrictNumeric`]: touching a text element is an error,
/// reported when the operation runs. Binary operations also require the other
/// operand to be a `Vector` of the same length.
///
/// Results keep the `dtype` of the left operand.
///
/// ```
/// use linalg_containers::{Vector, Element};
/// let a = Vector::new([1, 2, 3]).unwrap();
/// let b = Vector::new([4, 5, 6]).unwrap();
/// assert_eq!(a.dot(&b).unwrap(), Element::Int(32));
/// assert!(a.add(&Vector::new([1, 2]).unwrap()).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Vector {
    array: Array,
    length: usize,
}

impl Vector {
    fn from_items(items: Vec<Element>, dtype: Option<DType>) -> Result<Self> {
        let array = Array::new_inner("Vector", items, dtype)?;
        let length = array.len();
        Ok(Self {array, length})
    }

    /// Constructs a `Vector` given its elements.
    pub fn new(items: impl IntoIterator<Item=impl Into<Element>>) -> Result<Self> {
        Self::from_items(items.into_iter().map(Into::into).collect(), None)
    }

    /// Constructs a `Vector` with an explicit `dtype`.
    pub fn with_dtype(
        items: impl IntoIterator<Item=impl Into<Element>>,
        dtype: DType,
    ) -> Result<Self> {
        Self::from_items(items.into_iter().map(Into::into).collect(), Some(dtype))
    }

    /// The number of elements, recorded at construction.
    pub fn length(&self) -> usize { self.length }

    pub fn dtype(&self) -> DType { self.array.dtype() }

    pub fn get(&self, index: usize) -> Result<&Element> { self.array.get(index) }

    /// Replaces the element at `index`. See [`Array::set()`].
    pub fn set(&mut self, index: usize, value: impl Into<Element>) -> Result<()> {
        self.array.set(index, value)
    }

    /// Adds `other` pointwise.
    ///
    /// Fails with [`LinaError::TypeCategory`] if `other` is not a `Vector` or
    /// has a different length, and with [`LinaError::NonNumericOperand`] if
    /// either side holds text.
    pub fn add(&self, other: &impl View) -> Result<Self> { self.binary::<ops::Add>(other) }

    /// Subtracts `other` pointwise. Fails like [`Vector::add()`].
    pub fn sub(&self, other: &impl View) -> Result<Self> { self.binary::<ops::Sub>(other) }

    /// Multiplies every element by `scalar`.
    pub fn mul(&self, scalar: impl Into<Scalar>) -> Result<Self> {
        let items = ops::broadcast::<StrictNumeric, ops::Mul>(self.elements(), scalar.into())?;
        tracing::trace!(op = "mul", len = items.len(), "vector");
        Self::from_items(items, Some(self.dtype()))
    }

    /// The sum of the pointwise products of `self` and `other`.
    ///
    /// The result is an integer if every product is an integer, otherwise a
    /// float. Fails like [`Vector::add()`].
    pub fn dot(&self, other: &impl View) -> Result<Element> {
        self.check_operand("dot", other)?;
        ops::sum_of_products::<StrictNumeric>(self.elements(), other.elements())
    }

    fn check_operand(&self, op: &'static str, other: &impl View) -> Result<()> {
        let reason = if other.family() != Family::Vector {
            CategoryMismatch::NotAVector
        } else if other.len() != self.length {
            CategoryMismatch::LengthMismatch {left: self.length, right: other.len()}
        } else {
            return Ok(());
        };
        Err(LinaError::TypeCategory {op, reason})
    }

    fn binary<B: Binary>(&self, other: &impl View) -> Result<Self> {
        self.check_operand(B::NAME, other)?;
        let items = ops::zip::<StrictNumeric, B>(self.elements(), other.elements())?;
        tracing::trace!(op = B::NAME, len = items.len(), "vector");
        Self::from_items(items, Some(self.dtype()))
    }

    /// Forget that `self` is a `Vector`.
    pub fn into_array(self) -> Array { self.array }
}

impl View for Vector {
    fn family(&self) -> Family { Family::Vector }
    #[inline(always)]
    fn elements(&self) -> &[Element] { self.array.elements() }
}

impl<V: View> PartialEq<V> for Vector {
    fn eq(&self, other: &V) -> bool { self.elements() == other.elements() }
}

impl From<Array> for Vector {
    fn from(array: Array) -> Self {
        let length = array.len();
        Self {array, length}
    }
}

impl From<Vector> for Array {
    fn from(vector: Vector) -> Self { vector.into_array() }
}

/// Panics if `index` is out of bounds. See [`Vector::get()`] for a fallible
/// alternative.
impl std::ops::Index<usize> for Vector {
    type Output = Element;
    #[inline(always)]
    fn index(&self, index: usize) -> &Element { &self.array[index] }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;
    fn into_iter(self) -> Self::IntoIter { self.elements().iter() }
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Vector(")?;
        super::view::fmt_items(f, self.elements())?;
        write!(f, ", length={})", self.length)
    }
}

// ----------------------------------------------------------------------------
