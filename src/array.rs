use super::{DType, Element, Scalar, LinaError, Result, View, Family};
use super::ops::{self, Binary, PermissivePassthrough};

/// A non-empty sequence of [`Element`]s with a declared [`DType`].
///
/// The `dtype` defaults to the type-category of the first element. It is
/// enforced only by [`set()`]; construction does not check the other
/// elements, so an `Array` may hold a mixture of categories.
///
/// Arithmetic follows [`PermissivePassthrough`]: where a text element meets
/// anything, the result holds the left element unchanged. Every arithmetic
/// operation returns a new `Array`.
///
/// [`set()`]: Array::set
#[derive(Debug, Clone)]
pub struct Array {
    dtype: DType,
    items: Vec<Element>,
}

impl Array {
    pub(crate) fn new_inner(
        container: &'static str,
        items: Vec<Element>,
        dtype: Option<DType>,
    ) -> Result<Self> {
        let first = items.first().ok_or(LinaError::EmptyInput {container})?;
        let dtype = dtype.unwrap_or_else(|| first.dtype());
        tracing::trace!(container, len = items.len(), %dtype, "construct");
        Ok(Self {dtype, items})
    }

    /// Builds an `Array` whose `items` are known to be non-empty.
    pub(crate) fn from_row(items: Vec<Element>) -> Self {
        let dtype = items[0].dtype();
        Self {dtype, items}
    }

    /// Constructs an `Array` given its elements.
    ///
    /// ```
    /// use linalg_containers::{Array, DType, Element, View};
    /// let a = Array::new([1, 2, 3, 4]).unwrap();
    /// assert_eq!(a.len(), 4);
    /// assert_eq!(a.dtype(), DType::Int);
    /// assert_eq!(a[2], Element::Int(3));
    /// assert!(Array::new(Vec::<i64>::new()).is_err());
    /// ```
    pub fn new(items: impl IntoIterator<Item=impl Into<Element>>) -> Result<Self> {
        Self::new_inner("Array", items.into_iter().map(Into::into).collect(), None)
    }

    /// Constructs an `Array` with an explicit `dtype`.
    pub fn with_dtype(
        items: impl IntoIterator<Item=impl Into<Element>>,
        dtype: DType,
    ) -> Result<Self> {
        Self::new_inner("Array", items.into_iter().map(Into::into).collect(), Some(dtype))
    }

    pub fn dtype(&self) -> DType { self.dtype }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Result<&Element> { self.at(index) }

    /// Replaces the element at `index`.
    ///
    /// Fails with [`LinaError::TypeMismatch`] if `value` is not of type
    /// [`dtype()`], even if it is numeric. There is no implicit coercion.
    ///
    /// [`dtype()`]: Array::dtype
    pub fn set(&mut self, index: usize, value: impl Into<Element>) -> Result<()> {
        let value = value.into();
        if value.dtype() != self.dtype {
            return Err(LinaError::TypeMismatch {expected: self.dtype, found: value.dtype()});
        }
        let len = self.items.len();
        let slot = self.items.get_mut(index).ok_or(LinaError::IndexOutOfRange {index, len})?;
        *slot = value;
        Ok(())
    }

    /// Adds `other` pointwise. `other` may be an `Array` or a [`Vector`].
    ///
    /// ```
    /// use linalg_containers::{Array};
    /// let a = Array::new([1, 2, 3, 4]).unwrap();
    /// let b = Array::new([5, 6, 7, 8]).unwrap();
    /// assert_eq!(a.add(&b).unwrap(), Array::new([6, 8, 10, 12]).unwrap());
    /// ```
    ///
    /// [`Vector`]: super::Vector
    pub fn add(&self, other: &impl View) -> Result<Self> { self.binary::<ops::Add>(other) }

    /// Subtracts `other` pointwise.
    pub fn sub(&self, other: &impl View) -> Result<Self> { self.binary::<ops::Sub>(other) }

    /// Multiplies every numeric element by `scalar`.
    pub fn mul(&self, scalar: impl Into<Scalar>) -> Result<Self> {
        let items = ops::broadcast::<PermissivePassthrough, ops::Mul>(&self.items, scalar.into())?;
        tracing::trace!(op = "mul", len = items.len(), "array");
        Self::new_inner("Array", items, None)
    }

    fn binary<B: Binary>(&self, other: &impl View) -> Result<Self> {
        if self.len() != other.len() {
            return Err(LinaError::ShapeMismatch {
                op: B::NAME,
                left: vec![self.len()],
                right: vec![other.len()],
            });
        }
        let items = ops::zip::<PermissivePassthrough, B>(&self.items, other.elements())?;
        tracing::trace!(op = B::NAME, len = items.len(), "array");
        Self::new_inner("Array", items, None)
    }

    /// Returns the raw elements.
    pub fn into_elements(self) -> Vec<Element> { self.items }
}

impl View for Array {
    fn family(&self) -> Family { Family::Array }
    #[inline(always)]
    fn elements(&self) -> &[Element] { &self.items }
}

impl<V: View> PartialEq<V> for Array {
    fn eq(&self, other: &V) -> bool { self.elements() == other.elements() }
}

/// Panics if `index` is out of bounds. See [`Array::get()`] for a fallible
/// alternative.
impl std::ops::Index<usize> for Array {
    type Output = Element;
    #[inline(always)]
    fn index(&self, index: usize) -> &Element { &self.items[index] }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;
    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}

impl std::fmt::Display for Array {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Array(")?;
        super::view::fmt_items(f, &self.items)?;
        f.write_str(")")
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn array(items: impl IntoIterator<Item=impl Into<Element>>) -> Array {
        Array::new(items).unwrap()
    }

    #[test]
    fn construct() {
        let a = array([1, 2, 3, 4]);
        assert_eq!(a.len(), 4);
        assert_eq!(a.dtype(), DType::Int);
        assert_eq!(
            Array::new(Vec::<Element>::new()).unwrap_err(),
            LinaError::EmptyInput {container: "Array"},
        );
        let a = Array::with_dtype([1, 2], DType::Float).unwrap();
        assert_eq!(a.dtype(), DType::Float);
    }

    #[test]
    fn construction_does_not_check_every_element() {
        let a = Array::new([Element::from(1), Element::from("x"), Element::from(2.5)]).unwrap();
        assert_eq!(a.dtype(), DType::Int);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn get_and_set() {
        let mut a = array([1, 2, 3, 4]);
        assert_eq!(a.get(0), Ok(&Element::Int(1)));
        assert_eq!(a.get(4), Err(LinaError::IndexOutOfRange {index: 4, len: 4}));
        a.set(0, 5).unwrap();
        assert_eq!(a, array([5, 2, 3, 4]));
        assert_eq!(
            a.set(1, 2.0),
            Err(LinaError::TypeMismatch {expected: DType::Int, found: DType::Float}),
        );
        assert_eq!(a.set(9, 1), Err(LinaError::IndexOutOfRange {index: 9, len: 4}));
    }

    #[test]
    fn iterate_is_restartable() {
        let a = array([1, 2, 3]);
        let first: Vec<_> = a.iter().cloned().collect();
        let second: Vec<_> = (&a).into_iter().cloned().collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![Element::Int(1), Element::Int(2), Element::Int(3)]);
    }

    #[test]
    fn equality() {
        assert_eq!(array([1, 2, 3, 4]), array([1, 2, 3, 4]));
        assert_ne!(array([1, 2, 3, 4]), array([5, 6, 7, 8]));
        // The dtype is not part of equality.
        assert_eq!(Array::with_dtype([1, 2], DType::Text).unwrap(), array([1, 2]));
    }

    #[test]
    fn arithmetic() {
        let a = array([1, 2, 3, 4]);
        let b = array([5, 6, 7, 8]);
        assert_eq!(a.add(&b).unwrap(), array([6, 8, 10, 12]));
        assert_eq!(b.sub(&a).unwrap(), array([4, 4, 4, 4]));
        assert_eq!(a.mul(2).unwrap(), array([2, 4, 6, 8]));
        assert_eq!(a.add(&b).unwrap().sub(&b).unwrap(), a);
    }

    #[test]
    fn arithmetic_promotes_to_float() {
        let a = array([1, 2]);
        let b = array([0.5, 1.0]);
        let c = a.add(&b).unwrap();
        assert_eq!(c, array([1.5, 3.0]));
        assert_eq!(c.dtype(), DType::Float);
        assert_eq!(a.mul(0.5).unwrap().dtype(), DType::Float);
    }

    #[test]
    fn text_passes_through() {
        let a = Array::new([Element::from("a"), Element::from(2)]).unwrap();
        let b = Array::new([Element::from(1), Element::from("b")]).unwrap();
        assert_eq!(a.add(&b).unwrap(), a);
        assert_eq!(a.mul(3).unwrap(), Array::new([Element::from("a"), Element::from(6)]).unwrap());
    }

    #[test]
    fn shape_mismatch() {
        let err = array([1, 2, 3]).add(&array([1, 2])).unwrap_err();
        assert_eq!(err, LinaError::ShapeMismatch {op: "add", left: vec![3], right: vec![2]});
        assert!(matches!(array([1]).sub(&array([1, 2])), Err(LinaError::ShapeMismatch {..})));
    }

    #[test]
    fn display() {
        assert_eq!(array([1, 2, 3, 4]).to_string(), "Array([1, 2, 3, 4])");
        assert_eq!(array(["a", "b"]).to_string(), "Array(['a', 'b'])");
    }
}
