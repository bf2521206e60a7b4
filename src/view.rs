//! The common read-only interface of one-dimensional containers.

use super::{Element, LinaError, Result};

/// Which container type a [`View`] belongs to.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum Family {
    Array,
    Vector,
}

/// Implemented by containers that look like an ordered sequence of
/// [`Element`]s: [`Array`] and [`Vector`].
///
/// Binary operations take their right operand as `&impl View`, so that an
/// `Array` and a `Vector` can be combined, and so that a `Vector` can reject an
/// operand whose [`family()`] is not [`Family::Vector`].
///
/// ```
/// use linalg_containers::{Array, Vector, View, Family};
/// let a = Array::new([1, 2, 3]).unwrap();
/// let v = Vector::new([1, 2, 3]).unwrap();
/// assert_eq!(a.family(), Family::Array);
/// assert_eq!(v.family(), Family::Vector);
/// assert_eq!(a.elements(), v.elements());
/// ```
///
/// [`Array`]: super::Array
/// [`Vector`]: super::Vector
/// [`family()`]: View::family
pub trait View {
    fn family(&self) -> Family;

    /// The elements in storage order.
    fn elements(&self) -> &[Element];

    /// The number of elements in `Self`.
    fn len(&self) -> usize { self.elements().len() }

    /// Always `false`: containers cannot be constructed empty.
    fn is_empty(&self) -> bool { self.elements().is_empty() }

    /// The element at `index`.
    fn at(&self, index: usize) -> Result<&Element> {
        let len = self.len();
        self.elements().get(index).ok_or(LinaError::IndexOutOfRange {index, len})
    }

    /// Iterate over the elements in storage order. Each call starts afresh.
    fn iter(&self) -> std::slice::Iter<'_, Element> { self.elements().iter() }
}

impl<V: View + ?Sized> View for &V {
    fn family(&self) -> Family { V::family(self) }
    fn elements(&self) -> &[Element] { V::elements(self) }
}

/// Write `items` as `[a, b, c]`.
pub(crate) fn fmt_items<T: std::fmt::Display>(
    f: &mut std::fmt::Formatter<'_>,
    items: impl IntoIterator<Item=T>,
) -> std::fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 { f.write_str(", ")?; }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}
