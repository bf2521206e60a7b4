use super::{Array, DType, Element, Scalar, LinaError, Result, View};
use super::ops::{self, NumericPolicy, StrictNumeric};

/// A row-major matrix, stored as a sequence of row [`Array`]s.
///
/// Every row must be non-empty and all rows must have the same length; both
/// are checked at construction, in that order. Elementwise arithmetic is delegated to the
/// rows, so it inherits the permissive policy of `Array`. [`matmul()`] and
/// [`determinant()`] are strictly numeric.
///
/// The `dtype` is optional and belongs to the `Matrix` only. When given, it is
/// checked by [`set()`] before the row's own `dtype`, which each row infers from
/// its first element.
///
/// ```
/// use linalg_containers::{Matrix, Element};
/// let m = Matrix::new([[1, 2], [3, 4]]).unwrap();
/// assert_eq!((m.rows(), m.columns()), (2, 2));
/// assert_eq!(m[(1, 0)], Element::Int(3));
/// assert_eq!(m.transpose(), Matrix::new([[1, 3], [2, 4]]).unwrap());
/// ```
///
/// [`matmul()`]: Matrix::matmul
/// [`determinant()`]: Matrix::determinant
/// [`set()`]: Matrix::set
#[derive(Debug, Clone)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    data: Vec<Array>,
    dtype: Option<DType>,
}

impl Matrix {
    fn from_rows(data: Vec<Vec<Element>>, dtype: Option<DType>) -> Result<Self> {
        if data.is_empty() || data.iter().any(Vec::is_empty) {
            return Err(LinaError::EmptyInput {container: "Matrix"});
        }
        let rows = data.len();
        let columns = data[0].len();
        if let Some(row) = data.iter().find(|row| row.len() != columns) {
            return Err(LinaError::ShapeMismatch {
                op: "construct",
                left: vec![columns],
                right: vec![row.len()],
            });
        }
        let data = data.into_iter()
            .map(|row| Array::new_inner("Matrix row", row, None))
            .collect::<Result<Vec<_>>>()?;
        tracing::trace!(rows, columns, "matrix");
        Ok(Self {rows, columns, data, dtype})
    }

    /// Constructs a `Matrix` given its rows.
    ///
    /// Fails with [`LinaError::EmptyInput`] if there are no rows or a row is
    /// empty, and with [`LinaError::ShapeMismatch`] if the rows differ in
    /// length.
    pub fn new<R, E>(data: impl IntoIterator<Item=R>) -> Result<Self> where
        R: IntoIterator<Item=E>,
        E: Into<Element>,
    {
        Self::from_rows(collect_rows(data), None)
    }

    /// Constructs a `Matrix` with an explicit `dtype`.
    pub fn with_dtype<R, E>(data: impl IntoIterator<Item=R>, dtype: DType) -> Result<Self> where
        R: IntoIterator<Item=E>,
        E: Into<Element>,
    {
        Self::from_rows(collect_rows(data), Some(dtype))
    }

    pub fn rows(&self) -> usize { self.rows }

    pub fn columns(&self) -> usize { self.columns }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) { (self.rows, self.columns) }

    pub fn dtype(&self) -> Option<DType> { self.dtype }

    /// Returns the row at `row`.
    pub fn row(&self, row: usize) -> Result<&Array> {
        self.data.get(row).ok_or(LinaError::RowOutOfRange {row, rows: self.rows})
    }

    /// Iterate over the rows.
    pub fn iter_rows(&self) -> std::slice::Iter<'_, Array> { self.data.iter() }

    /// Returns the element at `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> Result<&Element> {
        self.row(row)?.get(column)
    }

    /// Replaces the element at `(row, column)`.
    pub fn set(&mut self, row: usize, column: usize, value: impl Into<Element>) -> Result<()> {
        let value = value.into();
        if let Some(expected) = self.dtype {
            if value.dtype() != expected {
                return Err(LinaError::TypeMismatch {expected, found: value.dtype()});
            }
        }
        let rows = self.rows;
        self.data.get_mut(row)
            .ok_or(LinaError::RowOutOfRange {row, rows})?
            .set(column, value)
    }

    /// Returns a new `Matrix` of shape `(columns, rows)` whose element
    /// `(c, r)` is element `(r, c)` of `self`.
    pub fn transpose(&self) -> Self {
        let data = (0..self.columns)
            .map(|c| Array::from_row(self.data.iter().map(|row| row[c].clone()).collect()))
            .collect();
        tracing::trace!(op = "transpose", rows = self.columns, columns = self.rows, "matrix");
        Self {rows: self.columns, columns: self.rows, data, dtype: self.dtype}
    }

    /// Adds `other` pointwise. The shapes must be equal.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape("add", other)?;
        self.rowwise(|row, i| row.add(&other.data[i]))
    }

    /// Subtracts `other` pointwise. The shapes must be equal.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape("subtract", other)?;
        self.rowwise(|row, i| row.sub(&other.data[i]))
    }

    /// Multiplies every numeric element by `scalar`.
    pub fn scale(&self, scalar: impl Into<Scalar>) -> Result<Self> {
        let scalar = scalar.into();
        self.rowwise(|row, _| row.mul(scalar))
    }

    /// The matrix product `self × other`.
    ///
    /// Fails with [`LinaError::ShapeMismatch`] unless `self.columns()` equals
    /// `other.rows()`, and with [`LinaError::NonNumericOperand`] if a text
    /// element takes part.
    ///
    /// ```
    /// use linalg_containers::{Matrix};
    /// let a = Matrix::new([[1, 2], [3, 4]]).unwrap();
    /// let b = Matrix::new([[5], [6]]).unwrap();
    /// assert_eq!(a.matmul(&b).unwrap(), Matrix::new([[17], [39]]).unwrap());
    /// ```
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.columns != other.rows {
            return Err(LinaError::ShapeMismatch {
                op: "matmul",
                left: vec![self.rows, self.columns],
                right: vec![other.rows, other.columns],
            });
        }
        let other_t = other.transpose();
        let data = self.data.iter().map(|row| {
            other_t.data.iter()
                .map(|column| ops::sum_of_products::<StrictNumeric>(row.elements(), column.elements()))
                .collect::<Result<Vec<_>>>()
        }).collect::<Result<Vec<_>>>()?;
        tracing::trace!(op = "matmul", rows = self.rows, columns = other.columns, "matrix");
        Self::from_rows(data, None)
    }

    /// The determinant of a 2×2 matrix. Any other shape fails with
    /// [`LinaError::ShapeMismatch`]. A text element fails with
    /// [`LinaError::NonNumericOperand`], whose `index` is the row-major
    /// position of the element.
    pub fn determinant(&self) -> Result<Element> {
        if self.shape() != (2, 2) {
            return Err(LinaError::ShapeMismatch {
                op: "determinant",
                left: vec![self.rows, self.columns],
                right: vec![2, 2],
            });
        }
        let (a, b) = (&self[(0, 0)], &self[(0, 1)]);
        let (c, d) = (&self[(1, 0)], &self[(1, 1)]);
        if let Some(index) = [a, b, c, d].iter().position(|x| !x.is_numeric()) {
            return Err(LinaError::NonNumericOperand {op: "determinant", index});
        }
        let ad = StrictNumeric::combine::<ops::Mul>(0, a, d)?;
        let bc = StrictNumeric::combine::<ops::Mul>(1, b, c)?;
        StrictNumeric::combine::<ops::Sub>(0, &ad, &bc)
    }

    fn check_same_shape(&self, op: &'static str, other: &Self) -> Result<()> {
        if self.shape() == other.shape() { return Ok(()); }
        Err(LinaError::ShapeMismatch {
            op,
            left: vec![self.rows, self.columns],
            right: vec![other.rows, other.columns],
        })
    }

    fn rowwise(&self, mut f: impl FnMut(&Array, usize) -> Result<Array>) -> Result<Self> {
        let data = self.data.iter().enumerate()
            .map(|(i, row)| f(row, i).map(Array::into_elements))
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(data, self.dtype)
    }
}

fn collect_rows<R, E>(data: impl IntoIterator<Item=R>) -> Vec<Vec<Element>> where
    R: IntoIterator<Item=E>,
    E: Into<Element>,
{
    data.into_iter()
        .map(|row| row.into_iter().map(Into::into).collect())
        .collect()
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool { self.data == other.data }
}

/// Panics if `(row, column)` is out of bounds. See [`Matrix::get()`] for a
/// fallible alternative.
impl std::ops::Index<(usize, usize)> for Matrix {
    type Output = Element;
    #[inline(always)]
    fn index(&self, (row, column): (usize, usize)) -> &Element { &self.data[row][column] }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Matrix(")?;
        super::view::fmt_items(f, &self.data)?;
        write!(f, ", rows={}, columns={})", self.rows, self.columns)
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn matrix<const R: usize, const C: usize>(data: [[i32; C]; R]) -> Matrix {
        Matrix::new(data).unwrap()
    }

    #[test]
    fn construct() {
        init_tracing();
        let m = Matrix::with_dtype([[1, 2], [3, 4]], DType::Int).unwrap();
        assert_eq!(m, matrix([[1, 2], [3, 4]]));
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.dtype(), Some(DType::Int));
        assert_eq!(matrix([[1, 2, 3]]).dtype(), None);
        assert_eq!(m.row(1).unwrap(), &Array::new([3, 4]).unwrap());
        assert_eq!(m.iter_rows().count(), 2);
    }

    #[test]
    fn empty_input() {
        let empty = LinaError::EmptyInput {container: "Matrix"};
        assert_eq!(Matrix::new(Vec::<Vec<i64>>::new()).unwrap_err(), empty);
        assert_eq!(Matrix::new(vec![Vec::<i64>::new(), vec![]]).unwrap_err(), empty);
        assert_eq!(Matrix::new(vec![vec![], vec![1]]).unwrap_err(), empty);
        assert_eq!(Matrix::new(vec![vec![1], vec![]]).unwrap_err(), empty);
        assert_eq!(Matrix::new(vec![vec![1, 2], vec![], vec![3]]).unwrap_err(), empty);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Matrix::new(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(err, LinaError::ShapeMismatch {op: "construct", left: vec![2], right: vec![1]});
    }

    #[test]
    fn get_and_set() {
        let mut m = Matrix::with_dtype([[1, 2], [3, 4]], DType::Int).unwrap();
        assert_eq!(m.get(0, 1), Ok(&Element::Int(2)));
        assert_eq!(m.get(2, 0), Err(LinaError::RowOutOfRange {row: 2, rows: 2}));
        assert_eq!(m.get(0, 2), Err(LinaError::IndexOutOfRange {index: 2, len: 2}));
        m.set(1, 1, 8).unwrap();
        assert_eq!(m[(1, 1)], Element::Int(8));
        assert_eq!(
            m.set(0, 0, "5"),
            Err(LinaError::TypeMismatch {expected: DType::Int, found: DType::Text}),
        );
        assert!(matches!(m.set(5, 0, 1), Err(LinaError::RowOutOfRange {..})));
    }

    #[test]
    fn set_without_dtype_uses_row_dtype() {
        let mut m = Matrix::new([[1.0, 2.0]]).unwrap();
        m.set(0, 0, 0.5).unwrap();
        assert!(matches!(m.set(0, 1, 1), Err(LinaError::TypeMismatch {..})));
    }

    #[test]
    fn set_with_dtype_still_checks_row_dtype() {
        let mut m = Matrix::with_dtype([[Element::from(1), Element::from(2.5)]], DType::Float).unwrap();
        assert_eq!(m.row(0).unwrap().dtype(), DType::Int);
        assert_eq!(
            m.set(0, 0, 3.0),
            Err(LinaError::TypeMismatch {expected: DType::Int, found: DType::Float}),
        );
        assert_eq!(
            m.set(0, 1, 3),
            Err(LinaError::TypeMismatch {expected: DType::Float, found: DType::Int}),
        );
        assert_eq!(m[(0, 0)], Element::Int(1));
    }

    #[test]
    fn transpose() {
        let m = matrix([[1, 2, 3], [4, 5, 6]]);
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t, matrix([[1, 4], [2, 5], [3, 6]]));
        assert_eq!(t.transpose(), m);
        assert_eq!(matrix([[1, 2], [3, 4]]).transpose(), matrix([[1, 3], [2, 4]]));
    }

    #[test]
    fn transpose_keeps_dtype_and_reinfers_rows() {
        let m = Matrix::with_dtype([
            vec![Element::from(1), Element::from("a")],
            vec![Element::from(2), Element::from("b")],
        ], DType::Int).unwrap();
        let t = m.transpose();
        assert_eq!(t.dtype(), Some(DType::Int));
        assert_eq!(t.row(1).unwrap().dtype(), DType::Text);
        assert_eq!(t[(1, 0)], Element::from("a"));
    }

    #[test]
    fn elementwise() {
        let a = matrix([[1, 2], [3, 4]]);
        let b = matrix([[5, 6], [7, 8]]);
        assert_eq!(a.add(&b).unwrap(), matrix([[6, 8], [10, 12]]));
        assert_eq!(b.sub(&a).unwrap(), matrix([[4, 4], [4, 4]]));
        assert_eq!(a.scale(2).unwrap(), matrix([[2, 4], [6, 8]]));
        assert!(matches!(a.add(&matrix([[1, 2]])), Err(LinaError::ShapeMismatch {..})));
    }

    #[test]
    fn mixed_rows_pass_text_through() {
        let m = Matrix::new([
            vec![Element::from("label"), Element::from(1)],
            vec![Element::from("other"), Element::from(2)],
        ]).unwrap();
        let doubled = m.scale(2).unwrap();
        assert_eq!(doubled[(0, 0)], Element::from("label"));
        assert_eq!(doubled[(1, 1)], Element::Int(4));
    }

    #[test]
    fn matmul() {
        let a = matrix([[1, 2, 3], [4, 5, 6]]);
        let b = matrix([[7, 8], [9, 10], [11, 12]]);
        assert_eq!(a.matmul(&b).unwrap(), matrix([[58, 64], [139, 154]]));
        assert_eq!(
            a.matmul(&a).unwrap_err(),
            LinaError::ShapeMismatch {op: "matmul", left: vec![2, 3], right: vec![2, 3]},
        );
        let text = Matrix::new([["a"]]).unwrap();
        assert!(matches!(text.matmul(&text), Err(LinaError::NonNumericOperand {..})));
    }

    #[test]
    fn determinant() {
        assert_eq!(matrix([[1, 2], [3, 4]]).determinant(), Ok(Element::Int(-2)));
        assert_eq!(Matrix::new([[0.5, 1.0], [2.0, 4.0]]).unwrap().determinant(), Ok(Element::Float(0.0)));
        assert!(matches!(matrix([[1, 2, 3]]).determinant(), Err(LinaError::ShapeMismatch {..})));
    }

    #[test]
    fn determinant_reports_position_of_text() {
        let m = Matrix::new([
            vec![Element::from(1), Element::from(2)],
            vec![Element::from(3), Element::from("x")],
        ]).unwrap();
        assert_eq!(
            m.determinant(),
            Err(LinaError::NonNumericOperand {op: "determinant", index: 3}),
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            matrix([[1, 2], [3, 4]]).to_string(),
            "Matrix([Array([1, 2]), Array([3, 4])], rows=2, columns=2)",
        );
    }
}
