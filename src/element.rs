//! Scalar values and their type-categories.

/// The type-category of an [`Element`].
///
/// This is a closed set; containers record one of these as their `dtype`.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum DType {
    Int,
    Float,
    Text,
}

impl DType {
    pub fn is_numeric(self) -> bool { !matches!(self, Self::Text) }
}

impl std::fmt::Display for DType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "str",
        })
    }
}

// ----------------------------------------------------------------------------

/// A single value stored in a container.
///
/// Numeric elements compare equal by value even across categories, so
/// `Element::Int(1) == Element::Float(1.0)`. An integer equals a float only if
/// the float is integral and has exactly that value. Text never equals a
/// number.
///
/// ```
/// use linalg_containers::{DType, Element};
/// assert_eq!(Element::from(3).dtype(), DType::Int);
/// assert_eq!(Element::from(3), Element::from(3.0));
/// assert_ne!(Element::from("3"), Element::from(3));
/// ```
#[derive(Debug, Clone)]
pub enum Element {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Element {
    /// The type-category of `self`.
    pub fn dtype(&self) -> DType {
        match self {
            Self::Int(_) => DType::Int,
            Self::Float(_) => DType::Float,
            Self::Text(_) => DType::Text,
        }
    }

    pub fn is_numeric(&self) -> bool { self.dtype().is_numeric() }

    /// Returns the numeric value of `self`, or `None` for text.
    pub fn as_scalar(&self) -> Option<Scalar> {
        match *self {
            Self::Int(i) => Some(Scalar::Int(i)),
            Self::Float(x) => Some(Scalar::Float(x)),
            Self::Text(_) => None,
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Text(_), _) | (_, Self::Text(_)) => false,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (&Self::Int(i), &Self::Float(x)) | (&Self::Float(x), &Self::Int(i)) => int_eq_float(i, x),
        }
    }
}

/// Exact comparison, without rounding `i` to the nearest `f64`.
fn int_eq_float(i: i64, x: f64) -> bool {
    // `i64::MIN as f64` is exact; `-(i64::MIN as f64)` is 2^63, one past `i64::MAX`.
    let min = i64::MIN as f64;
    x.fract() == 0.0 && x >= min && x < -min && x as i64 == i
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            // `Debug` keeps the fractional part, e.g. `1.0`.
            Self::Float(x) => write!(f, "{:?}", x),
            Self::Text(s) => write!(f, "'{}'", s),
        }
    }
}

impl From<i64> for Element {
    fn from(i: i64) -> Self { Self::Int(i) }
}

impl From<i32> for Element {
    fn from(i: i32) -> Self { Self::Int(i.into()) }
}

impl From<f64> for Element {
    fn from(x: f64) -> Self { Self::Float(x) }
}

impl From<&str> for Element {
    fn from(s: &str) -> Self { Self::Text(s.to_owned()) }
}

impl From<String> for Element {
    fn from(s: String) -> Self { Self::Text(s) }
}

impl From<Scalar> for Element {
    fn from(s: Scalar) -> Self {
        match s {
            Scalar::Int(i) => Self::Int(i),
            Scalar::Float(x) => Self::Float(x),
        }
    }
}

// ----------------------------------------------------------------------------

/// A numeric value: the right operand of scalar multiplication, and the
/// domain of the arithmetic in [`ops`](super::ops).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

impl Scalar {
    pub fn to_f64(self) -> f64 {
        match self {
            // Precision loss above 2^53 matches ordinary int-to-float promotion.
            Self::Int(i) => i as f64,
            Self::Float(x) => x,
        }
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self { Self::Int(i) }
}

impl From<i32> for Scalar {
    fn from(i: i32) -> Self { Self::Int(i.into()) }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self { Self::Float(x) }
}

// ----------------------------------------------------------------------------
