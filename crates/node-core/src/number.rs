//! Numeric payload of [`Node::Number`](crate::Node::Number).
//!
//! A `Number` keeps whichever wide form it was built from (signed, unsigned or
//! floating) so that integers survive a round trip without passing through
//! `f64`. Equality compares exact numeric value across forms: a float equals
//! an integer only when it is that whole number.
//!
//! Every native numeric type converts through the same pair of functions,
//! [`from_node`] and [`NodeNumeric::to_number`], keyed on the wide
//! intermediates `i64`, `u64` and `f64`. Supporting another numeric type only
//! needs a [`NodeNumeric`] impl.

use crate::error::{NodeError, Result};
use crate::node::Node;
use std::fmt;

/// 2^63 as an `f64`; the first float past `i64::MAX`.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;
/// 2^64 as an `f64`; the first float past `u64::MAX`.
const U64_UPPER: f64 = 18_446_744_073_709_551_616.0;

/// A JSON-like number that remembers its widest lossless form.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Number {
    /// The value as `i64`, if it is an integer (or a whole float) in range.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Int(i) => Some(i),
            Number::UInt(u) => i64::try_from(u).ok(),
            Number::Float(f) => {
                if is_whole(f) && f >= i64::MIN as f64 && f < I64_UPPER {
                    Some(f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// The value as `u64`, if it is a non-negative integer (or whole float) in range.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Number::Int(i) => u64::try_from(i).ok(),
            Number::UInt(u) => Some(u),
            Number::Float(f) => {
                if is_whole(f) && f >= 0.0 && f < U64_UPPER {
                    Some(f as u64)
                } else {
                    None
                }
            }
        }
    }

    /// The value as `f64`. Integers beyond 2^53 lose precision.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(i) => i as f64,
            Number::UInt(u) => u as f64,
            Number::Float(f) => f,
        }
    }
}

fn is_whole(f: f64) -> bool {
    f.is_finite() && f.fract() == 0.0
}

/// 2^127 as an `f64`; every whole float below it in magnitude fits `i128`.
const I128_UPPER: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// The exact integer value of a whole float, if it has one that fits `i128`.
fn whole_as_i128(f: f64) -> Option<i128> {
    (is_whole(f) && f >= -I128_UPPER && f < I128_UPPER).then(|| f as i128)
}

/// Integer forms widened to `i128`; `None` for floats.
fn integer_as_i128(number: Number) -> Option<i128> {
    match number {
        Number::Int(i) => Some(i128::from(i)),
        Number::UInt(u) => Some(i128::from(u)),
        Number::Float(_) => None,
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::UInt(a), Number::UInt(b)) => a == b,
            (Number::Int(a), Number::UInt(b)) | (Number::UInt(b), Number::Int(a)) => {
                i128::from(a) == i128::from(b)
            }
            (Number::Float(a), Number::Float(b)) => a == b,
            // Exact: a float equals an integer only when it is that whole
            // number, never through a rounded `as f64`.
            (Number::Float(a), other) | (other, Number::Float(a)) => {
                whole_as_i128(a).is_some_and(|whole| integer_as_i128(other) == Some(whole))
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::UInt(u) => write!(f, "{u}"),
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

/// A native numeric type that converts through [`Number`].
pub trait NodeNumeric: Sized + Copy {
    /// Narrow a `Number` into `Self`, or `None` if it does not fit.
    fn from_number(number: &Number) -> Option<Self>;

    /// Widen `self` into a `Number`.
    fn to_number(self) -> Number;
}

/// The shared numeric conversion routine: view `node` as a number and narrow it
/// into `N`, failing with [`NodeError::UnableToConvert`] otherwise.
pub fn from_node<N: NodeNumeric>(node: &Node) -> Result<N> {
    node.as_number()
        .and_then(N::from_number)
        .ok_or_else(|| NodeError::unable_to_convert::<N>(node))
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl NodeNumeric for $t {
            fn from_number(number: &Number) -> Option<Self> {
                number.as_i64().and_then(|wide| <$t>::try_from(wide).ok())
            }

            fn to_number(self) -> Number {
                Number::Int(self as i64)
            }
        }

        impl From<$t> for Number {
            fn from(value: $t) -> Self {
                value.to_number()
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl NodeNumeric for $t {
            fn from_number(number: &Number) -> Option<Self> {
                number.as_u64().and_then(|wide| <$t>::try_from(wide).ok())
            }

            fn to_number(self) -> Number {
                Number::UInt(self as u64)
            }
        }

        impl From<$t> for Number {
            fn from(value: $t) -> Self {
                value.to_number()
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($t:ty),*) => {$(
        impl NodeNumeric for $t {
            fn from_number(number: &Number) -> Option<Self> {
                let wide = number.as_f64();
                let narrowed = wide as $t;
                if wide.is_finite() && !narrowed.is_finite() {
                    None
                } else {
                    Some(narrowed)
                }
            }

            fn to_number(self) -> Number {
                Number::Float(self as f64)
            }
        }

        impl From<$t> for Number {
            fn from(value: $t) -> Self {
                value.to_number()
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);
impl_float!(f32, f64);
