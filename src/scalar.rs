//! Coercion of loosely typed caller input into grid integers.
//!
//! Grid extents, vessel geometry and attack coordinates are accepted as any
//! "integer-like" value: primitive integers, floats or numeric strings.
//! Construction truncates toward zero (`10.9` becomes `10`), while attack
//! lookups only accept values that are exactly integral.

use core::fmt;
use num_traits::{Float, ToPrimitive, Zero};

/// A value that may be interpreted as a grid integer.
pub trait Scalar: fmt::Debug {
    /// The value truncated toward zero, or `None` if it is not numeric
    /// or does not fit in an `i64`.
    fn truncated(&self) -> Option<i64>;

    /// The value if it is exactly integral, `None` otherwise.
    fn exact(&self) -> Option<i64>;
}

macro_rules! int_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn truncated(&self) -> Option<i64> {
                    self.to_i64()
                }

                fn exact(&self) -> Option<i64> {
                    self.to_i64()
                }
            }
        )*
    };
}

int_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

fn float_exact<F: Float>(value: F) -> Option<i64> {
    if value.fract().is_zero() {
        value.to_i64()
    } else {
        None
    }
}

impl Scalar for f32 {
    fn truncated(&self) -> Option<i64> {
        self.to_i64()
    }

    fn exact(&self) -> Option<i64> {
        float_exact(*self)
    }
}

impl Scalar for f64 {
    fn truncated(&self) -> Option<i64> {
        self.to_i64()
    }

    fn exact(&self) -> Option<i64> {
        float_exact(*self)
    }
}

impl Scalar for str {
    fn truncated(&self) -> Option<i64> {
        let text = self.trim();
        match text.parse::<i64>() {
            Ok(v) => Some(v),
            Err(_) => text.parse::<f64>().ok()?.truncated(),
        }
    }

    fn exact(&self) -> Option<i64> {
        let text = self.trim();
        match text.parse::<i64>() {
            Ok(v) => Some(v),
            Err(_) => text.parse::<f64>().ok()?.exact(),
        }
    }
}

impl Scalar for String {
    fn truncated(&self) -> Option<i64> {
        self.as_str().truncated()
    }

    fn exact(&self) -> Option<i64> {
        self.as_str().exact()
    }
}

impl<T: Scalar + ?Sized> Scalar for &T {
    fn truncated(&self) -> Option<i64> {
        (**self).truncated()
    }

    fn exact(&self) -> Option<i64> {
        (**self).exact()
    }
}

/// Narrow an optional integer to a strictly positive `usize`.
pub(crate) fn positive(value: Option<i64>) -> Option<usize> {
    value
        .filter(|v| *v > 0)
        .and_then(|v| usize::try_from(v).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rejects_zero_and_negatives() {
        assert_eq!(positive(Some(0)), None);
        assert_eq!(positive(Some(-3)), None);
        assert_eq!(positive(None), None);
        assert_eq!(positive(Some(7)), Some(7));
    }

    #[test]
    fn float_exact_requires_integral_value() {
        assert_eq!(float_exact(4.0f64), Some(4));
        assert_eq!(float_exact(4.5f64), None);
        assert_eq!(float_exact(f64::NAN), None);
    }
}
