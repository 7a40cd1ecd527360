//! Price newtypes shared by the raw series and the relative transform.

use std::ops::Mul;

/// A behavioral contract for anything that behaves like a price.
pub trait PriceLike {
    fn value(&self) -> f64;

    /// Missing provider fields arrive as NaN and make a bar unusable.
    fn is_missing(&self) -> bool {
        self.value().is_nan()
    }

    fn is_zero(&self) -> bool {
        self.value() == 0.0
    }

    /// Fractional change from `reference`, or 0 when the reference is zero.
    fn return_since<R: PriceLike>(&self, reference: &R) -> f64 {
        if reference.is_zero() {
            return 0.0;
        }
        (self.value() - reference.value()) / reference.value()
    }

    /// Ratio of this price to `reference`, or 1 when the reference is zero.
    fn ratio_to<R: PriceLike>(&self, reference: &R) -> f64 {
        if reference.is_zero() {
            return 1.0;
        }
        self.value() / reference.value()
    }
}

macro_rules! define_price_type {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f64);

        impl From<f64> for $name {
            fn from(v: f64) -> Self {
                $name::new(v)
            }
        }

        impl $name {
            /// Raw provider values are kept as-is, including NaN holes.
            pub const fn new(val: f64) -> Self {
                Self(val)
            }

            pub const fn missing() -> Self {
                Self(f64::NAN)
            }

            /// NaN-skipping max: a hole never wins over a real value.
            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self(self.0.max(other.0))
            }

            /// NaN-skipping min.
            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self(self.0.min(other.0))
            }
        }

        impl PriceLike for $name {
            fn value(&self) -> f64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                if self.is_missing() {
                    write!(f, "-")
                } else {
                    write!(f, "{:.4}", self.0)
                }
            }
        }
    };
}

define_price_type!(OpenPrice);
define_price_type!(HighPrice);
define_price_type!(LowPrice);
define_price_type!(ClosePrice);

impl Mul<f64> for ClosePrice {
    type Output = f64;

    fn mul(self, rhs: f64) -> Self::Output {
        self.value() * rhs
    }
}

/// Number of bars collapsed into one output bar. Zero is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AggregationFactor(usize);

impl AggregationFactor {
    pub const IDENTITY: Self = Self(1);

    pub const fn new(factor: usize) -> Option<Self> {
        if factor == 0 { None } else { Some(Self(factor)) }
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    pub const fn is_identity(self) -> bool {
        self.0 == 1
    }
}

impl TryFrom<usize> for AggregationFactor {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| "aggregation factor must be at least 1".to_string())
    }
}

impl std::fmt::Display for AggregationFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.0)
    }
}
