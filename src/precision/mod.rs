//! Precision type definitions

/// Trait for the scalar types the verification routines operate on.
///
/// Everything here is generic over `Precision` rather than hardwired to
/// `f64` so an extended-precision float (a double-double wrapper, say) can
/// slot in without touching the multiplication or verification code. Only
/// `f64` is implemented in this crate.
pub trait Precision:
    From<f64>
    + Into<f64>
    + Copy
    + Clone
    + std::fmt::Debug
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Div<Output = Self>
    + std::ops::Neg<Output = Self>
    + std::ops::AddAssign
    + std::ops::SubAssign
    + std::cmp::PartialEq
    + std::cmp::PartialOrd
    + num_traits::Zero
    + num_traits::One
    + num_traits::Float
{
    /// Machine epsilon for this precision type
    fn epsilon() -> Self;

    /// Square root function
    fn sqrt(self) -> Self;

    /// Absolute value function
    fn abs(self) -> Self;

    /// Maximum of two values
    fn max(self, other: Self) -> Self;

    /// Minimum of two values
    fn min(self, other: Self) -> Self;
}

impl Precision for f64 {
    fn epsilon() -> f64 {
        f64::EPSILON
    }

    #[inline]
    fn sqrt(self) -> f64 {
        self.sqrt()
    }

    #[inline]
    fn abs(self) -> f64 {
        self.abs()
    }

    #[inline]
    fn max(self, other: f64) -> f64 {
        self.max(other)
    }

    #[inline]
    fn min(self, other: f64) -> f64 {
        self.min(other)
    }
}
