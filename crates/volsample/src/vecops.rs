//! Component-wise helpers for `nalgebra` vectors of any size.
//!
//! Covers float and integer components. Division by zero never panics: the
//! inverse of a zero component is zero, so `divided_by` zeroes those slots.

use nalgebra::{SVector, Scalar};
use std::ops::{Add, Mul, Sub};

/// Scalar kinds the helpers accept.
pub trait Component:
    Scalar + Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    const ZERO: Self;
    fn abs_value(self) -> Self;
    /// −1, 0 or 1. Zero maps to zero.
    fn sign(self) -> Self;
    /// `1 / self`, or zero when `self` is zero. Integers use truncating division.
    fn recip_or_zero(self) -> Self;

    /// Type squared gaps are summed in: `f64` for floats, `i128` for integers.
    type Wide: Copy + PartialOrd;
    const WIDE_ZERO: Self::Wide;
    /// `(self − other)²` in `Wide`. Integers saturate instead of overflowing.
    fn gap_sq(self, other: Self) -> Self::Wide;
    fn wide_add(a: Self::Wide, b: Self::Wide) -> Self::Wide;
}

macro_rules! impl_component_float {
    ($($t:ty),*) => {$(
        impl Component for $t {
            const ZERO: Self = 0.0;
            #[inline]
            fn abs_value(self) -> Self {
                self.abs()
            }
            #[inline]
            fn sign(self) -> Self {
                if self > 0.0 {
                    1.0
                } else if self < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            }
            #[inline]
            fn recip_or_zero(self) -> Self {
                if self == 0.0 { 0.0 } else { 1.0 / self }
            }
            type Wide = f64;
            const WIDE_ZERO: f64 = 0.0;
            #[inline]
            fn gap_sq(self, other: Self) -> f64 {
                let d = self as f64 - other as f64;
                d * d
            }
            #[inline]
            fn wide_add(a: f64, b: f64) -> f64 {
                a + b
            }
        }
    )*};
}

macro_rules! impl_component_int {
    ($($t:ty),*) => {$(
        impl Component for $t {
            const ZERO: Self = 0;
            #[inline]
            fn abs_value(self) -> Self {
                self.wrapping_abs()
            }
            #[inline]
            fn sign(self) -> Self {
                self.signum()
            }
            #[inline]
            fn recip_or_zero(self) -> Self {
                if self == 0 { 0 } else { 1 / self }
            }
            type Wide = i128;
            const WIDE_ZERO: i128 = 0;
            #[inline]
            fn gap_sq(self, other: Self) -> i128 {
                let d = self as i128 - other as i128;
                d.saturating_mul(d)
            }
            #[inline]
            fn wide_add(a: i128, b: i128) -> i128 {
                a.saturating_add(b)
            }
        }
    )*};
}

impl_component_float!(f32, f64);
impl_component_int!(i32, i64);

/// Extension methods on `SVector<T, D>`.
pub trait VectorExt<T: Component, const D: usize> {
    fn inverted(&self) -> SVector<T, D>;
    fn abs_components(&self) -> SVector<T, D>;
    fn sign_components(&self) -> SVector<T, D>;
    /// `self ⊙ divisor⁻¹` with zero-safe inverse.
    fn divided_by(&self, divisor: &SVector<T, D>) -> SVector<T, D>;
    /// Adds `delta` component by component.
    fn offset(&self, delta: &SVector<T, D>) -> SVector<T, D>;
    /// Adds `amount` to component `axis`.
    fn offset_axis(&self, axis: usize, amount: T) -> SVector<T, D>;
    /// Copy with component `axis` replaced by `value`.
    fn with_component(&self, axis: usize, value: T) -> SVector<T, D>;
    /// Copy with every `Some` slot replaced; `None` keeps the current component.
    fn with(&self, values: [Option<T>; D]) -> SVector<T, D>;
    /// `|self − target|² <= range²`, summed wide enough that large integer
    /// gaps cannot overflow.
    fn in_range_of(&self, target: &SVector<T, D>, range: T) -> bool;
}

impl<T: Component, const D: usize> VectorExt<T, D> for SVector<T, D> {
    #[inline]
    fn inverted(&self) -> SVector<T, D> {
        self.map(T::recip_or_zero)
    }
    #[inline]
    fn abs_components(&self) -> SVector<T, D> {
        self.map(T::abs_value)
    }
    #[inline]
    fn sign_components(&self) -> SVector<T, D> {
        self.map(T::sign)
    }
    #[inline]
    fn divided_by(&self, divisor: &SVector<T, D>) -> SVector<T, D> {
        self.zip_map(&divisor.inverted(), |a, b| a * b)
    }
    #[inline]
    fn offset(&self, delta: &SVector<T, D>) -> SVector<T, D> {
        self.zip_map(delta, |a, b| a + b)
    }
    #[inline]
    fn offset_axis(&self, axis: usize, amount: T) -> SVector<T, D> {
        let mut out = *self;
        out[axis] = out[axis] + amount;
        out
    }
    #[inline]
    fn with_component(&self, axis: usize, value: T) -> SVector<T, D> {
        let mut out = *self;
        out[axis] = value;
        out
    }
    #[inline]
    fn with(&self, values: [Option<T>; D]) -> SVector<T, D> {
        let mut out = *self;
        for (slot, v) in out.iter_mut().zip(values) {
            if let Some(v) = v {
                *slot = v;
            }
        }
        out
    }
    #[inline]
    fn in_range_of(&self, target: &SVector<T, D>, range: T) -> bool {
        let sq = self
            .iter()
            .zip(target.iter())
            .fold(T::WIDE_ZERO, |acc, (&a, &b)| T::wide_add(acc, a.gap_sq(b)));
        sq <= range.gap_sq(T::ZERO)
    }
}
