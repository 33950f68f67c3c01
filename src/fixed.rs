//! Signed 32.32 fixed point arithmetic
//!
//! All color math in this crate goes through [`Fixed`]. Products and quotients are computed in
//! `i128` and saturated back into the `i64` representation, so chained multiply-accumulate of
//! three matrix terms never wraps.

use std::ops::{Add, Neg, Sub};

const FRAC_BITS: u32 = 32;

/// Signed fixed point number with 32 integer and 32 fractional bits
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed(i64);

impl Fixed {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1 << FRAC_BITS);
    pub const HALF: Self = Self(1 << (FRAC_BITS - 1));

    pub const fn raw(self) -> i64 {
        self.0
    }

    pub const fn from_int(v: i32) -> Self {
        Self((v as i64) << FRAC_BITS)
    }

    /// `num / den`, rounded to the nearest representable value (ties away from zero)
    ///
    /// A zero denominator saturates towards the sign of `num`.
    pub const fn from_fraction(num: i64, den: i64) -> Self {
        if den == 0 {
            return Self::saturating_by_sign(num);
        }

        let negative = (num < 0) != (den < 0);
        let num = (num as i128).abs() << FRAC_BITS;
        let den = (den as i128).abs();

        let mut quot = num / den;
        if (num % den) * 2 >= den {
            quot += 1;
        }

        Self(saturate(if negative { -quot } else { quot }))
    }

    /// Multiply, truncating the product towards negative infinity
    pub const fn mul(self, rhs: Self) -> Self {
        Self(saturate((self.0 as i128 * rhs.0 as i128) >> FRAC_BITS))
    }

    /// Divide, truncating the quotient towards zero
    ///
    /// Dividing by zero saturates towards the sign of `self`.
    pub const fn div(self, rhs: Self) -> Self {
        if rhs.0 == 0 {
            return Self::saturating_by_sign(self.0);
        }

        Self(saturate(((self.0 as i128) << FRAC_BITS) / rhs.0 as i128))
    }

    /// Round to the nearest integer, halves round up
    pub const fn round_to_int(self) -> i64 {
        self.0.saturating_add(Self::HALF.0) >> FRAC_BITS
    }

    /// Drop the fractional bits (arithmetic shift, so negative values round down)
    pub const fn trunc_to_int(self) -> i64 {
        self.0 >> FRAC_BITS
    }

    const fn saturating_by_sign(v: i64) -> Self {
        if v < 0 { Self(i64::MIN) } else { Self(i64::MAX) }
    }
}

const fn saturate(v: i128) -> i64 {
    if v > i64::MAX as i128 {
        i64::MAX
    } else if v < i64::MIN as i128 {
        i64::MIN
    } else {
        v as i64
    }
}

impl Add for Fixed {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Fixed {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Fixed {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}
