//! Exact rational arithmetic and the decimal formatting rules shared by
//! every textual rendering in the crate.
//!
//! Grounded on `examples/original_source/expression_utils.hpp`
//! (`gcdll`, `normaliseFraction`, `formatFraction`, `formatNumber`,
//! `isIntegerDouble`) and mirrored in the `Constant`/`Power` fraction
//! fields of `polynomials_and_exponential_functions.hpp`.

use std::fmt;

/// Tolerance used to decide whether an `f64` represents an integer,
/// matching the source's `isIntegerDouble`/`isInt` (`1e-9`).
const INTEGER_TOLERANCE: f64 = 1e-9;

/// An exact rational number in lowest terms with the sign carried on
/// the numerator and a strictly positive denominator.
///
/// Arithmetic uses wrapping `i64` operations: the source's own
/// `(n, d)` pair is a plain `long long` pair with no overflow guard,
/// and this crate keeps that declared limitation (see `spec.md` §7.4)
/// as a deterministic wrap rather than a debug-mode panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    n: i64,
    d: i64,
}

impl Rational {
    /// Builds a normalized rational from a numerator/denominator pair.
    ///
    /// `d` must be nonzero; `d == 0` normalizes to `(0, 1)` defensively
    /// rather than panicking, since the engine has no exception path.
    #[must_use]
    pub fn new(n: i64, d: i64) -> Self {
        if d == 0 {
            return Self { n: 0, d: 1 };
        }
        let (mut n, mut d) = (n, d);
        if d < 0 {
            n = n.wrapping_neg();
            d = d.wrapping_neg();
        }
        let g = gcd(n, d);
        if g > 1 {
            n = n.wrapping_div(g);
            d = d.wrapping_div(g);
        }
        Self { n, d }
    }

    /// An integer rational `n/1`.
    #[must_use]
    pub fn from_int(n: i64) -> Self {
        Self::new(n, 1)
    }

    /// The numerator in lowest terms.
    #[must_use]
    pub const fn numer(self) -> i64 {
        self.n
    }

    /// The denominator in lowest terms (always positive).
    #[must_use]
    pub const fn denom(self) -> i64 {
        self.d
    }

    /// Floating-point value of this rational.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        reason = "numerator/denominator are display/evaluation magnitudes, not counters needing exact precision"
    )]
    pub fn value(self) -> f64 {
        self.n as f64 / self.d as f64
    }

    /// `self + rhs` if `sign` is `1`, `self - rhs` if `sign` is `-1`.
    #[must_use]
    pub fn add_signed(self, rhs: Self, sign: i64) -> Self {
        let n = (self.n.wrapping_mul(rhs.d))
            .wrapping_add(sign.wrapping_mul(rhs.n).wrapping_mul(self.d));
        let d = self.d.wrapping_mul(rhs.d);
        Self::new(n, d)
    }

    /// Exact product.
    #[must_use]
    pub fn mul(self, rhs: Self) -> Self {
        Self::new(self.n.wrapping_mul(rhs.n), self.d.wrapping_mul(rhs.d))
    }

    /// Exact quotient; returns `None` when `rhs` is zero (callers fall
    /// back to real-valued division, matching the source's behavior
    /// of only attempting the rational path when `rn != 0`).
    #[must_use]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.n == 0 {
            return None;
        }
        Some(Self::new(
            self.n.wrapping_mul(rhs.d),
            self.d.wrapping_mul(rhs.n),
        ))
    }

    /// True when this rational is the integer `0`.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.n == 0
    }

    /// True when this rational is the integer `1`.
    #[must_use]
    pub const fn is_one(self) -> bool {
        self.n == 1 && self.d == 1
    }

    /// True when this rational is the integer `-1`.
    #[must_use]
    pub const fn is_neg_one(self) -> bool {
        self.n == -1 && self.d == 1
    }

    /// Negation.
    #[must_use]
    pub const fn neg(self) -> Self {
        Self {
            n: self.n.wrapping_neg(),
            d: self.d,
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.d == 1 {
            write!(f, "{}", self.n)
        } else {
            write!(f, "{}/{}", self.n, self.d)
        }
    }
}

/// Absolute-value Euclidean GCD, matching `gcdll`. `gcd(0, 0) == 0`.
fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a.abs()
}

/// Attempts to recover an exact rational from a real value, matching
/// `getRational`'s integral fallback: any value within
/// [`INTEGER_TOLERANCE`] of an integer is treated as exact.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    reason = "guarded by is_integer_valued, so the fractional part is already negligible"
)]
pub fn rational_from_real(v: f64) -> Option<Rational> {
    if is_integer_valued(v) {
        Some(Rational::from_int(v.round() as i64))
    } else {
        None
    }
}

/// True when `v` is within [`INTEGER_TOLERANCE`] of an integer,
/// matching `isIntegerDouble`/`isInt`.
#[must_use]
pub fn is_integer_valued(v: f64) -> bool {
    (v - v.round()).abs() < INTEGER_TOLERANCE
}

/// Renders a real value the way `formatNumber` does: `nan`/`inf`/`-inf`
/// for non-finite values, bare integers for integral values, and
/// otherwise a fixed 8-decimal rendering with trailing zeros (and a
/// trailing bare `.`) stripped.
#[must_use]
#[allow(
    clippy::float_cmp,
    reason = "checking for an exact integer via fract()"
)]
#[allow(
    clippy::cast_possible_truncation,
    reason = "already known integral by the fract() == 0.0 guard above"
)]
pub fn format_real(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_owned();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    if v.fract() == 0.0 {
        return format!("{}", v as i64);
    }
    let mut s = format!("{v:.8}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_sign_onto_numerator() {
        let r = Rational::new(3, -4);
        assert_eq!(r.numer(), -3);
        assert_eq!(r.denom(), 4);
    }

    #[test]
    fn reduces_to_lowest_terms() {
        let r = Rational::new(6, 8);
        assert_eq!(r.numer(), 3);
        assert_eq!(r.denom(), 4);
    }

    #[test]
    fn exact_sum_of_thirds_and_sixths() {
        let a = Rational::new(1, 3);
        let b = Rational::new(1, 6);
        assert_eq!(a.add_signed(b, 1), Rational::new(1, 2));
    }

    #[test]
    fn formats_integral_reals_without_decimal_point() {
        assert_eq!(format_real(4.0), "4");
        assert_eq!(format_real(-4.0), "-4");
    }

    #[test]
    fn formats_non_finite_reals() {
        assert_eq!(format_real(f64::NAN), "nan");
        assert_eq!(format_real(f64::INFINITY), "inf");
        assert_eq!(format_real(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn strips_trailing_zeros() {
        assert_eq!(format_real(0.5), "0.5");
        assert_eq!(format_real(1.25), "1.25");
    }
}
