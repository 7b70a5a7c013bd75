//! Structural differentiation (`spec.md` §4.1's derivative-rules table).
//!
//! Each arm is a direct translation of the corresponding `derivative()`
//! override in `examples/original_source/` (`polynomials_and_exponential_functions.cpp`,
//! `trigonometric_functions.cpp`, `inverse_trigonometric_functions.cpp`,
//! `chain_rule.cpp`, `implicit_differentiation.cpp`). Every compound
//! result is simplified before return, matching the source's
//! `->simplify()` suffix on every constructed derivative.

use super::{Expr, Number};
use crate::numeric::Rational;

impl Expr {
    /// Returns `d/dx` of this expression, simplified.
    #[must_use]
    pub fn derivative(&self) -> Self {
        match self {
            Self::Const(_) => Self::int(0),
            Self::VarX => Self::int(1),
            Self::VarY => Self::DerivY,
            Self::DerivY => Self::DerivY,
            Self::Pow(e) => Self::mul(Self::Const(*e), Self::Pow(minus_one(*e))).simplify(),
            Self::Exponential(a) => Self::mul(Self::real(*a), Self::Exponential(*a)).simplify(),
            Self::AddSub(l, r, op) => {
                Self::AddSub(l.derivative().into(), r.derivative().into(), *op).simplify()
            }
            Self::Mul(f, g) => Self::add(
                Self::mul(f.derivative(), g.as_ref().clone()),
                Self::mul(f.as_ref().clone(), g.derivative()),
            )
            .simplify(),
            Self::Div(f, g) => Self::div(
                Self::sub(
                    Self::mul(f.derivative(), g.as_ref().clone()),
                    Self::mul(f.as_ref().clone(), g.derivative()),
                ),
                Self::mul(g.as_ref().clone(), g.as_ref().clone()),
            )
            .simplify(),
            Self::Sin => Self::Cos,
            Self::Cos => Self::mul(Self::int(-1), Self::Sin).simplify(),
            Self::Tan => Self::mul(Self::Sec, Self::Sec).simplify(),
            Self::Csc => Self::mul(Self::int(-1), Self::mul(Self::Csc, Self::Cot)).simplify(),
            Self::Sec => Self::mul(Self::Sec, Self::Tan).simplify(),
            Self::Cot => Self::mul(
                Self::int(-1),
                Self::div(Self::int(1), Self::mul(Self::Sin, Self::Sin)),
            )
            .simplify(),
            Self::ArcSin => Self::div(Self::int(1), Self::sqrt_of(one_minus_x_squared())).simplify(),
            Self::ArcCos => {
                Self::div(Self::int(-1), Self::sqrt_of(one_minus_x_squared())).simplify()
            }
            Self::ArcTan => Self::div(Self::int(1), one_plus_x_squared()).simplify(),
            Self::ArcCsc => {
                Self::div(Self::int(-1), Self::mul(abs_x(), x_squared_minus_one())).simplify()
            }
            Self::ArcSec => {
                Self::div(Self::int(1), Self::mul(abs_x(), x_squared_minus_one())).simplify()
            }
            Self::ArcCot => Self::div(Self::int(-1), one_plus_x_squared()).simplify(),
            Self::SinC(u) => Self::mul(Self::cos_of(u.as_ref().clone()), u.derivative()).simplify(),
            Self::CosC(u) => Self::mul(
                Self::mul(Self::int(-1), Self::sin_of(u.as_ref().clone())),
                u.derivative(),
            )
            .simplify(),
            Self::PowC(u, e) => Self::mul(
                Self::mul(Self::Const(*e), Self::pow_of(u.as_ref().clone(), minus_one(*e))),
                u.derivative(),
            )
            .simplify(),
            Self::ExpC(u) => {
                Self::mul(Self::exp_of(u.as_ref().clone()), u.derivative()).simplify()
            }
            Self::Sqrt(u) => Self::div(
                u.derivative(),
                Self::mul(Self::int(2), Self::sqrt_of(u.as_ref().clone())),
            )
            .simplify(),
            Self::Chain(outer, inner) => Self::mul(
                outer.derivative().substitute(inner),
                inner.derivative(),
            )
            .simplify(),
        }
    }
}

/// `e - 1`, preserving the rational nature of `e` when it is rational.
fn minus_one(e: Number) -> Number {
    match e {
        Number::Rational(r) => Number::Rational(r.add_signed(Rational::from_int(1), -1)),
        Number::Real(v) => Number::Real(v - 1.0),
    }
}

fn one_minus_x_squared() -> Expr {
    Expr::sub(Expr::int(1), Expr::pow_int(2))
}

fn one_plus_x_squared() -> Expr {
    Expr::add(Expr::int(1), Expr::pow_int(2))
}

fn x_squared_minus_one() -> Expr {
    Expr::sqrt_of(Expr::sub(Expr::pow_int(2), Expr::int(1)))
}

fn abs_x() -> Expr {
    Expr::sqrt_of(Expr::pow_int(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_rule_is_rational_preserving() {
        let e = Expr::pow_int(6).derivative();
        assert_eq!(e.to_string(), "6*x^5");
    }

    #[test]
    fn constant_times_power() {
        let e = Expr::mul(Expr::int(3), Expr::pow_int(4)).derivative();
        assert_eq!(e.to_string(), "12*x^3");
    }

    #[test]
    fn chain_of_sin_and_power_matches_numeric_slope() {
        let e = Expr::chain(Expr::Sin, Expr::pow_int(2));
        let d = e.derivative();
        let expected = 2.0 * 1.2 * (1.2_f64 * 1.2).cos();
        assert!((d.evaluate(1.2) - expected).abs() < 1e-9);
    }

    #[test]
    fn arctan_derivative_renders_with_denominator_parens() {
        let e = Expr::ArcTan.derivative();
        assert_eq!(e.to_string(), "1/(x^2 + 1)");
    }

    #[test]
    fn tan_times_one_plus_tan_minus_sec_squared_collapses() {
        let e = Expr::sub(
            Expr::mul(Expr::Tan, Expr::add(Expr::int(1), Expr::Tan)),
            Expr::mul(Expr::Sec, Expr::Sec),
        )
        .simplify();
        assert_eq!(e.to_string(), "tan(x) - 1");
    }
}
