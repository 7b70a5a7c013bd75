//! Textual rendering (`toString` in `spec.md` §4.1/§6).
//!
//! Grounded on the `toString()` overrides spread across
//! `examples/original_source/polynomials_and_exponential_functions.cpp`,
//! `trigonometric_functions.cpp`, `inverse_trigonometric_functions.cpp`
//! and `chain_rule.cpp`, refined to the exact contract `spec.md` states
//! in §4.1/§6 rather than the source's unconditional double-parenthesized
//! `Divide::toString` (see `DESIGN.md` for the deviation).

use std::fmt;

use super::{Expr, Number};
use crate::numeric::format_real;

impl fmt::Display for Expr {
    #[allow(
        clippy::float_cmp,
        reason = "comparing the exponential coefficient against the exact constant 1.0"
    )]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Const(n) => write!(f, "{}", render_number(*n, format_real)),
            Self::VarX => write!(f, "x"),
            Self::VarY => write!(f, "y"),
            Self::DerivY => write!(f, "y'"),
            Self::Pow(e) => write!(f, "x^{}", render_exponent(*e)),
            Self::Exponential(a) => {
                if *a == 1.0 {
                    write!(f, "e^x")
                } else {
                    write!(f, "e^({}*x)", format_real(*a))
                }
            }
            Self::AddSub(l, r, op) => write!(f, "{l} {} {r}", op.as_str()),
            Self::Mul(..) => write!(f, "{}", render_product(self)),
            Self::Div(l, r) => write!(f, "{}/{}", wrap_if_needed(l), wrap_if_needed(r)),
            Self::Sin => write!(f, "sin(x)"),
            Self::Cos => write!(f, "cos(x)"),
            Self::Tan => write!(f, "tan(x)"),
            Self::Csc => write!(f, "csc(x)"),
            Self::Sec => write!(f, "sec(x)"),
            Self::Cot => write!(f, "cot(x)"),
            Self::ArcSin => write!(f, "arcsin(x)"),
            Self::ArcCos => write!(f, "arccos(x)"),
            Self::ArcTan => write!(f, "arctan(x)"),
            Self::ArcCsc => write!(f, "arccsc(x)"),
            Self::ArcSec => write!(f, "arcsec(x)"),
            Self::ArcCot => write!(f, "arccot(x)"),
            Self::SinC(u) => write!(f, "sin({u})"),
            Self::CosC(u) => write!(f, "cos({u})"),
            Self::PowC(u, e) => write!(f, "({u})^{}", render_exponent(*e)),
            Self::ExpC(u) => write!(f, "e^({u})"),
            Self::Sqrt(u) => write!(f, "sqrt({u})"),
            Self::Chain(_, inner) => write!(f, "f({inner})"),
        }
    }
}

fn render_number(n: Number, real: impl Fn(f64) -> String) -> String {
    match n {
        Number::Rational(r) => r.to_string(),
        Number::Real(v) => real(v),
    }
}

fn render_exponent(e: Number) -> String {
    match e {
        Number::Rational(r) if r.denom() == 1 => r.numer().to_string(),
        Number::Rational(r) => format!("({r})"),
        Number::Real(v) => format_real(v),
    }
}

/// Wraps `e` in parentheses when rendering it unparenthesized inside a
/// product or as a `Div` operand would be ambiguous: `AddSub`, `Div`,
/// and `Mul` all need it, per `spec.md` §4.1/§6's stable-textual-form
/// examples.
fn wrap_if_needed(e: &Expr) -> String {
    match e {
        Expr::AddSub(..) | Expr::Div(..) | Expr::Mul(..) => format!("({e})"),
        _ => e.to_string(),
    }
}

/// The two atomic trig variants that collapse a two-factor product
/// into `fn^2(x)` per `spec.md` §4.1.
fn atomic_trig_name(e: &Expr) -> Option<&'static str> {
    match e {
        Expr::Sin => Some("sin"),
        Expr::Cos => Some("cos"),
        Expr::Tan => Some("tan"),
        Expr::Csc => Some("csc"),
        Expr::Sec => Some("sec"),
        Expr::Cot => Some("cot"),
        _ => None,
    }
}

/// Flattens nested `Mul` nodes into an ordered factor list, matching
/// `collectFactors` in `polynomials_and_exponential_functions.cpp`.
fn flatten_factors<'expr>(e: &'expr Expr, out: &mut Vec<&'expr Expr>) {
    if let Expr::Mul(l, r) = e {
        flatten_factors(l, out);
        flatten_factors(r, out);
    } else {
        out.push(e);
    }
}

fn render_product(e: &Expr) -> String {
    let mut factors = Vec::new();
    flatten_factors(e, &mut factors);

    if let [a, b] = factors.as_slice() {
        if let (Some(name), Some(other)) = (atomic_trig_name(a), atomic_trig_name(b)) {
            if name == other {
                return format!("{name}^2(x)");
            }
        }
    }

    factors
        .iter()
        .map(|f| wrap_if_needed(f))
        .collect::<Vec<_>>()
        .join("*")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_power_renders_bare_exponent() {
        assert_eq!(Expr::pow_int(6).to_string(), "x^6");
    }

    #[test]
    fn atomic_trig_functions_render_as_function_calls() {
        assert_eq!(Expr::Sin.to_string(), "sin(x)");
        assert_eq!(Expr::ArcSin.to_string(), "arcsin(x)");
    }

    #[test]
    fn composed_power_wraps_its_argument() {
        let e = Expr::pow_of(Expr::VarX, Number::Rational(crate::numeric::Rational::from_int(3)));
        assert_eq!(e.to_string(), "(x)^3");
    }

    #[test]
    fn exponential_atomic_with_coefficient() {
        assert_eq!(Expr::Exponential(2.0).to_string(), "e^(2*x)");
    }

    #[test]
    fn division_wraps_an_addsub_operand() {
        let e = Expr::div(
            Expr::int(1),
            Expr::add(Expr::int(1), Expr::pow_int(2)),
        );
        assert_eq!(e.to_string(), "1/(1 + x^2)");
    }

    #[test]
    fn division_wraps_a_product_operand() {
        let e = Expr::div(
            Expr::mul(Expr::int(-2), Expr::VarX),
            Expr::mul(Expr::int(2), Expr::VarY),
        );
        assert_eq!(e.to_string(), "(-2*x)/(2*y)");
    }

    #[test]
    fn same_atomic_trig_factors_collapse_to_squared_form() {
        let e = Expr::mul(Expr::Sin, Expr::Sin);
        assert_eq!(e.to_string(), "sin^2(x)");
    }

    #[test]
    fn sqrt_of_sum_renders_without_extra_parens() {
        let e = Expr::sqrt_of(Expr::sub(Expr::int(1), Expr::pow_int(2)));
        assert_eq!(e.to_string(), "sqrt(1 - x^2)");
    }
}
