//! The tagged-variant expression algebra: the single `Expr` enum that
//! replaces a deep inheritance hierarchy with runtime type queries
//! (`spec.md` §9, first redesign note). Every rewrite the crate
//! performs is exhaustive case analysis on this enum.
//!
//! Children are held behind [`Arc`] rather than owned outright,
//! grounded on `examples/CokieMiner-SymbAnaFis/src/core/expr/mod.rs`'s
//! `Arc<Expr>` sharing: nodes are immutable after construction, so
//! cheap structural sharing across derivative/simplify results is
//! safe, and the same immutability is what makes concurrent read
//! access safe without synchronization (`spec.md` §5).

mod derivative;
mod display;
mod evaluate;
mod substitute;

use std::sync::Arc;

use crate::numeric::Rational;

/// Either an exact rational or a real value, shared by [`Expr::Const`]
/// and the exponent carried by [`Expr::Pow`]/[`Expr::PowC`].
///
/// Mirrors the `hasFraction`/`num`/`den`/`value` fields duplicated
/// across `Constant` and `Power` in
/// `examples/original_source/polynomials_and_exponential_functions.hpp`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An exact rational in lowest terms.
    Rational(Rational),
    /// A real value with no exact rational representation tracked.
    Real(f64),
}

impl Number {
    /// The floating-point value, used by `evaluate` and by display
    /// when no exact rational form applies.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Rational(r) => r.value(),
            Self::Real(v) => v,
        }
    }

    /// The rational form, if this number carries one.
    #[must_use]
    pub const fn as_rational(self) -> Option<Rational> {
        match self {
            Self::Rational(r) => Some(r),
            Self::Real(_) => None,
        }
    }
}

/// The operator of an [`Expr::AddSub`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOp {
    /// `+`
    Add,
    /// `-`
    Sub,
}

impl AddOp {
    /// `+1` for [`AddOp::Add`], `-1` for [`AddOp::Sub`] — the sign
    /// rational/real combination rules fold into a single addend.
    #[must_use]
    pub const fn sign(self) -> i64 {
        match self {
            Self::Add => 1,
            Self::Sub => -1,
        }
    }

    /// Flips `+` to `-` and vice versa.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Add => Self::Sub,
            Self::Sub => Self::Add,
        }
    }

    /// The rendered operator character.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
        }
    }
}

/// An immutable node in the single-variable expression algebra.
///
/// See `spec.md` §3 for the full variant table and invariants; every
/// variant listed there appears here with no additions or omissions.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal constant, exact rational or real.
    Const(Number),
    /// The differentiation variable `x`.
    VarX,
    /// The dependent variable `y` of an implicit equation.
    VarY,
    /// The symbol `y'`; differentiates to itself (a fixed point).
    DerivY,
    /// `x^e` for a real or rational exponent `e`, applied directly to `x`.
    Pow(Number),
    /// `e^(a*x)` for a real coefficient `a`.
    Exponential(f64),
    /// `left + right` or `left - right`, per `op`.
    AddSub(Arc<Expr>, Arc<Expr>, AddOp),
    /// `left * right`.
    Mul(Arc<Expr>, Arc<Expr>),
    /// `left / right`.
    Div(Arc<Expr>, Arc<Expr>),
    /// `sin(x)`.
    Sin,
    /// `cos(x)`.
    Cos,
    /// `tan(x)`.
    Tan,
    /// `csc(x)`.
    Csc,
    /// `sec(x)`.
    Sec,
    /// `cot(x)`.
    Cot,
    /// `arcsin(x)`.
    ArcSin,
    /// `arccos(x)`.
    ArcCos,
    /// `arctan(x)`.
    ArcTan,
    /// `arccsc(x)`.
    ArcCsc,
    /// `arcsec(x)`.
    ArcSec,
    /// `arccot(x)`.
    ArcCot,
    /// `sin(u)` for an arbitrary subexpression `u`.
    SinC(Arc<Expr>),
    /// `cos(u)` for an arbitrary subexpression `u`.
    CosC(Arc<Expr>),
    /// `(u)^e` for an arbitrary subexpression `u` and exponent `e`.
    PowC(Arc<Expr>, Number),
    /// `e^u` for an arbitrary subexpression `u`.
    ExpC(Arc<Expr>),
    /// `sqrt(u)`.
    Sqrt(Arc<Expr>),
    /// General `outer ∘ inner`, the fallback composition form for
    /// compositions not expressible by the dedicated `*C` variants.
    Chain(Arc<Expr>, Arc<Expr>),
}

impl Expr {
    /// `n/1` as an exact-rational constant.
    #[must_use]
    pub fn int(n: i64) -> Self {
        Self::Const(Number::Rational(Rational::from_int(n)))
    }

    /// `n/d` as an exact-rational constant.
    #[must_use]
    pub fn rational(n: i64, d: i64) -> Self {
        Self::Const(Number::Rational(Rational::new(n, d)))
    }

    /// A real-valued constant with no tracked exact rational form.
    #[must_use]
    pub const fn real(v: f64) -> Self {
        Self::Const(Number::Real(v))
    }

    /// `x^n` for an integer exponent.
    #[must_use]
    pub fn pow_int(n: i64) -> Self {
        Self::Pow(Number::Rational(Rational::from_int(n)))
    }

    /// `x^(n/d)` for a rational exponent.
    #[must_use]
    pub fn pow_rational(n: i64, d: i64) -> Self {
        Self::Pow(Number::Rational(Rational::new(n, d)))
    }

    /// `x^e` for a real exponent.
    #[must_use]
    pub const fn pow_real(e: f64) -> Self {
        Self::Pow(Number::Real(e))
    }

    /// `left + right`.
    #[must_use]
    pub fn add(left: Self, right: Self) -> Self {
        Self::AddSub(Arc::new(left), Arc::new(right), AddOp::Add)
    }

    /// `left - right`.
    #[must_use]
    pub fn sub(left: Self, right: Self) -> Self {
        Self::AddSub(Arc::new(left), Arc::new(right), AddOp::Sub)
    }

    /// `left * right`.
    #[must_use]
    pub fn mul(left: Self, right: Self) -> Self {
        Self::Mul(Arc::new(left), Arc::new(right))
    }

    /// `left / right`.
    #[must_use]
    pub fn div(left: Self, right: Self) -> Self {
        Self::Div(Arc::new(left), Arc::new(right))
    }

    /// `sin(u)`, the composed form.
    #[must_use]
    pub fn sin_of(u: Self) -> Self {
        Self::SinC(Arc::new(u))
    }

    /// `cos(u)`, the composed form.
    #[must_use]
    pub fn cos_of(u: Self) -> Self {
        Self::CosC(Arc::new(u))
    }

    /// `(u)^e`, the composed form.
    #[must_use]
    pub fn pow_of(u: Self, e: Number) -> Self {
        Self::PowC(Arc::new(u), e)
    }

    /// `e^u`, the composed form.
    #[must_use]
    pub fn exp_of(u: Self) -> Self {
        Self::ExpC(Arc::new(u))
    }

    /// `sqrt(u)`.
    #[must_use]
    pub fn sqrt_of(u: Self) -> Self {
        Self::Sqrt(Arc::new(u))
    }

    /// The general `outer ∘ inner` composition.
    #[must_use]
    pub fn chain(outer: Self, inner: Self) -> Self {
        Self::Chain(Arc::new(outer), Arc::new(inner))
    }

    /// The constant number this node holds, if it is an [`Expr::Const`].
    #[must_use]
    pub const fn as_const(&self) -> Option<Number> {
        match self {
            Self::Const(n) => Some(*n),
            _ => None,
        }
    }

    /// True when this node is the constant `0`.
    #[must_use]
    #[allow(clippy::float_cmp, reason = "comparing against the exact constant 0.0")]
    pub fn is_const_zero(&self) -> bool {
        self.as_const().is_some_and(|n| n.value() == 0.0)
    }

    /// True when this node is the constant `1`.
    #[must_use]
    #[allow(clippy::float_cmp, reason = "comparing against the exact constant 1.0")]
    pub fn is_const_one(&self) -> bool {
        self.as_const().is_some_and(|n| n.value() == 1.0)
    }

    /// True when this node is the constant `-1`.
    #[must_use]
    #[allow(clippy::float_cmp, reason = "comparing against the exact constant -1.0")]
    pub fn is_const_neg_one(&self) -> bool {
        self.as_const().is_some_and(|n| n.value() == -1.0)
    }
}
