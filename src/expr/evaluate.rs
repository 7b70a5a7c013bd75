//! Numeric evaluation at a chosen `x` (`spec.md` §4.1).
//!
//! A direct structural translation of every `evaluate(double x)`
//! override in `examples/original_source/`: division by zero and the
//! `y`/`y'` symbols explicitly yield `NaN` rather than propagating
//! whatever IEEE-754 default a bare `/` would produce.

use super::Expr;

impl Expr {
    /// Evaluates this expression at `x`, following ordinary
    /// real-arithmetic semantics. `VarY`/`DerivY` and division by zero
    /// yield `NaN`; any other non-finite input propagates naturally.
    #[must_use]
    #[allow(
        clippy::float_cmp,
        reason = "checking for exact division by zero, not approximate equality"
    )]
    #[allow(
        clippy::cast_precision_loss,
        reason = "AddOp::sign() is always +1 or -1, representable exactly as f64"
    )]
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Self::Const(n) => n.value(),
            Self::VarX => x,
            Self::VarY | Self::DerivY => f64::NAN,
            Self::Pow(e) => x.powf(e.value()),
            Self::Exponential(a) => (a * x).exp(),
            Self::AddSub(l, r, op) => l.evaluate(x) + (op.sign() as f64) * r.evaluate(x),
            Self::Mul(l, r) => l.evaluate(x) * r.evaluate(x),
            Self::Div(l, r) => {
                let rv = r.evaluate(x);
                if rv == 0.0 {
                    f64::NAN
                } else {
                    l.evaluate(x) / rv
                }
            }
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Csc => 1.0 / x.sin(),
            Self::Sec => 1.0 / x.cos(),
            Self::Cot => 1.0 / x.tan(),
            Self::ArcSin => x.asin(),
            Self::ArcCos => x.acos(),
            Self::ArcTan => x.atan(),
            Self::ArcCsc => (1.0 / x).asin(),
            Self::ArcSec => (1.0 / x).acos(),
            Self::ArcCot => (1.0 / x).atan(),
            Self::SinC(u) => u.evaluate(x).sin(),
            Self::CosC(u) => u.evaluate(x).cos(),
            Self::PowC(u, e) => u.evaluate(x).powf(e.value()),
            Self::ExpC(u) => u.evaluate(x).exp(),
            Self::Sqrt(u) => u.evaluate(x).sqrt(),
            Self::Chain(outer, inner) => outer.evaluate(inner.evaluate(x)),
        }
    }
}
