//! Shape predicates for the tangent/secant identity rewrite
//! (`spec.md` §4.3 step 4): `tan*(1+tan) - sec*sec -> tan - 1`.
//!
//! Grounded on `isTangentExpr`, `isAddOnePlusTangent`,
//! `isTanTimesOnePlusTan`, `isSecSquaredExpr` in
//! `examples/original_source/polynomials_and_exponential_functions.cpp`.

use crate::expr::{AddOp, Expr};

fn is_tangent(e: &Expr) -> bool {
    matches!(e, Expr::Tan)
}

fn is_secant(e: &Expr) -> bool {
    matches!(e, Expr::Sec)
}

/// `1 + tan(x)` in either operand order.
fn is_one_plus_tangent(e: &Expr) -> bool {
    matches!(e, Expr::AddSub(l, r, AddOp::Add)
        if (l.is_const_one() && is_tangent(r)) || (is_tangent(l) && r.is_const_one()))
}

/// `tan(x) * (1 + tan(x))` in either factor order.
pub fn is_tan_times_one_plus_tan(e: &Expr) -> bool {
    matches!(e, Expr::Mul(l, r)
        if (is_tangent(l) && is_one_plus_tangent(r)) || (is_one_plus_tangent(l) && is_tangent(r)))
}

/// `sec(x) * sec(x)`.
pub fn is_sec_squared(e: &Expr) -> bool {
    matches!(e, Expr::Mul(l, r) if is_secant(l) && is_secant(r))
}
