//! The algebraic simplifier (`spec.md` §4.3): polynomial
//! canonicalization, exact-rational constant folding, identity rules,
//! trig pattern rewrites, and common-factor extraction.
//!
//! Grounded on the legacy `simplify(expr)` driver in
//! `examples/CokieMiner-SymbAnaFis/src/simplification/mod.rs` (the
//! bounded, cycle-detected fixed-point loop) wrapping a structural,
//! per-variant pass translated directly from the `simplify()`
//! overrides in `examples/original_source/`.

mod factor;
mod patterns;

use rustc_hash::FxHashSet;

use crate::expr::{AddOp, Expr, Number};
use crate::poly::Polynomial;

/// Upper bound on re-applications of [`simplify_once`] within a single
/// call to [`Expr::simplify`], matching the teacher's `MAX_ITERATIONS`
/// guard. `spec.md` §8 property 1 only requires convergence "in at
/// most three applications"; this leaves headroom.
const MAX_ITERATIONS: usize = 6;

impl Expr {
    /// Returns an algebraically simplified, observationally-equivalent
    /// form of this expression.
    ///
    /// Applies [`simplify_once`] repeatedly until the rendered form
    /// stops changing or a previously-seen intermediate form recurs,
    /// bounded by [`MAX_ITERATIONS`].
    #[must_use]
    pub fn simplify(&self) -> Self {
        let mut current = self.clone();
        let mut seen = FxHashSet::default();
        for _ in 0..MAX_ITERATIONS {
            if !seen.insert(current.to_string()) {
                break;
            }
            let next = simplify_once(&current);
            if next.to_string() == current.to_string() {
                break;
            }
            current = next;
        }
        current
    }
}

/// One bottom-up structural simplification pass: children are
/// simplified first, then the rule set for this node's shape applies.
fn simplify_once(e: &Expr) -> Expr {
    match e {
        Expr::Const(_)
        | Expr::VarX
        | Expr::VarY
        | Expr::DerivY
        | Expr::Sin
        | Expr::Cos
        | Expr::Tan
        | Expr::Csc
        | Expr::Sec
        | Expr::Cot
        | Expr::ArcSin
        | Expr::ArcCos
        | Expr::ArcTan
        | Expr::ArcCsc
        | Expr::ArcSec
        | Expr::ArcCot => e.clone(),
        Expr::Pow(n) => normalize_pow(*n),
        Expr::Exponential(_) => e.clone(),
        Expr::AddSub(l, r, op) => addsub_simplify(simplify_once(l), simplify_once(r), *op),
        Expr::Mul(l, r) => mul_simplify(simplify_once(l), simplify_once(r)),
        Expr::Div(l, r) => div_simplify(simplify_once(l), simplify_once(r)),
        Expr::SinC(u) => {
            let u = simplify_once(u);
            if u == Expr::VarX {
                Expr::Sin
            } else {
                Expr::sin_of(u)
            }
        }
        Expr::CosC(u) => {
            let u = simplify_once(u);
            if u == Expr::VarX {
                Expr::Cos
            } else {
                Expr::cos_of(u)
            }
        }
        Expr::PowC(u, n) => powc_simplify(simplify_once(u), *n),
        Expr::ExpC(u) => {
            let u = simplify_once(u);
            if u == Expr::VarX {
                Expr::Exponential(1.0)
            } else if let Some(c) = u.as_const() {
                Expr::real(c.value().exp())
            } else {
                Expr::exp_of(u)
            }
        }
        Expr::Sqrt(u) => {
            let u = simplify_once(u);
            if let Some(c) = u.as_const() {
                if c.value() >= 0.0 {
                    return Expr::real(c.value().sqrt());
                }
            }
            Expr::sqrt_of(u)
        }
        Expr::Chain(outer, inner) => Expr::chain(simplify_once(outer), simplify_once(inner)),
    }
}

#[allow(
    clippy::float_cmp,
    reason = "comparing a real exponent against the exact constants 0.0/1.0"
)]
fn normalize_pow(n: Number) -> Expr {
    match n {
        Number::Rational(r) if r.is_zero() => Expr::int(1),
        Number::Rational(r) if r.is_one() => Expr::VarX,
        Number::Real(v) if v == 0.0 => Expr::int(1),
        Number::Real(v) if v == 1.0 => Expr::VarX,
        other => Expr::Pow(other),
    }
}

#[allow(
    clippy::float_cmp,
    reason = "comparing a real exponent against the exact constants 0.0/1.0"
)]
fn powc_simplify(u: Expr, n: Number) -> Expr {
    if let Number::Rational(r) = n {
        if r.is_zero() {
            return Expr::int(1);
        }
        if r.is_one() {
            return u;
        }
    } else if let Number::Real(v) = n {
        if v == 0.0 {
            return Expr::int(1);
        }
        if v == 1.0 {
            return u;
        }
    }
    if u == Expr::VarX {
        return Expr::Pow(n);
    }
    if let Some(c) = u.as_const() {
        return Expr::real(c.value().powf(n.value()));
    }
    Expr::pow_of(u, n)
}

/// Combines two numbers exactly when both are rational, else as reals.
#[allow(
    clippy::cast_precision_loss,
    reason = "sign is always +1 or -1, representable exactly as f64"
)]
fn fold_numbers(l: Number, r: Number, sign: i64) -> Number {
    match (l.as_rational(), r.as_rational()) {
        (Some(lr), Some(rr)) => Number::Rational(lr.add_signed(rr, sign)),
        _ => Number::Real(l.value() + (sign as f64) * r.value()),
    }
}

fn addsub_simplify(l: Expr, r: Expr, op: AddOp) -> Expr {
    // Step 1: polynomial path. Skipped for two bare constants so that
    // exact-rational folding (step 2) still produces exact literals
    // for pure constant arithmetic (spec.md §8 property 6) instead of
    // being pre-empted by the polynomial form's real-valued constant
    // term; see DESIGN.md for this deliberate departure from a
    // literal, unconditional polynomial-first order.
    if !(matches!(l, Expr::Const(_)) && matches!(r, Expr::Const(_))) {
        let lp = Polynomial::from_expr(&l);
        let rp = Polynomial::from_expr(&r);
        if lp.is_ok() && rp.is_ok() {
            let sign = match op {
                AddOp::Add => 1.0,
                AddOp::Sub => -1.0,
            };
            return lp.add_signed(&rp, sign).to_expr();
        }
    }

    // Step 2: constant folding.
    if let (Some(lc), Some(rc)) = (l.as_const(), r.as_const()) {
        return Expr::Const(fold_numbers(lc, rc, op.sign()));
    }

    // Step 3: identity elimination.
    match op {
        AddOp::Add => {
            if l.is_const_zero() {
                return r;
            }
            if r.is_const_zero() {
                return l;
            }
        }
        AddOp::Sub => {
            if r.is_const_zero() {
                return l;
            }
            if l.is_const_zero() {
                return match r.as_const() {
                    Some(Number::Rational(rr)) => Expr::Const(Number::Rational(rr.neg())),
                    Some(Number::Real(v)) => Expr::real(-v),
                    None => simplify_once(&Expr::mul(Expr::int(-1), r)),
                };
            }
        }
    }

    // Step 4: trig pattern rewrites.
    if op == AddOp::Sub {
        if patterns::is_tan_times_one_plus_tan(&l) && patterns::is_sec_squared(&r) {
            return simplify_once(&Expr::sub(Expr::Tan, Expr::int(1)));
        }
        if patterns::is_sec_squared(&l) && patterns::is_tan_times_one_plus_tan(&r) {
            return simplify_once(&Expr::sub(Expr::int(1), Expr::Tan));
        }
    }

    // Step 5: common-factor extraction.
    let mut lf = Vec::new();
    let mut rf = Vec::new();
    factor::collect_factors(&l, &mut lf);
    factor::collect_factors(&r, &mut rf);

    if let Some(common) = factor::extract_common_factor(&mut lf, &mut rf) {
        return simplify_once(&Expr::mul(
            common,
            simplify_once(&Expr::AddSub(
                factor::build_product(lf).into(),
                factor::build_product(rf).into(),
                op,
            )),
        ));
    }
    if let Some(common) = factor::extract_variable_from_power(&mut lf, &mut rf) {
        return simplify_once(&Expr::mul(
            common,
            simplify_once(&Expr::AddSub(
                factor::build_product(lf).into(),
                factor::build_product(rf).into(),
                op,
            )),
        ));
    }
    if let Some(common) = factor::extract_variable_from_power(&mut rf, &mut lf) {
        return simplify_once(&Expr::mul(
            common,
            simplify_once(&Expr::AddSub(
                factor::build_product(rf).into(),
                factor::build_product(lf).into(),
                op,
            )),
        ));
    }

    Expr::AddSub(l.into(), r.into(), op)
}

#[allow(
    clippy::float_cmp,
    reason = "comparing a folded constant factor against the exact constants 0.0/1.0"
)]
fn mul_simplify(l: Expr, r: Expr) -> Expr {
    if l.is_const_zero() || r.is_const_zero() {
        return Expr::int(0);
    }
    if l.is_const_one() {
        return r;
    }
    if r.is_const_one() {
        return l;
    }

    let mut factors = Vec::new();
    factor::collect_factors(&l, &mut factors);
    factor::collect_factors(&r, &mut factors);

    let mut consts = Vec::new();
    let mut rest = Vec::new();
    for f in factors {
        match f.as_const() {
            Some(n) => consts.push(n),
            None => rest.push(f),
        }
    }

    if consts.is_empty() {
        return factor::build_product(rest);
    }

    let mut product = consts[0];
    for &n in &consts[1..] {
        product = match (product.as_rational(), n.as_rational()) {
            (Some(a), Some(b)) => Number::Rational(a.mul(b)),
            _ => Number::Real(product.value() * n.value()),
        };
    }

    if product.value() == 0.0 {
        return Expr::int(0);
    }
    if product.value() == 1.0 {
        return factor::build_product(rest);
    }

    let mut merged = vec![Expr::Const(product)];
    merged.extend(rest);
    factor::build_product(merged)
}

fn div_simplify(l: Expr, r: Expr) -> Expr {
    if let (Some(lc), Some(rc)) = (l.as_const(), r.as_const()) {
        if let (Some(ln), Some(rn)) = (lc.as_rational(), rc.as_rational()) {
            if rn.is_zero() {
                return Expr::real(f64::NAN);
            }
            if let Some(q) = ln.checked_div(rn) {
                return Expr::Const(Number::Rational(q));
            }
        }
        return Expr::real(lc.value() / rc.value());
    }
    if l.is_const_zero() {
        return Expr::int(0);
    }
    if r.is_const_one() {
        return l;
    }
    if r.is_const_neg_one() {
        return simplify_once(&Expr::mul(Expr::int(-1), l));
    }
    Expr::div(l, r)
}
