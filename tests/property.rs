//! Property-based tests for the universal invariants differentiation,
//! simplification, and substitution are expected to hold (`spec.md`
//! §8), run with `quickcheck` the way
//! `examples/CokieMiner-SymbAnaFis/src/tests/fuzz.rs` exercises the
//! teacher's own expression trees.

#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "property tests build small i8-ranged trees and tolerate controlled casts"
)]

use quickcheck::quickcheck;
use symdiff::Expr;

fn quadratic(a: i64, b: i64) -> Expr {
    Expr::add(
        Expr::add(Expr::pow_int(2), Expr::mul(Expr::int(a), Expr::VarX)),
        Expr::int(b),
    )
}

quickcheck! {
    fn simplify_is_idempotent(a: i8, b: i8) -> bool {
        let e = quadratic(i64::from(a), i64::from(b));
        let once = e.simplify();
        let twice = once.simplify();
        once.to_string() == twice.to_string()
    }
}

quickcheck! {
    fn simplify_preserves_evaluated_value(a: i8, b: i8, x: i8) -> bool {
        let e = quadratic(i64::from(a), i64::from(b));
        let xv = f64::from(x) / 4.0;
        (e.evaluate(xv) - e.simplify().evaluate(xv)).abs() < 1e-6
    }
}

quickcheck! {
    fn derivative_is_linear(a: i8, b: i8, x: i8) -> bool {
        // d/dx(a*sin(x) + b*cos(x)) == a*cos(x) - b*sin(x)
        let af = f64::from(a);
        let bf = f64::from(b);
        let e = Expr::add(Expr::mul(Expr::real(af), Expr::Sin), Expr::mul(Expr::real(bf), Expr::Cos));
        let d = e.derivative();
        let xv = f64::from(x) / 4.0;
        let expected = af * xv.cos() - bf * xv.sin();
        (d.evaluate(xv) - expected).abs() < 1e-6
    }
}

quickcheck! {
    fn derivative_matches_numeric_slope(x: i8) -> bool {
        let xv = f64::from(x) / 4.0;
        let e = Expr::mul(Expr::pow_int(2), Expr::Sin);
        let d = e.derivative();
        let h = 1e-5;
        let numeric = (e.evaluate(xv + h) - e.evaluate(xv - h)) / (2.0 * h);
        (d.evaluate(xv) - numeric).abs() < 1e-3
    }
}

quickcheck! {
    fn substitution_matches_direct_composition(x: i8) -> bool {
        // sin(x).substitute(x^2) evaluates like sin(t^2) at every t.
        let composed = Expr::Sin.substitute(&Expr::pow_int(2));
        let t = f64::from(x) / 3.0;
        (composed.evaluate(t) - (t * t).sin()).abs() < 1e-9
    }
}

quickcheck! {
    fn rational_sums_stay_exact(n1: i8, d1: i8, n2: i8, d2: i8) -> bool {
        let d1 = i64::from(d1).unsigned_abs().max(1) as i64;
        let d2 = i64::from(d2).unsigned_abs().max(1) as i64;
        let e = Expr::add(
            Expr::rational(i64::from(n1), d1),
            Expr::rational(i64::from(n2), d2),
        );
        !e.simplify().to_string().contains('.')
    }
}

quickcheck! {
    fn like_terms_collect_into_one_monomial(a: i8, b: i8) -> bool {
        let e = Expr::add(
            Expr::mul(Expr::int(i64::from(a)), Expr::VarX),
            Expr::mul(Expr::int(i64::from(b)), Expr::VarX),
        );
        e.simplify().to_string().matches('x').count() <= 1
    }
}
