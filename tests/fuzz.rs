//! Randomized robustness testing for the simplifier and derivative
//! engine, matching `examples/CokieMiner-SymbAnaFis/src/tests/fuzz.rs`'s
//! own shape: build random shallow expression trees and check that
//! `simplify()`/`derivative()` never panic and stay idempotent/finite.

use rand::{RngExt, SeedableRng, rngs::StdRng};
use symdiff::Expr;

fn random_std_rng_with_seed() -> (StdRng, u64) {
    let seed: u64 = rand::random();
    (StdRng::seed_from_u64(seed), seed)
}

/// Builds a random expression tree up to `depth` levels deep, out of
/// the atomic leaves and binary/unary shapes the engine supports.
fn generate_expr(rng: &mut StdRng, depth: u32) -> Expr {
    if depth == 0 {
        return match rng.random_range(0..4_u32) {
            0 => Expr::VarX,
            1 => Expr::int(rng.random_range(-5_i64..=5)),
            2 => Expr::Sin,
            _ => Expr::Cos,
        };
    }
    match rng.random_range(0..5_u32) {
        0 => Expr::add(
            generate_expr(rng, depth - 1),
            generate_expr(rng, depth - 1),
        ),
        1 => Expr::sub(
            generate_expr(rng, depth - 1),
            generate_expr(rng, depth - 1),
        ),
        2 => Expr::mul(
            generate_expr(rng, depth - 1),
            generate_expr(rng, depth - 1),
        ),
        3 => Expr::pow_int(rng.random_range(0_i64..=4)),
        _ => generate_expr(rng, 0),
    }
}

#[test]
fn fuzz_simplify_is_idempotent_and_never_panics() {
    for _ in 0..200 {
        let (mut rng, seed) = random_std_rng_with_seed();
        let depth = rng.random_range(0_u32..=3);
        let e = generate_expr(&mut rng, depth);

        let once = e.simplify();
        let twice = once.simplify();

        assert_eq!(
            once.to_string(),
            twice.to_string(),
            "simplify not idempotent for seed {seed}, expression {e}"
        );
    }
}

#[test]
fn fuzz_derivative_matches_numeric_slope() {
    for _ in 0..200 {
        let (mut rng, seed) = random_std_rng_with_seed();
        let depth = rng.random_range(0_u32..=2);
        let e = generate_expr(&mut rng, depth);
        let d = e.derivative();

        let x = f64::from(rng.random_range(-20_i32..=20)) / 10.0;
        let h = 1e-5;
        let numeric = (e.evaluate(x + h) - e.evaluate(x - h)) / (2.0 * h);
        let analytic = d.evaluate(x);

        if analytic.is_finite() && numeric.is_finite() {
            assert!(
                (analytic - numeric).abs() < 1e-2,
                "derivative mismatch for seed {seed}, expression {e}: analytic {analytic}, numeric {numeric}"
            );
        }
    }
}
