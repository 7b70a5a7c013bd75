//! Factor collection and common-factor extraction for step 5 of the
//! `AddSub` simplification algorithm (`spec.md` §4.3).
//!
//! Grounded on `collectFactors`, `buildProduct`, `extractCommonFactor`
//! and `extractVariableFromPower` in
//! `examples/original_source/polynomials_and_exponential_functions.cpp`.

use crate::expr::Expr;

/// Flattens nested `Mul` nodes into an ordered factor list.
pub fn collect_factors(e: &Expr, out: &mut Vec<Expr>) {
    if let Expr::Mul(l, r) = e {
        collect_factors(l, out);
        collect_factors(r, out);
    } else {
        out.push(e.clone());
    }
}

/// Rebuilds a left-associated product from a factor list. An empty
/// list builds the multiplicative identity.
pub fn build_product(mut factors: Vec<Expr>) -> Expr {
    if factors.is_empty() {
        return Expr::int(1);
    }
    let first = factors.remove(0);
    factors
        .into_iter()
        .fold(first, |acc, f| Expr::mul(acc, f))
}

/// True when `e` is a `Const` equal to `v`, matching `isConstValue`.
#[allow(
    clippy::float_cmp,
    reason = "only ever called with the exact constants 1.0/-1.0"
)]
fn is_const_value(e: &Expr, v: f64) -> bool {
    e.as_const().is_some_and(|n| n.value() == v)
}

/// Finds a factor common to both lists by textual equality of their
/// rendered form, matching `extractCommonFactor`. On a match, both
/// matching entries are removed from their respective lists and the
/// common factor is returned, unless it is the trivial `1` or `-1`.
pub fn extract_common_factor(lf: &mut Vec<Expr>, rf: &mut Vec<Expr>) -> Option<Expr> {
    for i in 0..lf.len() {
        let rendered = lf[i].to_string();
        if let Some(j) = rf.iter().position(|f| f.to_string() == rendered) {
            let candidate = lf[i].clone();
            if is_const_value(&candidate, 1.0) || is_const_value(&candidate, -1.0) {
                continue;
            }
            lf.remove(i);
            rf.remove(j);
            return Some(candidate);
        }
    }
    None
}

/// Matches a bare `VarX` in `vars` against a `Pow(e)` with an integer
/// exponent `>= 1` in `powers`, extracting `VarX` as the common factor
/// and decrementing the matched power in place, matching
/// `extractVariableFromPower`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "guarded by is_positive_integer, so the rounded value already fits"
)]
pub fn extract_variable_from_power(vars: &mut Vec<Expr>, powers: &mut Vec<Expr>) -> Option<Expr> {
    let var_idx = vars.iter().position(|f| matches!(f, Expr::VarX))?;
    let pow_idx = powers.iter().position(|f| matches!(f, Expr::Pow(e) if is_positive_integer(e.value())))?;

    let Expr::Pow(e) = &powers[pow_idx] else {
        return None;
    };
    let exp = e.value().round() as i64;

    vars.remove(var_idx);
    powers.remove(pow_idx);
    let next_exp = exp - 1;
    if next_exp == 1 {
        powers.insert(pow_idx, Expr::VarX);
    } else if next_exp > 0 {
        powers.insert(pow_idx, Expr::pow_int(next_exp));
    }
    Some(Expr::VarX)
}

fn is_positive_integer(v: f64) -> bool {
    crate::numeric::is_integer_valued(v) && v >= 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebuilds_product_from_flattened_factors() {
        let e = Expr::mul(Expr::mul(Expr::VarX, Expr::Sin), Expr::int(2));
        let mut factors = Vec::new();
        collect_factors(&e, &mut factors);
        assert_eq!(factors.len(), 3);
        assert_eq!(build_product(factors).to_string(), "x*sin(x)*2");
    }

    #[test]
    fn common_factor_skips_trivial_one() {
        let mut lf = vec![Expr::int(1), Expr::Sin];
        let mut rf = vec![Expr::int(1), Expr::Cos];
        assert!(extract_common_factor(&mut lf, &mut rf).is_none());
    }
}
