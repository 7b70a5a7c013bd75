//! The polynomial normal form used as the simplifier's fast path for
//! `AddSub` nodes (`spec.md` §4.2).
//!
//! Grounded directly on `examples/original_source/poly.hpp`'s
//! `Poly{ok, terms}`, `polyAdd`, `polyMul`, `toPoly`, `polyToExpr`.

use rustc_hash::FxHashMap;

use crate::expr::{AddOp, Expr};

/// A sparse mapping from nonnegative integer exponent to real
/// coefficient, with a validity flag set when some subtree failed to
/// convert (`ok = false` in the source's `Poly`).
#[derive(Debug, Clone)]
pub struct Polynomial {
    ok: bool,
    terms: FxHashMap<u32, f64>,
}

impl Polynomial {
    fn invalid() -> Self {
        Self {
            ok: false,
            terms: FxHashMap::default(),
        }
    }

    fn constant(c: f64) -> Self {
        let mut terms = FxHashMap::default();
        terms.insert(0, c);
        Self { ok: true, terms }
    }

    fn monomial(exp: u32, coeff: f64) -> Self {
        let mut terms = FxHashMap::default();
        terms.insert(exp, coeff);
        Self { ok: true, terms }
    }

    /// True when this polynomial is a valid conversion (every factor
    /// along the way was polynomial in `x`).
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.ok
    }

    /// `self + rhs` if `sign` is `+1`, `self - rhs` if `sign` is `-1`,
    /// matching `polyAdd`.
    #[must_use]
    pub fn add_signed(&self, rhs: &Self, sign: f64) -> Self {
        if !self.ok || !rhs.ok {
            return Self::invalid();
        }
        let mut terms = self.terms.clone();
        for (&exp, &coeff) in &rhs.terms {
            *terms.entry(exp).or_insert(0.0) += sign * coeff;
        }
        Self { ok: true, terms }
    }

    /// The convolution of two polynomials, matching `polyMul`.
    #[must_use]
    pub fn mul(&self, rhs: &Self) -> Self {
        if !self.ok || !rhs.ok {
            return Self::invalid();
        }
        let mut terms = FxHashMap::default();
        for (&ea, &ca) in &self.terms {
            for (&eb, &cb) in &rhs.terms {
                *terms.entry(ea + eb).or_insert(0.0) += ca * cb;
            }
        }
        Self { ok: true, terms }
    }

    /// Attempts to convert `expr` into polynomial form, matching
    /// `toPoly`. Fails (returns `ok = false`) on any non-polynomial leaf
    /// or internal node, per `spec.md` §4.2.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "guarded by is_integer_valued and v >= 0.0, so the rounded value already fits a u32"
    )]
    pub fn from_expr(expr: &Expr) -> Self {
        match expr {
            Expr::Const(n) => Self::constant(n.value()),
            Expr::VarX => Self::monomial(1, 1.0),
            Expr::Pow(e) => {
                let v = e.value();
                if crate::numeric::is_integer_valued(v) && v >= 0.0 {
                    Self::monomial(v.round() as u32, 1.0)
                } else {
                    Self::invalid()
                }
            }
            Expr::AddSub(l, r, op) => {
                let sign = match op {
                    AddOp::Add => 1.0,
                    AddOp::Sub => -1.0,
                };
                Self::from_expr(l).add_signed(&Self::from_expr(r), sign)
            }
            Expr::Mul(l, r) => Self::from_expr(l).mul(&Self::from_expr(r)),
            _ => Self::invalid(),
        }
    }

    /// Converts this polynomial back into an expression tree, in
    /// descending-exponent order, skipping negligible coefficients and
    /// combining terms with `AddSub`, matching `polyToExpr`.
    #[must_use]
    pub fn to_expr(&self) -> Expr {
        let mut exponents: Vec<u32> = self
            .terms
            .iter()
            .filter(|&(_, &c)| c.abs() >= 1e-12)
            .map(|(&e, _)| e)
            .collect();
        exponents.sort_unstable_by(|a, b| b.cmp(a));

        let mut acc: Option<Expr> = None;
        for exp in exponents {
            let coeff = self.terms.get(&exp).copied().unwrap_or(0.0);
            let negative = coeff < 0.0;
            let abs_coeff = coeff.abs();

            let term = if exp == 0 {
                Expr::real(abs_coeff)
            } else {
                let base = if exp == 1 {
                    Expr::VarX
                } else {
                    Expr::pow_int(i64::from(exp))
                };
                if (abs_coeff - 1.0).abs() < f64::EPSILON {
                    base
                } else {
                    Expr::mul(Expr::real(abs_coeff), base)
                }
            };

            acc = Some(match acc {
                None => {
                    if negative {
                        if exp == 0 {
                            Expr::real(-abs_coeff)
                        } else {
                            Expr::mul(Expr::int(-1), term)
                        }
                    } else {
                        term
                    }
                }
                Some(prev) => {
                    if negative {
                        Expr::sub(prev, term)
                    } else {
                        Expr::add(prev, term)
                    }
                }
            });
        }

        acc.unwrap_or_else(|| Expr::int(0))
    }
}
