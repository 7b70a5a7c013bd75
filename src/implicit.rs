//! Implicit differentiation of a single-variable equation `L(x,y) =
//! R(x,y)` (`spec.md` §4.5).
//!
//! Grounded on `examples/original_source/implicit_differentiation.cpp`:
//! `containsYPrime`/`splitLinearYPrime` give the structural-recursion
//! split; the error variants name the three ways that recursion gives
//! up rather than collapsing every failure into one opaque case, in
//! the style of `DiffError` in
//! `examples/CokieMiner-SymbAnaFis/src/core/error.rs`.

use std::fmt;

use crate::expr::Expr;

/// An equation `left = right` relating `x` and the dependent variable
/// `y`, the input to implicit differentiation.
#[derive(Debug, Clone, PartialEq)]
pub struct ImplicitEquation {
    left: Expr,
    right: Expr,
}

impl ImplicitEquation {
    /// Builds the equation `left = right`.
    #[must_use]
    pub const fn new(left: Expr, right: Expr) -> Self {
        Self { left, right }
    }

    /// The value `dy/dx` solves for, rendered as `derivative()`'s NaN
    /// sentinel when the equation does not reduce to a form linear in
    /// `y'`. See [`Self::try_derivative`] for the fallible form.
    #[must_use]
    pub fn derivative(&self) -> Expr {
        self.try_derivative()
            .unwrap_or_else(|_| Expr::real(f64::NAN))
    }

    /// Attempts to solve `d(left - right)/dx = 0` for `y'`.
    ///
    /// # Errors
    ///
    /// Returns an [`ImplicitSplitError`] when the differentiated
    /// equation is not linear in `y'`, per the cases
    /// [`split_linear_deriv_y`] recognizes.
    pub fn try_derivative(&self) -> Result<Expr, ImplicitSplitError> {
        let diff = Expr::sub(self.left.derivative(), self.right.derivative()).simplify();
        let (coeff, rest) = split_linear_deriv_y(&diff)?;
        Ok(Expr::div(Expr::mul(Expr::int(-1), rest), coeff).simplify())
    }
}

impl fmt::Display for ImplicitEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.left, self.right)
    }
}

/// Why [`split_linear_deriv_y`] could not express an expression as
/// `coefficient * y' + rest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImplicitSplitError {
    /// `y'` appears multiplied by another subexpression that itself
    /// contains `y'` (e.g. `y' * y'`), which is not linear in `y'`.
    NonlinearInYPrime,
    /// `y'` appears in the denominator of a division.
    YPrimeInDenominator,
    /// `y'` appears inside the argument of a composed function
    /// (`sin(y')`, `sqrt(y')`, and the like), which this algorithm
    /// does not attempt to linearize.
    YPrimeUnderNonlinearOperator,
}

impl fmt::Display for ImplicitSplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonlinearInYPrime => {
                write!(f, "y' appears nonlinearly and cannot be isolated")
            }
            Self::YPrimeInDenominator => {
                write!(f, "y' appears in a denominator and cannot be isolated")
            }
            Self::YPrimeUnderNonlinearOperator => {
                write!(f, "y' appears under a function and cannot be isolated")
            }
        }
    }
}

impl std::error::Error for ImplicitSplitError {}

/// True when `y'` occurs anywhere in `e`, matching `containsYPrime`
/// generalized to every variant rather than only `AddSub`/`Mul`/`Div`
/// (`spec.md` §9: the `split_linear_deriv_y` failure clause for "any
/// other variant containing `y'`" is only reachable if this check is
/// itself exhaustive).
fn contains_deriv_y(e: &Expr) -> bool {
    match e {
        Expr::DerivY => true,
        Expr::Const(_)
        | Expr::VarX
        | Expr::VarY
        | Expr::Pow(_)
        | Expr::Exponential(_)
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
        | Expr::ArcCot => false,
        Expr::AddSub(l, r, _) | Expr::Mul(l, r) | Expr::Div(l, r) | Expr::Chain(l, r) => {
            contains_deriv_y(l) || contains_deriv_y(r)
        }
        Expr::SinC(u) | Expr::CosC(u) | Expr::PowC(u, _) | Expr::ExpC(u) | Expr::Sqrt(u) => {
            contains_deriv_y(u)
        }
    }
}

/// Expresses `e` as `(coefficient, rest)` such that
/// `e == coefficient * y' + rest`, where neither `coefficient` nor
/// `rest` contains `y'`, matching `splitLinearYPrime`.
fn split_linear_deriv_y(e: &Expr) -> Result<(Expr, Expr), ImplicitSplitError> {
    if !contains_deriv_y(e) {
        return Ok((Expr::int(0), e.clone()));
    }

    match e {
        Expr::DerivY => Ok((Expr::int(1), Expr::int(0))),
        Expr::AddSub(l, r, op) => {
            let (al, bl) = split_linear_deriv_y(l)?;
            let (ar, br) = split_linear_deriv_y(r)?;
            Ok((Expr::AddSub(al.into(), ar.into(), *op), Expr::AddSub(bl.into(), br.into(), *op)))
        }
        Expr::Mul(l, r) => {
            let l_has = contains_deriv_y(l);
            let r_has = contains_deriv_y(r);
            if l_has && r_has {
                return Err(ImplicitSplitError::NonlinearInYPrime);
            }
            // Only a bare `coefficient * y'` shape is linear here: the
            // side containing `y'` must itself split with no leftover
            // `y'`-free remainder, matching `splitLinearYPrime`'s
            // `isZeroConst(lr)`/`isZeroConst(rr)` guard.
            if l_has {
                let (coeff, rest) = split_linear_deriv_y(l)?;
                if !rest.simplify().is_const_zero() {
                    return Err(ImplicitSplitError::NonlinearInYPrime);
                }
                Ok((Expr::mul(coeff, r.as_ref().clone()), Expr::int(0)))
            } else {
                let (coeff, rest) = split_linear_deriv_y(r)?;
                if !rest.simplify().is_const_zero() {
                    return Err(ImplicitSplitError::NonlinearInYPrime);
                }
                Ok((Expr::mul(coeff, l.as_ref().clone()), Expr::int(0)))
            }
        }
        Expr::Div(l, r) => {
            if contains_deriv_y(r) {
                return Err(ImplicitSplitError::YPrimeInDenominator);
            }
            let (a, b) = split_linear_deriv_y(l)?;
            Ok((Expr::div(a, r.as_ref().clone()), Expr::div(b, r.as_ref().clone())))
        }
        Expr::SinC(_)
        | Expr::CosC(_)
        | Expr::PowC(_, _)
        | Expr::ExpC(_)
        | Expr::Sqrt(_)
        | Expr::Chain(_, _) => Err(ImplicitSplitError::YPrimeUnderNonlinearOperator),
        _ => Err(ImplicitSplitError::NonlinearInYPrime),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_equation_solves_for_y_prime() {
        // x + y = 3  =>  1 + y' = 0  =>  y' = -1
        let eq = ImplicitEquation::new(Expr::add(Expr::VarX, Expr::VarY), Expr::int(3));
        assert_eq!(eq.derivative().to_string(), "-1");
    }

    #[test]
    fn cubic_plus_y_gives_the_classic_implicit_slope() {
        // x^3 + y = 1  =>  3*x^2 + y' = 0  =>  y' = -3*x^2
        let eq = ImplicitEquation::new(Expr::add(Expr::pow_int(3), Expr::VarY), Expr::int(1));
        let d = eq.try_derivative().expect("linear in y'");
        assert_eq!(d.to_string(), "-3*x^2");
    }

    #[test]
    fn y_prime_under_a_function_is_rejected() {
        let e = Expr::sin_of(Expr::DerivY);
        assert_eq!(
            split_linear_deriv_y(&e),
            Err(ImplicitSplitError::YPrimeUnderNonlinearOperator)
        );
    }

    #[test]
    fn y_prime_in_denominator_is_rejected() {
        let e = Expr::div(Expr::VarX, Expr::DerivY);
        assert_eq!(
            split_linear_deriv_y(&e),
            Err(ImplicitSplitError::YPrimeInDenominator)
        );
    }

    #[test]
    fn y_prime_times_y_prime_is_nonlinear() {
        let e = Expr::mul(Expr::DerivY, Expr::DerivY);
        assert_eq!(
            split_linear_deriv_y(&e),
            Err(ImplicitSplitError::NonlinearInYPrime)
        );
    }

    #[test]
    fn unsolvable_equation_collapses_to_nan_sentinel() {
        let eq = ImplicitEquation::new(Expr::sin_of(Expr::DerivY), Expr::VarX);
        assert!(eq.derivative().evaluate(0.0).is_nan());
    }

    #[test]
    fn sin_of_sum_equals_y_squared_cosine_cannot_be_split() {
        // sin(x+y) = y^2*cos(x): differentiating produces
        // cos(x+y)*(1+y') as one multiplicative factor, so the side
        // containing y' doesn't reduce to a bare coefficient times y'.
        let y_squared = Expr::pow_of(
            Expr::VarY,
            crate::expr::Number::Rational(crate::numeric::Rational::from_int(2)),
        );
        let eq = ImplicitEquation::new(
            Expr::sin_of(Expr::add(Expr::VarX, Expr::VarY)),
            Expr::mul(y_squared, Expr::cos_of(Expr::VarX)),
        );
        assert!(eq.try_derivative().is_err());
    }
}
