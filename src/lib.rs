#![forbid(unsafe_code)]
//! Symbolic differentiation for single-variable real expressions.
//!
//! # Features
//! - Exact rational arithmetic for constants, with real-valued fallback
//! - Polynomials, the natural exponential, and the six trigonometric
//!   functions and their inverses
//! - Composition (the chain rule) via dedicated composed-form variants
//! - Implicit differentiation of equations in `x` and `y`
//! - A bounded, cycle-detected algebraic simplifier
//!
//! # Example
//!
//! ```
//! use symdiff::Expr;
//!
//! let expr = Expr::add(Expr::pow_int(2), Expr::sin_of(Expr::VarX));
//! let derivative = expr.derivative();
//! assert_eq!(derivative.to_string(), "2*x + cos(x)");
//! ```
//!
//! ## Implicit differentiation
//!
//! ```
//! use symdiff::{Expr, ImplicitEquation};
//!
//! let eq = ImplicitEquation::new(Expr::add(Expr::VarX, Expr::VarY), Expr::int(3));
//! assert_eq!(eq.derivative().to_string(), "-1");
//! ```

pub mod expr;
mod implicit;
pub mod numeric;
pub mod poly;
mod simplify;

pub use expr::{AddOp, Expr, Number};
pub use implicit::{ImplicitEquation, ImplicitSplitError};
pub use numeric::Rational;
pub use poly::Polynomial;
