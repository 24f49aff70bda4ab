//! # fdist-variance
//!
//! Variance of the F-distribution (Fisher–Snedecor).
//!
//! This crate provides a single pure function: the closed-form second
//! central moment of `X ~ F(d1, d2)` for positive degrees of freedom.
//! It knows nothing about sampling, fitting, or any consumer domain.
//!
//! ## Modules
//!
//! - [`variance`] — the closed-form variance with its domain guards
//!
//! ## Design Philosophy
//!
//! - **NaN as the undefined-result channel**: out-of-domain parameters
//!   return `f64::NAN` rather than an error — there is nothing to
//!   recover from, only "undefined for these parameters"
//! - **No unnecessary dependencies**: pure Rust arithmetic
//! - **Property-based testing**: mathematical invariants verified via proptest
//!
//! ## Example
//!
//! ```
//! use fdist_variance::variance;
//!
//! let v = variance(3.0, 5.0);
//! assert!((v - 100.0 / 9.0).abs() < 1e-10); // ≈ 11.111
//!
//! let v = variance(2.0, 4.0);
//! assert!(v.is_nan()); // undefined for d2 ≤ 4
//! ```

pub mod variance;

pub use variance::variance;
