//! Identifier normalization and set comparison.
//!
//! This crate is the computational core of the comparison tool. It has no
//! knowledge of files or presentation: callers hand it raw column values and
//! get back a [`ComparisonResult`].
//!
//! # Example
//!
//! ```
//! use scc_compare::{build_set, compare};
//! use scc_model::RawValue;
//!
//! let a = build_set(&[RawValue::Int(123), RawValue::Float(123.0), RawValue::Null]);
//! let b = build_set(&[RawValue::Text(" 123 ".to_string())]);
//! let result = compare(&a, &b);
//!
//! assert_eq!(result.shared.to_strings(), vec!["123"]);
//! assert!(result.only_a.is_empty());
//! ```

mod compare;
mod normalize;
mod set;

pub use compare::{compare, compare_columns};
pub use normalize::{format_float, normalize};
pub use set::build_set;

pub use scc_model::{ComparisonResult, IdentifierSet};
