//! Comparison output generation.
//!
//! Serializes each identifier set of a [`scc_model::ComparisonResult`] to a
//! one-column CSV with a header row, and optionally a JSON run summary.

mod error;
mod identifiers;
mod summary;

pub use error::{OutputError, Result};
pub use identifiers::{
    DEFAULT_ID_HEADER, ONLY_A_FILE_NAME, ONLY_B_FILE_NAME, SHARED_FILE_NAME,
    render_identifier_csv, write_comparison, write_identifier_csv,
};
pub use summary::write_summary_json;
