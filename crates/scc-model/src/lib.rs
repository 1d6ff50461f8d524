//! Data model for smartcard comparisons.

pub mod column;
pub mod comparison;
pub mod ids;
pub mod report;
pub mod set;
pub mod value;

pub use column::{ColumnKind, ColumnProfile};
pub use comparison::{ComparisonResult, ComparisonSummary, Side};
pub use ids::CanonicalId;
pub use report::{ComparisonReport, OutputPaths, SourceRef};
pub use set::IdentifierSet;
pub use value::{RawColumn, RawValue};
