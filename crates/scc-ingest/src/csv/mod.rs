//! CSV reading utilities.

mod header;
mod reader;

pub(crate) use header::normalize_header;
pub use header::parse_csv_line;
pub use reader::{read_csv_frame, read_csv_schema, read_csv_source, validate_encoding};
