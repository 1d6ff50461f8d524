//! Identifier column guessing.

/// Keyword looked for in column names when no column is chosen explicitly.
pub const DEFAULT_ID_KEYWORD: &str = "smartcard";

/// Picks the most likely identifier column.
///
/// Returns the first column whose lowercase name contains `keyword`, else the
/// first column, else `None` for a table without columns.
pub fn guess_id_column<'a, S: AsRef<str>>(columns: &'a [S], keyword: &str) -> Option<&'a str> {
    let keyword = keyword.trim().to_lowercase();
    if !keyword.is_empty() {
        let hit = columns
            .iter()
            .map(AsRef::as_ref)
            .find(|name| name.to_lowercase().contains(&keyword));
        if hit.is_some() {
            return hit;
        }
    }
    columns.first().map(AsRef::as_ref)
}
