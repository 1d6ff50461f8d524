//! Cell text treated as a missing value.

/// Tokens read as null in CSV cells and workbook text cells, matching the
/// defaults of common dataframe readers.
pub const NULL_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// True when `text` is exactly one of [`NULL_TOKENS`].
pub fn is_null_token(text: &str) -> bool {
    NULL_TOKENS.contains(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_tokens() {
        assert!(is_null_token("NA"));
        assert!(is_null_token("#N/A"));
        assert!(is_null_token("nan"));
        assert!(!is_null_token("na"));
        assert!(!is_null_token(" NA "));
        assert!(!is_null_token("NA01"));
    }
}
