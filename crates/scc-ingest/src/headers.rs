//! Header naming shared by the CSV and workbook readers.

use std::collections::HashSet;

/// Name given to a column whose header cell is blank.
pub fn unnamed_header(index: usize) -> String {
    format!("Unnamed: {index}")
}

/// Makes header names unique by suffixing repeats with `.1`, `.2`, ...
pub fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::with_capacity(headers.len());
    let mut out = Vec::with_capacity(headers.len());
    for header in headers {
        let mut candidate = header.clone();
        let mut suffix = 0usize;
        while used.contains(&candidate) {
            suffix += 1;
            candidate = format!("{header}.{suffix}");
        }
        used.insert(candidate.clone());
        out.push(candidate);
    }
    out
}

/// Names blank headers by position, then makes every name unique.
pub fn finalize_headers(headers: Vec<String>) -> Vec<String> {
    let named = headers
        .into_iter()
        .enumerate()
        .map(|(idx, header)| {
            if header.trim().is_empty() {
                unnamed_header(idx)
            } else {
                header
            }
        })
        .collect();
    dedupe_headers(named)
}
