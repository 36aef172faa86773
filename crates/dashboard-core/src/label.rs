// File: crates/dashboard-core/src/label.rs
// Summary: Header field helpers splitting `param|Pretty Name` into query parameter and label.

/// Display label for a header field: the segment after the first separator,
/// or the whole field when there is none. A second separator ends the label.
pub fn series_label(field: &str, separator: char) -> &str {
    match field.split_once(separator) {
        Some((_, rest)) => rest.split(separator).next().unwrap_or(rest),
        None => field,
    }
}

/// Query parameter for a header field: the segment before the first separator.
pub fn query_param(field: &str, separator: char) -> &str {
    field.split(separator).next().unwrap_or(field)
}
