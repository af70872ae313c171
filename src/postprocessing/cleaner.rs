//! Cleans and trims the raw engine response.

/// Delimiters the model tends to echo back from the instructional wrapper.
pub const OPEN_MARKER: &str = "<<SYS>>";
pub const CLOSE_MARKER: &str = "<</SYS>>";

/// Remove every occurrence of the wrapper markers, then trim. Total for any
/// input, including the empty string.
pub fn clean(raw: &str) -> String {
    raw.replace(OPEN_MARKER, "")
        .replace(CLOSE_MARKER, "")
        .trim()
        .to_string()
}
