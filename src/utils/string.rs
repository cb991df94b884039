//! String manipulation utilities

/// Append an `s` unless `count` is exactly one
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
