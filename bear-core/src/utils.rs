//! Shared utility functions for code generation.

/// Validate the property identifier grammar.
/// Returns None if valid, Some(reason) if invalid
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

/// Escape a string for a double-quoted literal in C-family languages.
///
/// Handles backslashes, double quotes and the common control characters.
/// The escapes produced are valid in C, Rust, TypeScript, Python and Go.
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

/// Render a float so that it always reads as a floating point literal.
///
/// `322.0` stays `322.0` (not `322`), large and tiny magnitudes use exponent
/// notation (`1e20`).
pub fn float_literal(value: f64) -> String {
    format!("{:?}", value)
}
