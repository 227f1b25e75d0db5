//! Identifier conversion between naming conventions.
//!
//! Conversion happens in two steps: the input is split into word tokens,
//! then the tokens are reassembled with the separator and capitalization
//! rules of the target convention.
//!
//! Tokenization rules:
//! - `_`, `-` and whitespace always end a token.
//! - A lowercase→uppercase transition starts a new token (`maxRetries`).
//! - A run of uppercase letters is one token (an acronym) unless the last
//!   letter is followed by a lowercase letter, in which case that letter starts
//!   the next token (`HTTPServer` → `HTTP`, `Server`).
//! - Digits stick to the preceding letters (`http2`). A digit→uppercase
//!   transition starts a new token when the current token contains a
//!   lowercase letter or the uppercase letter is followed by a lowercase one
//!   (`Http2Server` → `Http2`, `Server`; `ABC2DEF` stays whole).
//! - When the source convention is known to be delimiter based (snake,
//!   screaming snake, kebab) case transitions are ignored.

use crate::{Error, NamingConventionType, Result};

/// Convert `name` into the `to` convention.
///
/// `from_hint` is the convention the name is believed to already use, if
/// known. A delimiter-based hint disables splitting on case transitions.
///
/// Converting a name that is already in canonical `to` form returns it
/// unchanged.
pub fn convert(
    name: &str,
    from_hint: Option<NamingConventionType>,
    to: NamingConventionType,
) -> Result<String> {
    let tokens = tokenize(name, from_hint)?;
    Ok(assemble(&tokens, to))
}

/// Split an identifier into word tokens.
pub fn tokenize(name: &str, from_hint: Option<NamingConventionType>) -> Result<Vec<String>> {
    let case_boundaries = from_hint.is_none_or(|hint| hint.is_case_delimited());
    let chars: Vec<char> = name.chars().collect();

    let mut tokens = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            flush(&mut tokens, &mut current);
            continue;
        }

        if !c.is_alphanumeric() {
            return Err(Error::invalid_name(
                name,
                format!("unexpected character '{}'", c),
            ));
        }

        if case_boundaries && c.is_uppercase() && starts_token(&current, chars.get(i + 1)) {
            flush(&mut tokens, &mut current);
        }

        current.push(c);
    }
    flush(&mut tokens, &mut current);

    if tokens.is_empty() {
        return Err(Error::invalid_name(name, "name contains no words"));
    }

    Ok(tokens)
}

/// Whether an uppercase letter ends `current` and begins a new token.
fn starts_token(current: &str, next: Option<&char>) -> bool {
    let Some(prev) = current.chars().last() else {
        return false;
    };
    let next_is_lower = next.is_some_and(|n| n.is_lowercase());

    if prev.is_lowercase() {
        true
    } else if prev.is_numeric() {
        next_is_lower || current.chars().any(char::is_lowercase)
    } else {
        prev.is_uppercase() && next_is_lower
    }
}

fn flush(tokens: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}

/// Join tokens using the rules of `to`.
pub fn assemble(tokens: &[String], to: NamingConventionType) -> String {
    match to {
        NamingConventionType::SnakeCase => join_mapped(tokens, "_", lowercase),
        NamingConventionType::ScreamingSnakeCase => join_mapped(tokens, "_", uppercase),
        NamingConventionType::KebabCase => join_mapped(tokens, "-", lowercase),
        NamingConventionType::PascalCase => join_mapped(tokens, "", capitalize),
        NamingConventionType::CamelCase => tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                if i == 0 {
                    lowercase(token)
                } else {
                    capitalize(token)
                }
            })
            .collect(),
    }
}

fn join_mapped(tokens: &[String], separator: &str, map: fn(&str) -> String) -> String {
    tokens
        .iter()
        .map(|token| map(token))
        .collect::<Vec<_>>()
        .join(separator)
}

fn is_digits(token: &str) -> bool {
    token.chars().all(char::is_numeric)
}

fn lowercase(token: &str) -> String {
    if is_digits(token) {
        return token.to_string();
    }
    token.to_lowercase()
}

fn uppercase(token: &str) -> String {
    if is_digits(token) {
        return token.to_string();
    }
    token.to_uppercase()
}

fn capitalize(token: &str) -> String {
    if is_digits(token) {
        return token.to_string();
    }
    let mut chars = token.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}
