//! Source span lookup for config diagnostics.

use std::sync::LazyLock;

use miette::SourceSpan;
use regex::Regex;

/// A `${name}` reference; group 1 is the referenced name.
pub(crate) static REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z0-9_]+)\}").expect("reference pattern is valid")
});

/// Find every whole-word occurrence of `name` that is not a `${name}`
/// reference.
///
/// Property names are written as plain scalars in all three formats, so the
/// first hit is usually the definition. This is a best-effort lookup used
/// only to point diagnostics at the right line.
pub(crate) fn find_name_spans(src: &str, name: &str) -> Vec<SourceSpan> {
    if name.is_empty() {
        return Vec::new();
    }
    let Ok(word) = Regex::new(&format!(r"\b{}\b", regex::escape(name))) else {
        return Vec::new();
    };

    word.find_iter(src)
        .filter(|m| !src[..m.start()].ends_with("${"))
        .map(|m| SourceSpan::from((m.start(), m.len())))
        .collect()
}

/// First definition-like occurrence of `name`.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    find_name_spans(src, name).into_iter().next()
}

/// Location of a `${reference}` in the source.
pub(crate) fn find_reference_span(src: &str, reference: &str) -> Option<SourceSpan> {
    REFERENCE
        .captures_iter(src)
        .filter(|caps| caps.get(1).is_some_and(|m| m.as_str() == reference))
        .find_map(|caps| caps.get(0))
        .map(|m| SourceSpan::from((m.start(), m.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_name_span_whole_words() {
        let src = "- name: myStringX\n- name: myString\n";
        let span = find_name_span(src, "myString").unwrap();
        assert_eq!(span.offset(), src.rfind("myString").unwrap());
        assert_eq!(span.len(), "myString".len());
    }

    #[test]
    fn test_find_name_spans_skips_references() {
        let src = "value = \"${greeting}!\"\nname = \"greeting\"\n";
        let spans = find_name_spans(src, "greeting");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].offset(), src.rfind("greeting").unwrap());
    }

    #[test]
    fn test_find_reference_span() {
        let src = "value: Hello ${who}";
        let span = find_reference_span(src, "who").unwrap();
        assert_eq!(span.offset(), 13);
        assert_eq!(span.len(), 6);
        assert!(find_reference_span(src, "nobody").is_none());
    }

    #[test]
    fn test_reference_pattern() {
        let names: Vec<_> = REFERENCE
            .captures_iter("${a} ${} ${not a ref} ${b_2} ${open")
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect();
        assert_eq!(names, ["a", "b_2"]);
    }
}
