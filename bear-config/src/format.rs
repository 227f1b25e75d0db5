//! Config file formats.

use std::{fmt, path::Path};

use miette::SourceSpan;
use serde::de::DeserializeOwned;

use crate::{Result, error::SourceContext};

/// Supported config file formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Yaml,
    Json,
}

impl Format {
    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        Self::from_extension(extension)
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "toml" => Some(Format::Toml),
            "yaml" | "yml" => Some(Format::Yaml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Toml => "TOML",
            Format::Yaml => "YAML",
            Format::Json => "JSON",
        }
    }

    /// Deserialize `ctx`'s source, mapping failures to spanned parse errors.
    pub(crate) fn deserialize<T: DeserializeOwned>(&self, ctx: &SourceContext) -> Result<T> {
        let src = ctx.src();
        match self {
            Format::Toml => toml::from_str(src).map_err(|e| {
                let span = e.span().map(SourceSpan::from);
                ctx.parse_error(*self, e.message(), span)
            }),
            Format::Yaml => serde_yaml::from_str(src).map_err(|e| {
                let span = e
                    .location()
                    .map(|loc| SourceSpan::from((loc.index(), 1)));
                ctx.parse_error(*self, e.to_string(), span)
            }),
            Format::Json => serde_json::from_str(src).map_err(|e| {
                let span = line_column_offset(src, e.line(), e.column())
                    .map(|offset| SourceSpan::from((offset, 1)));
                ctx.parse_error(*self, e.to_string(), span)
            }),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte offset of a 1-based line and column.
fn line_column_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    (offset <= src.len()).then_some(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Format::from_path(Path::new("bear.toml")), Some(Format::Toml));
        assert_eq!(Format::from_path(Path::new("a/b.YML")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("c.yaml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("c.json")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("c.ini")), None);
        assert_eq!(Format::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_line_column_offset() {
        let src = "ab\ncde\nf";
        assert_eq!(line_column_offset(src, 1, 1), Some(0));
        assert_eq!(line_column_offset(src, 2, 2), Some(4));
        assert_eq!(line_column_offset(src, 3, 1), Some(7));
        assert_eq!(line_column_offset(src, 0, 1), None);
    }
}
