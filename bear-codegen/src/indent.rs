//! Indentation configuration for generated files.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (C, Rust, Python).
    pub const FOUR: Self = Self::Spaces(4);

    /// 2-space indentation (TypeScript).
    pub const TWO: Self = Self::Spaces(2);

    /// Tab indentation (Go).
    pub const GO: Self = Self::Tab;

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }

    /// Prefix every non-empty line of `text` with one indent level.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for line in text.split_inclusive('\n') {
            if !line.trim().is_empty() {
                out.push_str(self.as_str());
            }
            out.push_str(line);
        }
        out
    }

    /// Render `text` as indented line comments, one per source line.
    ///
    /// `marker` is the comment token (`//`, `#`, `///`).
    pub fn comment(&self, marker: &str, text: &str) -> String {
        text.lines()
            .map(|line| {
                let line = format!("{}{} {}", self.as_str(), marker, line);
                format!("{}\n", line.trim_end())
            })
            .collect()
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::FOUR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Spaces(3).as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_apply_skips_blank_lines() {
        assert_eq!(Indent::TWO.apply("a\n\nb\n"), "  a\n\n  b\n");
        assert_eq!(Indent::GO.apply("x"), "\tx");
    }

    #[test]
    fn test_comment_lines() {
        assert_eq!(Indent::FOUR.comment("//", "one"), "    // one\n");
        assert_eq!(
            Indent::TWO.comment("#", "first\n\nsecond"),
            "  # first\n  #\n  # second\n"
        );
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::FOUR);
    }
}
