//! Rendering targets for command reports.

/// Where reports are rendered.
///
/// Reports only say what kind of line they emit; the output decides how
/// that line looks.
pub trait Output {
    /// Top-level heading.
    fn title(&mut self, text: &str);

    /// Heading of a section.
    fn section(&mut self, name: &str);

    /// `key: value` line.
    fn key_value(&mut self, key: &str, value: &str);

    /// `key: value` line inside a section.
    fn key_value_indented(&mut self, key: &str, value: &str);

    /// Plain list entry.
    fn list_item(&mut self, text: &str);

    /// List entry for something created.
    fn added_item(&mut self, text: &str);

    /// An error, already formatted with its diagnostics.
    fn error(&mut self, msg: &str);

    /// Labelled separator.
    fn divider(&mut self, label: &str);

    /// Text printed as is.
    fn preformatted(&mut self, text: &str);

    /// Empty line.
    fn newline(&mut self);
}

/// Command result that knows how to print itself.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints to stdout, errors to stderr.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn title(&mut self, text: &str) {
        println!("{}", text);
        println!("{}", "=".repeat(text.chars().count()));
    }

    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        println!("  {}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}
