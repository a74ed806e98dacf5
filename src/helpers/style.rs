//! ANSI styled strings.

use colored::{Color, Colorize};

/// A reusable text style: colours and emphasis.
///
/// # Examples
///
/// ```rust
/// use handykit::helpers::{Color, Style, render_styled};
///
/// let warning = Style::new().fg(Color::Yellow).bold();
/// println!("{}", render_styled("careful", &warning));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    foreground: Option<Color>,
    background: Option<Color>,
    bold: bool,
    italic: bool,
    underline: bool,
}

impl Style {
    /// A style that renders text unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground colour.
    pub fn fg(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Set the background colour.
    pub fn bg(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Render in bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Render in italics.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Underline the text.
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }
}

/// Render `s` with `style`.
///
/// Empty input renders to an empty string. Whether escape codes are emitted
/// follows `colored`'s terminal and `NO_COLOR` detection.
pub fn render_styled(s: &str, style: &Style) -> String {
    if s.is_empty() {
        return String::new();
    }

    let mut styled = s.normal();
    if let Some(color) = style.foreground {
        styled = styled.color(color);
    }
    if let Some(color) = style.background {
        styled = styled.on_color(color);
    }
    if style.bold {
        styled = styled.bold();
    }
    if style.italic {
        styled = styled.italic();
    }
    if style.underline {
        styled = styled.underline();
    }

    styled.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        colored::control::set_override(true);
        assert_eq!(render_styled("", &Style::new().fg(Color::Red)), "");
    }

    #[test]
    fn test_plain_style() {
        colored::control::set_override(true);
        assert_eq!(render_styled("plain", &Style::new()), "plain");
    }

    #[test]
    fn test_styled_output() {
        colored::control::set_override(true);
        let rendered = render_styled("hi", &Style::new().fg(Color::Red).bold());

        assert!(rendered.starts_with("\x1b["));
        assert!(rendered.contains("hi"));
        assert!(rendered.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_builder_sets_fields() {
        let style = Style::new().bg(Color::Blue).italic().underline();
        assert_eq!(style.background, Some(Color::Blue));
        assert!(style.italic && style.underline);
        assert!(!style.bold);
    }
}
