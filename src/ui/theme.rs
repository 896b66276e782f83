//! Visual theme and styling.
//!
//! Formatting is a pure function of a [`Tone`] and the text; the only
//! state is whether colors are on, decided once when the UI is built.

use console::Style;

/// The role a piece of text plays in the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Passed checks (green).
    Success,
    /// Warnings and section titles (yellow).
    Warning,
    /// Failed checks (red).
    Error,
    /// Hints and informational lines (blue).
    Info,
    /// Banner and summary headings (cyan).
    Header,
    /// Commands the operator should run (bold white).
    Command,
}

/// The checker's visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    colors: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Colored theme.
    pub fn new() -> Self {
        Self { colors: true }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self { colors: false }
    }

    /// Colored when [`should_use_colors`] says so, plain otherwise.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    pub fn uses_colors(&self) -> bool {
        self.colors
    }

    /// The console style for a tone.
    pub fn style(&self, tone: Tone) -> Style {
        if !self.colors {
            return Style::new();
        }
        match tone {
            Tone::Success => Style::new().green(),
            Tone::Warning => Style::new().yellow().bold(),
            Tone::Error => Style::new().red(),
            Tone::Info => Style::new().blue(),
            Tone::Header => Style::new().cyan(),
            Tone::Command => Style::new().white().bold(),
        }
    }

    /// Apply a tone to text.
    pub fn paint(&self, tone: Tone, text: &str) -> String {
        self.style(tone).force_styling(self.colors).apply_to(text).to_string()
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        self.paint(Tone::Success, &format!("✓ {}", msg))
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        self.paint(Tone::Warning, &format!("⚠ {}", msg))
    }

    /// Format an error message (icon + text in red).
    pub fn format_error(&self, msg: &str) -> String {
        self.paint(Tone::Error, &format!("✗ {}", msg))
    }

    /// Format a hint.
    pub fn format_hint(&self, msg: &str) -> String {
        self.paint(Tone::Info, &format!("💡 {}", msg))
    }

    /// Format a section title announcing the next check.
    pub fn format_section(&self, title: &str) -> String {
        self.paint(Tone::Warning, title)
    }

    /// Format a command line the operator should run.
    pub fn format_command(&self, command: &str) -> String {
        self.paint(Tone::Command, &format!("   {}", command))
    }

    /// Format a horizontal rule of the given width.
    pub fn format_rule(&self, width: usize) -> String {
        self.paint(Tone::Header, &"=".repeat(width))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_has_no_escape_codes() {
        let theme = Theme::plain();
        assert_eq!(theme.format_success("Docker available"), "✓ Docker available");
        assert_eq!(theme.format_error("pip not available"), "✗ pip not available");
        assert_eq!(theme.format_warning("Missing"), "⚠ Missing");
        assert!(!theme.uses_colors());
    }

    #[test]
    fn colored_theme_emits_ansi() {
        let theme = Theme::new();
        let msg = theme.format_success("ok");
        assert!(msg.contains("\u{1b}["));
        assert!(msg.contains("✓ ok"));
    }

    #[test]
    fn paint_is_identity_without_colors() {
        let theme = Theme::plain();
        for tone in [
            Tone::Success,
            Tone::Warning,
            Tone::Error,
            Tone::Info,
            Tone::Header,
            Tone::Command,
        ] {
            assert_eq!(theme.paint(tone, "text"), "text");
        }
    }

    #[test]
    fn errors_and_successes_are_styled_differently() {
        let theme = Theme::new();
        assert_ne!(
            theme.paint(Tone::Success, "x"),
            theme.paint(Tone::Error, "x")
        );
    }

    #[test]
    fn formats_hint_and_command() {
        let theme = Theme::plain();
        assert_eq!(theme.format_hint("Edit .env"), "💡 Edit .env");
        assert_eq!(
            theme.format_command("pip install -r requirements.txt"),
            "   pip install -r requirements.txt"
        );
    }

    #[test]
    fn rule_has_requested_width() {
        assert_eq!(Theme::plain().format_rule(5), "=====");
    }

    #[test]
    fn default_impl_matches_new() {
        assert_eq!(Theme::default(), Theme::new());
    }
}
