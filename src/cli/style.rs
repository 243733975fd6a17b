//! Terminal styling helpers
//!
//! Thin wrappers over owo-colors that degrade to plain text when the
//! stream doesn't support color (pipes, CI logs).

use owo_colors::{OwoColorize, Stream};

/// Check mark used in success summaries.
pub const CHECK: &str = "✓";

/// A green check mark.
pub fn check() -> String {
    CHECK
        .if_supports_color(Stream::Stdout, |t| t.green())
        .to_string()
}

/// Styling extensions for anything displayable.
pub trait Stylize: std::fmt::Display + Sized {
    /// Bold emphasis
    fn emphasis(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.bold())
            .to_string()
    }

    /// Dimmed, for progress chatter
    fn muted(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.dimmed())
            .to_string()
    }

    /// Accent color for values (URLs, numbers)
    fn accent(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.cyan())
            .to_string()
    }

    /// Success green
    fn success(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.green())
            .to_string()
    }

    /// Error red (stderr)
    fn error_style(&self) -> String {
        self.if_supports_color(Stream::Stderr, |t| t.red())
            .to_string()
    }
}

impl<T: std::fmt::Display> Stylize for T {}
