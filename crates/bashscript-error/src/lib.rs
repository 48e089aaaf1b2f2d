//! bashscript-error - Diagnostics for the BashScript language
//!
//! Scanning never aborts: unrecognized input becomes an illegal token. This
//! crate lets the scanner additionally describe what it found, in the style
//! of the Rust compiler, and holds the error type for the tools around it.
//!
//! # Example
//!
//! ```rust
//! use bashscript_error::{Diagnostic, ErrorCode, SourceCache, DiagnosticRenderer};
//! use bashscript_error::span::{Span, Position};
//!
//! let mut cache = SourceCache::new();
//! let file_id = cache.add("example.bs", "let x = 10 @");
//!
//! let span = Span::new(
//!     Position::new(1, 12, 11),
//!     Position::new(1, 13, 12),
//!     file_id,
//! );
//!
//! let diagnostic = Diagnostic::error("illegal character `@`")
//!     .with_code(ErrorCode::ILLEGAL_CHARACTER)
//!     .with_label(span, "not a recognized character");
//!
//! let renderer = DiagnosticRenderer::new(&cache);
//! println!("{}", renderer.render(&diagnostic));
//! ```

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticRenderer, ErrorCode, Label, Level, SourceCache, SourceFile,
};
pub use error::Error;
pub use span::{Position, Span};

/// Result type for operations around the scanner that touch I/O
pub type Result<T> = std::result::Result<T, Error>;

/// Diagnostics accumulated while scanning
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.items.iter().filter(|d| d.is_error()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Renders all diagnostics
    pub fn render(&self, renderer: &DiagnosticRenderer<'_>) -> String {
        self.items
            .iter()
            .map(|d| renderer.render(d))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_counting() {
        let mut diagnostics = Diagnostics::new();
        assert!(diagnostics.is_empty());
        assert!(!diagnostics.has_errors());

        diagnostics.push(Diagnostic::warning("lone `.`"));
        assert!(!diagnostics.has_errors());

        diagnostics.push(Diagnostic::error("illegal character `@`"));
        diagnostics.push(Diagnostic::error("illegal character `$`"));
        assert!(diagnostics.has_errors());
        assert_eq!(diagnostics.len(), 3);
        assert_eq!(diagnostics.error_count(), 2);
    }

    #[test]
    fn test_render_joins_diagnostics() {
        let cache = SourceCache::new();
        let renderer = DiagnosticRenderer::new(&cache).without_colors();

        let mut diagnostics = Diagnostics::new();
        diagnostics.push(Diagnostic::error("first"));
        diagnostics.push(Diagnostic::warning("second"));

        assert_eq!(diagnostics.render(&renderer), "error: first\n\nwarning: second\n");
    }
}
