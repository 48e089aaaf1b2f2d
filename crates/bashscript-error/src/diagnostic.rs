//! Diagnostic - rustc-style messages for scanner findings
//!
//! A diagnostic carries:
//! - Error code (EL001, EL002, ...)
//! - Precise location
//! - Source code snippet
//! - Notes and help lines

use crate::span::Span;
use std::borrow::Cow;
use std::fmt;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Input the scanner could not classify
    Error,
    /// Input that scanned, but probably not the way the author meant
    Warning,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
        }
    }

    /// ANSI code for coloring
    pub fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "\x1b[1;31m",   // Bold Red
            Level::Warning => "\x1b[1;33m", // Bold Yellow
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A label pointing at a region of the source
#[derive(Debug, Clone)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// Structured error code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCode {
    /// Category (L = Lexer)
    pub category: char,
    pub number: u16,
}

impl ErrorCode {
    pub const fn new(category: char, number: u16) -> Self {
        Self { category, number }
    }

    // Lexer
    pub const ILLEGAL_CHARACTER: Self = Self::new('L', 1);
    pub const LONE_PERIOD: Self = Self::new('L', 2);
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}{:03}", self.category, self.number)
    }
}

/// A complete diagnostic
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub level: Level,
    pub code: Option<ErrorCode>,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    pub help: Vec<String>,
}

impl Diagnostic {
    fn with_level(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            notes: Vec::new(),
            help: Vec::new(),
        }
    }

    /// Creates a new error
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_level(Level::Error, message)
    }

    /// Creates a new warning
    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_level(Level::Warning, message)
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(span, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

/// Source inputs known to the renderer, indexed by file id
#[derive(Debug, Default)]
pub struct SourceCache {
    files: Vec<SourceFile>,
}

#[derive(Debug)]
pub struct SourceFile {
    pub name: String,
    /// Raw input, so span offsets index it directly
    source: Vec<u8>,
    /// Offset of each line start
    line_starts: Vec<usize>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self::from_vec(name.into(), source.into().into_bytes())
    }

    /// Scanner input is raw bytes; bytes that are not UTF-8 are shown as U+FFFD.
    pub fn from_bytes(name: impl Into<String>, source: &[u8]) -> Self {
        Self::from_vec(name.into(), source.to_vec())
    }

    fn from_vec(name: String, source: Vec<u8>) -> Self {
        let line_starts = std::iter::once(0)
            .chain(
                source
                    .iter()
                    .enumerate()
                    .filter(|(_, &b)| b == b'\n')
                    .map(|(i, _)| i + 1),
            )
            .collect();

        Self {
            name,
            source,
            line_starts,
        }
    }

    fn line_bounds(&self, line: u32) -> Option<(usize, usize)> {
        let line_idx = line.checked_sub(1)? as usize;
        let start = *self.line_starts.get(line_idx)?;
        let end = self
            .line_starts
            .get(line_idx + 1)
            .map(|&e| e.saturating_sub(1))
            .unwrap_or(self.source.len());
        Some((start, end))
    }

    /// Returns a line of the source (1-indexed), without its line terminator
    pub fn get_line(&self, line: u32) -> Option<Cow<'_, str>> {
        let (start, end) = self.line_bounds(line)?;
        let bytes = &self.source[start..end];
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
        Some(String::from_utf8_lossy(bytes))
    }

    /// Number of characters the bytes in `from..to` occupy once shown by `get_line`
    fn display_width(&self, from: usize, to: usize) -> usize {
        let to = to.min(self.source.len());
        let from = from.min(to);
        String::from_utf8_lossy(&self.source[from..to]).chars().count()
    }
}

impl SourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a source and returns its ID
    pub fn add(&mut self, name: impl Into<String>, source: impl Into<String>) -> u32 {
        self.push(SourceFile::new(name, source))
    }

    /// Adds a byte source and returns its ID
    pub fn add_bytes(&mut self, name: impl Into<String>, source: &[u8]) -> u32 {
        self.push(SourceFile::from_bytes(name, source))
    }

    fn push(&mut self, file: SourceFile) -> u32 {
        let id = self.files.len() as u32;
        self.files.push(file);
        id
    }

    pub fn get(&self, id: u32) -> Option<&SourceFile> {
        self.files.get(id as usize)
    }
}

/// Renders a diagnostic for display
pub struct DiagnosticRenderer<'a> {
    cache: &'a SourceCache,
    use_colors: bool,
}

impl<'a> DiagnosticRenderer<'a> {
    pub fn new(cache: &'a SourceCache) -> Self {
        Self {
            cache,
            use_colors: true,
        }
    }

    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn paint(&self, code: &'static str) -> &'static str {
        if self.use_colors {
            code
        } else {
            ""
        }
    }

    /// Renders the diagnostic as a string
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let mut output = String::new();

        let reset = self.paint("\x1b[0m");
        let bold = self.paint("\x1b[1m");
        let blue = self.paint("\x1b[1;34m");
        let color = self.paint(diagnostic.level.color_code());

        // error[EL001]: message
        output.push_str(color);
        output.push_str(diagnostic.level.as_str());
        if let Some(code) = &diagnostic.code {
            output.push('[');
            output.push_str(&code.to_string());
            output.push(']');
        }
        output.push_str(reset);
        output.push_str(bold);
        output.push_str(": ");
        output.push_str(&diagnostic.message);
        output.push_str(reset);
        output.push('\n');

        for label in &diagnostic.labels {
            let Some(file) = self.cache.get(label.span.file_id) else {
                continue;
            };

            output.push_str(&format!(
                " {}-->{} {}:{}:{}\n",
                blue, reset, file.name, label.span.start.line, label.span.start.column
            ));

            let Some(line_content) = file.get_line(label.span.start.line) else {
                continue;
            };

            let line_num = label.span.start.line;
            let padding = " ".repeat(line_num.to_string().len());

            output.push_str(&format!(" {} {}|{}\n", padding, blue, reset));
            output.push_str(&format!(
                " {}{}{} |{} {}\n",
                blue, line_num, reset, reset, line_content
            ));

            // Columns count bytes, the printed line counts characters
            let (line_start, _) = file.line_bounds(line_num).unwrap_or_default();
            let start = label.span.start.offset;
            let pad = file.display_width(line_start, start);
            let underline_len = if label.span.start.line == label.span.end.line {
                file.display_width(start, label.span.end.offset).max(1)
            } else {
                line_content.chars().count().saturating_sub(pad).max(1)
            };
            let spaces = " ".repeat(pad);
            let underline = "^".repeat(underline_len);

            output.push_str(&format!(
                " {} {}|{} {}{}{} {}{}\n",
                padding, blue, reset, spaces, color, underline, label.message, reset
            ));
        }

        for note in &diagnostic.notes {
            output.push_str(&format!("   = {}note{}: {}\n", bold, reset, note));
        }

        let green = self.paint("\x1b[1;32m");
        for help in &diagnostic.help {
            output.push_str(&format!("   = {}help{}: {}\n", green, reset, help));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Position;

    #[test]
    fn test_diagnostic_rendering() {
        let mut cache = SourceCache::new();
        let file_id = cache.add("test.bs", "let x = 5;\nlet y = x @ 1;");

        let span = Span::new(Position::new(2, 11, 21), Position::new(2, 12, 22), file_id);

        let diagnostic = Diagnostic::error("illegal character `@`")
            .with_code(ErrorCode::ILLEGAL_CHARACTER)
            .with_label(span, "not a recognized character")
            .with_help("remove the character");

        let renderer = DiagnosticRenderer::new(&cache).without_colors();
        let output = renderer.render(&diagnostic);

        assert!(output.contains("error[EL001]: illegal character `@`"));
        assert!(output.contains("test.bs:2:11"));
        assert!(output.contains("2 | let y = x @ 1;"));
        assert!(output.contains("          ^ not a recognized character"));
        assert!(output.contains("= help: remove the character"));
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn test_warning_rendering_with_note() {
        let mut cache = SourceCache::new();
        let file_id = cache.add("<stdin>", ".");

        let span = Span::new(Position::new(1, 1, 0), Position::new(1, 2, 1), file_id);
        let diagnostic = Diagnostic::warning("lone `.` scanned as a float literal")
            .with_code(ErrorCode::LONE_PERIOD)
            .with_label(span, "float literal")
            .with_note("`.` starts a number");

        let output = DiagnosticRenderer::new(&cache).without_colors().render(&diagnostic);
        assert!(output.starts_with("warning[EL002]"));
        assert!(output.contains("= note: `.` starts a number"));
        assert!(!diagnostic.is_error());
    }

    #[test]
    fn test_source_file_lines() {
        let file = SourceFile::from_bytes("crlf", b"let a\r\nlet \xffb\n");
        assert_eq!(file.get_line(1).as_deref(), Some("let a"));
        assert_eq!(file.get_line(2).as_deref(), Some("let \u{fffd}b"));
        assert_eq!(file.get_line(3).as_deref(), Some(""));
        assert_eq!(file.get_line(4).as_deref(), None);
        assert_eq!(file.get_line(0).as_deref(), None);
    }

    fn underline_row(source: &[u8], start: Position, end: Position) -> String {
        let mut cache = SourceCache::new();
        let file_id = cache.add_bytes("<stdin>", source);
        let diagnostic = Diagnostic::error("illegal character `@`")
            .with_label(Span::new(start, end, file_id), "here");
        let output = DiagnosticRenderer::new(&cache).without_colors().render(&diagnostic);
        output.lines().last().unwrap().to_string()
    }

    #[test]
    fn test_caret_after_multibyte_char() {
        // `é` is two bytes but one printed column
        let row = underline_row("é@\n".as_bytes(), Position::new(1, 3, 2), Position::new(1, 4, 3));
        assert_eq!(row, "   |  ^ here");
    }

    #[test]
    fn test_caret_after_invalid_byte() {
        let row = underline_row(b"\xff@", Position::new(1, 2, 1), Position::new(1, 3, 2));
        assert_eq!(row, "   |  ^ here");

        let row = underline_row(b"\xff@", Position::new(1, 1, 0), Position::new(1, 2, 1));
        assert_eq!(row, "   | ^ here");
    }

    #[test]
    fn test_caret_on_second_line_of_bytes() {
        let source = "x\nλλ @".as_bytes();
        let row = underline_row(source, Position::new(2, 6, 7), Position::new(2, 7, 8));
        assert_eq!(row, "   |    ^ here");
    }

    #[test]
    fn test_unknown_file_id_is_skipped() {
        let cache = SourceCache::new();
        let span = Span::point(Position::start(), 7);
        let diagnostic = Diagnostic::error("illegal character").with_label(span, "here");

        let output = DiagnosticRenderer::new(&cache).without_colors().render(&diagnostic);
        assert_eq!(output, "error: illegal character\n");
    }
}
