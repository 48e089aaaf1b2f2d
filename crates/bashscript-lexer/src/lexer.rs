//! Lexer for the BashScript language
//!
//! Converts source bytes into a sequence of tokens. The input is treated as
//! plain ASCII: every byte outside the token classes becomes an `Illegal`
//! token of its own, so scanning never stops early.

use crate::token::{lookup_ident, Token, TokenKind};
use bashscript_error::{
    span::{Position, Span},
    Diagnostic, Diagnostics, ErrorCode,
};
use tracing::{debug, trace};

/// Value of `ch` once the cursor has passed the last byte
const EOF_SENTINEL: u8 = 0;

/// The BashScript language Lexer
pub struct Lexer<'src> {
    source: &'src [u8],
    /// Index of `ch` in `source`
    position: usize,
    /// Index of the byte after `ch`
    read_position: usize,
    /// Byte under the cursor, `EOF_SENTINEL` at the end
    ch: u8,
    /// Line of `ch` (1-indexed)
    line: u32,
    /// Column of `ch` in bytes (1-indexed)
    column: u32,
    file_id: u32,
    diagnostics: Diagnostics,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer over the given input
    pub fn new<S>(source: &'src S) -> Self
    where
        S: AsRef<[u8]> + ?Sized,
    {
        Self::with_file_id(source, 0)
    }

    /// Creates a lexer whose spans refer to `file_id`
    pub fn with_file_id<S>(source: &'src S, file_id: u32) -> Self
    where
        S: AsRef<[u8]> + ?Sized,
    {
        let mut lexer = Self {
            source: source.as_ref(),
            position: 0,
            read_position: 0,
            ch: EOF_SENTINEL,
            line: 1,
            column: 1,
            file_id,
            diagnostics: Diagnostics::new(),
        };
        lexer.read_char();
        lexer
    }

    /// Returns the accumulated diagnostics
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Consumes and returns the diagnostics
    pub fn take_diagnostics(&mut self) -> Diagnostics {
        std::mem::take(&mut self.diagnostics)
    }

    /// Moves the cursor one byte forward
    fn read_char(&mut self) {
        if self.ch == b'\n' {
            self.line += 1;
            self.column = 1;
        } else if self.read_position > 0 {
            self.column += 1;
        }

        self.ch = self
            .source
            .get(self.read_position)
            .copied()
            .unwrap_or(EOF_SENTINEL);
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Returns the byte after `ch` without moving the cursor
    #[allow(dead_code)]
    fn peek_char(&self) -> u8 {
        self.source
            .get(self.read_position)
            .copied()
            .unwrap_or(EOF_SENTINEL)
    }

    /// Whether the cursor has passed the last input byte. An interior NUL
    /// byte is not the end.
    fn at_eof(&self) -> bool {
        self.position >= self.source.len()
    }

    fn current_position(&self) -> Position {
        Position::new(self.line, self.column, self.position)
    }

    fn make_span(&self, start: Position) -> Span {
        Span::new(start, self.current_position(), self.file_id)
    }

    /// Slices the source from `start` up to the cursor
    fn make_token(&self, kind: TokenKind, start: Position) -> Token {
        Token::new(
            kind,
            &self.source[start.offset..self.position],
            self.make_span(start),
        )
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    /// Reads a run of letters and underscores
    fn read_identifier(&mut self, start: Position) -> Token {
        while is_letter(self.ch) {
            self.read_char();
        }

        // Only ASCII letters were consumed
        let text = &self.source[start.offset..self.position];
        let ident = std::str::from_utf8(text).unwrap_or_default();
        self.make_token(lookup_ident(ident), start)
    }

    /// Reads a run of digits and periods
    fn read_number(&mut self, start: Position) -> Token {
        while is_digit(self.ch) {
            self.read_char();
        }

        let text = &self.source[start.offset..self.position];
        let kind = if text.contains(&b'.') {
            TokenKind::Float
        } else {
            TokenKind::Int
        };

        if text == b"." {
            let span = self.make_span(start);
            self.diagnostics.push(
                Diagnostic::warning("lone `.` scanned as a float literal")
                    .with_code(ErrorCode::LONE_PERIOD)
                    .with_label(span, "float literal with no digits")
                    .with_note("a period starts a number in BashScript"),
            );
        }

        self.make_token(kind, start)
    }

    fn illegal(&self, start: Position) -> Diagnostic {
        let ch = self.ch;
        let span = Span::new(
            start,
            Position::new(start.line, start.column + 1, start.offset + 1),
            self.file_id,
        );
        debug!(byte = ch, line = start.line, column = start.column, "illegal byte");

        let diagnostic = if ch.is_ascii_graphic() {
            Diagnostic::error(format!("illegal character `{}`", ch as char))
        } else {
            Diagnostic::error(format!("illegal byte 0x{:02X}", ch))
        }
        .with_code(ErrorCode::ILLEGAL_CHARACTER)
        .with_label(span, "not part of any token");

        match ch {
            b'"' | b'\'' => diagnostic.with_help("string literals are not supported"),
            b'#' => diagnostic.with_help("comments are not supported"),
            _ if !ch.is_ascii() => diagnostic.with_note("the scanner only accepts ASCII input"),
            _ => diagnostic,
        }
    }

    /// Reads the next token
    pub fn next_token(&mut self) -> Token {
        let token = self.scan_token();
        trace!(
            kind = %token.kind,
            line = token.span.start.line,
            column = token.span.start.column,
            "token"
        );
        token
    }

    fn scan_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.current_position();

        // Identifiers and numbers stop on the first byte after them
        if is_letter(self.ch) {
            return self.read_identifier(start);
        }
        if is_digit(self.ch) {
            return self.read_number(start);
        }

        // Everything else is one byte long, or the end of input
        let kind = if let Some(kind) = TokenKind::from_symbol(self.ch) {
            kind
        } else if self.at_eof() {
            return Token::new(TokenKind::Eof, Vec::new(), Span::point(start, self.file_id));
        } else {
            let diagnostic = self.illegal(start);
            self.diagnostics.push(diagnostic);
            TokenKind::Illegal
        };

        self.read_char();
        self.make_token(kind, start)
    }

    /// Tokenizes the whole input, including the final `Eof` token
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);

            if is_eof {
                break;
            }
        }

        tokens
    }
}

/// Yields tokens up to, not including, `Eof`
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit() || ch == b'.'
}

/// Tokenizes source code and returns the tokens
pub fn tokenize<S>(source: &S, file_id: u32) -> (Vec<Token>, Diagnostics)
where
    S: AsRef<[u8]> + ?Sized,
{
    let mut lexer = Lexer::with_file_id(source, file_id);
    let tokens = lexer.tokenize();
    (tokens, lexer.take_diagnostics())
}
