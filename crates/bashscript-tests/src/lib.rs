//! Integration tests for the BashScript language tools
//!
//! This crate drives the lexer the way its callers do: token by token from a
//! REPL line, or over a whole file through the `lex` command.

use bashscript_error::Diagnostics;
use bashscript_lexer::{Lexer, Token, TokenKind};

/// Tokens and diagnostics for one input
#[derive(Debug)]
pub struct ScanResult {
    /// All tokens, the final `Eof` included
    pub tokens: Vec<Token>,
    pub diagnostics: Diagnostics,
}

impl ScanResult {
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    pub fn illegal_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_illegal()).count()
    }
}

/// Scans `source` to the end by calling `next_token` until `Eof`
pub fn scan(source: &[u8]) -> ScanResult {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }

    ScanResult {
        tokens,
        diagnostics: lexer.take_diagnostics(),
    }
}

/// Rebuilds the input from token texts and the bytes between tokens.
///
/// Panics if a gap between two tokens holds anything but whitespace, or if
/// tokens overlap.
pub fn reconstruct(source: &[u8], tokens: &[Token]) -> Vec<u8> {
    let mut rebuilt = Vec::with_capacity(source.len());
    let mut prev_end = 0;

    for token in tokens {
        let start = token.span.start.offset;
        assert!(start >= prev_end, "token {} overlaps the previous one", token);

        let gap = &source[prev_end..start];
        assert!(
            gap.iter().all(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r')),
            "non-whitespace skipped before {}: {:?}",
            token,
            gap
        );
        rebuilt.extend_from_slice(gap);
        rebuilt.extend_from_slice(&token.text);
        prev_end = token.span.end.offset;
    }

    rebuilt
}

/// Asserts that `source` scans to exactly `expected`, then `Eof`
pub fn assert_tokens(source: &str, expected: &[(TokenKind, &str)]) {
    let result = scan(source.as_bytes());
    let actual: Vec<(TokenKind, String)> = result
        .tokens
        .iter()
        .map(|t| (t.kind, t.text_lossy().into_owned()))
        .collect();

    let mut expected: Vec<(TokenKind, String)> = expected
        .iter()
        .map(|(kind, text)| (*kind, text.to_string()))
        .collect();
    expected.push((TokenKind::Eof, String::new()));

    if actual != expected {
        panic!(
            "Token mismatch for {:?}\n\nexpected: {:?}\n  actual: {:?}",
            source, expected, actual
        );
    }
}
