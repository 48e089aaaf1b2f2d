//! `bashscript lex`: dumps the token stream of a file

use bashscript_error::{DiagnosticRenderer, Error, Result, SourceCache};
use bashscript_lexer::{Lexer, TokenKind};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Outcome of lexing one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexReport {
    /// Tokens printed, `Eof` included
    pub tokens: usize,
    /// Illegal bytes found
    pub errors: usize,
    pub warnings: usize,
}

impl LexReport {
    pub fn is_clean(&self) -> bool {
        self.errors == 0
    }
}

/// Scans `path` and writes one row per token, then the diagnostics
pub fn lex_file<W: Write>(path: &Path, mut out: W, use_colors: bool) -> Result<LexReport> {
    let source = fs::read(path).map_err(|err| Error::read_source(path, err))?;
    info!(path = %path.display(), bytes = source.len(), "lexing file");

    let mut cache = SourceCache::new();
    let file_id = cache.add_bytes(path.display().to_string(), &source);

    let mut lexer = Lexer::with_file_id(&source, file_id);
    let tokens = lexer.tokenize();
    let diagnostics = lexer.take_diagnostics();

    writeln!(out, "Tokenizing: {}\n", path.display())?;
    for token in &tokens {
        let display = match token.kind {
            TokenKind::Eof => "EOF".into(),
            _ => token.text_lossy(),
        };
        writeln!(
            out,
            "  {:4}:{:<3}  {:<10}  {}",
            token.span.start.line, token.span.start.column, token.kind, display
        )?;
    }
    writeln!(out, "\nTotal: {} tokens", tokens.len())?;

    if !diagnostics.is_empty() {
        let renderer = DiagnosticRenderer::new(&cache).with_colors(use_colors);
        writeln!(out, "\n{}", diagnostics.render(&renderer))?;
    }

    let errors = diagnostics.error_count();
    Ok(LexReport {
        tokens: tokens.len(),
        errors,
        warnings: diagnostics.len() - errors,
    })
}
