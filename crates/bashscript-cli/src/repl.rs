//! Read-eval-print loop over the lexer
//!
//! Every line is scanned on its own and its tokens are printed, followed by
//! any diagnostics for that line.

use bashscript_error::{DiagnosticRenderer, Result, SourceCache};
use bashscript_lexer::Lexer;
use std::io::{BufRead, Write};
use tracing::debug;

pub const PROMPT: &str = ">> ";

/// Name shown in diagnostics for REPL input
const SOURCE_NAME: &str = "<stdin>";

/// User name for the greeting, from the environment
pub fn current_user() -> String {
    ["USER", "USERNAME"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|name| !name.is_empty())
        .unwrap_or_else(|| "there".to_string())
}

/// Banner printed before the first prompt
pub fn greeting(user: &str) -> String {
    format!(
        "Hello {}!  This is the BashScript programming language!\nFeel free to type in commands\n",
        user
    )
}

/// Runs the loop until `input` is exhausted
pub fn start<R, W>(mut input: R, mut output: W, use_colors: bool) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    debug!("repl session started");
    let mut line = Vec::new();
    let mut lines = 0usize;

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        lines += 1;

        let mut cache = SourceCache::new();
        let file_id = cache.add_bytes(SOURCE_NAME, &line);
        let mut lexer = Lexer::with_file_id(&line, file_id);

        loop {
            let token = lexer.next_token();
            if token.is_eof() {
                break;
            }
            writeln!(output, "{}", token)?;
        }

        let diagnostics = lexer.take_diagnostics();
        if !diagnostics.is_empty() {
            let renderer = DiagnosticRenderer::new(&cache).with_colors(use_colors);
            writeln!(output, "{}", diagnostics.render(&renderer))?;
        }
    }

    debug!(lines, "repl session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn run(input: &[u8]) -> String {
        let mut output = Vec::new();
        start(Cursor::new(input), &mut output, false).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_greeting() {
        assert_eq!(
            greeting("ada"),
            concat!(
                "Hello ada!  This is the BashScript programming language!\n",
                "Feel free to type in commands\n",
            )
        );
    }

    #[test]
    fn test_prints_each_token() {
        let output = run(b"let x = 5;\n");
        assert_eq!(
            output,
            ">> {Type:LET Literal:let}\n\
             {Type:IDENT Literal:x}\n\
             {Type:= Literal:=}\n\
             {Type:INT Literal:5}\n\
             {Type:; Literal:;}\n\
             >> \n"
        );
    }

    #[test]
    fn test_each_line_is_scanned_alone() {
        let output = run(b"a\n\nb");
        assert_eq!(
            output,
            ">> {Type:IDENT Literal:a}\n>> >> {Type:IDENT Literal:b}\n>> \n"
        );
    }

    #[test]
    fn test_empty_input_only_prompts() {
        assert_eq!(run(b""), ">> \n");
    }

    #[test]
    fn test_illegal_bytes_render_diagnostics() {
        let output = run(b"x @ y\n");
        assert!(output.contains("{Type:ILLEGAL Literal:@}"));
        assert!(output.contains("{Type:IDENT Literal:y}"));
        assert!(output.contains("error[EL001]: illegal character `@`"));
        assert!(output.contains("<stdin>:1:3"));
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn test_invalid_utf8_line() {
        let output = run(b"\xff\n");
        assert!(output.contains("{Type:ILLEGAL Literal:\u{fffd}}"));
        assert!(output.contains("illegal byte 0xFF"));
    }

    #[test]
    fn test_caret_under_char_after_multibyte() {
        let output = run("é@\n".as_bytes());
        assert!(output.contains("<stdin>:1:3"));
        assert!(output.contains("\n   |  ^ not part of any token\n"));
        assert!(!output.contains("\n   |   ^ not part of any token\n"));
    }
}
