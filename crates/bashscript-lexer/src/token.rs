//! Tokens for the BashScript language
//!
//! Defines every token kind the lexer can produce and the keyword table.

use bashscript_error::span::Span;
use std::borrow::Cow;
use std::fmt;

/// All token kinds for the BashScript language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // =========================================
    // Special
    // =========================================
    /// A byte that starts no token
    Illegal,
    /// End of input
    Eof,

    // =========================================
    // Identifiers and literals
    // =========================================
    /// `add`, `foo_bar`
    Ident,
    /// `5`
    Int,
    /// `5.5`, and anything else made of digits and periods with a `.` in it
    Float,

    // =========================================
    // Operators
    // =========================================
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `/`
    Slash,
    /// `*`
    Asterisk,
    /// `<`
    Lt,
    /// `>`
    Gt,

    // =========================================
    // Delimiters
    // =========================================
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,

    // =========================================
    // Keywords
    // =========================================
    /// `fn`
    Function,
    /// `let`
    Let,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
}

impl TokenKind {
    /// Converts a word to its keyword kind, if it is one
    pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
        match s {
            "fn" => Some(TokenKind::Function),
            "let" => Some(TokenKind::Let),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            "return" => Some(TokenKind::Return),
            _ => None,
        }
    }

    /// The kind of a single operator or delimiter byte
    pub fn from_symbol(byte: u8) -> Option<TokenKind> {
        match byte {
            b'=' => Some(TokenKind::Assign),
            b'+' => Some(TokenKind::Plus),
            b'-' => Some(TokenKind::Minus),
            b'!' => Some(TokenKind::Bang),
            b'/' => Some(TokenKind::Slash),
            b'*' => Some(TokenKind::Asterisk),
            b'<' => Some(TokenKind::Lt),
            b'>' => Some(TokenKind::Gt),
            b';' => Some(TokenKind::Semicolon),
            b',' => Some(TokenKind::Comma),
            b'(' => Some(TokenKind::LParen),
            b')' => Some(TokenKind::RParen),
            b'{' => Some(TokenKind::LBrace),
            b'}' => Some(TokenKind::RBrace),
            _ => None,
        }
    }

    /// Returns true if the token is a keyword
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
        )
    }

    /// Returns true for the single-byte operators and delimiters
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Bang
                | TokenKind::Slash
                | TokenKind::Asterisk
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Semicolon
                | TokenKind::Comma
                | TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBrace
                | TokenKind::RBrace
        )
    }

    /// Catalog name of the kind, as shown by the REPL
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Slash => "/",
            TokenKind::Asterisk => "*",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Kind of a scanned word: its keyword kind, or `Ident`
pub fn lookup_ident(ident: &str) -> TokenKind {
    TokenKind::keyword_from_str(ident).unwrap_or(TokenKind::Ident)
}

/// A token with the exact bytes it was scanned from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source bytes of the token; empty for `Eof`
    pub text: Vec<u8>,
    /// Location in the source
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<Vec<u8>>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// The text as a string, with non-UTF-8 bytes replaced
    pub fn text_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.text)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Illegal
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Type:{} Literal:{}}}", self.kind, self.text_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ident() {
        assert_eq!(lookup_ident("let"), TokenKind::Let);
        assert_eq!(lookup_ident("fn"), TokenKind::Function);
        assert_eq!(lookup_ident("return"), TokenKind::Return);
        assert_eq!(lookup_ident("foobar"), TokenKind::Ident);
        // Keywords are case sensitive
        assert_eq!(lookup_ident("Let"), TokenKind::Ident);
        assert_eq!(lookup_ident("function"), TokenKind::Ident);
    }

    #[test]
    fn test_keyword_names_round_trip() {
        for word in ["fn", "let", "true", "false", "if", "else", "return"] {
            let kind = lookup_ident(word);
            assert!(kind.is_keyword(), "{word} should be a keyword");
            assert!(!kind.is_operator());
        }
        assert_eq!(TokenKind::Function.to_string(), "FUNCTION");
    }

    #[test]
    fn test_symbols() {
        for &byte in b"=+-!/*<>;,(){}" {
            let kind = TokenKind::from_symbol(byte).unwrap();
            assert!(kind.is_operator());
            assert_eq!(kind.as_str().as_bytes(), [byte]);
        }
        assert_eq!(TokenKind::from_symbol(b'@'), None);
        assert_eq!(TokenKind::from_symbol(b'.'), None);
    }

    #[test]
    fn test_display() {
        let token = Token::new(TokenKind::Let, "let", Span::default());
        assert_eq!(token.to_string(), "{Type:LET Literal:let}");

        let eof = Token::new(TokenKind::Eof, "", Span::default());
        assert_eq!(eof.to_string(), "{Type:EOF Literal:}");
        assert!(eof.is_eof());
    }

    #[test]
    fn test_illegal_non_utf8_text() {
        let token = Token::new(TokenKind::Illegal, vec![0xC3], Span::default());
        assert!(token.is_illegal());
        assert_eq!(token.text_lossy(), "\u{fffd}");
    }
}
