//! bashscript-lexer - Lexer/Tokenizer for the BashScript language
//!
//! This crate converts BashScript source into a sequence of tokens.
//!
//! # Features
//!
//! - Byte-oriented ASCII scanning, any input is accepted
//! - Keywords: `fn`, `let`, `true`, `false`, `if`, `else`, `return`
//! - Literals: integers and floats
//! - Single-byte operators and delimiters (`==` is two `=` tokens)
//! - Unrecognized bytes become `Illegal` tokens plus a diagnostic
//!
//! # Example
//!
//! ```rust
//! use bashscript_lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("let five = 5;");
//!
//! loop {
//!     let token = lexer.next_token();
//!     println!("{}", token);
//!     if token.kind == TokenKind::Eof {
//!         break;
//!     }
//! }
//! ```

pub mod lexer;
pub mod token;

pub use lexer::{tokenize, Lexer};
pub use token::{lookup_ident, Token, TokenKind};
