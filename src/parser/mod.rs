//! Cedar source code parser
//!
//! This module transforms Cedar source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens, pulled one at a time)
//! - [`parse`]: Parsing (tokens → AST), split over `statements` and `expressions`
//! - [`ast`]: AST node definitions
//!
//! # Supported language
//!
//! ```text
//! start
//!     define Greeter -> Base :
//!         echo "hello"
//!     end
//!     echo "bye"
//! end
//! ```
//!
//! The lexer knows the full keyword set; only `start`, `end`, `define` and
//! `echo` have grammar rules.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
