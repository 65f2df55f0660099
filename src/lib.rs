//! # Introduction
//!
//! `cedarc` is the front end of the Cedar translator. It reads Cedar source
//! and produces LLVM-style textual IR ready for further lowering.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → IrGenerator → IR text
//! ```
//!
//! 1. [`parser`] — the pull-based [`parser::lexer::Lexer`], the recursive
//!    descent [`parser::parse::Parser`] and the owned tree in [`parser::ast`].
//! 2. [`codegen`] — walks the tree and emits one global string constant per
//!    distinct `echo` literal, plus an entry function calling the print
//!    primitive once per `echo`.
//! 3. [`options`] — knobs shared by both stages.
//!
//! Errors stop the pipeline at the stage that raised them; no IR is produced
//! for a program that fails to parse.
//!
//! ```
//! let ir = cedarc::translate(r#"start echo "hi" end"#).unwrap();
//! assert!(ir.contains("call void @print_string"));
//! ```

pub mod codegen;
pub mod options;
pub mod parser;

use codegen::{CodegenError, IrGenerator};
use options::Options;
use parser::ast::Node;
use parser::parse::{ParseError, Parser};
use thiserror::Error;

/// Any failure of the translation pipeline
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

/// Parse `source` into an AST with default options.
pub fn parse(source: &str) -> Result<Node, ParseError> {
    parse_with(source, &Options::default())
}

pub fn parse_with(source: &str, options: &Options) -> Result<Node, ParseError> {
    Parser::with_options(source, options.clone()).parse_program()
}

/// Translate `source` to IR text with default options.
pub fn translate(source: &str) -> Result<String, TranslateError> {
    translate_with(source, &Options::default())
}

pub fn translate_with(source: &str, options: &Options) -> Result<String, TranslateError> {
    let program = parse_with(source, options)?;
    let ir = IrGenerator::new(options).generate(&program)?;
    Ok(ir)
}
