//! Error types for IR generation

use crate::parser::ast::{NodeKind, SourceLocation};
use std::collections::TryReserveError;
use thiserror::Error;

/// Errors raised while lowering an AST to IR
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The tree handed to the generator is not rooted at a Program node
    #[error("Code generation expects a Program root, found {found}")]
    NotAProgram { found: NodeKind },

    /// An Echo node without a literal (only possible for hand-built trees)
    #[error(
        "Echo at line {}, column {} has no literal",
        .location.line,
        .location.column
    )]
    MissingLiteral { location: SourceLocation },

    #[error("Out of memory while emitting IR")]
    ResourceExhausted(#[from] TryReserveError),

    #[error("Failed to write IR: {0}")]
    Io(#[from] std::io::Error),
}
