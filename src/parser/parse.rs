//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, helper methods, and the program entry rule.
//!
//! # Parser Architecture
//!
//! The Parser is a recursive descent parser with one token of lookahead. It
//! pulls tokens from its [`Lexer`] on demand and never backtracks.
//! - This module: Parser struct, helper methods, `Program` rule
//! - `statements`: `StatementList`, `DefineBlock`, `EchoStatement`
//! - `expressions`: the `Expression` rule, not reachable from statements
//!
//! Parser methods are split across files using `impl Parser` blocks, each
//! module extending the Parser while sharing the same parsing state.
//!
//! # Error policy
//!
//! The first token that does not fit the grammar aborts the parse with a
//! [`ParseError::Syntax`]. There is no resynchronization and no partial tree.

use crate::options::Options;
use crate::parser::ast::*;
use crate::parser::lexer::{Lexer, Token, TokenKind};
use std::collections::TryReserveError;
use thiserror::Error;

/// Deepest allowed nesting of `define` blocks. Keeps the recursive descent,
/// the IR walk and the tree's drop within the stack.
pub const MAX_NESTING: usize = 256;

/// Parser error type
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(
        "Parse error at line {}, column {}: {message}",
        .location.line,
        .location.column
    )]
    Syntax {
        message: String,
        location: SourceLocation,
    },

    #[error(
        "Parse error at line {}, column {}: define blocks nested deeper than {limit}",
        .location.line,
        .location.column
    )]
    NestingTooDeep {
        limit: usize,
        location: SourceLocation,
    },

    #[error("Out of memory while building the syntax tree")]
    ResourceExhausted(#[from] TryReserveError),
}

impl ParseError {
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            ParseError::Syntax { location, .. } => Some(*location),
            ParseError::NestingTooDeep { location, .. } => Some(*location),
            ParseError::ResourceExhausted(_) => None,
        }
    }
}

/// Recursive descent parser for Cedar
///
/// Holds all parsing-time state: the token source, the pending lookahead
/// token, the current `define` depth and the options that shape the tree.
pub struct Parser {
    pub(crate) lexer: Lexer,
    pub(crate) current: Token,
    pub(crate) depth: usize,
    pub(crate) options: Options,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Self::with_options(source, Options::default())
    }

    pub fn with_options(source: &str, options: Options) -> Self {
        let mut lexer = Lexer::with_quotes(source, options.string_quotes);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            depth: 0,
            options,
        }
    }

    /// Parse a whole program: `start StatementList end`, then end of file.
    pub fn parse_program(&mut self) -> Result<Node, ParseError> {
        let loc = self.current_location();
        self.expect(&TokenKind::Start, "Expected 'start' at beginning of program")?;

        let mut program = Node::new(NodeKind::Program, None).at(loc);
        for statement in self.parse_statement_list()? {
            Self::attach(&mut program, statement)?;
        }

        self.expect(&TokenKind::End, "Expected 'end' to close program")?;

        if !self.peek().is_eof() {
            return Err(self.error("Expected end of file after program"));
        }

        Ok(program)
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> &Token {
        &self.current
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current.kind) == std::mem::discriminant(kind)
    }

    /// Consume the pending token and pull the next one from the lexer.
    pub(crate) fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.current, next)
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.current.location
    }

    pub(crate) fn error(&self, message: &str) -> ParseError {
        ParseError::Syntax {
            message: format!("{}, found {}", message, self.current.kind),
            location: self.current_location(),
        }
    }

    pub(crate) fn expect(&mut self, kind: &TokenKind, message: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error(message))
        }
    }

    pub(crate) fn expect_identifier(&mut self, ctx: &str) -> Result<String, ParseError> {
        if let TokenKind::Ident(_) = self.current.kind {
            if let TokenKind::Ident(name) = self.advance().kind {
                return Ok(name);
            }
        }
        Err(self.error(&format!("Expected identifier {ctx}")))
    }

    pub(crate) fn expect_string(&mut self, ctx: &str) -> Result<String, ParseError> {
        if let TokenKind::Str(_) = self.current.kind {
            if let TokenKind::Str(text) = self.advance().kind {
                return Ok(text);
            }
        }
        Err(self.error(&format!("Expected string literal {ctx}")))
    }

    pub(crate) fn attach(parent: &mut Node, child: Node) -> Result<(), ParseError> {
        Node::add_child(Some(parent), Some(child))?;
        Ok(())
    }
}
