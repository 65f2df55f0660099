//! Expression parsing
//!
//! ```text
//! Expression := StringLiteral | NumberLiteral | Identifier
//! ```
//!
//! No statement rule reaches this yet. It is kept callable so that future
//! statements (assignments, `emit`, `repeat ... until`) can build on it.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse a single primary expression at the current token.
    pub fn parse_expression(&mut self) -> Result<Node, ParseError> {
        let loc = self.current_location();
        let node = match &self.peek().kind {
            TokenKind::Str(text) => Node::new(NodeKind::String, Some(text.clone())),
            TokenKind::Number(n) => Node::new(NodeKind::Number, Some(n.to_string())),
            TokenKind::Ident(name) => Node::new(NodeKind::Identifier, Some(name.clone())),
            _ => return Err(self.error("Expected expression")),
        };
        self.advance();
        Ok(node.at(loc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_kinds() {
        let mut parser = Parser::new(r#""s" 12 name"#);

        let s = parser.parse_expression().unwrap();
        let n = parser.parse_expression().unwrap();
        let i = parser.parse_expression().unwrap();

        assert_eq!((s.kind, s.value.as_deref()), (NodeKind::String, Some("s")));
        assert_eq!((n.kind, n.value.as_deref()), (NodeKind::Number, Some("12")));
        assert_eq!((i.kind, i.value.as_deref()), (NodeKind::Identifier, Some("name")));
        assert!(parser.peek().is_eof());
    }

    #[test]
    fn test_expression_rejects_operator() {
        let err = Parser::new("+").parse_expression().unwrap_err();
        assert!(err.to_string().contains("Expected expression, found '+'"));
    }

    #[test]
    fn test_expression_is_not_a_statement() {
        let err = Parser::new("start name end").parse_program().unwrap_err();
        assert!(err.to_string().contains("found identifier 'name'"));
    }
}
