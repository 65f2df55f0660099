//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! StatementList := Statement+
//! Statement     := DefineBlock | EchoStatement
//! DefineBlock   := 'define' Identifier '->' Identifier ':' StatementList 'end'
//! EchoStatement := 'echo' StringLiteral
//! ```
//!
//! The leading keyword alone picks the alternative.

use crate::options::DefineBody;
use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser, MAX_NESTING};

impl Parser {
    /// Parse one or more statements, stopping at the first token that cannot
    /// start a statement.
    pub(crate) fn parse_statement_list(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut statements = Vec::new();

        loop {
            let statement = self.parse_statement()?;
            statements.try_reserve(1)?;
            statements.push(statement);

            if !self.starts_statement() {
                return Ok(statements);
            }
        }
    }

    pub(crate) fn parse_statement(&mut self) -> Result<Node, ParseError> {
        match self.current.kind {
            TokenKind::Define => self.parse_define_block(),
            TokenKind::Echo => self.parse_echo_statement(),
            _ => Err(self.error("Expected 'define' or 'echo'")),
        }
    }

    fn starts_statement(&self) -> bool {
        matches!(self.current.kind, TokenKind::Define | TokenKind::Echo)
    }

    /// Parse `define Name -> Target : statements end`
    fn parse_define_block(&mut self) -> Result<Node, ParseError> {
        let loc = self.current_location();
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_NESTING,
                location: loc,
            });
        }
        self.expect(&TokenKind::Define, "Expected 'define'")?;

        let name = self.expect_identifier("after 'define'")?;
        self.expect(&TokenKind::Arrow, "Expected '->' after define name")?;
        let target = self.expect_identifier("after '->'")?;
        self.expect(&TokenKind::Colon, "Expected ':' before define body")?;

        self.depth += 1;
        let body = self.parse_statement_list();
        self.depth -= 1;
        let body = body?;

        self.expect(&TokenKind::End, "Expected 'end' to close define block")?;

        let mut define = Node::new(NodeKind::Define, Some(name))
            .with_target(target)
            .at(loc);
        if self.options.define_body == DefineBody::Attach {
            for statement in body {
                Self::attach(&mut define, statement)?;
            }
        }

        Ok(define)
    }

    /// Parse `echo "text"`
    fn parse_echo_statement(&mut self) -> Result<Node, ParseError> {
        let loc = self.current_location();
        self.expect(&TokenKind::Echo, "Expected 'echo'")?;

        let text = self.expect_string("after 'echo'")?;

        Ok(Node::new(NodeKind::Echo, Some(text)).at(loc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Node {
        Parser::new(source).parse_program().unwrap()
    }

    #[test]
    fn test_statements_keep_source_order() {
        let program = parse(r#"start echo "a" echo "b" echo "c" end"#);

        let values: Vec<_> = program
            .children
            .iter()
            .map(|n| n.value.as_deref().unwrap())
            .collect();
        assert_eq!(values, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_nested_defines() {
        let source = r#"
            start
                define Outer -> Base :
                    echo "one"
                    define Inner -> Outer :
                        echo "two"
                    end
                end
                echo "three"
            end
        "#;
        let program = parse(source);

        assert_eq!(
            program.render(),
            "[Program]\n  [Define] Outer -> Base\n    [Echo] one\n    [Define] Inner -> Outer\n      [Echo] two\n  [Echo] three\n"
        );
    }

    #[test]
    fn test_define_location() {
        let program = parse("start\ndefine A -> B : echo \"x\" end end");
        assert_eq!(program.children[0].location, SourceLocation::new(2, 1));
    }

    #[test]
    fn test_define_requires_body() {
        let err = Parser::new("start define A -> B : end end")
            .parse_program()
            .unwrap_err();
        assert!(err.to_string().contains("Expected 'define' or 'echo', found 'end'"));
    }

    #[test]
    fn test_define_requires_arrow() {
        let err = Parser::new(r#"start define A B : echo "x" end end"#)
            .parse_program()
            .unwrap_err();
        assert!(err.to_string().contains("Expected '->' after define name"));
    }

    #[test]
    fn test_define_name_must_be_identifier() {
        let err = Parser::new(r#"start define echo -> B : echo "x" end end"#)
            .parse_program()
            .unwrap_err();
        assert!(err.to_string().contains("Expected identifier after 'define', found 'echo'"));
    }

    fn nested_defines(depth: usize) -> String {
        let mut source = String::from("start ");
        for _ in 0..depth {
            source.push_str("define A -> B : ");
        }
        source.push_str("echo \"x\" ");
        for _ in 0..depth {
            source.push_str("end ");
        }
        source.push_str("end");
        source
    }

    #[test]
    fn test_nesting_at_limit_is_accepted() {
        let program = parse(&nested_defines(MAX_NESTING));

        let defines = program
            .preorder()
            .filter(|n| n.kind == NodeKind::Define)
            .count();
        assert_eq!(defines, MAX_NESTING);
    }

    #[test]
    fn test_nesting_past_limit_is_rejected() {
        let err = Parser::new(&nested_defines(MAX_NESTING + 1))
            .parse_program()
            .unwrap_err();

        match err {
            ParseError::NestingTooDeep { limit, location } => {
                assert_eq!(limit, MAX_NESTING);
                assert_eq!(location.line, 1);
            }
            other => panic!("Expected nesting error, got {other:?}"),
        }
    }

    #[test]
    fn test_unclosed_define() {
        let err = Parser::new(r#"start define A -> B : echo "x" end"#)
            .parse_program()
            .unwrap_err();
        assert!(err.to_string().contains("Expected 'end' to close program, found end of file"));
    }
}
