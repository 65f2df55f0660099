//! Lexer (tokenizer) for Cedar source code
//!
//! Converts raw source text into [`Token`]s, one at a time, on demand of the
//! parser. The lexer never fails: a character that matches no rule comes back
//! as a [`TokenKind::Unrecognized`] token and the parser rejects it.
//!
//! Most keywords are reserved for later grammar extensions and only `start`,
//! `end`, `define` and `echo` are used by the parser today.

use super::ast::SourceLocation;
use crate::options::QuotePolicy;
use std::fmt;

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // Keywords
    Start,
    End,
    Define,
    Structure,
    Inherit,
    Branch,
    Proof,
    Truth,
    Texture,
    Route,
    Channel,
    Linker,
    Modifier,
    Repeat,
    Until,
    Echo,
    Await,
    Emit,
    Within,
    Begin,
    Halt,

    // Operators and punctuation
    Arrow,  // ->
    Colon,  // :
    Range,  // ..
    Plus,   // +
    Minus,  // -
    Star,   // *
    Slash,  // /
    Assign, // =
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,

    // Literals
    Str(String),
    Number(u64),
    Ident(String),

    /// Text matching no rule: a single character, or a digit run too large
    /// for an integer literal.
    Unrecognized(String),

    Eof,
}

impl TokenKind {
    fn keyword(word: &str) -> Option<TokenKind> {
        let kind = match word {
            "start" => TokenKind::Start,
            "end" => TokenKind::End,
            "define" => TokenKind::Define,
            "structure" => TokenKind::Structure,
            "inherit" => TokenKind::Inherit,
            "branch" => TokenKind::Branch,
            "proof" => TokenKind::Proof,
            "truth" => TokenKind::Truth,
            "texture" => TokenKind::Texture,
            "route" => TokenKind::Route,
            "channel" => TokenKind::Channel,
            "linker" => TokenKind::Linker,
            "modifier" => TokenKind::Modifier,
            "repeat" => TokenKind::Repeat,
            "until" => TokenKind::Until,
            "echo" => TokenKind::Echo,
            "await" => TokenKind::Await,
            "emit" => TokenKind::Emit,
            "within" => TokenKind::Within,
            "begin" => TokenKind::Begin,
            "halt" => TokenKind::Halt,
            _ => return None,
        };
        Some(kind)
    }

    fn keyword_text(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Start => "start",
            TokenKind::End => "end",
            TokenKind::Define => "define",
            TokenKind::Structure => "structure",
            TokenKind::Inherit => "inherit",
            TokenKind::Branch => "branch",
            TokenKind::Proof => "proof",
            TokenKind::Truth => "truth",
            TokenKind::Texture => "texture",
            TokenKind::Route => "route",
            TokenKind::Channel => "channel",
            TokenKind::Linker => "linker",
            TokenKind::Modifier => "modifier",
            TokenKind::Repeat => "repeat",
            TokenKind::Until => "until",
            TokenKind::Echo => "echo",
            TokenKind::Await => "await",
            TokenKind::Emit => "emit",
            TokenKind::Within => "within",
            TokenKind::Begin => "begin",
            TokenKind::Halt => "halt",
            _ => return None,
        };
        Some(text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Arrow => write!(f, "'->'"),
            TokenKind::Colon => write!(f, "':'"),
            TokenKind::Range => write!(f, "'..'"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::Assign => write!(f, "'='"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Str(s) => write!(f, "string literal \"{}\"", s),
            TokenKind::Number(n) => write!(f, "number {}", n),
            TokenKind::Ident(s) => write!(f, "identifier '{}'", s),
            TokenKind::Unrecognized(s) => write!(f, "unrecognized input '{}'", s),
            TokenKind::Eof => write!(f, "end of file"),
            keyword => write!(f, "'{}'", keyword.keyword_text().unwrap_or_default()),
        }
    }
}

/// A classified lexical unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text the token was matched from (empty for `Eof`).
    pub lexeme: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Pull-based lexer for Cedar source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    quotes: QuotePolicy,
    finished: bool,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self::with_quotes(input, QuotePolicy::default())
    }

    pub fn with_quotes(input: &str, quotes: QuotePolicy) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            quotes,
            finished: false,
        }
    }

    /// Produce the next token. Once the input is exhausted every call
    /// returns an `Eof` token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let loc = self.current_location();
        let start = self.position;
        let Some(ch) = self.advance() else {
            return Token {
                kind: TokenKind::Eof,
                lexeme: String::new(),
                location: loc,
            };
        };

        let kind = match ch {
            '"' => self.string_literal(),
            '0'..='9' => self.number_literal(ch),
            'a'..='z' | 'A'..='Z' | '_' => self.identifier_or_keyword(ch),
            '-' => {
                if self.peek() == Some('>') {
                    self.advance();
                    TokenKind::Arrow
                } else {
                    TokenKind::Minus
                }
            }
            '.' => {
                if self.peek() == Some('.') {
                    self.advance();
                    TokenKind::Range
                } else {
                    TokenKind::Unrecognized(ch.to_string())
                }
            }
            ':' => TokenKind::Colon,
            '+' => TokenKind::Plus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '=' => TokenKind::Assign,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ',' => TokenKind::Comma,
            _ => TokenKind::Unrecognized(ch.to_string()),
        };

        Token {
            kind,
            lexeme: self.input[start..self.position].iter().collect(),
            location: loc,
        }
    }

    /// Tokenize the remaining input, ending with an `Eof` token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Lex a string literal; the opening quote is already consumed.
    ///
    /// Without a closing quote the `"` alone is unrecognized and lexing
    /// resumes right after it.
    fn string_literal(&mut self) -> TokenKind {
        let open = self.position - 1;
        let Some(close) = self.closing_quote() else {
            return TokenKind::Unrecognized("\"".to_string());
        };

        let mut decoded = String::new();
        while self.position < close {
            let ch = self.advance().unwrap_or('\0');
            if ch == '\\' {
                let escaped = self.advance().unwrap_or('\\');
                decoded.push(match escaped {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    '0' => '\0',
                    other => other,
                });
            } else {
                decoded.push(ch);
            }
        }
        self.advance(); // consume closing quote

        match self.quotes {
            QuotePolicy::Strip => TokenKind::Str(decoded),
            QuotePolicy::Keep => TokenKind::Str(self.input[open..=close].iter().collect()),
        }
    }

    /// Index of the quote closing the literal that starts at `position`,
    /// honouring backslash escapes. A backslash cannot escape a line break.
    fn closing_quote(&self) -> Option<usize> {
        let mut i = self.position;
        while i < self.input.len() {
            match self.input[i] {
                '"' => return Some(i),
                '\\' if self.input.get(i + 1) == Some(&'\n') => return None,
                '\\' => i += 2,
                _ => i += 1,
            }
        }
        None
    }

    /// Lex an unsigned integer literal
    fn number_literal(&mut self, first_digit: char) -> TokenKind {
        let mut digits = String::new();
        digits.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match digits.parse::<u64>() {
            Ok(value) => TokenKind::Number(value),
            Err(_) => TokenKind::Unrecognized(digits),
        }
    }

    /// Lex identifier or keyword
    fn identifier_or_keyword(&mut self, first_char: char) -> TokenKind {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        TokenKind::keyword(&ident).unwrap_or(TokenKind::Ident(ident))
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\r' | '\n') = self.peek() {
            self.advance();
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// Yields every token up to, but not including, `Eof`.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
            return None;
        }
        Some(token)
    }
}
