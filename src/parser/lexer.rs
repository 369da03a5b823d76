use std::fmt;

use crate::error::LexError;

/// A source position: 1-based line and column, 0-based byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pos {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Token types produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Replication,
    Factor,
    Create,
    Namespace,
    Table,
    Transaction,
    Bigint,
    Blob,
    Boolean,
    Double,
    Float,
    Int,
    Text,
    PartitionKey,
    ClusteringKey,
    /// An identifier (namespace, table, or column name)
    Ident(String),
    /// An integer literal (the replication factor)
    Number(i64),
    /// `;`
    Semicolon,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input
    Eof,
}

impl Token {
    /// Static description of the token kind, used in expected-token sets.
    pub fn describe(&self) -> &'static str {
        match self {
            Token::Replication => "REPLICATION",
            Token::Factor => "FACTOR",
            Token::Create => "CREATE",
            Token::Namespace => "NAMESPACE",
            Token::Table => "TABLE",
            Token::Transaction => "TRANSACTION",
            Token::Bigint => "BIGINT",
            Token::Blob => "BLOB",
            Token::Boolean => "BOOLEAN",
            Token::Double => "DOUBLE",
            Token::Float => "FLOAT",
            Token::Int => "INT",
            Token::Text => "TEXT",
            Token::PartitionKey => "PARTITIONKEY",
            Token::ClusteringKey => "CLUSTERINGKEY",
            Token::Ident(_) => "identifier",
            Token::Number(_) => "integer",
            Token::Semicolon => "';'",
            Token::Dot => "'.'",
            Token::Comma => "','",
            Token::LParen => "'('",
            Token::RParen => "')'",
            Token::Eof => "end of input",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(name) => write!(f, "identifier '{}'", name),
            Token::Number(value) => write!(f, "integer {}", value),
            other => f.write_str(other.describe()),
        }
    }
}

/// Keywords are case-sensitive and are matched before identifier fallback.
fn keyword(name: &str) -> Option<Token> {
    match name {
        "REPLICATION" => Some(Token::Replication),
        "FACTOR" => Some(Token::Factor),
        "CREATE" => Some(Token::Create),
        "NAMESPACE" => Some(Token::Namespace),
        "TABLE" => Some(Token::Table),
        "TRANSACTION" => Some(Token::Transaction),
        "BIGINT" => Some(Token::Bigint),
        "BLOB" => Some(Token::Blob),
        "BOOLEAN" => Some(Token::Boolean),
        "DOUBLE" => Some(Token::Double),
        "FLOAT" => Some(Token::Float),
        "INT" => Some(Token::Int),
        "TEXT" => Some(Token::Text),
        "PARTITIONKEY" => Some(Token::PartitionKey),
        "CLUSTERINGKEY" => Some(Token::ClusteringKey),
        _ => None,
    }
}

/// A token with its source location.
#[derive(Debug, Clone)]
pub struct Located {
    pub token: Token,
    pub pos: Pos,
}

/// Tokenizer for schema definition text.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn position(&self) -> Pos {
        Pos {
            line: self.line,
            column: self.column,
            offset: self.pos,
        }
    }

    fn peek_byte(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let b = self.peek_byte()?;
        self.pos += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(b)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek_byte() {
                Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n') => {
                    self.advance();
                }
                Some(b'#') => {
                    // Line comment: skip to end of line
                    while let Some(b) = self.advance() {
                        if b == b'\n' {
                            break;
                        }
                    }
                }
                _ => break,
            }
        }
    }

    /// Identifier rule: ASCII `[A-Za-z_][A-Za-z0-9_]*`.
    fn read_name(&mut self) -> String {
        let start = self.pos;
        while let Some(b) = self.peek_byte() {
            if b.is_ascii_alphanumeric() || b == b'_' {
                self.advance();
            } else {
                break;
            }
        }
        self.input[start..self.pos].to_string()
    }

    fn read_number(&mut self, pos: Pos) -> Result<i64, LexError> {
        let start = self.pos;
        while let Some(b) = self.peek_byte() {
            if b.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }
        let literal = &self.input[start..self.pos];
        literal.parse().map_err(|_| LexError::IntegerOverflow {
            literal: literal.to_string(),
            position: pos,
        })
    }

    /// Read the next token.
    pub fn next_token(&mut self) -> Result<Located, LexError> {
        self.skip_whitespace_and_comments();
        let pos = self.position();

        let token = match self.peek_byte() {
            None => Token::Eof,
            Some(b';') => {
                self.advance();
                Token::Semicolon
            }
            Some(b'.') => {
                self.advance();
                Token::Dot
            }
            Some(b',') => {
                self.advance();
                Token::Comma
            }
            Some(b'(') => {
                self.advance();
                Token::LParen
            }
            Some(b')') => {
                self.advance();
                Token::RParen
            }
            Some(b) if b.is_ascii_alphabetic() || b == b'_' => {
                let name = self.read_name();
                match keyword(&name) {
                    Some(tok) => tok,
                    None => Token::Ident(name),
                }
            }
            Some(b) if b.is_ascii_digit() => Token::Number(self.read_number(pos)?),
            Some(_) => {
                // self.pos is always a char boundary here
                let character = self.input[self.pos..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::UnexpectedChar {
                    character,
                    position: pos,
                });
            }
        };

        Ok(Located { token, pos })
    }

    /// Peek at the next token without consuming it.
    pub fn peek_token(&mut self) -> Result<Located, LexError> {
        let saved_pos = self.pos;
        let saved_line = self.line;
        let saved_column = self.column;
        let tok = self.next_token();
        self.pos = saved_pos;
        self.line = saved_line;
        self.column = saved_column;
        tok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        let mut lex = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let tok = lex.next_token().unwrap().token;
            let done = tok == Token::Eof;
            out.push(tok);
            if done {
                break;
            }
        }
        out
    }

    #[test]
    fn test_basic_tokens() {
        let mut lex = Lexer::new("REPLICATION FACTOR 3;");
        assert_eq!(lex.next_token().unwrap().token, Token::Replication);
        assert_eq!(lex.next_token().unwrap().token, Token::Factor);
        assert_eq!(lex.next_token().unwrap().token, Token::Number(3));
        assert_eq!(lex.next_token().unwrap().token, Token::Semicolon);
        assert_eq!(lex.next_token().unwrap().token, Token::Eof);
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            tokens("ns.tbl(a,b);"),
            vec![
                Token::Ident("ns".into()),
                Token::Dot,
                Token::Ident("tbl".into()),
                Token::LParen,
                Token::Ident("a".into()),
                Token::Comma,
                Token::Ident("b".into()),
                Token::RParen,
                Token::Semicolon,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        // Lowercase spellings fall back to identifiers
        assert_eq!(
            tokens("CREATE create Table TABLE"),
            vec![
                Token::Create,
                Token::Ident("create".into()),
                Token::Ident("Table".into()),
                Token::Table,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_identifier_char_class() {
        assert_eq!(
            tokens("_tbl1 a_b x9"),
            vec![
                Token::Ident("_tbl1".into()),
                Token::Ident("a_b".into()),
                Token::Ident("x9".into()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_comments() {
        let mut lex = Lexer::new("# leading comment\nCREATE # trailing\nNAMESPACE");
        assert_eq!(lex.next_token().unwrap().token, Token::Create);
        assert_eq!(lex.next_token().unwrap().token, Token::Namespace);
        assert_eq!(lex.next_token().unwrap().token, Token::Eof);
    }

    #[test]
    fn test_position_tracking() {
        let mut lex = Lexer::new("CREATE TABLE\nns");
        let t1 = lex.next_token().unwrap();
        assert_eq!(t1.pos, Pos { line: 1, column: 1, offset: 0 });
        let t2 = lex.next_token().unwrap();
        assert_eq!(t2.pos, Pos { line: 1, column: 8, offset: 7 });
        let t3 = lex.next_token().unwrap();
        assert_eq!(t3.pos, Pos { line: 2, column: 1, offset: 13 });
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut lex = Lexer::new("CREATE TABLE");
        assert_eq!(lex.peek_token().unwrap().token, Token::Create);
        assert_eq!(lex.next_token().unwrap().token, Token::Create);
        assert_eq!(lex.next_token().unwrap().token, Token::Table);
    }

    #[test]
    fn test_unexpected_char() {
        let mut lex = Lexer::new("CREATE @");
        lex.next_token().unwrap();
        let err = lex.next_token().unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedChar {
                character: '@',
                position: Pos { line: 1, column: 8, offset: 7 },
            }
        );
    }

    #[test]
    fn test_integer_overflow() {
        let mut lex = Lexer::new("99999999999999999999");
        let err = lex.next_token().unwrap_err();
        match err {
            LexError::IntegerOverflow { literal, .. } => {
                assert_eq!(literal, "99999999999999999999");
            }
            other => panic!("expected overflow error, got {:?}", other),
        }
    }
}
