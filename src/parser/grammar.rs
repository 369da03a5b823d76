use super::ast::*;
use super::lexer::{Lexer, Located, Pos, Token};
use crate::error::{ParseError, SchemaError};

const TYPE_KEYWORDS: &[&str] = &[
    "BIGINT", "BLOB", "BOOLEAN", "DOUBLE", "FLOAT", "INT", "TEXT",
];

/// Parse schema definition text into a `Schema`.
///
/// ```text
/// Schema      := "REPLICATION" "FACTOR" Int ";" { Declaration }
/// Declaration := "CREATE" ( "NAMESPACE" Namespace ";"
///                          | "TRANSACTION" "TABLE" Table
///                          | "TABLE" Table )
/// Namespace   := Ident
/// Table       := Ident "." Ident "(" Column { "," Column } ")" ";"
/// Column      := Ident Type [ Key ]
/// ```
pub fn parse_schema(input: &str) -> Result<Schema, SchemaError> {
    let mut lexer = Lexer::new(input);

    expect_token(&mut lexer, Token::Replication, "schema")?;
    expect_token(&mut lexer, Token::Factor, "schema")?;
    let replication_factor = expect_number(&mut lexer, "schema")?;
    expect_token(&mut lexer, Token::Semicolon, "schema")?;

    let mut declarations = Vec::new();
    loop {
        let tok = lexer.peek_token()?;
        match tok.token {
            Token::Eof => break,
            Token::Create => {
                declarations.push(parse_declaration(&mut lexer)?);
            }
            other => {
                return Err(unexpected("declaration", &["CREATE"], other, tok.pos));
            }
        }
    }

    Ok(Schema {
        replication_factor,
        declarations,
    })
}

fn parse_declaration(lexer: &mut Lexer) -> Result<Declaration, SchemaError> {
    expect_token(lexer, Token::Create, "declaration")?;

    // One token of lookahead selects the alternative; the TRANSACTION TABLE
    // branch is checked before bare TABLE.
    let Located { token, pos } = lexer.peek_token()?;
    match token {
        Token::Namespace => {
            lexer.next_token()?;
            let name = expect_ident(lexer, "namespace")?;
            expect_token(lexer, Token::Semicolon, "namespace")?;
            Ok(Declaration::Namespace(Namespace { name }))
        }
        Token::Transaction => {
            lexer.next_token()?;
            expect_token(lexer, Token::Table, "declaration")?;
            Ok(Declaration::TransactionTable(parse_table(lexer)?))
        }
        Token::Table => {
            lexer.next_token()?;
            Ok(Declaration::Table(parse_table(lexer)?))
        }
        other => Err(unexpected(
            "declaration",
            &["NAMESPACE", "TRANSACTION", "TABLE"],
            other,
            pos,
        )),
    }
}

fn parse_table(lexer: &mut Lexer) -> Result<Table, SchemaError> {
    let namespace = expect_ident(lexer, "table")?;
    expect_token(lexer, Token::Dot, "table")?;
    let name = expect_ident(lexer, "table")?;
    expect_token(lexer, Token::LParen, "table")?;

    // At least one column; no trailing comma.
    let mut columns = vec![parse_column(lexer)?];
    while lexer.peek_token()?.token == Token::Comma {
        lexer.next_token()?;
        columns.push(parse_column(lexer)?);
    }

    expect_token(lexer, Token::RParen, "table")?;
    expect_token(lexer, Token::Semicolon, "table")?;

    Ok(Table {
        namespace,
        name,
        columns,
    })
}

fn parse_column(lexer: &mut Lexer) -> Result<Column, SchemaError> {
    let name = expect_ident(lexer, "column")?;

    let Located { token, pos } = lexer.next_token()?;
    let ty = match token {
        Token::Bigint => ColumnType::Bigint,
        Token::Blob => ColumnType::Blob,
        Token::Boolean => ColumnType::Boolean,
        Token::Double => ColumnType::Double,
        Token::Float => ColumnType::Float,
        Token::Int => ColumnType::Int,
        Token::Text => ColumnType::Text,
        other => return Err(unexpected("column", TYPE_KEYWORDS, other, pos)),
    };

    // The key annotation is optional; any other token is left unconsumed.
    let key = match lexer.peek_token()?.token {
        Token::PartitionKey => {
            lexer.next_token()?;
            Some(KeyKind::Partition)
        }
        Token::ClusteringKey => {
            lexer.next_token()?;
            Some(KeyKind::Clustering)
        }
        _ => None,
    };

    Ok(Column { name, ty, key })
}

// Helper functions

fn unexpected(
    rule: &'static str,
    expected: &[&'static str],
    found: Token,
    position: Pos,
) -> SchemaError {
    SchemaError::Parse(ParseError::UnexpectedToken {
        rule,
        expected: expected.to_vec(),
        found,
        position,
    })
}

fn expect_token(lexer: &mut Lexer, expected: Token, rule: &'static str) -> Result<(), SchemaError> {
    let Located { token, pos } = lexer.next_token()?;
    if token == expected {
        Ok(())
    } else {
        Err(unexpected(rule, &[expected.describe()], token, pos))
    }
}

fn expect_ident(lexer: &mut Lexer, rule: &'static str) -> Result<String, SchemaError> {
    let Located { token, pos } = lexer.next_token()?;
    match token {
        Token::Ident(name) => Ok(name),
        other => Err(unexpected(rule, &["identifier"], other, pos)),
    }
}

fn expect_number(lexer: &mut Lexer, rule: &'static str) -> Result<i64, SchemaError> {
    let Located { token, pos } = lexer.next_token()?;
    match token {
        Token::Number(value) => Ok(value),
        other => Err(unexpected(rule, &["integer"], other, pos)),
    }
}
