pub mod ast;
pub mod grammar;
pub mod lexer;

use crate::error::SchemaError;
use ast::Schema;

/// Parse schema definition text into a `Schema`.
///
/// This is the main entry point for the parser module.
pub fn parse(input: &str) -> Result<Schema, SchemaError> {
    log::debug!("parsing {} bytes of schema text", input.len());
    let schema = grammar::parse_schema(input)?;
    log::debug!("parsed {} declarations", schema.declarations.len());
    Ok(schema)
}
