//! schemadl: parser for a declarative data-storage schema definition language.
//!
//! A schema file declares a global replication factor followed by namespace,
//! table, and transaction-table declarations, each table carrying an ordered
//! list of typed, optionally key-annotated columns. Parsing yields an
//! immutable [`Schema`] tree for downstream tooling; on the first lexical or
//! grammatical violation it returns a [`SchemaError`] instead.
//!
//! # Quick Start
//!
//! ```rust
//! use schemadl::{parse, Declaration};
//!
//! let schema = parse(
//!     "REPLICATION FACTOR 3;
//!      CREATE NAMESPACE analytics;
//!      CREATE TABLE analytics.events (
//!          id INT PARTITIONKEY,
//!          ts BIGINT CLUSTERINGKEY,
//!          payload BLOB
//!      );",
//! )
//! .unwrap();
//!
//! assert_eq!(schema.replication_factor, 3);
//! assert_eq!(schema.declarations.len(), 2);
//! assert!(matches!(schema.declarations[1], Declaration::Table(_)));
//! ```

pub mod error;
pub mod parser;

pub use error::{LexError, ParseError, SchemaError};
pub use parser::ast::{Column, ColumnType, Declaration, KeyKind, Namespace, Schema, Table};
pub use parser::lexer::{Pos, Token};
pub use parser::parse;
