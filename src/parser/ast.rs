//! AST node types for a parsed schema definition.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The root of a parsed schema file.
///
/// Declarations keep their source order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Schema {
    pub replication_factor: i64,
    pub declarations: Vec<Declaration>,
}

/// One `CREATE ...;` statement.
///
/// A transaction table carries the same payload as a plain table; the
/// distinction is the tag alone.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Declaration {
    Namespace(Namespace),
    Table(Table),
    TransactionTable(Table),
}

/// A namespace declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Namespace {
    pub name: String,
}

/// A table declaration: `namespace.name` plus its column list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    pub namespace: String,
    pub name: String,
    pub columns: Vec<Column>,
}

/// A single column definition within a table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Column {
    pub name: String,
    pub ty: ColumnType,
    pub key: Option<KeyKind>,
}

/// Storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColumnType {
    Bigint,
    Blob,
    Boolean,
    Double,
    Float,
    Int,
    Text,
}

/// Key annotation on a column, passed through unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeyKind {
    Partition,
    Clustering,
}
