//! Column and table descriptors handed to the dialect by schema builders.
//!
//! Descriptors are immutable inputs: the dialect derives type strings and
//! ordering keys from them but never changes them.
//!
//! # Example
//!
//! ```
//! use msorm::schema::{ColumnDescriptor, DataType, TableSchema};
//!
//! let users = TableSchema::new("users")
//!     .field(ColumnDescriptor::new("id", DataType::Int).size(64).primary_key().auto_increment())
//!     .field(ColumnDescriptor::new("email", DataType::String).unique());
//!
//! assert_eq!(users.prioritized_primary_field().map(|f| f.name.as_str()), Some("id"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical data kind of a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Bool,
    Int,
    Uint,
    Float,
    String,
    Time,
    Bytes,
    /// Engine-specific type name, emitted verbatim.
    Custom(String),
}

impl DataType {
    /// Logical kind name (`custom` types report their raw name).
    pub fn as_str(&self) -> &str {
        match self {
            DataType::Bool => "bool",
            DataType::Int => "int",
            DataType::Uint => "uint",
            DataType::Float => "float",
            DataType::String => "string",
            DataType::Time => "time",
            DataType::Bytes => "bytes",
            DataType::Custom(name) => name,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, DataType::Int | DataType::Uint)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single column as declared by the schema layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Database column name.
    pub name: String,
    pub data_type: DataType,
    /// Bit width for numerics, character count for strings. `0` means unspecified.
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub auto_increment: bool,
    #[serde(default)]
    pub indexed: bool,
    #[serde(default)]
    pub unique: bool,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            size: 0,
            primary_key: false,
            auto_increment: false,
            indexed: false,
            unique: false,
        }
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Whether the column participates in an index (including unique constraints).
    pub fn has_index(&self) -> bool {
        self.indexed || self.unique
    }
}

/// Table metadata bound to a statement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableSchema {
    pub table: String,
    #[serde(default)]
    pub fields: Vec<ColumnDescriptor>,
}

impl TableSchema {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: ColumnDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Look up a field by column name.
    pub fn field_by_name(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn primary_fields(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.fields.iter().filter(|f| f.primary_key)
    }

    /// The primary key used for implicit ordering.
    ///
    /// - exactly one primary-key field: that field
    /// - composite key: the key part named `id`, if any
    /// - otherwise `None`
    pub fn prioritized_primary_field(&self) -> Option<&ColumnDescriptor> {
        let mut primaries = self.primary_fields();
        let first = primaries.next()?;
        if primaries.next().is_none() {
            return Some(first);
        }
        self.primary_fields().find(|f| f.name == "id")
    }
}
