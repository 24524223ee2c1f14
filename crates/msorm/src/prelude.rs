//! Convenient imports for typical `msorm` usage.
//!
//! ```ignore
//! use msorm::prelude::*;
//! ```

pub use crate::{
    Clause, ClauseKeyword, ColumnDescriptor, DataType, Dialect, DialectConfig, Executor, Limit,
    OrmError, OrmResult, SqlServerDialect, Statement, StatementContext, TableSchema, Value,
};
pub use crate::{nested_transaction, savepoint};
