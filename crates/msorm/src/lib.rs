//! # msorm
//!
//! The SQL Server dialect layer for ORM query and schema builders.
//!
//! ## Features
//!
//! - **Identifier quoting**: dotted names become `"schema"."table"`
//! - **Column types**: descriptors map to T-SQL types (`bigint IDENTITY(1,1)`, `nvarchar(MAX)`, ...)
//! - **Pagination**: `LIMIT`/`OFFSET` rendered as `ORDER BY ... OFFSET n ROWS FETCH NEXT m ROWS ONLY`
//! - **Savepoints**: `SAVE TRANSACTION` / `ROLLBACK TRANSACTION`, plus block-scoped macros
//! - **Explain**: inline bound values into SQL for logging
//! - **Strict mode**: opt-in validation of identifiers and savepoint names
//!
//! ## Statements
//!
//! Builders route their extension points through a [`Dialect`]:
//!
//! ```
//! use msorm::{Limit, SqlServerDialect, Statement};
//! use msorm::schema::{ColumnDescriptor, DataType, TableSchema};
//!
//! let dialect = SqlServerDialect::detached();
//! let users = TableSchema::new("users")
//!     .field(ColumnDescriptor::new("id", DataType::Int).size(64).primary_key());
//!
//! let mut stmt = Statement::new().with_schema(users);
//! stmt.push_str("SELECT * FROM ");
//! stmt.write_quoted(&dialect, "dbo.users");
//! stmt.push_str(" WHERE ");
//! stmt.write_quoted(&dialect, "name");
//! stmt.push_str(" = ");
//! stmt.push_bind(&dialect, "alice");
//! stmt.add_clause(&dialect, Limit::new(10, 20));
//!
//! assert_eq!(
//!     stmt.sql(),
//!     r#"SELECT * FROM "dbo"."users" WHERE "name" = ? ORDER BY "id" OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY"#
//! );
//! assert_eq!(
//!     stmt.explain(&dialect),
//!     r#"SELECT * FROM "dbo"."users" WHERE "name" = 'alice' ORDER BY "id" OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY"#
//! );
//! ```
//!
//! ## Savepoints
//!
//! ```ignore
//! use msorm::{OrmError, SqlServerDialect};
//!
//! let dialect = SqlServerDialect::new(pool);
//! msorm::nested_transaction!(dialect, tx, {
//!     create_user_profile(&tx, &profile).await?;
//!     Ok::<(), OrmError>(())
//! })?;
//! ```

pub mod bind;
pub mod clause;
pub mod config;
pub mod dialect;
pub mod error;
pub mod explain;
pub mod ident;
pub mod migrate;
pub mod prelude;
pub mod schema;
pub mod statement;
pub mod transaction;
pub mod value;

pub use clause::{Clause, ClauseKeyword, Limit};
pub use config::DialectConfig;
pub use dialect::{Dialect, Registration, SqlServerDialect};
pub use error::{BoxError, OrmError, OrmResult};
pub use ident::{Ident, quote};
pub use migrate::MigratorConfig;
pub use schema::{ColumnDescriptor, DataType, TableSchema};
pub use statement::{Statement, StatementContext, StatementState};
pub use transaction::Executor;
pub use value::{SqlExpr, Value};

#[doc(hidden)]
pub use transaction::__next_savepoint_name;
