//! The SQL Server dialect and the capability trait builders consume.
//!
//! A builder is handed a [`Dialect`] (usually `&SqlServerDialect<C>`) and calls it at
//! its extension points:
//!
//! | builder step                  | dialect call                      |
//! |-------------------------------|-----------------------------------|
//! | identifier output             | [`Dialect::quote_to`]             |
//! | DDL column type               | [`Dialect::data_type_of`]         |
//! | DDL column default            | [`Dialect::default_value_of`]     |
//! | clause at an overridden slot  | [`Dialect::render_clause`]        |
//! | each bound parameter          | [`Dialect::bind_var_to`]          |
//! | migrator setup                | [`Dialect::migrator_config`]      |
//! | SQL logging                   | [`Dialect::explain`]              |
//!
//! Savepoints need an executor and are inherent async methods on [`SqlServerDialect`].
//!
//! # Example
//!
//! ```
//! use msorm::{Dialect, SqlServerDialect};
//! use msorm::schema::{ColumnDescriptor, DataType};
//!
//! let dialect = SqlServerDialect::detached();
//! let id = ColumnDescriptor::new("id", DataType::Int).size(64).primary_key().auto_increment();
//!
//! assert_eq!(dialect.name(), "sqlserver");
//! assert_eq!(dialect.data_type_of(&id), "bigint IDENTITY(1,1)");
//! assert_eq!(dialect.quote("dbo.users"), r#""dbo"."users""#);
//! ```

mod data_type;

pub use data_type::{MAX_NVARCHAR_SIZE, data_type_of};

use crate::bind;
use crate::clause::{self, CLAUSE_KEYWORDS, Clause, ClauseKeyword};
use crate::config::DialectConfig;
use crate::error::OrmResult;
use crate::explain;
use crate::ident::{self, Ident};
use crate::migrate::{MigratorConfig, SQL_SERVER_MIGRATOR};
use crate::schema::ColumnDescriptor;
use crate::statement::StatementContext;
use crate::transaction::{self, Executor};
use crate::value::{SqlExpr, Value};

/// Extension points a statement or schema builder calls into.
pub trait Dialect {
    /// Dialect name.
    fn name(&self) -> &'static str;

    /// Write a quoted identifier into `out`.
    fn quote_to(&self, out: &mut String, name: &str);

    /// Quote an identifier.
    fn quote(&self, name: &str) -> String {
        let mut out = String::with_capacity(name.len() + 2);
        self.quote_to(&mut out, name);
        out
    }

    /// Column type for DDL.
    fn data_type_of(&self, field: &ColumnDescriptor) -> String;

    /// Default value expression for DDL.
    fn default_value_of(&self, field: &ColumnDescriptor) -> SqlExpr;

    /// Clause keywords this dialect renders itself.
    fn clause_keywords(&self) -> &'static [ClauseKeyword];

    /// Render a clause at its keyword slot.
    fn render_clause(&self, clause: &Clause, out: &mut String, ctx: &dyn StatementContext);

    /// Write the placeholder for one bound value.
    fn bind_var_to(&self, out: &mut String, ctx: &dyn StatementContext, value: &Value);

    /// Migrator preferences.
    fn migrator_config(&self) -> MigratorConfig;

    /// Inline `vars` into `sql` for logging.
    fn explain(&self, sql: &str, vars: &[Value]) -> String;

    /// Everything a builder needs to know at initialization time.
    fn registration(&self) -> Registration {
        Registration {
            name: self.name(),
            clause_keywords: self.clause_keywords(),
            migrator: self.migrator_config(),
        }
    }
}

/// What a dialect contributes to a builder at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    pub name: &'static str,
    /// Clause slots whose default rendering is replaced by [`Dialect::render_clause`].
    pub clause_keywords: &'static [ClauseKeyword],
    pub migrator: MigratorConfig,
}

impl Registration {
    /// Whether the builder should route `keyword` to the dialect.
    pub fn overrides(&self, keyword: ClauseKeyword) -> bool {
        self.clause_keywords.contains(&keyword)
    }
}

/// Microsoft SQL Server dialect.
///
/// Holds the connection resource the builder runs on (never touched by the dialect)
/// and its configuration. Stateless per call; share freely across threads.
#[derive(Debug, Clone)]
pub struct SqlServerDialect<C = ()> {
    conn: C,
    config: DialectConfig,
}

impl SqlServerDialect<()> {
    /// A dialect without a connection handle, for pure SQL generation.
    pub fn detached() -> Self {
        Self::new(())
    }
}

impl<C> SqlServerDialect<C> {
    /// Dialect over `conn` with the default (permissive) configuration.
    pub fn new(conn: C) -> Self {
        Self::with_config(conn, DialectConfig::default())
    }

    pub fn with_config(conn: C, config: DialectConfig) -> Self {
        Self { conn, config }
    }

    /// The connection resource handed in at construction.
    pub fn conn(&self) -> &C {
        &self.conn
    }

    pub fn config(&self) -> &DialectConfig {
        &self.config
    }

    /// Quote an identifier, rejecting unsafe names when strict identifiers are on.
    pub fn quote_checked(&self, name: &str) -> OrmResult<String> {
        if self.config.strict_identifiers {
            Ok(Ident::parse_strict(name)?.to_sql())
        } else {
            Ok(ident::quote(name))
        }
    }

    /// `SAVE TRANSACTION <name>` on `tx`.
    ///
    /// Driver errors are returned unchanged. In strict mode an invalid name fails
    /// with [`OrmError::Validation`](crate::OrmError::Validation) before anything is executed.
    pub async fn savepoint<E: Executor>(&self, tx: &E, name: &str) -> OrmResult<()> {
        self.check_savepoint_name(name)?;
        transaction::save_transaction(tx, name).await
    }

    /// `ROLLBACK TRANSACTION <name>` on `tx`.
    pub async fn rollback_to<E: Executor>(&self, tx: &E, name: &str) -> OrmResult<()> {
        self.check_savepoint_name(name)?;
        transaction::rollback_transaction_to(tx, name).await
    }

    fn check_savepoint_name(&self, name: &str) -> OrmResult<()> {
        if self.config.strict_identifiers {
            ident::validate_savepoint_name(name)?;
        }
        Ok(())
    }
}

impl<C> Dialect for SqlServerDialect<C> {
    fn name(&self) -> &'static str {
        "sqlserver"
    }

    fn quote_to(&self, out: &mut String, name: &str) {
        ident::quote_to(out, name);
    }

    fn data_type_of(&self, field: &ColumnDescriptor) -> String {
        data_type_of(field, self.config.indexed_string_size)
    }

    fn default_value_of(&self, _field: &ColumnDescriptor) -> SqlExpr {
        SqlExpr::null()
    }

    fn clause_keywords(&self) -> &'static [ClauseKeyword] {
        CLAUSE_KEYWORDS
    }

    fn render_clause(&self, clause: &Clause, out: &mut String, ctx: &dyn StatementContext) {
        clause::render_clause(clause, out, ctx);
    }

    fn bind_var_to(&self, out: &mut String, ctx: &dyn StatementContext, value: &Value) {
        bind::bind_var_to(out, ctx, value);
    }

    fn migrator_config(&self) -> MigratorConfig {
        SQL_SERVER_MIGRATOR
    }

    fn explain(&self, sql: &str, vars: &[Value]) -> String {
        explain::explain(sql, vars)
    }
}

#[cfg(test)]
mod tests;
