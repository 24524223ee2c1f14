//! Per-statement build state shared between a builder and the dialect.
//!
//! The dialect only *reads* builder state through [`StatementContext`] and writes into
//! the SQL buffer it is given. [`Statement`] is a minimal concrete builder state that
//! keeps the buffer and the context in separate fields so both can be handed out at once.
//!
//! # Example
//!
//! ```
//! use msorm::{Limit, SqlServerDialect, Statement};
//! use msorm::clause::ClauseKeyword;
//!
//! let dialect = SqlServerDialect::detached();
//! let mut stmt = Statement::new();
//! stmt.push_str("SELECT * FROM ");
//! stmt.write_quoted(&dialect, "dbo.users");
//! stmt.push_clause_sql(ClauseKeyword::Where, "\"active\" = ");
//! stmt.push_bind(&dialect, true);
//! stmt.add_clause(&dialect, Limit::rows(10));
//!
//! assert_eq!(
//!     stmt.sql(),
//!     r#"SELECT * FROM "dbo"."users" WHERE "active" = ? ORDER BY (SELECT NULL) OFFSET 0 ROW FETCH NEXT 10 ROWS ONLY"#
//! );
//! ```

use crate::clause::{Clause, ClauseKeyword};
use crate::dialect::Dialect;
use crate::schema::TableSchema;
use crate::value::Value;
use std::collections::BTreeSet;

/// Read-only view of builder state consulted while rendering.
pub trait StatementContext {
    /// Whether the builder has already emitted a clause for `keyword`.
    fn has_clause(&self, keyword: ClauseKeyword) -> bool;

    /// Column name of the prioritized primary key, when a schema is bound.
    fn prioritized_primary_key(&self) -> Option<&str>;
}

/// Clause bookkeeping and bound schema for one statement.
#[derive(Debug, Clone, Default)]
pub struct StatementState {
    schema: Option<TableSchema>,
    clauses: BTreeSet<ClauseKeyword>,
}

impl StatementState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(mut self, schema: TableSchema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn schema(&self) -> Option<&TableSchema> {
        self.schema.as_ref()
    }

    /// Record that a clause for `keyword` has been emitted.
    pub fn mark_clause(&mut self, keyword: ClauseKeyword) {
        self.clauses.insert(keyword);
    }
}

impl StatementContext for StatementState {
    fn has_clause(&self, keyword: ClauseKeyword) -> bool {
        self.clauses.contains(&keyword)
    }

    fn prioritized_primary_key(&self) -> Option<&str> {
        self.schema
            .as_ref()?
            .prioritized_primary_field()
            .map(|f| f.name.as_str())
    }
}

/// SQL buffer, bound values and clause state of a statement under construction.
#[derive(Debug, Clone, Default)]
pub struct Statement {
    sql: String,
    vars: Vec<Value>,
    state: StatementState,
}

impl Statement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a table schema (enables primary-key ordering for pagination).
    pub fn with_schema(mut self, schema: TableSchema) -> Self {
        self.state = self.state.with_schema(schema);
        self
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn vars(&self) -> &[Value] {
        &self.vars
    }

    pub fn state(&self) -> &StatementState {
        &self.state
    }

    /// Push raw SQL text.
    pub fn push_str(&mut self, s: &str) {
        self.sql.push_str(s);
    }

    /// Push a space unless the buffer is empty or already ends with one.
    pub fn push_space(&mut self) {
        if !self.sql.is_empty() && !self.sql.ends_with(' ') {
            self.sql.push(' ');
        }
    }

    /// Push a quoted identifier.
    pub fn write_quoted<D: Dialect + ?Sized>(&mut self, dialect: &D, name: &str) {
        dialect.quote_to(&mut self.sql, name);
    }

    /// Push a clause the builder renders itself, recording its keyword.
    pub fn push_clause_sql(&mut self, keyword: ClauseKeyword, body: &str) {
        self.push_space();
        self.sql.push_str(keyword.as_str());
        self.sql.push(' ');
        self.sql.push_str(body);
        self.state.mark_clause(keyword);
    }

    /// Render a dialect-specific clause at the end of the buffer, recording its keyword.
    pub fn add_clause<D: Dialect + ?Sized>(&mut self, dialect: &D, clause: impl Into<Clause>) {
        let clause = clause.into();
        self.push_space();
        let Self { sql, state, .. } = self;
        dialect.render_clause(&clause, sql, &*state);
        state.mark_clause(clause.keyword());
    }

    /// Push a placeholder for `value` and record the value.
    pub fn push_bind<D: Dialect + ?Sized>(&mut self, dialect: &D, value: impl Into<Value>) {
        let value = value.into();
        dialect.bind_var_to(&mut self.sql, &self.state, &value);
        self.vars.push(value);
    }

    /// SQL with bound values inlined, for logs.
    pub fn explain<D: Dialect + ?Sized>(&self, dialect: &D) -> String {
        dialect.explain(&self.sql, &self.vars)
    }

    /// Consume the statement, returning SQL and values.
    pub fn finish(self) -> (String, Vec<Value>) {
        (self.sql, self.vars)
    }
}
