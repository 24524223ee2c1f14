//! Tests for the SQL Server dialect surface.

use super::*;
use crate::OrmError;
use crate::clause::Limit;
use crate::schema::{DataType, TableSchema};
use crate::statement::StatementState;
use std::sync::Mutex;

#[derive(Default)]
struct Recorder {
    statements: Mutex<Vec<String>>,
    fail_on: Option<&'static str>,
}

impl Recorder {
    fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }
}

impl Executor for Recorder {
    async fn execute(&self, sql: &str) -> OrmResult<u64> {
        self.statements.lock().unwrap().push(sql.to_string());
        match self.fail_on {
            Some(prefix) if sql.starts_with(prefix) => Err(OrmError::execution(format!(
                "Cannot roll back {}. No transaction or savepoint of that name was found.",
                &sql[prefix.len()..]
            ))),
            _ => Ok(0),
        }
    }
}

#[test]
fn name_and_registration() {
    let dialect = SqlServerDialect::detached();
    let reg = dialect.registration();
    assert_eq!(reg.name, "sqlserver");
    assert_eq!(reg.clause_keywords, &[ClauseKeyword::Limit]);
    assert!(reg.overrides(ClauseKeyword::Limit));
    assert!(!reg.overrides(ClauseKeyword::OrderBy));
    assert!(reg.migrator.create_index_after_create_table);
}

#[test]
fn default_value_is_null_for_every_field() {
    let dialect = SqlServerDialect::detached();
    for field in [
        ColumnDescriptor::new("id", DataType::Int).primary_key().auto_increment(),
        ColumnDescriptor::new("name", DataType::String).size(40),
        ColumnDescriptor::new("at", DataType::Time),
    ] {
        assert_eq!(dialect.default_value_of(&field), SqlExpr::null());
    }
}

#[test]
fn data_type_uses_configured_key_size() {
    let key = ColumnDescriptor::new("code", DataType::String).primary_key();
    assert_eq!(SqlServerDialect::detached().data_type_of(&key), "nvarchar(256)");

    let dialect = SqlServerDialect::with_config((), DialectConfig::new().with_indexed_string_size(450));
    assert_eq!(dialect.data_type_of(&key), "nvarchar(450)");
}

#[test]
fn usable_as_trait_object() {
    let dialect = SqlServerDialect::detached();
    let dyn_dialect: &dyn Dialect = &dialect;

    let mut out = String::new();
    dyn_dialect.quote_to(&mut out, "a.b");
    out.push(' ');
    dyn_dialect.bind_var_to(&mut out, &StatementState::new(), &Value::Int(1));
    out.push(' ');
    dyn_dialect.render_clause(&Clause::Limit(Limit::skip(5)), &mut out, &StatementState::new());

    assert_eq!(out, r#""a"."b" ? ORDER BY (SELECT NULL) OFFSET 5 ROWS"#);
}

#[test]
fn render_clause_with_schema() {
    let dialect = SqlServerDialect::detached();
    let ctx = StatementState::new().with_schema(
        TableSchema::new("users").field(ColumnDescriptor::new("user_id", DataType::Int).primary_key()),
    );
    let mut out = String::new();
    dialect.render_clause(&Limit::rows(10).into(), &mut out, &ctx);
    assert_eq!(out, r#"ORDER BY "user_id" OFFSET 0 ROW FETCH NEXT 10 ROWS ONLY"#);
}

#[test]
fn explain_through_dialect() {
    let dialect = SqlServerDialect::detached();
    assert_eq!(
        dialect.explain("SELECT * FROM \"t\" WHERE \"id\" = ?", &[Value::Int(3)]),
        "SELECT * FROM \"t\" WHERE \"id\" = 3"
    );
}

#[test]
fn quote_checked_modes() {
    let permissive = SqlServerDialect::detached();
    assert_eq!(permissive.quote_checked(r#"a"b"#).unwrap(), r#""a"b""#);

    let strict = SqlServerDialect::with_config((), DialectConfig::new().strict());
    assert_eq!(strict.quote_checked("dbo.users").unwrap(), r#""dbo"."users""#);
    assert!(strict.quote_checked(r#"a"b"#).unwrap_err().is_validation());
}

#[test]
fn conn_is_passed_through() {
    let dialect = SqlServerDialect::new(String::from("Server=localhost;Database=app"));
    assert_eq!(dialect.conn(), "Server=localhost;Database=app");
}

#[tokio::test]
async fn savepoint_then_rollback() {
    let dialect = SqlServerDialect::detached();
    let tx = Recorder::default();

    dialect.savepoint(&tx, "before_items").await.unwrap();
    dialect.rollback_to(&tx, "before_items").await.unwrap();

    assert_eq!(
        tx.statements(),
        vec!["SAVE TRANSACTION before_items", "ROLLBACK TRANSACTION before_items"]
    );
}

#[tokio::test]
async fn rollback_error_is_returned_unchanged() {
    let dialect = SqlServerDialect::detached();
    let tx = Recorder {
        fail_on: Some("ROLLBACK TRANSACTION "),
        ..Default::default()
    };

    dialect.savepoint(&tx, "sp").await.unwrap();
    let err = dialect.rollback_to(&tx, "missing").await.unwrap_err();
    assert!(err.is_execution());
    assert_eq!(
        err.execution_source().unwrap().to_string(),
        "Cannot roll back missing. No transaction or savepoint of that name was found."
    );
}

#[tokio::test]
async fn strict_mode_rejects_before_executing() {
    let dialect = SqlServerDialect::with_config((), DialectConfig::new().strict());
    let tx = Recorder::default();

    let err = dialect.savepoint(&tx, "sp; DROP TABLE users").await.unwrap_err();
    assert!(err.is_validation());
    let err = dialect.rollback_to(&tx, "").await.unwrap_err();
    assert!(err.is_validation());
    assert!(tx.statements().is_empty());

    dialect.savepoint(&tx, "ok_name").await.unwrap();
    assert_eq!(tx.statements(), vec!["SAVE TRANSACTION ok_name"]);
}

#[tokio::test]
async fn permissive_mode_passes_names_verbatim() {
    let dialect = SqlServerDialect::detached();
    let tx = Recorder::default();
    dialect.savepoint(&tx, "odd name").await.unwrap();
    assert_eq!(tx.statements(), vec!["SAVE TRANSACTION odd name"]);
}
