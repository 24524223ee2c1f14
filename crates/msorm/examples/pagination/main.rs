//! Example rendering paginated SELECTs and DDL column types.
//!
//! Run with:
//!   cargo run --example pagination -p msorm

use msorm::schema::{ColumnDescriptor, DataType, TableSchema};
use msorm::{ClauseKeyword, Dialect, Limit, SqlServerDialect, Statement};

fn main() {
    let dialect = SqlServerDialect::detached();
    let products = TableSchema::new("products")
        .field(ColumnDescriptor::new("id", DataType::Int).size(64).primary_key().auto_increment())
        .field(ColumnDescriptor::new("sku", DataType::String).unique())
        .field(ColumnDescriptor::new("name", DataType::String).size(200))
        .field(ColumnDescriptor::new("price", DataType::Float))
        .field(ColumnDescriptor::new("updated_at", DataType::Time));

    // ── DDL column types ─────────────────────────────────────────────────────
    println!("=== Column types ===");
    for field in &products.fields {
        println!("  {} {}", dialect.quote(&field.name), dialect.data_type_of(field));
    }
    println!(
        "  indexes after table: {}",
        dialect.migrator_config().create_index_after_create_table
    );

    // ── Pages ordered by primary key ─────────────────────────────────────────
    println!("\n=== Pages by primary key ===");
    for page in 1..=3 {
        let mut stmt = Statement::new().with_schema(products.clone());
        stmt.push_str("SELECT * FROM ");
        stmt.write_quoted(&dialect, "dbo.products");
        stmt.add_clause(&dialect, Limit::page(page, 20));
        println!("  page {page}: {}", stmt.sql());
    }

    // ── Explicit ordering ────────────────────────────────────────────────────
    println!("\n=== Explicit ORDER BY ===");
    let mut stmt = Statement::new().with_schema(products.clone());
    stmt.push_str("SELECT * FROM ");
    stmt.write_quoted(&dialect, "dbo.products");
    stmt.push_clause_sql(ClauseKeyword::Where, "\"price\" > ");
    stmt.push_bind(&dialect, 9.5_f64);
    stmt.push_clause_sql(ClauseKeyword::OrderBy, "\"price\" DESC");
    stmt.add_clause(&dialect, Limit::rows(5));
    println!("  sql:     {}", stmt.sql());
    println!("  explain: {}", stmt.explain(&dialect));

    // ── No schema ────────────────────────────────────────────────────────────
    println!("\n=== Without a schema ===");
    let mut stmt = Statement::new();
    stmt.push_str("SELECT name FROM sys.tables");
    stmt.add_clause(&dialect, Limit::skip(10));
    println!("  {}", stmt.sql());
}
