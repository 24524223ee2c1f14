//! Example demonstrating savepoints and nested transactions.
//!
//! The executor here only prints statements; plug in a real driver's
//! transaction handle to run against SQL Server.
//!
//! Run with:
//!   cargo run --example savepoint -p msorm

use msorm::{DialectConfig, Executor, OrmError, OrmResult, SqlServerDialect};
use std::sync::atomic::{AtomicU64, Ordering};

/// Prints every statement and counts them.
#[derive(Default)]
struct PrintingTx {
    executed: AtomicU64,
}

impl Executor for PrintingTx {
    async fn execute(&self, sql: &str) -> OrmResult<u64> {
        let n = self.executed.fetch_add(1, Ordering::Relaxed) + 1;
        println!("  [{n}] {sql}");
        Ok(1)
    }
}

async fn credit(tx: &PrintingTx, name: &str, amount: i64) -> OrmResult<()> {
    if amount < 0 {
        return Err(OrmError::validation(format!("negative credit for {name}")));
    }
    tx.execute(&format!("UPDATE accounts SET balance = balance + {amount} WHERE name = '{name}'"))
        .await?;
    Ok(())
}

#[tokio::main]
async fn main() -> OrmResult<()> {
    let dialect = SqlServerDialect::with_config((), DialectConfig::new().strict());
    let tx = PrintingTx::default();

    // ═══════════════════════════════════════════════════════════════════════════
    // Example A: Explicit savepoint API
    // ═══════════════════════════════════════════════════════════════════════════
    println!("=== Example A: Explicit Savepoint API ===");
    dialect.savepoint(&tx, "credit_bob").await?;
    credit(&tx, "Bob", 200).await?;
    dialect.rollback_to(&tx, "credit_bob").await?;

    // ═══════════════════════════════════════════════════════════════════════════
    // Example B: savepoint! macro, failing body is rolled back
    // ═══════════════════════════════════════════════════════════════════════════
    println!("\n=== Example B: savepoint! ===");
    let result = msorm::savepoint!(dialect, tx, "bonus", {
        credit(&tx, "Alice", 50).await?;
        credit(&tx, "Carol", -10).await?;
        Ok::<(), OrmError>(())
    });
    println!("  result: {result:?}");

    // ═══════════════════════════════════════════════════════════════════════════
    // Example C: nested_transaction! with an anonymous savepoint
    // ═══════════════════════════════════════════════════════════════════════════
    println!("\n=== Example C: nested_transaction! ===");
    msorm::nested_transaction!(dialect, tx, {
        credit(&tx, "Dave", 75).await?;
        Ok::<(), OrmError>(())
    })?;

    // ═══════════════════════════════════════════════════════════════════════════
    // Example D: strict mode rejects unsafe names
    // ═══════════════════════════════════════════════════════════════════════════
    println!("\n=== Example D: strict names ===");
    match dialect.savepoint(&tx, "x; DROP TABLE accounts").await {
        Err(e) => println!("  rejected: {e}"),
        Ok(()) => println!("  accepted"),
    }

    println!("\nstatements executed: {}", tx.executed.load(Ordering::Relaxed));
    Ok(())
}
