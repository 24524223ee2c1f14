//! Savepoint statements and helpers.
//!
//! SQL Server savepoints are plain statements inside an open transaction:
//! `SAVE TRANSACTION name` marks a point, `ROLLBACK TRANSACTION name` undoes work
//! done after it. There is no `RELEASE`; a savepoint simply stops mattering when the
//! transaction commits. Transaction state is tracked by the driver, not here.
//!
//! For block-scoped usage, see [`savepoint!`](crate::savepoint) and
//! [`nested_transaction!`](crate::nested_transaction).
//!
//! # Example
//!
//! ```ignore
//! use msorm::{OrmError, SqlServerDialect};
//!
//! let dialect = SqlServerDialect::new(pool);
//! let result = msorm::savepoint!(dialect, tx, "notify", {
//!     send_notification(&tx, order_id).await?;
//!     Ok::<(), OrmError>(())
//! });
//! if let Err(e) = result {
//!     tracing::warn!("notification failed: {e}");
//! }
//! ```

use crate::error::OrmResult;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for anonymous savepoint naming.
static SAVEPOINT_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Statement execution provided by the driver layer.
///
/// Implementations run `sql` on the active transaction and return the affected row
/// count. Driver failures should be wrapped with [`OrmError::execution`](crate::OrmError::execution);
/// savepoint operations return them unchanged.
pub trait Executor: Send + Sync {
    /// Execute a statement without parameters.
    fn execute(&self, sql: &str) -> impl Future<Output = OrmResult<u64>> + Send;
}

impl<E: Executor> Executor for &E {
    fn execute(&self, sql: &str) -> impl Future<Output = OrmResult<u64>> + Send {
        (**self).execute(sql)
    }
}

impl<E: Executor> Executor for Arc<E> {
    fn execute(&self, sql: &str) -> impl Future<Output = OrmResult<u64>> + Send {
        (**self).execute(sql)
    }
}

/// Issue `SAVE TRANSACTION <name>`. The name is written verbatim.
pub async fn save_transaction<E: Executor>(tx: &E, name: &str) -> OrmResult<()> {
    let sql = format!("SAVE TRANSACTION {name}");
    #[cfg(feature = "tracing")]
    tracing::debug!(target: "msorm.savepoint", savepoint = name, sql = %sql, "create savepoint");
    tx.execute(&sql).await?;
    Ok(())
}

/// Issue `ROLLBACK TRANSACTION <name>`. The name is written verbatim.
pub async fn rollback_transaction_to<E: Executor>(tx: &E, name: &str) -> OrmResult<()> {
    let sql = format!("ROLLBACK TRANSACTION {name}");
    #[cfg(feature = "tracing")]
    tracing::debug!(target: "msorm.savepoint", savepoint = name, sql = %sql, "rollback to savepoint");
    tx.execute(&sql).await?;
    Ok(())
}

/// Runs the given block inside a savepoint within an existing transaction.
///
/// - Creates the savepoint through `$dialect` on `$tx`.
/// - On `Ok(_)` nothing else is issued.
/// - On `Err(_)` rolls back to the savepoint and returns the error.
///
/// The block must evaluate to `msorm::OrmResult<T>`. The savepoint statement's own
/// failure is returned with `?` from the enclosing function.
///
/// # Example
///
/// ```ignore
/// let notify_result = msorm::savepoint!(dialect, tx, "notify", {
///     send_notification(&tx, order.id).await?;
///     Ok(())
/// });
/// ```
#[macro_export]
macro_rules! savepoint {
    // Named savepoint
    ($dialect:expr, $tx:expr, $name:expr, $body:block) => {{
        let __msorm_sp_dialect = &$dialect;
        let __msorm_sp_tx = &$tx;
        let __msorm_sp_name: &str = $name;
        __msorm_sp_dialect
            .savepoint(__msorm_sp_tx, __msorm_sp_name)
            .await?;

        let __msorm_sp_body_result = async { $body }.await;
        match __msorm_sp_body_result {
            Ok(value) => Ok(value),
            Err(error) => match __msorm_sp_dialect
                .rollback_to(__msorm_sp_tx, __msorm_sp_name)
                .await
            {
                Ok(()) => Err(error),
                Err(rollback_err) => Err($crate::OrmError::Other(format!(
                    "{error} (savepoint rollback failed: {rollback_err})"
                ))),
            },
        }
    }};
    // Anonymous savepoint
    ($dialect:expr, $tx:expr, $body:block) => {{
        let __msorm_sp_name = $crate::__next_savepoint_name();
        $crate::savepoint!($dialect, $tx, &__msorm_sp_name, $body)
    }};
}

/// Runs the given block inside an anonymous savepoint.
///
/// Failure inside the block undoes only the block's work; the outer transaction
/// stays usable.
///
/// # Example
///
/// ```ignore
/// create_user(&tx, &user_data).await?;
/// msorm::nested_transaction!(dialect, tx, {
///     create_user_profile(&tx, &profile_data).await?;
///     Ok(())
/// })?;
/// ```
#[macro_export]
macro_rules! nested_transaction {
    ($dialect:expr, $tx:expr, $body:block) => {{ $crate::savepoint!($dialect, $tx, $body) }};
}

/// Generate a unique anonymous savepoint name.
///
/// Used by the `savepoint!` and `nested_transaction!` macros.
/// Not intended for direct use.
#[doc(hidden)]
pub fn __next_savepoint_name() -> String {
    let n = SAVEPOINT_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("msorm_sp_{n}")
}
