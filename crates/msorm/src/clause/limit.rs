//! `OFFSET ... ROWS FETCH NEXT ... ROWS ONLY` pagination.

use super::ClauseKeyword;
use crate::ident::quote_to;
use crate::statement::StatementContext;
use std::fmt::Write;

/// Row limit and offset. `0` means "not set" for either field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Limit {
    pub limit: u64,
    pub offset: u64,
}

impl Limit {
    pub fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }

    /// Only a row cap.
    pub fn rows(limit: u64) -> Self {
        Self { limit, offset: 0 }
    }

    /// Only skipped rows.
    pub fn skip(offset: u64) -> Self {
        Self { limit: 0, offset }
    }

    /// 1-based page helper; `page` and `per_page` are clamped to >= 1.
    pub fn page(page: u64, per_page: u64) -> Self {
        let size = per_page.max(1);
        Self {
            limit: size,
            offset: (page.max(1) - 1).saturating_mul(size),
        }
    }
}

/// Render pagination into `out`.
///
/// `OFFSET`/`FETCH` is only valid after `ORDER BY`, so an ordering is injected when
/// the statement has none: the prioritized primary key if one is bound, otherwise
/// `(SELECT NULL)`. The ordering is injected on every call, even when neither
/// limit nor offset is set. `FETCH` additionally requires an explicit `OFFSET`,
/// hence `OFFSET 0 ROW` when only a limit is given.
pub fn render_limit(limit: &Limit, out: &mut String, ctx: &dyn StatementContext) {
    if !ctx.has_clause(ClauseKeyword::OrderBy) {
        match ctx.prioritized_primary_key() {
            Some(pk) => {
                out.push_str("ORDER BY ");
                quote_to(out, pk);
                out.push(' ');
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    target: "msorm.sql",
                    "no ORDER BY or primary key; ordering by (SELECT NULL)"
                );
                out.push_str("ORDER BY (SELECT NULL) ");
            }
        }
    }

    if limit.offset > 0 {
        let _ = write!(out, "OFFSET {} ROWS", limit.offset);
    }

    if limit.limit > 0 {
        if limit.offset == 0 {
            out.push_str("OFFSET 0 ROW");
        }
        let _ = write!(out, " FETCH NEXT {} ROWS ONLY", limit.limit);
    }
}
