//! Clause expressions the dialect knows how to render.
//!
//! Builders hand the dialect a typed [`Clause`] instead of looking up a render
//! callback by keyword string. Adding a clause kind means adding a variant here
//! and a match arm in [`render_clause`]; the compiler points at every place that
//! has to learn about it.

mod limit;

pub use limit::{Limit, render_limit};

use crate::statement::StatementContext;
use std::fmt;

/// Clause keywords a statement builder emits, in statement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClauseKeyword {
    Select,
    From,
    Where,
    GroupBy,
    Having,
    OrderBy,
    Limit,
}

impl ClauseKeyword {
    /// Keyword as written in the generic builder's clause registry.
    pub fn as_str(self) -> &'static str {
        match self {
            ClauseKeyword::Select => "SELECT",
            ClauseKeyword::From => "FROM",
            ClauseKeyword::Where => "WHERE",
            ClauseKeyword::GroupBy => "GROUP BY",
            ClauseKeyword::Having => "HAVING",
            ClauseKeyword::OrderBy => "ORDER BY",
            ClauseKeyword::Limit => "LIMIT",
        }
    }
}

impl fmt::Display for ClauseKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An abstract clause whose SQL form is dialect specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause {
    /// Row limit and offset (`LIMIT` keyword slot).
    Limit(Limit),
}

impl Clause {
    /// Registry slot the clause is rendered at.
    pub fn keyword(&self) -> ClauseKeyword {
        match self {
            Clause::Limit(_) => ClauseKeyword::Limit,
        }
    }
}

impl From<Limit> for Clause {
    fn from(limit: Limit) -> Self {
        Clause::Limit(limit)
    }
}

/// Keywords whose rendering SQL Server overrides.
pub const CLAUSE_KEYWORDS: &[ClauseKeyword] = &[ClauseKeyword::Limit];

/// Render `clause` into `out`.
pub fn render_clause(clause: &Clause, out: &mut String, ctx: &dyn StatementContext) {
    match clause {
        Clause::Limit(limit) => render_limit(limit, out, ctx),
    }
}
