//! SQL Server identifier quoting.
//!
//! This module provides [`Ident`] which represents a SQL identifier (schema/table/column),
//! supporting dotted notation. Every part is wrapped in double quotes, which SQL Server
//! accepts as delimiters when `QUOTED_IDENTIFIER` is on (the driver default).
//!
//! Quoting is permissive: segments are written verbatim, empty segments stay empty
//! (`a..b` becomes `"a".""."b"`), and embedded `"` characters are **not** escaped.
//! Callers that accept names from outside the program should go through
//! [`Ident::parse_strict`], which rejects anything that could break out of the quotes.
//!
//! # Example
//! ```
//! use msorm::ident::{Ident, quote};
//!
//! assert_eq!(quote("dbo.users"), r#""dbo"."users""#);
//! assert!(Ident::parse_strict(r#"bad"name"#).is_err());
//! ```

use crate::error::{OrmError, OrmResult};

/// Identifier delimiter.
pub const QUOTE: char = '"';

/// Maximum length of a savepoint name accepted by `SAVE TRANSACTION`.
pub const MAX_SAVEPOINT_NAME_LEN: usize = 32;

/// A SQL identifier (column, table, or schema name) split on `.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub parts: Vec<String>,
}

impl Ident {
    /// Split a name on `.` without any validation.
    pub fn parse(s: &str) -> Self {
        Self {
            parts: s.split('.').map(str::to_string).collect(),
        }
    }

    /// Split a name on `.`, rejecting parts that cannot be safely delimited.
    ///
    /// Rejects empty input, empty segments, NUL characters and the `"` delimiter itself.
    pub fn parse_strict(s: &str) -> OrmResult<Self> {
        if s.is_empty() {
            return Err(OrmError::validation("Identifier cannot be empty"));
        }
        if s.contains('\0') {
            return Err(OrmError::validation(
                "Identifier cannot contain NUL character",
            ));
        }
        if s.contains(QUOTE) {
            return Err(OrmError::validation(format!(
                "Identifier cannot contain '{QUOTE}': {s}"
            )));
        }
        let ident = Self::parse(s);
        if ident.parts.iter().any(String::is_empty) {
            return Err(OrmError::validation(format!(
                "Empty identifier segment in '{s}'"
            )));
        }
        Ok(ident)
    }

    /// Render the identifier as SQL.
    pub fn to_sql(&self) -> String {
        // parts + 2 quotes each + dots
        let cap = self.parts.iter().map(|p| p.len() + 3).sum::<usize>();
        let mut out = String::with_capacity(cap);
        self.write_sql(&mut out);
        out
    }

    pub(crate) fn write_sql(&self, out: &mut String) {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            out.push(QUOTE);
            out.push_str(part);
            out.push(QUOTE);
        }
    }
}

/// Write `name` into `out` with every dotted segment delimited.
pub fn quote_to(out: &mut String, name: &str) {
    out.push(QUOTE);
    if name.contains('.') {
        for (idx, segment) in name.split('.').enumerate() {
            if idx > 0 {
                out.push_str(".\"");
            }
            out.push_str(segment);
            out.push(QUOTE);
        }
    } else {
        out.push_str(name);
        out.push(QUOTE);
    }
}

/// Quote `name`, returning a new string.
pub fn quote(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    quote_to(&mut out, name);
    out
}

/// Check that `name` can be spliced into `SAVE TRANSACTION` / `ROLLBACK TRANSACTION`.
///
/// Savepoint names are written unquoted, so they must follow the regular
/// identifier rules: `[A-Za-z_@#][A-Za-z0-9_@#$]*`, at most 32 characters.
pub fn validate_savepoint_name(name: &str) -> OrmResult<()> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(OrmError::validation("Savepoint name cannot be empty"));
    };
    if name.chars().count() > MAX_SAVEPOINT_NAME_LEN {
        return Err(OrmError::validation(format!(
            "Savepoint name longer than {MAX_SAVEPOINT_NAME_LEN} characters: {name}"
        )));
    }
    if !(first.is_ascii_alphabetic() || matches!(first, '_' | '@' | '#')) {
        return Err(OrmError::validation(format!(
            "Invalid savepoint name start character: '{first}'"
        )));
    }
    if let Some(c) = chars.find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '@' | '#' | '$'))) {
        return Err(OrmError::validation(format!(
            "Invalid character in savepoint name: '{c}'"
        )));
    }
    Ok(())
}
