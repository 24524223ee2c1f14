//! Inline bound values into SQL text for logging.
//!
//! The output is meant for humans reading logs, never for execution: strings are
//! quoted with `'` (embedded quotes doubled), binary that is not printable text is
//! shown as `'<binary>'`, and booleans as the `bit` literals `1`/`0`.
//!
//! Two placeholder styles are understood:
//! - positional `?`, consumed left to right
//! - numbered `@p1`, `@p2`, ... referring to the 1-based value position
//!
//! Either kind inside a `'...'` literal is plain text and left alone.
//! Placeholders without a matching value are left untouched.

use crate::value::Value;
use regex::{Captures, Regex};
use std::sync::OnceLock;

const ESCAPER: char = '\'';

fn numeric_placeholder() -> &'static Regex {
    static NUMERIC_RE: OnceLock<Regex> = OnceLock::new();
    NUMERIC_RE.get_or_init(|| Regex::new(r"@p(\d+)").expect("invalid built-in placeholder regex"))
}

/// Render `sql` with `vars` inlined, choosing the placeholder style automatically.
///
/// Numbered `@pN` placeholders win when one appears outside a `'...'` literal;
/// otherwise `?` is used.
pub fn explain(sql: &str, vars: &[Value]) -> String {
    let numbered = literal_runs(sql)
        .into_iter()
        .any(|(literal, text)| !literal && numeric_placeholder().is_match(text));
    if numbered {
        explain_numbered(sql, vars)
    } else {
        explain_positional(sql, vars)
    }
}

/// Replace `?` placeholders left to right.
pub fn explain_positional(sql: &str, vars: &[Value]) -> String {
    let mut out = String::with_capacity(sql.len() + vars.len() * 8);
    let mut next = vars.iter();
    let mut in_literal = false;

    for ch in sql.chars() {
        match ch {
            ESCAPER => {
                in_literal = !in_literal;
                out.push(ch);
            }
            '?' if !in_literal => match next.next() {
                Some(value) => write_value(&mut out, value),
                None => out.push(ch),
            },
            _ => out.push(ch),
        }
    }
    out
}

/// Replace `@pN` placeholders with the N-th value (1-based).
///
/// Text inside `'...'` literals is copied unchanged.
pub fn explain_numbered(sql: &str, vars: &[Value]) -> String {
    let mut out = String::with_capacity(sql.len() + vars.len() * 8);
    for (literal, text) in literal_runs(sql) {
        if literal {
            out.push_str(text);
            continue;
        }
        let replaced = numeric_placeholder().replace_all(text, |caps: &Captures<'_>| {
            let value = caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|idx| vars.get(idx));
            match value {
                Some(value) => format_value(value),
                None => caps[0].to_string(),
            }
        });
        out.push_str(&replaced);
    }
    out
}

/// Split `sql` into `(is_literal, text)` runs. Literal runs keep their quotes;
/// an unterminated literal runs to the end.
fn literal_runs(sql: &str) -> Vec<(bool, &str)> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut in_literal = false;

    for (idx, ch) in sql.char_indices() {
        if ch != ESCAPER {
            continue;
        }
        if in_literal {
            let end = idx + ch.len_utf8();
            runs.push((true, &sql[start..end]));
            start = end;
        } else {
            if start < idx {
                runs.push((false, &sql[start..idx]));
            }
            start = idx;
        }
        in_literal = !in_literal;
    }
    if start < sql.len() {
        runs.push((in_literal, &sql[start..]));
    }
    runs
}

/// Format one value as a SQL literal.
pub fn format_value(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("NULL"),
        Value::Bool(b) => out.push(if *b { '1' } else { '0' }),
        Value::Int(v) => out.push_str(&v.to_string()),
        Value::Uint(v) => out.push_str(&v.to_string()),
        Value::Float(v) => out.push_str(&v.to_string()),
        Value::String(s) => write_quoted(out, s),
        Value::Bytes(bytes) => match std::str::from_utf8(bytes) {
            Ok(s) if is_printable(s) => write_quoted(out, s),
            _ => write_quoted(out, "<binary>"),
        },
        Value::Timestamp(ts) => {
            write_quoted(out, &ts.format("%Y-%m-%d %H:%M:%S%.3f %:z").to_string())
        }
        Value::Uuid(id) => write_quoted(out, &id.hyphenated().to_string()),
        #[cfg(feature = "rust_decimal")]
        Value::Decimal(d) => out.push_str(&d.to_string()),
    }
}

fn write_quoted(out: &mut String, s: &str) {
    out.push(ESCAPER);
    for ch in s.chars() {
        if ch == ESCAPER {
            out.push(ESCAPER);
        }
        out.push(ch);
    }
    out.push(ESCAPER);
}

fn is_printable(s: &str) -> bool {
    s.chars().all(|c| !c.is_control() || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use uuid::Uuid;

    #[test]
    fn positional_in_order() {
        let sql = explain(
            "SELECT * FROM \"users\" WHERE \"name\" = ? AND \"age\" > ?",
            &[Value::from("alice"), Value::from(30i32)],
        );
        assert_eq!(sql, "SELECT * FROM \"users\" WHERE \"name\" = 'alice' AND \"age\" > 30");
    }

    #[test]
    fn escapes_single_quotes() {
        assert_eq!(explain("?", &[Value::from("it's")]), "'it''s'");
    }

    #[test]
    fn null_and_bools() {
        let sql = explain("?, ?, ?", &[Value::Null, Value::Bool(true), Value::Bool(false)]);
        assert_eq!(sql, "NULL, 1, 0");
    }

    #[test]
    fn surplus_placeholders_kept() {
        assert_eq!(explain("? = ?", &[Value::Int(1)]), "1 = ?");
    }

    #[test]
    fn question_mark_in_literal_skipped() {
        assert_eq!(
            explain("SELECT 'why?' WHERE x = ?", &[Value::Int(7)]),
            "SELECT 'why?' WHERE x = 7"
        );
    }

    #[test]
    fn numbered_placeholders() {
        let sql = explain(
            "UPDATE t SET a = @p2 WHERE id = @p1 AND b = @p3",
            &[Value::Int(9), Value::from("x")],
        );
        assert_eq!(sql, "UPDATE t SET a = 'x' WHERE id = 9 AND b = @p3");
    }

    #[test]
    fn numbered_marker_in_literal_keeps_positional_mode() {
        let sql = "SELECT * FROM t WHERE email LIKE '%@p1%' AND id = ?";
        assert_eq!(
            explain(sql, &[Value::Int(5)]),
            "SELECT * FROM t WHERE email LIKE '%@p1%' AND id = 5"
        );
    }

    #[test]
    fn numbered_mode_skips_literals() {
        let sql = "UPDATE t SET note = 'x@p1''s' WHERE id = @p1";
        assert_eq!(
            explain(sql, &[Value::Int(9)]),
            "UPDATE t SET note = 'x@p1''s' WHERE id = 9"
        );
    }

    #[test]
    fn literal_runs_split() {
        assert_eq!(
            literal_runs("a = 'b''c' AND d"),
            vec![(false, "a = "), (true, "'b'"), (true, "'c'"), (false, " AND d")]
        );
        assert_eq!(literal_runs("x = 'open"), vec![(false, "x = "), (true, "'open")]);
    }

    #[test]
    fn numbered_zero_is_kept() {
        assert_eq!(explain_numbered("@p0", &[Value::Int(1)]), "@p0");
    }

    #[test]
    fn timestamps_keep_offset() {
        let ts = DateTime::parse_from_rfc3339("2024-05-06T07:08:09.123+02:00").unwrap();
        assert_eq!(format_value(&Value::from(ts)), "'2024-05-06 07:08:09.123 +02:00'");
    }

    #[test]
    fn bytes_and_uuid() {
        assert_eq!(format_value(&Value::from(b"abc".to_vec())), "'abc'");
        assert_eq!(format_value(&Value::from(vec![0u8, 159, 146, 150])), "'<binary>'");
        let id = Uuid::nil();
        assert_eq!(
            format_value(&Value::from(id)),
            "'00000000-0000-0000-0000-000000000000'"
        );
    }

    #[test]
    fn floats() {
        assert_eq!(format_value(&Value::from(1.5f64)), "1.5");
    }
}
