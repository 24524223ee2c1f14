//! Bound values and raw SQL expressions.

use chrono::{DateTime, FixedOffset, Utc};
use uuid::Uuid;

/// A value bound to a statement placeholder.
///
/// The dialect never encodes these for the wire; they are only inspected by
/// [`explain`](crate::explain) when rendering SQL for logs.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    Timestamp(DateTime<FixedOffset>),
    Uuid(Uuid),
    #[cfg(feature = "rust_decimal")]
    Decimal(rust_decimal::Decimal),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

macro_rules! impl_from_value {
    ($($ty:ty => $variant:ident as $cast:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v as $cast)
                }
            }
        )*
    };
}

impl_from_value!(
    i8 => Int as i64,
    i16 => Int as i64,
    i32 => Int as i64,
    i64 => Int as i64,
    u8 => Uint as u64,
    u16 => Uint as u64,
    u32 => Uint as u64,
    u64 => Uint as u64,
    f32 => Float as f64,
    f64 => Float as f64,
);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(v: DateTime<FixedOffset>) -> Self {
        Value::Timestamp(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Timestamp(v.fixed_offset())
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Uuid(v)
    }
}

#[cfg(feature = "rust_decimal")]
impl From<rust_decimal::Decimal> for Value {
    fn from(v: rust_decimal::Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// A raw SQL fragment with its own bound values.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlExpr {
    pub sql: String,
    pub vars: Vec<Value>,
}

impl SqlExpr {
    /// Fragment without parameters.
    pub fn raw(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            vars: Vec::new(),
        }
    }

    /// Fragment with `?` placeholders and their values.
    pub fn with_vars(sql: impl Into<String>, vars: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            vars,
        }
    }

    /// The SQL `NULL` literal.
    pub fn null() -> Self {
        Self::raw("NULL")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_maps_to_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(7i32)), Value::Int(7));
        assert!(Value::from(None::<&str>).is_null());
    }

    #[test]
    fn utc_keeps_instant() {
        let ts = DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let Value::Timestamp(v) = Value::from(ts) else {
            panic!("expected timestamp");
        };
        assert_eq!(v.timestamp(), ts.timestamp());
    }

    #[test]
    fn expr_with_vars() {
        let expr = SqlExpr::with_vars("DATEADD(day, ?, SYSDATETIMEOFFSET())", vec![Value::from(7i32)]);
        assert_eq!(expr.sql, "DATEADD(day, ?, SYSDATETIMEOFFSET())");
        assert_eq!(expr.vars, vec![Value::Int(7)]);
        assert_ne!(expr, SqlExpr::raw("DATEADD(day, ?, SYSDATETIMEOFFSET())"));
    }

    #[test]
    fn null_expr() {
        let expr = SqlExpr::null();
        assert_eq!(expr.sql, "NULL");
        assert!(expr.vars.is_empty());
    }
}
