//! Placeholder rendering.
//!
//! Every bind variable is written as a positional `?`, whatever its position.
//! Ordinal `@pN` markers are never produced here; [`explain`](crate::explain)
//! still understands them for SQL coming from elsewhere.

use crate::statement::StatementContext;
use crate::value::Value;

/// Placeholder token written for every bound value.
pub const PLACEHOLDER: &str = "?";

/// Write the placeholder for one bound value.
///
/// `ctx` and `value` are accepted for parity with the builder's extension point;
/// neither affects the output.
pub fn bind_var_to(out: &mut String, _ctx: &dyn StatementContext, _value: &Value) {
    out.push_str(PLACEHOLDER);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::StatementState;

    #[test]
    fn always_question_mark() {
        let ctx = StatementState::new();
        let mut out = String::new();
        for value in [Value::Int(1), Value::Null, Value::from("x")] {
            bind_var_to(&mut out, &ctx, &value);
            out.push(',');
        }
        assert_eq!(out, "?,?,?,");
    }
}
