//! Converts one raw field string into a typed [`Value`].

use flowline_schema::{FieldType, Value};

/// Try to decode one raw field against its declared type. Pure: no state,
/// no side effects. The bare error is wrapped with line and field position
/// by the decoder.
///
/// - `string` passes the text through unchanged.
/// - `int` is base-10 `i64`; overflow fails.
/// - `float` accepts decimal and exponential notation (`f64`).
/// - `bool` accepts exactly `true`, `false`, `1`, `0`.
pub fn decode_field(raw: &str, ty: FieldType) -> Result<Value, ()> {
    match ty {
        FieldType::String => Ok(Value::Str(raw.to_owned())),
        FieldType::Int => raw.parse::<i64>().map(Value::Int).map_err(|_| ()),
        FieldType::Float => raw.parse::<f64>().map(Value::Float).map_err(|_| ()),
        FieldType::Bool => match raw {
            "true" | "1" => Ok(Value::Bool(true)),
            "false" | "0" => Ok(Value::Bool(false)),
            _ => Err(()),
        },
    }
}
