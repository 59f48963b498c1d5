use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::options::Options;
use crate::value::{Number, Value};

/// Map key text for `key`.
///
/// Strings pass through. With `non_str_keys` on, numbers, booleans, null and
/// scalars are stringified; containers and objects are never valid keys.
pub(crate) fn coerce_key<'a>(key: &'a Value, options: &Options) -> Result<Cow<'a, str>> {
    if let Value::String(s) = key {
        return Ok(Cow::Borrowed(s));
    }
    if !options.non_str_keys {
        return Err(Error::type_mismatch(format!("{} (map key)", key.type_name())));
    }
    let text = match key {
        Value::Null => Cow::Borrowed("null"),
        Value::Bool(true) => Cow::Borrowed("true"),
        Value::Bool(false) => Cow::Borrowed("false"),
        Value::Number(Number::I64(i)) => Cow::Owned(i.to_string()),
        Value::Number(Number::U64(u)) => Cow::Owned(u.to_string()),
        Value::Number(Number::F64(f)) => Cow::Owned(format_float_key(*f)),
        Value::Scalar(s) => Cow::Owned(s.to_json_string()),
        other => return Err(Error::type_mismatch(format!("{} (map key)", other.type_name()))),
    };
    Ok(text)
}

fn format_float_key(value: f64) -> String {
    if !value.is_finite() {
        return String::from("null");
    }
    let mut buf = ryu::Buffer::new();
    buf.format_finite(value).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coerced(key: Value) -> String {
        coerce_key(&key, &Options::for_dumps(false)).unwrap().into_owned()
    }

    #[test]
    fn float_keys_keep_fraction() {
        assert_eq!(coerced(Value::from(2.0)), "2.0");
        assert_eq!(coerced(Value::from(1.5)), "1.5");
        assert_eq!(coerced(Value::from(f64::NAN)), "null");
    }

    #[test]
    fn primitive_keys() {
        assert_eq!(coerced(Value::from(-7)), "-7");
        assert_eq!(coerced(Value::from(u64::MAX)), "18446744073709551615");
        assert_eq!(coerced(Value::Bool(true)), "true");
        assert_eq!(coerced(Value::Null), "null");
    }

    #[test]
    fn non_string_key_rejected_without_flag() {
        let err = coerce_key(&Value::from(1), &Options::default()).unwrap_err();
        assert!(err.is_type_mismatch());
    }

    #[test]
    fn container_key_rejected() {
        let err = coerce_key(&Value::Array(vec![]), &Options::for_dumps(false)).unwrap_err();
        assert!(err.is_type_mismatch());
    }
}
