use polyjson::{Value, dumps, loads};
use serde_json::json;

#[test]
fn native_values_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    let value = Value::map([
        ("s", Value::from("hi")),
        ("i", Value::from(-3)),
        ("f", Value::from(1.5)),
        ("b", Value::from(true)),
        ("n", Value::Null),
        ("list", Value::from(vec![Value::from(1), Value::from("x"), Value::Array(vec![])])),
        ("nested", Value::map([("k", Value::map(Vec::<(&str, Value)>::new()))])),
    ]);
    let text = dumps(&value, false)?;
    let back: serde_json::Value = loads(&text)?;
    assert_eq!(
        back,
        json!({
            "s": "hi",
            "i": -3,
            "f": 1.5,
            "b": true,
            "n": null,
            "list": [1, "x", []],
            "nested": {"k": {}}
        })
    );
    Ok(())
}

#[test]
fn integer_widths_encode_as_numbers() -> Result<(), Box<dyn std::error::Error>> {
    let value = Value::from(vec![
        Value::from(7u8),
        Value::from(u16::MAX),
        Value::from(u32::MAX),
        Value::from(i8::MIN),
        Value::from(u64::MAX),
    ]);
    assert_eq!(dumps(&value, false)?, "[7,65535,4294967295,-128,18446744073709551615]");
    Ok(())
}

#[test]
fn loads_into_value_roundtrips() -> Result<(), Box<dyn std::error::Error>> {
    let value = Value::map([
        ("a", Value::from(vec![1, 2, 3])),
        ("b", Value::from("z")),
        ("c", Value::from(0.25)),
    ]);
    let back: Value = loads(&dumps(&value, false)?)?;
    assert_eq!(back, value);
    Ok(())
}

#[test]
fn keys_keep_insertion_order() -> Result<(), Box<dyn std::error::Error>> {
    let value = Value::map([("z", 1), ("a", 2), ("m", 3)]);
    assert_eq!(dumps(&value, false)?, r#"{"z":1,"a":2,"m":3}"#);
    Ok(())
}

#[test]
fn non_string_keys_match_string_keys() -> Result<(), Box<dyn std::error::Error>> {
    let numeric = Value::map([(Value::from(1), "a"), (Value::from(2), "b")]);
    let textual = Value::map([("1", "a"), ("2", "b")]);
    assert_eq!(dumps(&numeric, false)?, dumps(&textual, false)?);
    Ok(())
}

#[test]
fn colliding_keys_are_written_as_is() -> Result<(), Box<dyn std::error::Error>> {
    let value = Value::map([(Value::from(1), "int"), (Value::from("1"), "str")]);
    assert_eq!(dumps(&value, false)?, r#"{"1":"int","1":"str"}"#);
    Ok(())
}

#[test]
fn mixed_primitive_keys() -> Result<(), Box<dyn std::error::Error>> {
    let value = Value::map([
        (Value::Bool(true), 1),
        (Value::Null, 2),
        (Value::from(2.5), 3),
    ]);
    assert_eq!(dumps(&value, false)?, r#"{"true":1,"null":2,"2.5":3}"#);
    Ok(())
}

#[test]
fn pretty_differs_only_in_whitespace() -> Result<(), Box<dyn std::error::Error>> {
    let value = Value::map([
        ("a", Value::from(1)),
        ("b", Value::from(vec![Value::from(true), Value::from("x y")])),
    ]);
    let compact = dumps(&value, false)?;
    let pretty = dumps(&value, true)?;
    assert_ne!(compact, pretty);
    assert_eq!(pretty, "{\n  \"a\": 1,\n  \"b\": [\n    true,\n    \"x y\"\n  ]\n}");
    let a: serde_json::Value = loads(&compact)?;
    let b: serde_json::Value = loads(&pretty)?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn non_finite_floats_become_null() -> Result<(), Box<dyn std::error::Error>> {
    let value = Value::from(vec![f64::NAN, f64::INFINITY, 1.0]);
    assert_eq!(dumps(&value, false)?, "[null,null,1.0]");
    Ok(())
}

#[test]
fn bytes_and_writer_match_string() -> Result<(), Box<dyn std::error::Error>> {
    let value = Value::map([("k", Value::from(vec!["a", "b"]))]);
    let text = dumps(&value, false)?;
    assert_eq!(polyjson::dumps_to_vec(&value, false)?, text.as_bytes());
    let mut out = Vec::new();
    polyjson::dump_to_writer(&mut out, &value, false)?;
    assert_eq!(out, text.as_bytes());
    Ok(())
}

#[test]
fn loads_propagates_decode_errors() {
    let err = loads::<serde_json::Value>("{\"a\": ").unwrap_err();
    assert!(matches!(err, polyjson::Error::Json(_)));
    let from_bytes: serde_json::Value = polyjson::loads_slice(b"[1,2]").unwrap();
    assert_eq!(from_bytes, json!([1, 2]));
}
