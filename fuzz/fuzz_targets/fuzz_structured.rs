#![no_main]
use std::collections::BTreeSet;

use arbitrary::Arbitrary;
use libfuzzer_sys::{arbitrary, fuzz_target};
use polyjson::{Generator, Object, Record, Value, dumps, loads};

const MAX_DEPTH: usize = 8;
const MAX_ARRAY_SIZE: usize = 20;
const MAX_OBJECT_SIZE: usize = 20;

#[derive(Debug)]
struct Keyed(i64);

impl Record for Keyed {
    fn pk(&self) -> Value {
        Value::from(self.0)
    }
}

impl Object for Keyed {
    fn as_record(&self) -> Option<&dyn Record> {
        Some(self)
    }
}

#[derive(Arbitrary, Debug)]
struct FuzzValue {
    choice: u8,
}

impl FuzzValue {
    /// Builds an input value together with the JSON it must encode to.
    fn build(
        &self,
        u: &mut arbitrary::Unstructured,
        depth: usize,
    ) -> arbitrary::Result<(Value, serde_json::Value)> {
        if depth >= MAX_DEPTH {
            return Ok((Value::Null, serde_json::Value::Null));
        }

        Ok(match self.choice % 12 {
            0 => (Value::Null, serde_json::Value::Null),
            1 => {
                let b: bool = u.arbitrary()?;
                (Value::from(b), serde_json::Value::from(b))
            }
            2 => {
                let n: i64 = u.arbitrary()?;
                (Value::from(n), serde_json::Value::from(n))
            }
            3 => {
                let s: String = u.arbitrary()?;
                (Value::from(s.as_str()), serde_json::Value::from(s))
            }
            4 => {
                let n: i64 = u.arbitrary()?;
                (Value::object(Keyed(n)), serde_json::Value::from(n))
            }
            5 => {
                let size = u.int_in_range(0..=MAX_ARRAY_SIZE)?;
                let mut items = Vec::with_capacity(size);
                for _ in 0..size {
                    items.push(u.arbitrary::<i64>()?);
                }
                let expected = items.iter().copied().map(serde_json::Value::from).collect();
                let generator = Generator::new(items.into_iter().map(Value::from));
                (Value::from(generator), serde_json::Value::Array(expected))
            }
            6 => {
                let size = u.int_in_range(0..=MAX_ARRAY_SIZE)?;
                let mut set = BTreeSet::new();
                for _ in 0..size {
                    set.insert(u.arbitrary::<i64>()?);
                }
                let expected = set.iter().copied().map(serde_json::Value::from).collect();
                (Value::from(set), serde_json::Value::Array(expected))
            }
            7..=9 => {
                let size = u.int_in_range(0..=MAX_ARRAY_SIZE)?;
                let mut values = Vec::with_capacity(size);
                let mut expected = Vec::with_capacity(size);
                for _ in 0..size {
                    let fv: FuzzValue = u.arbitrary()?;
                    let (v, e) = fv.build(u, depth + 1)?;
                    values.push(v);
                    expected.push(e);
                }
                (Value::Array(values), serde_json::Value::Array(expected))
            }
            _ => {
                let size = u.int_in_range(0..=MAX_OBJECT_SIZE)?;
                let mut entries = Vec::with_capacity(size);
                let mut expected = serde_json::Map::new();
                for _ in 0..size {
                    let key: u32 = u.arbitrary()?;
                    // The encoder writes duplicate keys as-is; the decoder keeps one.
                    if expected.contains_key(&key.to_string()) {
                        continue;
                    }
                    let fv: FuzzValue = u.arbitrary()?;
                    let (v, e) = fv.build(u, depth + 1)?;
                    entries.push((Value::from(key), v));
                    expected.insert(key.to_string(), e);
                }
                (Value::Map(entries), serde_json::Value::Object(expected))
            }
        })
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);

    if let Ok(fv) = u.arbitrary::<FuzzValue>() {
        if let Ok((value, expected)) = fv.build(&mut u, 0) {
            let encoded = match dumps(&value, false) {
                Ok(text) => text,
                Err(e) => panic!("Failed to encode structured input!\nExpected: {}\nError: {}", expected, e),
            };
            match loads::<serde_json::Value>(&encoded) {
                Ok(decoded) => {
                    if decoded != expected {
                        panic!(
                            "Structured mismatch!\nExpected: {}\nEncoded: {}\nDecoded: {}",
                            serde_json::to_string_pretty(&expected).unwrap(),
                            encoded,
                            serde_json::to_string_pretty(&decoded).unwrap()
                        );
                    }
                }
                Err(e) => {
                    panic!("Failed to decode structured output!\nEncoded: {}\nError: {}", encoded, e);
                }
            }
        }
    }
});
