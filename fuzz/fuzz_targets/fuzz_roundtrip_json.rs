#![no_main]
use libfuzzer_sys::fuzz_target;
use polyjson::{Value, dumps, loads};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(original_value) = serde_json::from_str::<serde_json::Value>(s) {
            let value = Value::from(original_value.clone());

            for pretty in [false, true] {
                let encoded = match dumps(&value, pretty) {
                    Ok(text) => text,
                    Err(e) => panic!("Failed to encode native JSON!\nInput: {}\nError: {}", s, e),
                };
                match loads::<serde_json::Value>(&encoded) {
                    Ok(decoded_value) => {
                        if original_value != decoded_value {
                            panic!(
                                "Roundtrip mismatch!\nOriginal JSON: {}\nEncoded: {}\nDecoded: {}",
                                serde_json::to_string_pretty(&original_value).unwrap(),
                                encoded,
                                serde_json::to_string_pretty(&decoded_value).unwrap()
                            );
                        }
                    }
                    Err(e) => {
                        panic!(
                            "Failed to decode encoded JSON!\nOriginal: {}\nEncoded: {}\nError: {}",
                            serde_json::to_string_pretty(&original_value).unwrap(),
                            encoded,
                            e
                        );
                    }
                }
            }
        }
    }
});
