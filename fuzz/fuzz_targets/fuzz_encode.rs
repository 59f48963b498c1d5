#![no_main]
use libfuzzer_sys::fuzz_target;
use polyjson::{DefaultResolver, Options, Value, encode::encode_to_string};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(json_value) = serde_json::from_str::<serde_json::Value>(s) {
            let value = Value::from(json_value);

            let _ = encode_to_string(&value, &Options::default(), &DefaultResolver);

            let mut shallow = Options::for_dumps(true);
            shallow.max_depth = 4;
            let _ = encode_to_string(&value, &shallow, &DefaultResolver);

            let mut wide = Options::for_dumps(true);
            wide.indent = 8;
            let _ = encode_to_string(&value, &wide, &DefaultResolver);
        }
    }
});
