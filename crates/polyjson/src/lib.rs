#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod value;
pub mod scalar;
pub mod numeric;
pub mod object;
pub mod resolve;
pub mod encode;
pub mod encoder;

#[cfg(feature = "schema")]
pub mod schema;

pub use crate::encoder::{Encoder, EncoderArgs, EncoderClass, JsonEncoder, dumps_cls};
pub use crate::error::{Error, Result};
pub use crate::numeric::{ArrayData, NumericArray};
pub use crate::object::{Generator, LazySequence, Object, QuerySet, Record, SchemaModel, ToJsonValue};
pub use crate::options::Options;
pub use crate::resolve::{DefaultResolver, Resolver, SCHEMA_SUPPORT, default};
pub use crate::scalar::Scalar;
pub use crate::value::{Number, Value};

#[cfg(feature = "schema")]
pub use crate::schema::Model;

use std::io::Write;

use serde::de::DeserializeOwned;

/// Encodes `value` to a JSON string with the default resolution chain.
pub fn dumps(value: &Value, pretty: bool) -> Result<String> {
    dumps_with(value, pretty, &DefaultResolver)
}

/// Encodes `value`, using `resolver` for everything the codec cannot write.
pub fn dumps_with(value: &Value, pretty: bool, resolver: &dyn Resolver) -> Result<String> {
    encode::encode_to_string(value, &Options::for_dumps(pretty), resolver)
}

pub fn dumps_to_vec(value: &Value, pretty: bool) -> Result<Vec<u8>> {
    encode::encode_to_vec(value, &Options::for_dumps(pretty), &DefaultResolver)
}

pub fn dump_to_writer<W: Write>(writer: W, value: &Value, pretty: bool) -> Result<()> {
    encode::encode_to_writer(writer, value, &Options::for_dumps(pretty), &DefaultResolver)
}

pub fn loads<T: DeserializeOwned>(text: &str) -> Result<T> {
    Ok(serde_json::from_str(text)?)
}

pub fn loads_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(bytes)?)
}
