//! Encoder object for frameworks that take an encoder instead of functions.

use crate::error::Result;
use crate::resolve::{self, Resolver};
use crate::value::Value;

/// Arguments a generic encoder factory passes when building an encoder.
///
/// [`Encoder`] accepts and ignores all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncoderArgs {
    pub skip_keys: bool,
    pub ensure_ascii: bool,
    pub check_circular: bool,
    pub allow_nan: bool,
    pub sort_keys: bool,
    pub indent: Option<usize>,
    pub separators: Option<(String, String)>,
}

/// The encoder interface: a fallback hook plus a full encode.
pub trait JsonEncoder {
    fn default(&self, value: &Value) -> Result<Value>;

    fn encode(&self, value: &Value) -> Result<String>;
}

/// An encoder type that can be built from factory arguments.
pub trait EncoderClass: JsonEncoder + Sized {
    fn construct(args: &EncoderArgs) -> Self;
}

/// Stateless adapter over [`resolve::default`] and [`crate::dumps_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder;

impl Encoder {
    pub fn from_args(_args: &EncoderArgs) -> Self {
        Encoder
    }
}

impl JsonEncoder for Encoder {
    fn default(&self, value: &Value) -> Result<Value> {
        resolve::default(value)
    }

    fn encode(&self, value: &Value) -> Result<String> {
        crate::dumps_with(value, false, self)
    }
}

impl EncoderClass for Encoder {
    fn construct(args: &EncoderArgs) -> Self {
        Encoder::from_args(args)
    }
}

impl Resolver for Encoder {
    fn resolve(&self, value: &Value) -> Result<Value> {
        JsonEncoder::default(self, value)
    }
}

/// Builds an `E` from `args` and encodes `value` with it.
pub fn dumps_cls<E: EncoderClass>(value: &Value, args: &EncoderArgs) -> Result<String> {
    E::construct(args).encode(value)
}
