//! Codec layer: writes a [`Value`] with `serde_json`, calling a [`Resolver`]
//! on everything the codec cannot represent natively.

mod codec;
mod keys;

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{Error, Result};
use crate::options::Options;
use crate::resolve::Resolver;
use crate::value::Value;

use self::codec::{Context, Encode};

/// Encodes `value` to UTF-8 JSON bytes.
///
/// Output is produced into a private buffer, so a failure never leaves
/// partial text behind.
pub fn encode_to_vec(value: &Value, options: &Options, resolver: &dyn Resolver) -> Result<Vec<u8>> {
    let ctx = Context::new(options, resolver);
    let root = Encode::root(value, &ctx);
    let mut out = Vec::with_capacity(128);
    let written = if options.pretty {
        let indent = vec![b' '; options.indent];
        let mut ser = serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&indent));
        root.serialize(&mut ser)
    } else {
        let mut ser = serde_json::Serializer::new(&mut out);
        root.serialize(&mut ser)
    };
    match written {
        Ok(()) => Ok(out),
        Err(e) => Err(ctx.take_failure().unwrap_or(Error::Json(e))),
    }
}

pub fn encode_to_string(value: &Value, options: &Options, resolver: &dyn Resolver) -> Result<String> {
    let bytes = encode_to_vec(value, options, resolver)?;
    String::from_utf8(bytes).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

pub fn encode_to_writer<W: Write>(
    mut writer: W,
    value: &Value,
    options: &Options,
    resolver: &dyn Resolver,
) -> Result<()> {
    let bytes = encode_to_vec(value, options, resolver)?;
    writer.write_all(&bytes)?;
    Ok(())
}
