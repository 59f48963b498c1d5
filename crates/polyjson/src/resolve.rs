//! Fallback resolution: reduces a value the codec cannot write to one it can
//! (or to another unknown value, which is resolved again).

use crate::error::{Error, Result};
use crate::object::Object;
use crate::value::Value;

/// Whether validated-schema objects take part in resolution.
pub const SCHEMA_SUPPORT: bool = cfg!(feature = "schema");

/// Fallback handler invoked by the codec on non-native values.
pub trait Resolver {
    fn resolve(&self, value: &Value) -> Result<Value>;
}

impl<F> Resolver for F
where
    F: Fn(&Value) -> Result<Value>,
{
    fn resolve(&self, value: &Value) -> Result<Value> {
        self(value)
    }
}

/// The built-in resolution chain, see [`default`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultResolver;

impl Resolver for DefaultResolver {
    fn resolve(&self, value: &Value) -> Result<Value> {
        default(value)
    }
}

/// Reduces `value` with the first matching rule:
///
/// 1. record → its primary key
/// 2. query set → list of primary keys
/// 3. generator or set → list of its elements
/// 4. schema model → field mapping (only with the `schema` feature)
/// 5. self-describing object → its own JSON value
/// 6. scalar → fallback scalar text
///
/// Anything else is a [`Error::TypeMismatch`].
pub fn default(value: &Value) -> Result<Value> {
    match value {
        Value::Object(object) => resolve_object(object.as_ref()),
        Value::Scalar(scalar) => {
            tracing::trace!(rule = "scalar", type_name = scalar.type_name(), "resolved value");
            Ok(Value::String(scalar.to_json_string()))
        }
        other => Err(Error::type_mismatch(other.type_name())),
    }
}

fn resolve_object(object: &dyn Object) -> Result<Value> {
    let type_name = object.type_name();

    if let Some(record) = object.as_record() {
        tracing::trace!(rule = "record", type_name, "resolved value");
        return Ok(record.pk());
    }

    if let Some(query_set) = object.as_query_set() {
        tracing::trace!(rule = "query_set", type_name, "resolved value");
        return Ok(Value::Array(query_set.pk_list()));
    }

    if let Some(sequence) = object.as_sequence() {
        tracing::trace!(rule = "sequence", type_name, "resolved value");
        return Ok(Value::Array(sequence.materialize()));
    }

    if SCHEMA_SUPPORT {
        if let Some(model) = object.as_schema() {
            tracing::trace!(rule = "schema", type_name, "resolved value");
            return model.fields().map(Value::Map);
        }
    }

    if let Some(describing) = object.as_json_value() {
        tracing::trace!(rule = "to_json_value", type_name, "resolved value");
        return Ok(describing.to_json_value());
    }

    Err(Error::type_mismatch(type_name))
}
