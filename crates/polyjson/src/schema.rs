//! Serde-backed schema models.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::object::{Object, SchemaModel};
use crate::value::Value;

/// Wraps a `Serialize` struct so it resolves to its field mapping.
#[derive(Clone, PartialEq)]
pub struct Model<T>(pub T);

impl<T: fmt::Debug> fmt::Debug for Model<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Model").field(&self.0).finish()
    }
}

impl<T: Serialize> SchemaModel for Model<T> {
    fn fields(&self) -> Result<Vec<(Value, Value)>> {
        let type_name = std::any::type_name::<T>();
        match serde_json::to_value(&self.0) {
            Ok(serde_json::Value::Object(map)) => Ok(map
                .into_iter()
                .map(|(k, v)| (Value::String(k), Value::from(v)))
                .collect()),
            _ => Err(Error::type_mismatch(type_name)),
        }
    }
}

impl<T> Object for Model<T>
where
    T: Serialize + fmt::Debug + Send + Sync,
{
    fn type_name(&self) -> &str {
        std::any::type_name::<T>()
    }

    fn as_schema(&self) -> Option<&dyn SchemaModel> {
        Some(self)
    }
}

impl<T> From<Model<T>> for Value
where
    T: Serialize + fmt::Debug + Send + Sync + 'static,
{
    fn from(model: Model<T>) -> Self {
        Value::object(model)
    }
}
