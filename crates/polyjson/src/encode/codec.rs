//! `serde::Serialize` bridge between [`Value`] and `serde_json`.
//!
//! Non-native values are handed to the resolver and whatever it returns is
//! serialized in their place, so nested unknowns are resolved again. The
//! resolver's own error is kept aside and surfaced instead of the codec's
//! stringly-typed one.

use std::cell::RefCell;

use serde::ser::{self, Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::encode::keys;
use crate::error::Error;
use crate::options::Options;
use crate::resolve::Resolver;
use crate::value::{Number, Value};

pub(crate) struct Context<'c> {
    options: &'c Options,
    resolver: &'c dyn Resolver,
    failure: RefCell<Option<Error>>,
}

impl<'c> Context<'c> {
    pub(crate) fn new(options: &'c Options, resolver: &'c dyn Resolver) -> Self {
        Self {
            options,
            resolver,
            failure: RefCell::new(None),
        }
    }

    // Only the first failure is kept; anything after it is unwinding.
    fn fail<E: ser::Error>(&self, err: Error) -> E {
        let msg = err.to_string();
        let mut slot = self.failure.borrow_mut();
        if slot.is_none() {
            *slot = Some(err);
        }
        E::custom(msg)
    }

    pub(crate) fn take_failure(&self) -> Option<Error> {
        self.failure.borrow_mut().take()
    }
}

pub(crate) struct Encode<'v, 'c> {
    value: &'v Value,
    ctx: &'c Context<'c>,
    depth: usize,
}

impl<'v, 'c> Encode<'v, 'c> {
    pub(crate) fn root(value: &'v Value, ctx: &'c Context<'c>) -> Self {
        Self {
            value,
            ctx,
            depth: 0,
        }
    }

    fn child<'w>(&self, value: &'w Value) -> Encode<'w, 'c> {
        Encode {
            value,
            ctx: self.ctx,
            depth: self.depth + 1,
        }
    }
}

impl Serialize for Encode<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let options = self.ctx.options;
        if self.depth > options.max_depth {
            return Err(self.ctx.fail(Error::RecursionLimit {
                limit: options.max_depth,
            }));
        }
        match self.value {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::I64(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::U64(u)) => serializer.serialize_u64(*u),
            Value::Number(Number::F64(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&self.child(item))?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    let key = keys::coerce_key(key, options).map_err(|e| self.ctx.fail::<S::Error>(e))?;
                    map.serialize_entry(&key, &self.child(value))?;
                }
                map.end()
            }
            Value::NumericArray(array) if options.serialize_numeric_arrays => {
                array.serialize(serializer)
            }
            unknown => {
                let resolved = self
                    .ctx
                    .resolver
                    .resolve(unknown)
                    .map_err(|e| self.ctx.fail::<S::Error>(e))?;
                self.child(&resolved).serialize(serializer)
            }
        }
    }
}
