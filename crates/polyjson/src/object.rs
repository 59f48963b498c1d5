//! Capabilities an application type can expose to the fallback resolver.
//!
//! A type becomes encodable by implementing [`Object`] and overriding the
//! accessor for each capability it supports. The resolver asks in a fixed
//! order (record, query set, sequence, schema, self-describing), and the first
//! `Some` wins.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::BuildHasher;
use std::sync::Mutex;

use crate::error::Result;
use crate::value::Value;

pub trait Object: fmt::Debug + Send + Sync {
    /// Name reported when nothing can reduce this object.
    fn type_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn as_record(&self) -> Option<&dyn Record> {
        None
    }

    fn as_query_set(&self) -> Option<&dyn QuerySet> {
        None
    }

    fn as_sequence(&self) -> Option<&dyn LazySequence> {
        None
    }

    /// Consulted only when schema support is compiled in.
    fn as_schema(&self) -> Option<&dyn SchemaModel> {
        None
    }

    fn as_json_value(&self) -> Option<&dyn ToJsonValue> {
        None
    }
}

/// An ORM-style record with a stable primary key.
pub trait Record {
    fn pk(&self) -> Value;
}

/// A deferred collection of records.
pub trait QuerySet {
    /// Primary keys in iteration order, without building the records.
    fn pk_list(&self) -> Vec<Value>;
}

/// Generators and set collections.
pub trait LazySequence {
    fn materialize(&self) -> Vec<Value>;
}

/// A validated-schema model convertible to a one-level field mapping.
pub trait SchemaModel {
    fn fields(&self) -> Result<Vec<(Value, Value)>>;
}

/// An object that describes its own JSON value.
///
/// The returned value may itself contain unresolved objects.
pub trait ToJsonValue {
    fn to_json_value(&self) -> Value;
}

type BoxedIter = Box<dyn Iterator<Item = Value> + Send>;

/// A one-shot lazy sequence.
///
/// The first materialization drains the iterator; every later one sees an
/// exhausted generator and yields nothing.
pub struct Generator {
    iter: Mutex<Option<BoxedIter>>,
}

impl Generator {
    pub fn new<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: Send + 'static,
    {
        Self {
            iter: Mutex::new(Some(Box::new(iter.into_iter()))),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        match self.iter.lock() {
            Ok(guard) => guard.is_none(),
            Err(poisoned) => poisoned.into_inner().is_none(),
        }
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("exhausted", &self.is_exhausted())
            .finish()
    }
}

impl LazySequence for Generator {
    fn materialize(&self) -> Vec<Value> {
        let taken = match self.iter.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        taken.map(|it| it.collect()).unwrap_or_default()
    }
}

impl Object for Generator {
    fn type_name(&self) -> &str {
        "generator"
    }

    fn as_sequence(&self) -> Option<&dyn LazySequence> {
        Some(self)
    }
}

impl<T, S> LazySequence for HashSet<T, S>
where
    T: Clone + Into<Value>,
{
    fn materialize(&self) -> Vec<Value> {
        self.iter().cloned().map(Into::into).collect()
    }
}

impl<T, S> Object for HashSet<T, S>
where
    T: Clone + Into<Value> + fmt::Debug + Send + Sync,
    S: BuildHasher + Send + Sync,
{
    fn type_name(&self) -> &str {
        "set"
    }

    fn as_sequence(&self) -> Option<&dyn LazySequence> {
        Some(self)
    }
}

impl<T> LazySequence for BTreeSet<T>
where
    T: Clone + Into<Value>,
{
    fn materialize(&self) -> Vec<Value> {
        self.iter().cloned().map(Into::into).collect()
    }
}

impl<T> Object for BTreeSet<T>
where
    T: Clone + Into<Value> + fmt::Debug + Send + Sync,
{
    fn type_name(&self) -> &str {
        "set"
    }

    fn as_sequence(&self) -> Option<&dyn LazySequence> {
        Some(self)
    }
}

impl<T, S> From<HashSet<T, S>> for Value
where
    T: Clone + Into<Value> + fmt::Debug + Send + Sync + 'static,
    S: BuildHasher + Send + Sync + 'static,
{
    fn from(set: HashSet<T, S>) -> Self {
        Value::object(set)
    }
}

impl<T> From<BTreeSet<T>> for Value
where
    T: Clone + Into<Value> + fmt::Debug + Send + Sync + 'static,
{
    fn from(set: BTreeSet<T>) -> Self {
        Value::object(set)
    }
}

impl From<Generator> for Value {
    fn from(generator: Generator) -> Self {
        Value::object(generator)
    }
}
