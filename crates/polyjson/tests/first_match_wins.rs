use polyjson::{
    LazySequence, Object, QuerySet, Record, SchemaModel, ToJsonValue, Value, default,
};

/// Exposes whichever capabilities are switched on, each with a distinct result.
#[derive(Debug, Default, Clone, Copy)]
struct Chameleon {
    record: bool,
    query_set: bool,
    sequence: bool,
    schema: bool,
    json: bool,
}

impl Record for Chameleon {
    fn pk(&self) -> Value {
        Value::from("record")
    }
}

impl QuerySet for Chameleon {
    fn pk_list(&self) -> Vec<Value> {
        vec![Value::from("query_set")]
    }
}

impl LazySequence for Chameleon {
    fn materialize(&self) -> Vec<Value> {
        vec![Value::from("sequence")]
    }
}

impl SchemaModel for Chameleon {
    fn fields(&self) -> polyjson::Result<Vec<(Value, Value)>> {
        Ok(vec![(Value::from("schema"), Value::Bool(true))])
    }
}

impl ToJsonValue for Chameleon {
    fn to_json_value(&self) -> Value {
        Value::from("json")
    }
}

impl Object for Chameleon {
    fn as_record(&self) -> Option<&dyn Record> {
        self.record.then_some(self as &dyn Record)
    }

    fn as_query_set(&self) -> Option<&dyn QuerySet> {
        self.query_set.then_some(self as &dyn QuerySet)
    }

    fn as_sequence(&self) -> Option<&dyn LazySequence> {
        self.sequence.then_some(self as &dyn LazySequence)
    }

    fn as_schema(&self) -> Option<&dyn SchemaModel> {
        self.schema.then_some(self as &dyn SchemaModel)
    }

    fn as_json_value(&self) -> Option<&dyn ToJsonValue> {
        self.json.then_some(self as &dyn ToJsonValue)
    }
}

fn resolve(c: Chameleon) -> Value {
    default(&Value::object(c)).expect("chameleon always resolves")
}

const ALL: Chameleon = Chameleon {
    record: true,
    query_set: true,
    sequence: true,
    schema: true,
    json: true,
};

#[test]
fn record_beats_everything() {
    assert_eq!(resolve(ALL), Value::from("record"));
}

#[test]
fn query_set_beats_later_rules() {
    let c = Chameleon { record: false, ..ALL };
    assert_eq!(resolve(c), Value::from(vec!["query_set"]));
}

#[test]
fn sequence_beats_schema_and_json() {
    let c = Chameleon { record: false, query_set: false, ..ALL };
    assert_eq!(resolve(c), Value::from(vec!["sequence"]));
}

#[cfg(feature = "schema")]
#[test]
fn schema_beats_json() {
    let c = Chameleon { schema: true, json: true, ..Chameleon::default() };
    assert_eq!(resolve(c), Value::map([("schema", true)]));
}

#[cfg(not(feature = "schema"))]
#[test]
fn schema_is_skipped_without_support() {
    let c = Chameleon { schema: true, json: true, ..Chameleon::default() };
    assert_eq!(resolve(c), Value::from("json"));
}

#[test]
fn json_is_last_object_rule() {
    let c = Chameleon { json: true, ..Chameleon::default() };
    assert_eq!(resolve(c), Value::from("json"));
}

#[test]
fn no_capability_is_rejected() {
    let err = default(&Value::object(Chameleon::default())).unwrap_err();
    assert!(err.is_type_mismatch());
}
