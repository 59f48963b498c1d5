//! Fallback scalar encoder: the last rule of the resolution chain.
//!
//! Date/time values follow the usual web-framework JSON conventions:
//! sub-second precision is truncated to milliseconds, a zero UTC offset is
//! written as `Z`, and durations use the ISO 8601 `P{d}DT{h}H{m}M{s}S` form.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    DateTime(DateTime<FixedOffset>),
    NaiveDateTime(NaiveDateTime),
    Date(NaiveDate),
    Time(NaiveTime),
    Duration(TimeDelta),
    Decimal(Decimal),
    Uuid(Uuid),
}

impl Scalar {
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::DateTime(_) | Scalar::NaiveDateTime(_) => "datetime",
            Scalar::Date(_) => "date",
            Scalar::Time(_) => "time",
            Scalar::Duration(_) => "duration",
            Scalar::Decimal(_) => "decimal",
            Scalar::Uuid(_) => "uuid",
        }
    }

    /// The JSON string this scalar reduces to.
    pub fn to_json_string(&self) -> String {
        match self {
            Scalar::DateTime(dt) => {
                let mut out = dt.format("%Y-%m-%dT%H:%M:%S").to_string();
                push_millis(&mut out, dt.nanosecond());
                match dt.offset().local_minus_utc() {
                    0 => out.push('Z'),
                    secs if secs % 60 != 0 => out.push_str(&dt.format("%::z").to_string()),
                    _ => out.push_str(&dt.format("%:z").to_string()),
                }
                out
            }
            Scalar::NaiveDateTime(dt) => {
                let mut out = dt.format("%Y-%m-%dT%H:%M:%S").to_string();
                push_millis(&mut out, dt.nanosecond());
                out
            }
            Scalar::Date(d) => d.format("%Y-%m-%d").to_string(),
            Scalar::Time(t) => {
                let mut out = t.format("%H:%M:%S").to_string();
                push_millis(&mut out, t.nanosecond());
                out
            }
            Scalar::Duration(d) => duration_iso_string(*d),
            Scalar::Decimal(d) => d.to_string(),
            Scalar::Uuid(u) => u.hyphenated().to_string(),
        }
    }
}

// Microsecond resolution, then cut to three digits; a value with only
// sub-millisecond precision still gets ".000".
fn push_millis(out: &mut String, nanos: u32) {
    let micros = (nanos % 1_000_000_000) / 1_000;
    if micros != 0 {
        out.push_str(&format!(".{:03}", micros / 1_000));
    }
}

fn duration_iso_string(duration: TimeDelta) -> String {
    let (sign, duration) = if duration < TimeDelta::zero() {
        ("-", -duration)
    } else {
        ("", duration)
    };
    let days = duration.num_days();
    let secs = duration.num_seconds() - days * 86_400;
    let micros = duration.subsec_nanos() / 1_000;
    let (hours, minutes, seconds) = (secs / 3_600, (secs % 3_600) / 60, secs % 60);
    let fraction = if micros != 0 {
        format!(".{:06}", micros)
    } else {
        String::new()
    };
    format!("{sign}P{days}DT{hours:02}H{minutes:02}M{seconds:02}{fraction}S")
}

macro_rules! scalar_from {
    ($($t:ty => $variant:ident),* $(,)?) => {$(
        impl From<$t> for Scalar {
            fn from(v: $t) -> Self { Scalar::$variant(v) }
        }
        impl From<$t> for Value {
            fn from(v: $t) -> Self { Value::Scalar(Scalar::$variant(v)) }
        }
    )*};
}

scalar_from!(
    DateTime<FixedOffset> => DateTime,
    NaiveDateTime => NaiveDateTime,
    NaiveDate => Date,
    NaiveTime => Time,
    TimeDelta => Duration,
    Decimal => Decimal,
    Uuid => Uuid,
);

impl From<DateTime<Utc>> for Scalar {
    fn from(v: DateTime<Utc>) -> Self {
        Scalar::DateTime(v.fixed_offset())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Scalar(v.into())
    }
}
