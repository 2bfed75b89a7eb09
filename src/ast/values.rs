//! Literal values and their JDBC-style type tags.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A literal value carried by an expression and bound as a statement parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// NULL value
    Null,
    /// Boolean
    Bool(bool),
    /// 16-bit integer
    SmallInt(i16),
    /// 32-bit integer
    Int(i32),
    /// 64-bit integer
    BigInt(i64),
    /// 32-bit float
    Float(f32),
    /// 64-bit float
    Double(f64),
    /// Arbitrary-precision decimal
    Decimal(Decimal),
    /// String
    Text(String),
    /// Calendar date
    Date(NaiveDate),
    /// Time of day
    Time(NaiveTime),
    /// Date and time
    Timestamp(NaiveDateTime),
    /// UUID value
    Uuid(Uuid),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Ordered list of values (IN lists, BETWEEN bounds)
    Array(Vec<Value>),
}

/// SQL type tags, numerically identical to the `java.sql.Types` constants
/// consumed by JDBC-style binding APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum SqlType {
    Null = 0,
    Decimal = 3,
    Integer = 4,
    SmallInt = 5,
    Real = 7,
    Double = 8,
    Varchar = 12,
    Boolean = 16,
    Date = 91,
    Time = 92,
    Timestamp = 93,
    Varbinary = -3,
    BigInt = -5,
}

impl SqlType {
    /// The numeric tag.
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl Value {
    /// Map this value to its SQL type tag.
    ///
    /// Binders need the tag even for values that carry no type of their
    /// own — binding NULL without one is a driver error on several
    /// databases.
    pub fn sql_type(&self) -> SqlType {
        match self {
            Value::Null => SqlType::Null,
            Value::Bool(_) => SqlType::Boolean,
            Value::SmallInt(_) => SqlType::SmallInt,
            Value::Int(_) => SqlType::Integer,
            Value::BigInt(_) => SqlType::BigInt,
            Value::Float(_) => SqlType::Real,
            Value::Double(_) => SqlType::Double,
            Value::Decimal(_) => SqlType::Decimal,
            Value::Date(_) => SqlType::Date,
            Value::Time(_) => SqlType::Time,
            Value::Timestamp(_) => SqlType::Timestamp,
            Value::Bytes(_) => SqlType::Varbinary,
            Value::Text(_) | Value::Uuid(_) | Value::Array(_) => SqlType::Varchar,
        }
    }

    /// Numeric view for cross-variant comparison.
    fn as_f64(&self) -> Option<f64> {
        match self {
            Value::SmallInt(n) => Some(f64::from(*n)),
            Value::Int(n) => Some(f64::from(*n)),
            Value::BigInt(n) => Some(*n as f64),
            Value::Float(n) => Some(f64::from(*n)),
            Value::Double(n) => Some(*n),
            Value::Decimal(d) => d.to_f64(),
            _ => None,
        }
    }

    /// Compare two values the way the evaluator does: numerics are
    /// coerced across variants, text is lexicographic, temporal values
    /// chronological. NULL and mixed-kind pairs do not compare.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        if let (Some(a), Some(b)) = (self.as_f64(), other.as_f64()) {
            return if float_eq(a, b) {
                Some(Ordering::Equal)
            } else {
                a.partial_cmp(&b)
            };
        }
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
            (Value::Time(a), Value::Time(b)) => Some(a.cmp(b)),
            (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
            (Value::Uuid(a), Value::Uuid(b)) => Some(a.cmp(b)),
            (Value::Bytes(a), Value::Bytes(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

fn float_eq(a: f64, b: f64) -> bool {
    let diff = (a - b).abs();
    let eps = 1e-9_f64.max(1e-9_f64 * a.abs()).max(1e-9_f64 * b.abs());
    diff <= eps
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::SmallInt(n) => write!(f, "{}", n),
            Value::Int(n) => write!(f, "{}", n),
            Value::BigInt(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Double(n) => write!(f, "{}", n),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Value::Date(d) => write!(f, "'{}'", d),
            Value::Time(t) => write!(f, "'{}'", t),
            Value::Timestamp(ts) => write!(f, "'{}'", ts),
            Value::Uuid(u) => write!(f, "'{}'", u),
            Value::Bytes(bytes) => {
                write!(f, "X'")?;
                for byte in bytes {
                    write!(f, "{:02X}", byte)?;
                }
                write!(f, "'")
            }
            Value::Array(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i16> for Value {
    fn from(n: i16) -> Self {
        Value::SmallInt(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::BigInt(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Decimal(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<NaiveTime> for Value {
    fn from(t: NaiveTime) -> Self {
        Value::Time(t)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(ts: NaiveDateTime) -> Self {
        Value::Timestamp(ts)
    }
}

impl From<Uuid> for Value {
    fn from(u: Uuid) -> Self {
        Value::Uuid(u)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_type_tags() {
        assert_eq!(Value::Null.sql_type(), SqlType::Null);
        assert_eq!(Value::from(Decimal::new(995, 2)).sql_type(), SqlType::Decimal);
        assert_eq!(Value::from(1234_i64).sql_type(), SqlType::BigInt);
        assert_eq!(Value::Bytes(vec![]).sql_type(), SqlType::Varbinary);
        assert_eq!(Value::from("x").sql_type(), SqlType::Varchar);
        assert_eq!(Value::from(7_i16).sql_type(), SqlType::SmallInt);
        assert_eq!(Value::from(true).sql_type(), SqlType::Boolean);
        assert_eq!(Value::from(1.5_f32).sql_type(), SqlType::Real);
        assert_eq!(Value::from(1.5_f64).sql_type(), SqlType::Double);
    }

    #[test]
    fn test_sql_type_codes_match_jdbc() {
        assert_eq!(SqlType::Null.code(), 0);
        assert_eq!(SqlType::Varchar.code(), 12);
        assert_eq!(SqlType::BigInt.code(), -5);
        assert_eq!(SqlType::Varbinary.code(), -3);
        assert_eq!(SqlType::Timestamp.code(), 93);
    }

    #[test]
    fn test_cross_variant_numeric_compare() {
        assert_eq!(
            Value::Int(4).compare(&Value::Double(4.0)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            Value::BigInt(3).compare(&Value::Float(3.5)),
            Some(Ordering::Less)
        );
        assert_eq!(Value::Null.compare(&Value::Int(1)), None);
        assert_eq!(Value::from("a").compare(&Value::Int(1)), None);
    }

    #[test]
    fn test_display_escapes_quotes() {
        assert_eq!(Value::from("it's").to_string(), "'it''s'");
        assert_eq!(Value::Bytes(vec![0xAB, 0x01]).to_string(), "X'AB01'");
    }
}
