//! Condition builders for WHERE and HAVING criteria.

use crate::ast::builders::IntoField;
use crate::ast::{Criterion, Expression, Junction, Operand, Operator, Value};
use crate::error::{QuernError, QuernResult};

fn comparison(
    field: impl IntoField,
    op: Operator,
    right: impl Into<Operand>,
) -> QuernResult<Expression> {
    Expression::new(Operand::Field(field.into_field()?), op, right.into())
}

/// Create an equality condition (field = value)
pub fn eq(field: impl IntoField, value: impl Into<Operand>) -> QuernResult<Expression> {
    comparison(field, Operator::Eq, value)
}

/// Create a not-equal condition (field <> value)
pub fn ne(field: impl IntoField, value: impl Into<Operand>) -> QuernResult<Expression> {
    comparison(field, Operator::Ne, value)
}

/// Create a greater-than condition (field > value)
pub fn gt(field: impl IntoField, value: impl Into<Operand>) -> QuernResult<Expression> {
    comparison(field, Operator::Gt, value)
}

/// Create a greater-than-or-equal condition (field >= value)
pub fn gte(field: impl IntoField, value: impl Into<Operand>) -> QuernResult<Expression> {
    comparison(field, Operator::Gte, value)
}

/// Create a less-than condition (field < value)
pub fn lt(field: impl IntoField, value: impl Into<Operand>) -> QuernResult<Expression> {
    comparison(field, Operator::Lt, value)
}

/// Create a less-than-or-equal condition (field <= value)
pub fn lte(field: impl IntoField, value: impl Into<Operand>) -> QuernResult<Expression> {
    comparison(field, Operator::Lte, value)
}

/// Create an IS NULL condition
pub fn is_null(field: impl IntoField) -> QuernResult<Expression> {
    comparison(field, Operator::IsNull, Value::Null)
}

/// Create an IS NOT NULL condition
pub fn is_not_null(field: impl IntoField) -> QuernResult<Expression> {
    comparison(field, Operator::IsNotNull, Value::Null)
}

/// Create a LIKE condition (field LIKE pattern)
pub fn like(field: impl IntoField, pattern: &str) -> QuernResult<Expression> {
    comparison(field, Operator::Like, Value::Text(pattern.to_string()))
}

/// Create a NOT LIKE condition
pub fn not_like(field: impl IntoField, pattern: &str) -> QuernResult<Expression> {
    comparison(field, Operator::NotLike, Value::Text(pattern.to_string()))
}

/// Create an IN condition (field IN (values)), preserving input order
pub fn is_in<V: Into<Value>>(
    field: impl IntoField,
    values: impl IntoIterator<Item = V>,
) -> QuernResult<Expression> {
    let values: Vec<Value> = values.into_iter().map(Into::into).collect();
    comparison(field, Operator::In, Value::Array(values))
}

/// Create a NOT IN condition (field NOT IN (values))
pub fn not_in<V: Into<Value>>(
    field: impl IntoField,
    values: impl IntoIterator<Item = V>,
) -> QuernResult<Expression> {
    let values: Vec<Value> = values.into_iter().map(Into::into).collect();
    comparison(field, Operator::NotIn, Value::Array(values))
}

/// Create a BETWEEN condition (field BETWEEN low AND high).
/// Both bounds must be non-NULL.
pub fn between(
    field: impl IntoField,
    low: impl Into<Value>,
    high: impl Into<Value>,
) -> QuernResult<Expression> {
    let low = low.into();
    let high = high.into();
    if matches!(low, Value::Null) {
        return Err(QuernError::NullBound("low"));
    }
    if matches!(high, Value::Null) {
        return Err(QuernError::NullBound("high"));
    }
    comparison(field, Operator::Between, Value::Array(vec![low, high]))
}

/// Conjoin two criteria; same-operator junctions flatten.
pub fn and(a: impl Into<Criterion>, b: impl Into<Criterion>) -> Junction {
    Junction::and(a, b)
}

/// Disjoin two criteria; same-operator junctions flatten.
pub fn or(a: impl Into<Criterion>, b: impl Into<Criterion>) -> Junction {
    Junction::or(a, b)
}
