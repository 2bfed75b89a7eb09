//! Field builders.

use crate::ast::{AggregateFunc, Field};
use crate::error::QuernResult;

/// Anything usable as the column side of a comparison or a sort.
///
/// Raw strings are routed through [`Field::named`], so aggregate syntax
/// like `"SUM(amount)"` parses anywhere a field is accepted.
pub trait IntoField {
    fn into_field(self) -> QuernResult<Field>;
}

impl IntoField for Field {
    fn into_field(self) -> QuernResult<Field> {
        Ok(self)
    }
}

impl IntoField for &Field {
    fn into_field(self) -> QuernResult<Field> {
        Ok(self.clone())
    }
}

impl IntoField for &str {
    fn into_field(self) -> QuernResult<Field> {
        Field::named(self)
    }
}

impl IntoField for String {
    fn into_field(self) -> QuernResult<Field> {
        Field::named(&self)
    }
}

/// A field parsed from `name`, aliased to itself (or to the inner column
/// for aggregate syntax).
pub fn named(name: &str) -> QuernResult<Field> {
    Field::named(name)
}

/// Same as [`named`] with an explicit alias.
pub fn named_as(name: &str, alias: &str) -> QuernResult<Field> {
    Field::named_as(name, alias)
}

/// A GROUP BY participant.
pub fn group(name: &str) -> QuernResult<Field> {
    Field::grouped(name)
}

/// Same as [`group`] with an explicit alias.
pub fn group_as(name: &str, alias: &str) -> QuernResult<Field> {
    Field::grouped_as(name, alias)
}

/// COUNT(column) aggregate
pub fn count(column: &str, alias: &str) -> QuernResult<Field> {
    Field::aggregate(AggregateFunc::Count, column, alias)
}

/// SUM(column) aggregate
pub fn sum(column: &str, alias: &str) -> QuernResult<Field> {
    Field::aggregate(AggregateFunc::Sum, column, alias)
}

/// AVG(column) aggregate
pub fn avg(column: &str, alias: &str) -> QuernResult<Field> {
    Field::aggregate(AggregateFunc::Avg, column, alias)
}

/// MIN(column) aggregate
pub fn min(column: &str, alias: &str) -> QuernResult<Field> {
    Field::aggregate(AggregateFunc::Min, column, alias)
}

/// MAX(column) aggregate
pub fn max(column: &str, alias: &str) -> QuernResult<Field> {
    Field::aggregate(AggregateFunc::Max, column, alias)
}
