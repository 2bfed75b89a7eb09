//! Field references: plain columns, aggregates, and GROUP BY markers.

use std::fmt;
use std::hash::{Hash, Hasher};

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag_no_case, take_while1},
    character::complete::char,
    combinator::value,
    sequence::{delimited, pair},
};
use serde::{Deserialize, Serialize};

use crate::error::{QuernError, QuernResult};

/// Aggregate functions recognized in field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregateFunc {
    Avg,
    Max,
    Min,
    Count,
    Sum,
}

impl fmt::Display for AggregateFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateFunc::Avg => write!(f, "AVG"),
            AggregateFunc::Max => write!(f, "MAX"),
            AggregateFunc::Min => write!(f, "MIN"),
            AggregateFunc::Count => write!(f, "COUNT"),
            AggregateFunc::Sum => write!(f, "SUM"),
        }
    }
}

/// The role a field plays when it reaches a select list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FieldKind {
    /// An ordinary column reference.
    #[default]
    Plain,
    /// A column wrapped in an aggregate function.
    Aggregate(AggregateFunc),
    /// A column that participates in GROUP BY when selected.
    Group,
}

/// A column reference with an output alias.
///
/// Names and aliases are trimmed on construction and must be non-blank.
/// Identity is `(name, alias)`: the kind marker does not make two
/// references to the same output column different.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    name: String,
    alias: String,
    kind: FieldKind,
}

impl Field {
    /// Build a field from a raw name, aliased to itself.
    ///
    /// A name of the shape `FUNC(inner)` with one of the five aggregate
    /// keywords (case-insensitive) becomes an aggregate over the inner
    /// column, aliased to the inner column name.
    pub fn named(name: impl AsRef<str>) -> QuernResult<Self> {
        let name = trimmed(name.as_ref(), "name")?;
        if let Some((func, inner)) = parse_aggregate(&name) {
            let inner = trimmed(&inner, "name")?;
            return Ok(Self {
                alias: inner.clone(),
                name: inner,
                kind: FieldKind::Aggregate(func),
            });
        }
        Ok(Self {
            alias: name.clone(),
            name,
            kind: FieldKind::Plain,
        })
    }

    /// Same as [`Field::named`], preserving the caller-supplied alias.
    pub fn named_as(name: impl AsRef<str>, alias: impl AsRef<str>) -> QuernResult<Self> {
        let alias = trimmed(alias.as_ref(), "alias")?;
        let mut field = Self::named(name)?;
        field.alias = alias;
        Ok(field)
    }

    /// Build a GROUP BY participant. No aggregate parsing.
    pub fn grouped(name: impl AsRef<str>) -> QuernResult<Self> {
        let name = trimmed(name.as_ref(), "name")?;
        Ok(Self {
            alias: name.clone(),
            name,
            kind: FieldKind::Group,
        })
    }

    /// Same as [`Field::grouped`] with an explicit alias.
    pub fn grouped_as(name: impl AsRef<str>, alias: impl AsRef<str>) -> QuernResult<Self> {
        let mut field = Self::grouped(name)?;
        field.alias = trimmed(alias.as_ref(), "alias")?;
        Ok(field)
    }

    /// Build an aggregate field directly, bypassing the name grammar.
    pub fn aggregate(
        func: AggregateFunc,
        name: impl AsRef<str>,
        alias: impl AsRef<str>,
    ) -> QuernResult<Self> {
        Ok(Self {
            name: trimmed(name.as_ref(), "name")?,
            alias: trimmed(alias.as_ref(), "alias")?,
            kind: FieldKind::Aggregate(func),
        })
    }

    /// The column name (for aggregates, the inner column).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The output alias.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// The field's role.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Whether this field participates in GROUP BY when selected.
    pub fn is_group(&self) -> bool {
        matches!(self.kind, FieldKind::Group)
    }

    /// The aggregate function, if any.
    pub fn aggregate_func(&self) -> Option<AggregateFunc> {
        match self.kind {
            FieldKind::Aggregate(func) => Some(func),
            FieldKind::Plain | FieldKind::Group => None,
        }
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.alias == other.alias
    }
}

impl Eq for Field {}

impl Hash for Field {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.alias.hash(state);
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FieldKind::Aggregate(func) => write!(f, "{}({})", func, self.name),
            FieldKind::Plain | FieldKind::Group => write!(f, "{}", self.name),
        }
    }
}

fn trimmed(input: &str, what: &'static str) -> QuernResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(QuernError::blank(what));
    }
    Ok(trimmed.to_string())
}

/// Recognize a complete `FUNC(inner)` aggregate name.
fn parse_aggregate(input: &str) -> Option<(AggregateFunc, String)> {
    match aggregate_expr(input) {
        Ok(("", (func, inner))) => Some((func, inner.to_string())),
        _ => None,
    }
}

fn aggregate_expr(input: &str) -> IResult<&str, (AggregateFunc, &str)> {
    pair(
        aggregate_keyword,
        delimited(char('('), take_while1(|c| c != ')'), char(')')),
    )(input)
}

fn aggregate_keyword(input: &str) -> IResult<&str, AggregateFunc> {
    alt((
        value(AggregateFunc::Avg, tag_no_case("AVG")),
        value(AggregateFunc::Max, tag_no_case("MAX")),
        value(AggregateFunc::Min, tag_no_case("MIN")),
        value(AggregateFunc::Count, tag_no_case("COUNT")),
        value(AggregateFunc::Sum, tag_no_case("SUM")),
    ))(input)
}
