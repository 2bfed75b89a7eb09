//! Boolean criteria: leaf comparisons and AND/OR junction trees.

use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ast::{Field, LogicalOp, Operator, Value};
use crate::error::{QuernError, QuernResult};

/// One side of a comparison: a column reference or a literal.
///
/// Field operands compile to bare identifier text — no placeholder, no
/// parameter entry. Literal operands become `?` plus one parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    Field(Field),
    Value(Value),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Field(field) => write!(f, "{}", field),
            Operand::Value(value) => write!(f, "{}", value),
        }
    }
}

impl From<Field> for Operand {
    fn from(field: Field) -> Self {
        Operand::Field(field)
    }
}

impl From<&Field> for Operand {
    fn from(field: &Field) -> Self {
        Operand::Field(field.clone())
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Value(value)
    }
}

macro_rules! operand_from_literal {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Operand::Value(value.into())
                }
            }
        )+
    };
}

operand_from_literal!(
    bool, i16, i32, i64, f32, f64, Decimal, &str, String, NaiveDate, NaiveTime, NaiveDateTime,
    Uuid, Vec<u8>,
);

/// A leaf comparison.
///
/// Shape invariants are enforced at construction: IN / NOT IN carry a
/// non-empty value array, BETWEEN carries exactly two non-NULL bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    left: Operand,
    op: Operator,
    right: Operand,
}

impl Expression {
    /// Build a comparison, validating the right-hand shape for the operator.
    pub fn new(left: Operand, op: Operator, right: Operand) -> QuernResult<Self> {
        match op {
            Operator::In | Operator::NotIn => match &right {
                Operand::Value(Value::Array(values)) if values.is_empty() => {
                    return Err(QuernError::EmptyList(op.sql_symbol()));
                }
                Operand::Value(Value::Array(_)) => {}
                _ => return Err(QuernError::invalid_value(op.sql_symbol(), "a value list")),
            },
            Operator::Between => match &right {
                Operand::Value(Value::Array(bounds)) if bounds.len() == 2 => {
                    if matches!(bounds[0], Value::Null) {
                        return Err(QuernError::NullBound("low"));
                    }
                    if matches!(bounds[1], Value::Null) {
                        return Err(QuernError::NullBound("high"));
                    }
                }
                _ => {
                    return Err(QuernError::invalid_value(
                        op.sql_symbol(),
                        "exactly two bounds",
                    ));
                }
            },
            _ => {}
        }
        Ok(Self { left, op, right })
    }

    pub fn left(&self) -> &Operand {
        &self.left
    }

    pub fn op(&self) -> Operator {
        self.op
    }

    pub fn right(&self) -> &Operand {
        &self.right
    }

    /// Check this expression against a candidate value in memory, without
    /// generating SQL. Field-valued right-hand sides cannot be resolved
    /// here and never match.
    pub fn evaluate(&self, candidate: &Value) -> bool {
        match self.op {
            Operator::IsNull => return matches!(candidate, Value::Null),
            Operator::IsNotNull => return !matches!(candidate, Value::Null),
            _ => {}
        }
        if matches!(candidate, Value::Null) {
            return false;
        }
        let Operand::Value(right) = &self.right else {
            return false;
        };
        match self.op {
            Operator::Eq => candidate.compare(right) == Some(Ordering::Equal),
            Operator::Ne => matches!(
                candidate.compare(right),
                Some(Ordering::Less) | Some(Ordering::Greater)
            ),
            Operator::Gt => candidate.compare(right) == Some(Ordering::Greater),
            Operator::Gte => matches!(
                candidate.compare(right),
                Some(Ordering::Greater) | Some(Ordering::Equal)
            ),
            Operator::Lt => candidate.compare(right) == Some(Ordering::Less),
            Operator::Lte => matches!(
                candidate.compare(right),
                Some(Ordering::Less) | Some(Ordering::Equal)
            ),
            Operator::Like => like_matches(candidate, right),
            Operator::NotLike => is_text_pair(candidate, right) && !like_matches(candidate, right),
            Operator::In => in_list(right, candidate),
            Operator::NotIn => !in_list(right, candidate),
            Operator::Between => between_bounds(right, candidate),
            // dispatched before the null guard
            Operator::IsNull | Operator::IsNotNull => false,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            Operator::IsNull | Operator::IsNotNull => {
                write!(f, "{} {}", self.left, self.op.sql_symbol())
            }
            Operator::Between => match &self.right {
                Operand::Value(Value::Array(bounds)) if bounds.len() == 2 => {
                    write!(f, "{} BETWEEN {} AND {}", self.left, bounds[0], bounds[1])
                }
                right => write!(f, "{} BETWEEN {}", self.left, right),
            },
            _ => write!(f, "{} {} {}", self.left, self.op.sql_symbol(), self.right),
        }
    }
}

fn in_list(right: &Value, candidate: &Value) -> bool {
    match right {
        Value::Array(values) => values
            .iter()
            .any(|value| candidate.compare(value) == Some(Ordering::Equal)),
        single => candidate.compare(single) == Some(Ordering::Equal),
    }
}

fn between_bounds(right: &Value, candidate: &Value) -> bool {
    let Value::Array(bounds) = right else {
        return false;
    };
    let [low, high] = bounds.as_slice() else {
        return false;
    };
    matches!(
        candidate.compare(low),
        Some(Ordering::Greater) | Some(Ordering::Equal)
    ) && matches!(
        candidate.compare(high),
        Some(Ordering::Less) | Some(Ordering::Equal)
    )
}

fn is_text_pair(candidate: &Value, pattern: &Value) -> bool {
    matches!(candidate, Value::Text(_)) && matches!(pattern, Value::Text(_))
}

/// SQL LIKE over in-memory text: `%` matches any run, `_` one character,
/// everything else literally.
fn like_matches(candidate: &Value, pattern: &Value) -> bool {
    let (Value::Text(value), Value::Text(pattern)) = (candidate, pattern) else {
        return false;
    };
    let mut regex = String::from("^");
    for ch in pattern.chars() {
        match ch {
            '%' => regex.push_str(".*"),
            '_' => regex.push('.'),
            '.' | '+' | '*' | '?' | '(' | ')' | '|' | '^' | '$' | '{' | '}' | '[' | ']' | '\\' => {
                regex.push('\\');
                regex.push(ch);
            }
            c => regex.push(c),
        }
    }
    regex.push('$');
    Regex::new(&regex)
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

/// An AND/OR node over an ordered list of child criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Junction {
    op: LogicalOp,
    criteria: Vec<Criterion>,
}

impl Junction {
    /// An empty junction with the given operator.
    pub fn new(op: LogicalOp) -> Self {
        Self {
            op,
            criteria: Vec::new(),
        }
    }

    /// Conjoin two criteria. A same-operator junction operand is absorbed
    /// into this node's child list instead of nesting.
    pub fn and(a: impl Into<Criterion>, b: impl Into<Criterion>) -> Self {
        let mut junction = Self::new(LogicalOp::And);
        junction.absorb(a.into());
        junction.absorb(b.into());
        junction
    }

    /// Disjoin two criteria, with the same flattening rule.
    pub fn or(a: impl Into<Criterion>, b: impl Into<Criterion>) -> Self {
        let mut junction = Self::new(LogicalOp::Or);
        junction.absorb(a.into());
        junction.absorb(b.into());
        junction
    }

    /// Add one more criterion, builder-style, flattening as `and`/`or` do.
    pub fn push(mut self, criterion: impl Into<Criterion>) -> Self {
        self.absorb(criterion.into());
        self
    }

    pub(crate) fn absorb(&mut self, criterion: Criterion) {
        match criterion {
            Criterion::Junction(junction) if junction.op == self.op => {
                self.criteria.extend(junction.criteria);
            }
            other => self.criteria.push(other),
        }
    }

    pub fn op(&self) -> LogicalOp {
        self.op
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Short-circuiting evaluation: AND stops at the first false child,
    /// OR at the first true one. An empty junction yields its operator's
    /// identity element.
    pub fn evaluate(&self, candidate: &Value) -> bool {
        match self.op {
            LogicalOp::And => self.criteria.iter().all(|c| c.evaluate(candidate)),
            LogicalOp::Or => self.criteria.iter().any(|c| c.evaluate(candidate)),
        }
    }
}

impl fmt::Display for Junction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.criteria.is_empty() {
            return write!(f, "()");
        }
        write!(f, "( ")?;
        for (i, criterion) in self.criteria.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", self.op.sql_symbol())?;
            }
            write!(f, "{}", criterion)?;
        }
        write!(f, " )")
    }
}

/// A boolean-valued predicate node: a leaf comparison or a compound
/// AND/OR tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Criterion {
    Expression(Expression),
    Junction(Junction),
}

impl Criterion {
    /// In-memory check against a candidate value.
    pub fn evaluate(&self, candidate: &Value) -> bool {
        match self {
            Criterion::Expression(expression) => expression.evaluate(candidate),
            Criterion::Junction(junction) => junction.evaluate(candidate),
        }
    }
}

impl From<Expression> for Criterion {
    fn from(expression: Expression) -> Self {
        Criterion::Expression(expression)
    }
}

impl From<Junction> for Criterion {
    fn from(junction: Junction) -> Self {
        Criterion::Junction(junction)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Expression(expression) => write!(f, "{}", expression),
            Criterion::Junction(junction) => write!(f, "{}", junction),
        }
    }
}
