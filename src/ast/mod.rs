//! The query symbol model.
//!
//! Everything here is plain, serializable data: fields, sorts, comparison
//! expressions, AND/OR junctions, and ordered clause lists. The
//! [`Translator`](crate::translator::Translator) turns these symbols into
//! SQL; nothing in this module produces SQL text itself.

pub mod builders;
pub mod clause;
pub mod criteria;
pub mod field;
pub mod operators;
pub mod sort;
pub mod values;

pub use self::clause::Clause;
pub use self::criteria::{Criterion, Expression, Junction, Operand};
pub use self::field::{AggregateFunc, Field, FieldKind};
pub use self::operators::{LogicalOp, Operator};
pub use self::sort::Sort;
pub use self::values::{SqlType, Value};

use serde::{Deserialize, Serialize};

/// Any element of the query object model, for top-level translation dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Symbol {
    /// A single field reference.
    Field(Field),
    /// A sort specification.
    Sort(Sort),
    /// A predicate node (expression or junction).
    Criterion(Criterion),
    /// A comma-joined field list (SELECT, GROUP BY).
    Fields(Clause<Field>),
    /// A comma-joined sort list (ORDER BY).
    Sorts(Clause<Sort>),
}

impl From<Field> for Symbol {
    fn from(field: Field) -> Self {
        Symbol::Field(field)
    }
}

impl From<Sort> for Symbol {
    fn from(sort: Sort) -> Self {
        Symbol::Sort(sort)
    }
}

impl From<Criterion> for Symbol {
    fn from(criterion: Criterion) -> Self {
        Symbol::Criterion(criterion)
    }
}

impl From<Expression> for Symbol {
    fn from(expression: Expression) -> Self {
        Symbol::Criterion(Criterion::Expression(expression))
    }
}

impl From<Junction> for Symbol {
    fn from(junction: Junction) -> Self {
        Symbol::Criterion(Criterion::Junction(junction))
    }
}

impl From<Clause<Field>> for Symbol {
    fn from(clause: Clause<Field>) -> Self {
        Symbol::Fields(clause)
    }
}

impl From<Clause<Sort>> for Symbol {
    fn from(clause: Clause<Sort>) -> Self {
        Symbol::Sorts(clause)
    }
}
