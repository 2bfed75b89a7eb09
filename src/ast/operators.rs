use serde::{Deserialize, Serialize};

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Equal (=)
    Eq,
    /// Not equal (<>)
    Ne,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Gte,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Lte,
    /// IS NULL
    IsNull,
    /// IS NOT NULL
    IsNotNull,
    /// LIKE pattern match
    Like,
    /// NOT LIKE pattern match
    NotLike,
    /// IN list
    In,
    /// NOT IN list
    NotIn,
    /// BETWEEN low AND high (bounds stored as a two-element value array)
    Between,
}

impl Operator {
    /// Returns the SQL symbol/keyword for this operator.
    pub fn sql_symbol(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "<>",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::Between => "BETWEEN",
        }
    }

    /// Returns true if this operator takes a right-hand side.
    /// IS NULL and IS NOT NULL don't.
    pub fn needs_value(&self) -> bool {
        !matches!(self, Operator::IsNull | Operator::IsNotNull)
    }
}

/// Logical operator joining the children of a junction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogicalOp {
    #[default]
    And,
    Or,
}

impl LogicalOp {
    /// The SQL keyword for this operator.
    pub fn sql_symbol(&self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
        }
    }

    /// The identity element of this operator under boolean evaluation:
    /// an empty AND is vacuously true, an empty OR is false.
    pub fn identity(&self) -> bool {
        match self {
            LogicalOp::And => true,
            LogicalOp::Or => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_symbols() {
        assert_eq!(Operator::Ne.sql_symbol(), "<>");
        assert_eq!(Operator::IsNotNull.sql_symbol(), "IS NOT NULL");
        assert_eq!(Operator::Between.sql_symbol(), "BETWEEN");
        assert_eq!(LogicalOp::Or.sql_symbol(), "OR");
    }

    #[test]
    fn test_needs_value() {
        assert!(Operator::Eq.needs_value());
        assert!(Operator::In.needs_value());
        assert!(!Operator::IsNull.needs_value());
        assert!(!Operator::IsNotNull.needs_value());
    }
}
