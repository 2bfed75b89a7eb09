//! The (SQL text, ordered parameters) pair produced by translation.

use serde::{Deserialize, Serialize};

use crate::ast::{SqlType, Value};

/// An immutable piece of SQL plus the parameters its `?` placeholders bind.
///
/// Invariant for every fragment this crate produces: the number of `?`
/// placeholders in [`sql`](Fragment::sql) equals
/// [`parameters`](Fragment::parameters)`.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Fragment {
    sql: String,
    parameters: Vec<Value>,
}

impl Fragment {
    pub fn new(sql: impl Into<String>, parameters: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            parameters,
        }
    }

    /// The SQL text, possibly containing positional `?` placeholders.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The parameters, in placeholder order.
    pub fn parameters(&self) -> &[Value] {
        &self.parameters
    }

    /// Append `other`'s parameters after this fragment's own.
    ///
    /// Text concatenation stays with the caller, so the placeholder order
    /// in the combined SQL matches the merged parameter order.
    pub fn merge(&mut self, other: Fragment) {
        self.parameters.extend(other.parameters);
    }

    /// Decompose into (sql, parameters) for hand-off to an execution layer.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.parameters)
    }

    /// SQL type tag for each parameter, positionally. Binding APIs that
    /// need an explicit type hint per parameter (notably for NULL) read
    /// this alongside [`parameters`](Fragment::parameters).
    pub fn parameter_types(&self) -> Vec<SqlType> {
        self.parameters.iter().map(Value::sql_type).collect()
    }

    /// Count of positional placeholders in the SQL text.
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_appends_parameters_in_order() {
        let mut fragment = Fragment::new("a = ?", vec![Value::Int(1)]);
        fragment.merge(Fragment::new("b = ?", vec![Value::from("x")]));
        assert_eq!(fragment.sql(), "a = ?");
        assert_eq!(
            fragment.parameters(),
            &[Value::Int(1), Value::Text("x".into())]
        );
    }

    #[test]
    fn test_parameter_types_are_positional() {
        use crate::ast::SqlType;

        let fragment = Fragment::new(
            "a = ? AND b = ? AND c = ?",
            vec![Value::Null, Value::BigInt(9), Value::from("s")],
        );
        assert_eq!(
            fragment.parameter_types(),
            vec![SqlType::Null, SqlType::BigInt, SqlType::Varchar]
        );
        assert_eq!(fragment.placeholder_count(), fragment.parameters().len());
    }
}
