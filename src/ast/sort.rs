//! Sort specifications.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ast::Field;

/// A sort over one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sort {
    field: Field,
    ascending: bool,
}

impl Sort {
    /// Ascending sort.
    pub fn asc(field: Field) -> Self {
        Self {
            field,
            ascending: true,
        }
    }

    /// Descending sort.
    pub fn desc(field: Field) -> Self {
        Self {
            field,
            ascending: false,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// The SQL direction keyword.
    pub fn direction(&self) -> &'static str {
        if self.ascending { "ASC" } else { "DESC" }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.direction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let sort = Sort::asc(Field::named("foo").unwrap());
        assert_eq!(sort.to_string(), "foo ASC");
        let sort = Sort::desc(Field::named("MAX(x)").unwrap());
        assert_eq!(sort.to_string(), "MAX(x) DESC");
    }
}
