//! Sort builders.

use crate::ast::Sort;
use crate::ast::builders::IntoField;
use crate::error::QuernResult;

/// Ascending sort over a field (aggregate syntax accepted).
pub fn asc(field: impl IntoField) -> QuernResult<Sort> {
    Ok(Sort::asc(field.into_field()?))
}

/// Descending sort over a field (aggregate syntax accepted).
pub fn desc(field: impl IntoField) -> QuernResult<Sort> {
    Ok(Sort::desc(field.into_field()?))
}
