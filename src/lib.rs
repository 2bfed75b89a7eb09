//! quern — a typed SQL criteria compiler.
//!
//! Queries are built as plain data (fields, expressions, junctions, sorts),
//! then rendered into dialect-aware, parameterized SQL fragments.

pub mod ast;
pub mod error;
pub mod fragment;
pub mod query;
pub mod translator;

pub use error::{QuernError, QuernResult};
pub use fragment::Fragment;
pub use query::Query;
pub use translator::{DatabaseCapabilities, Dialect, Translator};

pub mod prelude {
    pub use crate::ast::builders::*;
    pub use crate::ast::*;
    pub use crate::error::*;
    pub use crate::fragment::Fragment;
    pub use crate::query::Query;
    pub use crate::translator::{DatabaseCapabilities, Dialect, Translator};
}
