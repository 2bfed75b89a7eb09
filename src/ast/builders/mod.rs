//! Ergonomic builder functions for the query symbol model.
//!
//! These helpers construct symbols without the verbosity of spelling out
//! structs directly.
//!
//! # Modules
//!
//! - `fields` - Field references (named, grouped, aggregates)
//! - `conditions` - WHERE/HAVING criteria (eq, gt, like, between, etc.)
//! - `sorts` - ORDER BY specifications
//!
//! # Example
//! ```ignore
//! use quern::prelude::*;
//!
//! let query = Query::new()
//!     .select([named("id")?, count("id", "total")?])
//!     .from("orders")
//!     .filter(eq("status", "open")?)
//!     .order_by([desc("created_at")?]);
//! ```

pub mod conditions;
pub mod fields;
pub mod sorts;

// Re-export everything for convenient `use quern::ast::builders::*;`

// Fields
pub use fields::{IntoField, avg, count, group, group_as, max, min, named, named_as, sum};

// Conditions
pub use conditions::{
    and, between, eq, gt, gte, is_in, is_not_null, is_null, like, lt, lte, ne, not_in, not_like,
    or,
};

// Sorts
pub use sorts::{asc, desc};
