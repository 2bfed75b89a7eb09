//! Database capabilities: the identifier-quote seam between the compiler
//! and whatever owns the connection.

use crate::error::QuernResult;

/// What the compiler needs to know about the target database.
///
/// The real provider is typically a live connection's metadata handle, so
/// the lookup is fallible; a failure aborts the current assemble call and
/// is not retried here.
pub trait DatabaseCapabilities {
    /// The string this database wraps identifiers in. Providers that do
    /// not support quoting report a blank string.
    fn identifier_quote(&self) -> QuernResult<String>;
}

/// Supported SQL dialects, usable directly as an infallible capability
/// provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    #[default]
    Ansi,
    Postgres,
    MySql,
    Sqlite,
    SqlServer,
}

impl Dialect {
    /// The identifier quote string for this dialect.
    pub fn quote(&self) -> &'static str {
        match self {
            Dialect::Ansi => "\"",
            Dialect::Postgres => "\"",
            Dialect::MySql => "`",
            Dialect::Sqlite => "\"",
            Dialect::SqlServer => "\"",
        }
    }
}

impl DatabaseCapabilities for Dialect {
    fn identifier_quote(&self) -> QuernResult<String> {
        Ok(self.quote().to_string())
    }
}
