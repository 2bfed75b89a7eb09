//! The SELECT statement builder.

use tracing::debug;

use crate::ast::{Clause, Criterion, Field, Junction, Sort};
use crate::error::{QuernError, QuernResult};
use crate::fragment::Fragment;
use crate::translator::{DatabaseCapabilities, Translator};

/// Accumulates select/filter/sort state and assembles one SELECT statement.
///
/// Setters accumulate rather than replace: repeated `select`/`order_by`
/// calls append, repeated `filter`/`having` calls AND-fold into the
/// existing criteria tree (with junction flattening). GROUP BY is derived
/// at assembly time from the group-kind members of the select clause.
///
/// `assemble` consumes the builder, so a query cannot be mutated or
/// reassembled after rendering.
#[derive(Debug, Clone, Default)]
pub struct Query {
    distinct: bool,
    select: Clause<Field>,
    from: Option<String>,
    filter: Junction,
    having: Junction,
    order: Clause<Sort>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append fields to the select list.
    pub fn select<I: IntoIterator<Item = Field>>(mut self, fields: I) -> Self {
        for field in fields {
            self.select.push(field);
        }
        self
    }

    /// Toggle SELECT DISTINCT.
    pub fn distinct(mut self, distinct: bool) -> Self {
        self.distinct = distinct;
        self
    }

    /// Set the table to select from. Rendered as a literal, never quoted.
    pub fn from(mut self, table: impl Into<String>) -> Self {
        self.from = Some(table.into());
        self
    }

    /// AND another criterion into the WHERE tree (flattening applies).
    pub fn filter(mut self, criterion: impl Into<Criterion>) -> Self {
        self.filter.absorb(criterion.into());
        self
    }

    /// AND another criterion into the HAVING tree (flattening applies).
    pub fn having(mut self, criterion: impl Into<Criterion>) -> Self {
        self.having.absorb(criterion.into());
        self
    }

    /// Append sorts to the ORDER BY list.
    pub fn order_by<I: IntoIterator<Item = Sort>>(mut self, sorts: I) -> Self {
        for sort in sorts {
            self.order.push(sort);
        }
        self
    }

    /// Render the full SELECT statement.
    ///
    /// The capability handle is only borrowed for the duration of this
    /// call; a failed identifier-quote lookup is fatal for the call and
    /// no partial fragment is returned. Parameters are merged in the
    /// textual order of the clauses that produce them (WHERE, then
    /// HAVING; the other clauses contribute none).
    pub fn assemble(self, capabilities: &dyn DatabaseCapabilities) -> QuernResult<Fragment> {
        let Some(table) = &self.from else {
            return Err(QuernError::MissingFrom);
        };
        let translator = Translator::new(capabilities)?;

        let mut sql = if self.distinct {
            String::from("SELECT DISTINCT ")
        } else {
            String::from("SELECT ")
        };

        if self.select.is_empty() {
            sql.push('*');
        } else {
            let items: Vec<String> = self
                .select
                .symbols()
                .iter()
                .map(|field| translator.select_item(field, true))
                .collect();
            sql.push_str(&items.join(", "));
        }

        sql.push_str(" FROM ");
        sql.push_str(table);

        let mut bound = Fragment::default();

        if !self.filter.is_empty() {
            let clause = render_criteria(&translator, &self.filter);
            sql.push_str(" WHERE ");
            sql.push_str(clause.sql());
            bound.merge(clause);
        }

        let groups: Clause<Field> = self
            .select
            .symbols()
            .iter()
            .filter(|field| field.is_group())
            .cloned()
            .collect();
        if !groups.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(translator.field_clause(&groups, true).sql());
        }

        if !self.having.is_empty() {
            let clause = render_criteria(&translator, &self.having);
            sql.push_str(" HAVING ");
            sql.push_str(clause.sql());
            bound.merge(clause);
        }

        if !self.order.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(translator.sort_clause(&self.order, true).sql());
        }

        let (_, parameters) = bound.into_parts();
        debug!(%sql, parameters = parameters.len(), "assembled select statement");
        Ok(Fragment::new(sql, parameters))
    }
}

/// A single accumulated criterion renders bare; only genuine conjunctions
/// get the junction's wrapping parentheses.
fn render_criteria(translator: &Translator, junction: &Junction) -> Fragment {
    match junction.criteria() {
        [single] => translator.criterion(single, true),
        _ => translator.junction(junction, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::LogicalOp;
    use crate::ast::builders::{eq, gt, named, or};

    #[test]
    fn test_filter_folds_with_flattening() {
        let query = Query::new()
            .filter(eq("a", 1).unwrap())
            .filter(Junction::and(eq("b", 2).unwrap(), eq("c", 3).unwrap()));
        assert_eq!(query.filter.op(), LogicalOp::And);
        assert_eq!(query.filter.len(), 3);
    }

    #[test]
    fn test_or_filter_kept_as_one_child() {
        let query = Query::new().filter(or(eq("a", 1).unwrap(), gt("b", 2).unwrap()));
        assert_eq!(query.filter.len(), 1);
    }

    #[test]
    fn test_select_accumulates() {
        let query = Query::new()
            .select([named("a").unwrap()])
            .select([named("b").unwrap()]);
        assert_eq!(query.select.len(), 2);
    }

    #[test]
    fn test_assemble_requires_from() {
        use crate::translator::Dialect;

        let result = Query::new().select([named("a").unwrap()]).assemble(&Dialect::Ansi);
        assert!(matches!(result, Err(QuernError::MissingFrom)));
    }
}
