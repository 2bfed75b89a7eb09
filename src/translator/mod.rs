//! Renders query symbols into SQL fragments.

pub mod dialect;

pub use dialect::{DatabaseCapabilities, Dialect};

use crate::ast::{
    Clause, Criterion, Expression, Field, FieldKind, Junction, Operand, Operator, Sort, Symbol,
    Value,
};
use crate::error::QuernResult;
use crate::fragment::Fragment;

/// Turns any [`Symbol`] into SQL text, given a quoting flag per call and
/// an optional table prefix.
///
/// Every translate call takes an explicit `quote` flag; there is no
/// default quoting policy. Literal operands become `?` placeholders with
/// one parameter entry each; field operands become identifier text with
/// no parameter entry.
#[derive(Debug, Clone)]
pub struct Translator {
    quote: String,
    table: Option<String>,
}

impl Translator {
    /// Build a translator from a capability provider. Fails if the
    /// provider cannot report its identifier quote.
    pub fn new(capabilities: &dyn DatabaseCapabilities) -> QuernResult<Self> {
        Ok(Self::with_quote(capabilities.identifier_quote()?))
    }

    /// Build a translator around a known identifier quote string.
    ///
    /// JDBC-style metadata reports a single space when the database does
    /// not support quoted identifiers; that (or an empty string) disables
    /// quoting regardless of the per-call flag.
    pub fn with_quote(quote: impl Into<String>) -> Self {
        Self {
            quote: quote.into().trim().to_string(),
            table: None,
        }
    }

    /// Set the table prefix prepended (as `name.`) to every field
    /// reference until changed again. Returns the translator for chaining.
    pub fn table(mut self, name: impl Into<String>) -> Self {
        self.table = Some(name.into());
        self
    }

    fn quoted(&self, identifier: &str, quote: bool) -> String {
        if quote && !self.quote.is_empty() {
            let doubled = self.quote.repeat(2);
            format!(
                "{q}{}{q}",
                identifier.replace(&self.quote, &doubled),
                q = self.quote
            )
        } else {
            identifier.to_string()
        }
    }

    /// `[table.]name` with the aggregate wrapper applied, no alias suffix.
    /// This is the form WHERE/HAVING/GROUP BY/ORDER BY use.
    pub fn field_reference(&self, field: &Field, quote: bool) -> String {
        let mut name = self.quoted(field.name(), quote);
        if let Some(table) = &self.table {
            name = format!("{}.{}", table, name);
        }
        match field.kind() {
            FieldKind::Aggregate(func) => format!("{}({})", func, name),
            FieldKind::Plain | FieldKind::Group => name,
        }
    }

    /// `[table.]name AS alias` — the select-list form, alias always
    /// emitted.
    pub fn select_item(&self, field: &Field, quote: bool) -> String {
        format!(
            "{} AS {}",
            self.field_reference(field, quote),
            self.quoted(field.alias(), quote)
        )
    }

    /// `<field reference> ASC|DESC`.
    pub fn sort_reference(&self, sort: &Sort, quote: bool) -> String {
        format!(
            "{} {}",
            self.field_reference(sort.field(), quote),
            sort.direction()
        )
    }

    /// Render a leaf comparison, collecting one parameter per literal.
    pub fn expression(&self, expression: &Expression, quote: bool) -> Fragment {
        let mut parameters = Vec::new();
        let left = self.operand(expression.left(), quote, &mut parameters);
        let op = expression.op();
        let sql = match op {
            Operator::IsNull | Operator::IsNotNull => {
                format!("{} {}", left, op.sql_symbol())
            }
            Operator::In | Operator::NotIn => {
                let placeholders = self
                    .elements(expression.right())
                    .iter()
                    .map(|value| {
                        parameters.push((*value).clone());
                        "?"
                    })
                    .collect::<Vec<_>>()
                    .join(",");
                format!("{} {} ({})", left, op.sql_symbol(), placeholders)
            }
            Operator::Between => {
                // exactly two non-NULL bounds, validated at construction
                for bound in self.elements(expression.right()) {
                    parameters.push(bound.clone());
                }
                format!("{} BETWEEN ? AND ?", left)
            }
            _ => {
                let right = self.operand(expression.right(), quote, &mut parameters);
                format!("{} {} {}", left, op.sql_symbol(), right)
            }
        };
        Fragment::new(sql, parameters)
    }

    /// Render a junction: children joined with the junction's operator,
    /// the whole joined string wrapped in one pair of parentheses,
    /// parameters concatenated in traversal order.
    pub fn junction(&self, junction: &Junction, quote: bool) -> Fragment {
        let separator = format!(" {} ", junction.op().sql_symbol());
        let mut parameters = Vec::new();
        let mut children = Vec::with_capacity(junction.len());
        for criterion in junction.criteria() {
            let (sql, params) = self.criterion(criterion, quote).into_parts();
            children.push(sql);
            parameters.extend(params);
        }
        Fragment::new(format!("({})", children.join(&separator)), parameters)
    }

    /// Dispatch on the criterion variant.
    pub fn criterion(&self, criterion: &Criterion, quote: bool) -> Fragment {
        match criterion {
            Criterion::Expression(expression) => self.expression(expression, quote),
            Criterion::Junction(junction) => self.junction(junction, quote),
        }
    }

    /// Comma-join a field clause (SELECT and GROUP BY lists), references
    /// only, no wrapping parentheses.
    pub fn field_clause(&self, clause: &Clause<Field>, quote: bool) -> Fragment {
        let members: Vec<String> = clause
            .symbols()
            .iter()
            .map(|field| self.field_reference(field, quote))
            .collect();
        Fragment::new(members.join(", "), Vec::new())
    }

    /// Comma-join a sort clause (ORDER BY lists).
    pub fn sort_clause(&self, clause: &Clause<Sort>, quote: bool) -> Fragment {
        let members: Vec<String> = clause
            .symbols()
            .iter()
            .map(|sort| self.sort_reference(sort, quote))
            .collect();
        Fragment::new(members.join(", "), Vec::new())
    }

    /// Top-level dispatch across every symbol variant.
    pub fn translate(&self, symbol: &Symbol, quote: bool) -> Fragment {
        match symbol {
            Symbol::Field(field) => Fragment::new(self.field_reference(field, quote), Vec::new()),
            Symbol::Sort(sort) => Fragment::new(self.sort_reference(sort, quote), Vec::new()),
            Symbol::Criterion(criterion) => self.criterion(criterion, quote),
            Symbol::Fields(clause) => self.field_clause(clause, quote),
            Symbol::Sorts(clause) => self.sort_clause(clause, quote),
        }
    }

    fn operand(&self, operand: &Operand, quote: bool, parameters: &mut Vec<Value>) -> String {
        match operand {
            Operand::Field(field) => self.field_reference(field, quote),
            Operand::Value(value) => {
                parameters.push(value.clone());
                "?".to_string()
            }
        }
    }

    /// The element list behind an IN/BETWEEN right-hand side.
    fn elements<'a>(&self, operand: &'a Operand) -> &'a [Value] {
        match operand {
            Operand::Value(Value::Array(values)) => values,
            Operand::Value(value) => std::slice::from_ref(value),
            Operand::Field(_) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::builders::{asc, between, eq, gte, is_in, is_null, max, named, ne, or};
    use crate::ast::Operator;

    fn ansi() -> Translator {
        Translator::with_quote("\"")
    }

    #[test]
    fn test_expression_unquoted() {
        let fragment = ansi().expression(&eq("a", 4).unwrap(), false);
        assert_eq!(fragment.sql(), "a = ?");
        assert_eq!(fragment.parameters(), &[Value::Int(4)]);
    }

    #[test]
    fn test_junction_quoted() {
        let junction = or(eq("b", "foo").unwrap(), ne("c", "bar").unwrap());
        let fragment = ansi().junction(&junction, true);
        assert_eq!(fragment.sql(), "(\"b\" = ? OR \"c\" <> ?)");
        assert_eq!(
            fragment.parameters(),
            &[Value::Text("foo".into()), Value::Text("bar".into())]
        );
    }

    #[test]
    fn test_nested_junction_keeps_inner_parens() {
        let junction = Junction::and(
            or(eq("a", 1).unwrap(), eq("b", 2).unwrap()),
            eq("c", 3).unwrap(),
        );
        let fragment = ansi().junction(&junction, false);
        assert_eq!(fragment.sql(), "((a = ? OR b = ?) AND c = ?)");
        assert_eq!(
            fragment.parameters(),
            &[Value::Int(1), Value::Int(2), Value::Int(3)]
        );
    }

    #[test]
    fn test_in_list_one_placeholder_per_element() {
        let fragment = ansi().expression(&is_in("n", [1, 2, 3]).unwrap(), false);
        assert_eq!(fragment.sql(), "n IN (?,?,?)");
        assert_eq!(
            fragment.parameters(),
            &[Value::Int(1), Value::Int(2), Value::Int(3)]
        );
    }

    #[test]
    fn test_between_two_placeholders() {
        let fragment = ansi().expression(&between("age", 18, 65).unwrap(), false);
        assert_eq!(fragment.sql(), "age BETWEEN ? AND ?");
        assert_eq!(fragment.parameters(), &[Value::Int(18), Value::Int(65)]);
    }

    #[test]
    fn test_field_valued_right_is_bare_identifier() {
        let other = named("b").unwrap();
        let fragment = ansi().expression(&eq("a", other).unwrap(), true);
        assert_eq!(fragment.sql(), "\"a\" = \"b\"");
        assert!(fragment.parameters().is_empty());
    }

    #[test]
    fn test_is_null_no_parameters() {
        let fragment = ansi().expression(&is_null("a").unwrap(), false);
        assert_eq!(fragment.sql(), "a IS NULL");
        assert!(fragment.parameters().is_empty());
    }

    #[test]
    fn test_aggregate_reference_wraps_inner_text() {
        let field = max("test", "maxTest").unwrap();
        assert_eq!(ansi().field_reference(&field, true), "MAX(\"test\")");
        assert_eq!(
            ansi().select_item(&field, true),
            "MAX(\"test\") AS \"maxTest\""
        );
    }

    #[test]
    fn test_table_prefix_applies_inside_aggregate() {
        let translator = ansi().table("t");
        let field = max("test", "maxTest").unwrap();
        assert_eq!(translator.field_reference(&field, true), "MAX(t.\"test\")");
        let plain = named("foo").unwrap();
        assert_eq!(translator.field_reference(&plain, false), "t.foo");
    }

    #[test]
    fn test_quote_doubling() {
        let field = named("we\"ird").unwrap();
        assert_eq!(ansi().field_reference(&field, true), "\"we\"\"ird\"");
    }

    #[test]
    fn test_blank_quote_disables_quoting() {
        // JDBC metadata reports " " when quoting is unsupported
        let translator = Translator::with_quote(" ");
        let field = named("order").unwrap();
        assert_eq!(translator.field_reference(&field, true), "order");
    }

    #[test]
    fn test_sort_reference() {
        let translator = ansi();
        let sort = asc("foo").unwrap();
        assert_eq!(translator.sort_reference(&sort, true), "\"foo\" ASC");
    }

    #[test]
    fn test_clause_members_comma_joined() {
        let clause: Clause<Field> = [named("a").unwrap(), named("b").unwrap()]
            .into_iter()
            .collect();
        let fragment = ansi().field_clause(&clause, true);
        assert_eq!(fragment.sql(), "\"a\", \"b\"");
    }

    #[test]
    fn test_translate_dispatch() {
        let translator = ansi();
        let fragment = translator.translate(&Symbol::from(named("a").unwrap()), true);
        assert_eq!(fragment.sql(), "\"a\"");

        let fragment = translator.translate(&Symbol::from(gte("n", 2).unwrap()), false);
        assert_eq!(fragment.sql(), "n >= ?");
        assert_eq!(fragment.parameters(), &[Value::Int(2)]);

        let sorts: Clause<Sort> = [asc("a").unwrap()].into_iter().collect();
        let fragment = translator.translate(&Symbol::from(sorts), false);
        assert_eq!(fragment.sql(), "a ASC");
    }

    #[test]
    fn test_placeholder_count_matches_parameters() {
        let junction = Junction::and(
            is_in("n", [1, 2]).unwrap(),
            or(
                between("age", 18, 65).unwrap(),
                Expression::new(
                    Operand::Field(named("a").unwrap()),
                    Operator::Eq,
                    Operand::Field(named("b").unwrap()),
                )
                .unwrap(),
            ),
        );
        let fragment = ansi().junction(&junction, true);
        assert_eq!(fragment.placeholder_count(), fragment.parameters().len());
    }
}
