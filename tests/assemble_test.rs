//! End-to-end SELECT assembly tests.

use pretty_assertions::assert_eq;

use quern::prelude::*;

#[test]
fn test_full_select_assembly() {
    let fragment = Query::new()
        .select([
            group_as("fuzz", "grp").unwrap(),
            named_as("foo", "f").unwrap(),
            named("bar").unwrap(),
        ])
        .from("place")
        .filter(eq("baz", 5).unwrap())
        .having(gte(max("test", "maxTest").unwrap(), "lorem ipsum").unwrap())
        .order_by([asc("foo").unwrap()])
        .assemble(&Dialect::Ansi)
        .unwrap();

    assert_eq!(
        fragment.sql(),
        "SELECT \"fuzz\" AS \"grp\", \"foo\" AS \"f\", \"bar\" AS \"bar\" FROM place \
         WHERE \"baz\" = ? GROUP BY \"fuzz\" HAVING MAX(\"test\") >= ? ORDER BY \"foo\" ASC"
    );
    assert_eq!(
        fragment.parameters(),
        &[Value::Int(5), Value::Text("lorem ipsum".into())]
    );
    assert_eq!(fragment.placeholder_count(), fragment.parameters().len());
}

#[test]
fn test_distinct_and_empty_select_list() {
    let fragment = Query::new()
        .distinct(true)
        .from("users")
        .assemble(&Dialect::Ansi)
        .unwrap();
    assert_eq!(fragment.sql(), "SELECT DISTINCT * FROM users");
    assert!(fragment.parameters().is_empty());
}

#[test]
fn test_where_only_no_group_no_order() {
    let fragment = Query::new()
        .select([named("id").unwrap(), named("email").unwrap()])
        .from("users")
        .filter(eq("active", true).unwrap())
        .assemble(&Dialect::Ansi)
        .unwrap();
    assert_eq!(
        fragment.sql(),
        "SELECT \"id\" AS \"id\", \"email\" AS \"email\" FROM users WHERE \"active\" = ?"
    );
    assert_eq!(fragment.parameters(), &[Value::Bool(true)]);
}

#[test]
fn test_accumulated_filters_render_as_one_and() {
    let fragment = Query::new()
        .select([named("id").unwrap()])
        .from("users")
        .filter(eq("active", true).unwrap())
        .filter(or(eq("role", "admin").unwrap(), eq("role", "mod").unwrap()))
        .assemble(&Dialect::Ansi)
        .unwrap();
    assert_eq!(
        fragment.sql(),
        "SELECT \"id\" AS \"id\" FROM users \
         WHERE (\"active\" = ? AND (\"role\" = ? OR \"role\" = ?))"
    );
    assert_eq!(
        fragment.parameters(),
        &[
            Value::Bool(true),
            Value::Text("admin".into()),
            Value::Text("mod".into())
        ]
    );
}

#[test]
fn test_mysql_backtick_quoting() {
    let fragment = Query::new()
        .select([named("id").unwrap()])
        .from("orders")
        .filter(eq("status", "open").unwrap())
        .assemble(&Dialect::MySql)
        .unwrap();
    assert_eq!(
        fragment.sql(),
        "SELECT `id` AS `id` FROM orders WHERE `status` = ?"
    );
}

#[test]
fn test_group_by_derived_at_assembly_time() {
    // a group-kind field selected alongside aggregates drives GROUP BY
    let fragment = Query::new()
        .select([group("region").unwrap(), sum("amount", "total").unwrap()])
        .from("sales")
        .assemble(&Dialect::Ansi)
        .unwrap();
    assert_eq!(
        fragment.sql(),
        "SELECT \"region\" AS \"region\", SUM(\"amount\") AS \"total\" \
         FROM sales GROUP BY \"region\""
    );
}

#[test]
fn test_parameter_merge_order_where_then_having() {
    let fragment = Query::new()
        .select([group("dept").unwrap(), count("id", "headcount").unwrap()])
        .from("staff")
        .filter(between("hired", 2000, 2020).unwrap())
        .having(gt(count("id", "headcount").unwrap(), 10).unwrap())
        .assemble(&Dialect::Ansi)
        .unwrap();
    assert_eq!(
        fragment.sql(),
        "SELECT \"dept\" AS \"dept\", COUNT(\"id\") AS \"headcount\" FROM staff \
         WHERE \"hired\" BETWEEN ? AND ? GROUP BY \"dept\" HAVING COUNT(\"id\") > ?"
    );
    assert_eq!(
        fragment.parameters(),
        &[Value::Int(2000), Value::Int(2020), Value::Int(10)]
    );
    assert_eq!(fragment.placeholder_count(), 3);
}

#[test]
fn test_capability_failure_is_fatal_for_the_call() {
    struct Flaky;

    impl DatabaseCapabilities for Flaky {
        fn identifier_quote(&self) -> QuernResult<String> {
            Err(QuernError::capability("connection lost"))
        }
    }

    let result = Query::new()
        .select([named("id").unwrap()])
        .from("users")
        .assemble(&Flaky);
    assert!(matches!(result, Err(QuernError::Capability(_))));
}

#[test]
fn test_in_list_assembly_preserves_order() {
    let fragment = Query::new()
        .select([named("id").unwrap()])
        .from("users")
        .filter(is_in("role", ["admin", "mod", "guest"]).unwrap())
        .assemble(&Dialect::Ansi)
        .unwrap();
    assert_eq!(
        fragment.sql(),
        "SELECT \"id\" AS \"id\" FROM users WHERE \"role\" IN (?,?,?)"
    );
    assert_eq!(
        fragment.parameters(),
        &[
            Value::Text("admin".into()),
            Value::Text("mod".into()),
            Value::Text("guest".into())
        ]
    );
}

#[test]
fn test_null_parameter_keeps_type_tag_for_binders() {
    let fragment = Query::new()
        .select([named("id").unwrap()])
        .from("users")
        .filter(eq("deleted_at", Value::Null).unwrap())
        .assemble(&Dialect::Ansi)
        .unwrap();
    assert_eq!(fragment.parameters(), &[Value::Null]);
    assert_eq!(fragment.parameter_types(), vec![SqlType::Null]);
}
