//! End-to-end filter building through the public API.

use mik_lookup::prelude::*;
use mik_lookup::{ParsedParameter, split_param_name};

fn whitelist() -> ColumnWhitelist {
    ColumnWhitelist::new().allow_all(&["col1", "col2"])
}

// =============================================================================
// Generated SQL
// =============================================================================

#[test]
fn mixed_lookups_snapshot() {
    let params = raw_params_from_pairs([
        ("col1", "1"),
        ("col1", "2"),
        ("col1", "3"),
        ("col2", "1"),
        ("col3", "val"),
    ]);
    let filter = build(&whitelist(), &params).unwrap();

    insta::assert_snapshot!(filter.result.sql, @"col1 IN (?,?,?) AND col2 = ?");
    assert_eq!(filter.result.params, ["1", "2", "3", "1"]);
    assert_eq!(filter.rejected.len(), 1);
    assert_eq!(filter.rejected["col3"], ["val"]);
}

#[test]
fn aliased_column_snapshot() {
    let whitelist = ColumnWhitelist::new()
        .alias("col1", "table_name.col1")
        .allow("col2");
    let params = raw_params_from_pairs([
        ("col1__in", "1"),
        ("col1__in", "2"),
        ("col2__not_in", "1"),
        ("col3", "val"),
    ]);
    let filter = build(&whitelist, &params).unwrap();

    insta::assert_snapshot!(filter.result.where_clause(), @"WHERE table_name.col1 IN (?,?) AND col2 <> ?");
    assert_eq!(filter.result.params, ["1", "2", "1"]);
}

#[test]
fn like_snapshot() {
    let filter = build(&whitelist(), &raw_params_from_pairs([("col1__like", "foo")])).unwrap();

    insta::assert_snapshot!(filter.result.sql, @"LOWER(col1) LIKE CONCAT('%', ?, '%')");
    assert_eq!(filter.result.params, ["foo"]);
}

#[test]
fn not_in_keeps_value_order() {
    let params = raw_params_from_pairs([("col1__not_in", "1"), ("col1__not_in", "2")]);
    let filter = build(&whitelist(), &params).unwrap();

    assert_eq!(filter.result.sql, "col1 NOT IN (?,?)");
    assert_eq!(filter.result.params, ["1", "2"]);
}

#[test]
fn implicit_and_explicit_in_are_equivalent() {
    let plain = build(&whitelist(), &raw_params_from_pairs([("col1", "1")])).unwrap();
    let explicit = build(&whitelist(), &raw_params_from_pairs([("col1__in", "1")])).unwrap();

    assert_eq!(plain.result, explicit.result);
    assert_eq!(plain.result.sql, "col1 = ?");
}

#[test]
fn whitelisted_columns_never_rejected() {
    let params = raw_params_from_pairs([("col1", "a"), ("col2__not_in", "b"), ("nope", "c")]);
    let filter = build(&whitelist(), &params).unwrap();

    assert!(!filter.rejected.contains_key("col1"));
    assert!(!filter.rejected.contains_key("col2__not_in"));
    assert!(filter.rejected.contains_key("nope"));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn like_with_two_values_fails() {
    let params = raw_params_from_pairs([("col1__like", "foo"), ("col1__like", "bar")]);
    let err = build(&whitelist(), &params).unwrap_err();

    assert!(err.is_client_error());
    assert!(err.to_string().contains("like operator only supports single value"));
}

#[test]
fn malformed_keys_fail_without_partial_output() {
    for key in ["a__b__c", "col1__between", "col1__IN", "col1__"] {
        let params = raw_params_from_pairs([("col1", "1"), (key, "x")]);
        let result = build(&whitelist(), &params);
        assert!(result.is_err(), "{key} should fail");
    }
}

#[test]
fn empty_input_is_precondition_error() {
    let err = build(&whitelist(), &RawParameters::new()).unwrap_err();
    assert_eq!(err, FilterError::AttemptedEmptyFilteringParams);
}

// =============================================================================
// Building blocks
// =============================================================================

#[test]
fn parsed_parameter_renders_like_build() {
    let values = vec!["1".to_string(), "2".to_string()];
    let split = split_param_name("col1__not_in", &values).unwrap();
    let built = ParsedParameter::new("col1", Lookup::NotIn, values).unwrap();

    assert_eq!(split, built);
    assert_eq!(split.to_sql(), "col1 NOT IN (?,?)");
}

#[test]
fn whitelist_from_toml_config() {
    let config = WhitelistConfig::from_toml_str(
        r#"
        columns = ["col2"]

        [aliases]
        col1 = "table_name.col1"
        "#,
    )
    .unwrap();
    let whitelist = ColumnWhitelist::try_from(config).unwrap();

    let params = raw_params_from_pairs([("col1", "1"), ("col2__not_in", "2"), ("col2__not_in", "3")]);
    let filter = build(&whitelist, &params).unwrap();

    assert_eq!(filter.result.sql, "table_name.col1 = ? AND col2 NOT IN (?,?)");
    assert_eq!(filter.result.params, ["1", "2", "3"]);
}
