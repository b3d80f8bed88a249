// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for environment resolution order.

use variants::domain::parsers;
use variants::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn string_variant(keys: &[&str]) -> Variant<String> {
    Variant::builder()
        .keys(keys.iter().copied())
        .of(parsers::of_string())
        .build()
        .unwrap()
}

#[test]
fn test_source_order_outranks_key_order() {
    init_tracing();
    let source_a = MapSource::new().with_value("K", "from a");
    let source_b = MapSource::new().with_value("K", "from b");
    let environment = Environment::builder()
        .with_source(source_a)
        .with_source(source_b)
        .build();

    let variant = string_variant(&["K"]);
    assert_eq!(
        environment.find_variance(&variant).unwrap(),
        Some("from a".to_string())
    );
}

#[test]
fn test_key_order_within_one_source() {
    let source = MapSource::new()
        .with_value("K1", "first key")
        .with_value("K2", "second key");
    let environment = Environment::builder().with_source(source).build();

    let variant = string_variant(&["K1", "K2"]);
    assert_eq!(
        environment.find_variance(&variant).unwrap(),
        Some("first key".to_string())
    );
}

#[test]
fn test_breadth_completion_before_fallthrough() {
    // two sources lacking every key are fully skipped before the third
    let linked = string_variant(&["ALT"]);
    let variant = Variant::builder()
        .keys(["K1", "K2"])
        .of(parsers::of_string())
        .link(linked)
        .build()
        .unwrap();

    let environment = Environment::builder()
        .with_source(MapSource::new())
        .with_source(MapSource::new().with_value("UNRELATED", "x"))
        .with_source(MapSource::new().with_value("K2", "third source"))
        .build();

    assert_eq!(
        environment.find_variance(&variant).unwrap(),
        Some("third source".to_string())
    );
}

#[test]
fn test_fallback_only_when_all_sources_exhausted() {
    let environment = Environment::builder()
        .with_source(MapSource::new().with_value("OTHER", "x"))
        .build();

    let with_fallback = Variant::builder()
        .key("K")
        .fallback("fallback".to_string())
        .of(parsers::of_string())
        .build()
        .unwrap();
    assert_eq!(
        environment.find_variance(&with_fallback).unwrap(),
        Some("fallback".to_string())
    );

    let without_fallback = string_variant(&["K"]);
    assert_eq!(environment.find_variance(&without_fallback).unwrap(), None);
}

#[test]
fn test_source_value_beats_fallback() {
    let environment = Environment::builder()
        .with_source(MapSource::new().with_value("K", "from source"))
        .build();

    let variant = Variant::builder()
        .key("K")
        .fallback("fallback".to_string())
        .of(parsers::of_string())
        .build()
        .unwrap();
    assert_eq!(
        environment.find_variance(&variant).unwrap(),
        Some("from source".to_string())
    );
}

#[test]
fn test_outer_keys_before_link_keys_in_same_source() {
    let linked = string_variant(&["LINK_KEY"]);
    let variant = Variant::builder()
        .key("OUTER_KEY")
        .of(parsers::of_string())
        .link(linked)
        .build()
        .unwrap();

    let source = MapSource::new()
        .with_value("OUTER_KEY", "outer")
        .with_value("LINK_KEY", "linked");
    let environment = Environment::builder().with_source(source).build();

    assert_eq!(
        environment.find_variance(&variant).unwrap(),
        Some("outer".to_string())
    );
}

#[test]
fn test_link_keys_searched_per_source() {
    // the link's keys are consulted against the first source before the
    // second source sees the outer keys
    let linked = string_variant(&["LINK_KEY"]);
    let variant = Variant::builder()
        .key("OUTER_KEY")
        .of(parsers::of_string())
        .link(linked)
        .build()
        .unwrap();

    let environment = Environment::builder()
        .with_source(MapSource::new().with_value("LINK_KEY", "linked in first"))
        .with_source(MapSource::new().with_value("OUTER_KEY", "outer in second"))
        .build();

    assert_eq!(
        environment.find_variance(&variant).unwrap(),
        Some("linked in first".to_string())
    );
}

#[test]
fn test_link_search_beats_link_fallback() {
    let linked = Variant::builder()
        .key("ALT")
        .fallback("link fallback".to_string())
        .of(parsers::of_string())
        .build()
        .unwrap();
    let variant = Variant::builder()
        .key("K")
        .of(parsers::of_string())
        .link(linked)
        .build()
        .unwrap();

    let environment = Environment::builder()
        .with_source(MapSource::new().with_value("ALT", "from source"))
        .build();

    assert_eq!(
        environment.find_variance(&variant).unwrap(),
        Some("from source".to_string())
    );
}

#[test]
fn test_chained_fallback() {
    // v1 -> v2 -> v3, only v3 has a fallback
    let v3 = Variant::builder()
        .key("K3")
        .fallback("third fallback".to_string())
        .of(parsers::of_string())
        .build()
        .unwrap();
    let v2 = Variant::builder()
        .key("K2")
        .of(parsers::of_string())
        .link(v3)
        .build()
        .unwrap();
    let v1 = Variant::builder()
        .key("K1")
        .of(parsers::of_string())
        .link(v2)
        .build()
        .unwrap();

    let environment = Environment::builder()
        .with_source(MapSource::new().with_value("UNRELATED", "x"))
        .build();

    assert_eq!(
        environment.find_variance(&v1).unwrap(),
        Some("third fallback".to_string())
    );
}

#[test]
fn test_first_fallback_in_chain_wins() {
    let v2 = Variant::builder()
        .fallback("second".to_string())
        .of(parsers::of_string())
        .build()
        .unwrap();
    let v1 = Variant::builder()
        .fallback("first".to_string())
        .of(parsers::of_string())
        .link(v2)
        .build()
        .unwrap();

    let environment = Environment::new();
    assert_eq!(
        environment.find_variance(&v1).unwrap(),
        Some("first".to_string())
    );
}

#[test]
fn test_concrete_scenario_primary_secondary() {
    // Source A = {PRIMARY: "primary"}, Source B = {}
    let environment = Environment::builder()
        .with_source(MapSource::new().with_value("PRIMARY", "primary"))
        .with_source(MapSource::new())
        .build();

    let variant = string_variant(&["PRIMARY", "SECONDARY"]);
    assert_eq!(
        environment.find_variance(&variant).unwrap(),
        Some("primary".to_string())
    );
}

#[test]
fn test_concrete_scenario_no_sources_fallback() {
    let environment = Environment::new();
    let variant = Variant::builder()
        .key("APP_NAME")
        .fallback("DefaultApp".to_string())
        .of(parsers::of_string())
        .build()
        .unwrap();
    assert_eq!(
        environment.find_variance(&variant).unwrap(),
        Some("DefaultApp".to_string())
    );
}

#[test]
fn test_concrete_scenario_parsed_port() {
    let environment = Environment::builder()
        .with_source(MapSource::new().with_value("PORT", "8080"))
        .build();

    let variant = Variant::builder()
        .key("PORT")
        .parser(parsers::string(|text| {
            text.parse::<i64>()
                .map_err(|err| VariantError::parser_error("invalid port", err))
        }))
        .build()
        .unwrap();

    assert_eq!(environment.find_variance(&variant).unwrap(), Some(8080));
}

#[test]
fn test_get_variance_error_contains_name() {
    let environment = Environment::new();
    let variant = Variant::<String>::builder()
        .key("K")
        .name("TestVariant")
        .of(parsers::of_string())
        .build()
        .unwrap();

    let error = environment.get_variance(&variant).unwrap_err();
    assert!(error.to_string().contains("TestVariant"));
}

#[test]
fn test_parser_precedence_of_over_parser() {
    let environment = Environment::builder()
        .with_source(MapSource::new().with_value("K", "input"))
        .build();

    let variant = Variant::builder()
        .key("K")
        .parser(parsers::string(|_| Ok("from parser".to_string())))
        .of(|_| Ok(Some("from of".to_string())))
        .build()
        .unwrap();

    assert_eq!(
        environment.find_variance(&variant).unwrap(),
        Some("from of".to_string())
    );
}

#[test]
fn test_variants_shared_across_environments() {
    let variant = string_variant(&["K"]);

    let first = Environment::builder()
        .with_source(MapSource::new().with_value("K", "one"))
        .build();
    let second = Environment::builder()
        .with_source(MapSource::new().with_value("K", "two"))
        .build();

    assert_eq!(first.find_variance(&variant).unwrap(), Some("one".to_string()));
    assert_eq!(second.find_variance(&variant).unwrap(), Some("two".to_string()));
}

#[test]
fn test_env_source_in_environment() {
    std::env::set_var("VARIANTS_RESOLUTION_TEST", "from env");

    let environment = Environment::builder()
        .with_source(MapSource::new())
        .with_source(EnvSource::new())
        .build();

    let variant = string_variant(&["VARIANTS_RESOLUTION_TEST"]);
    assert_eq!(
        environment.find_variance(&variant).unwrap(),
        Some("from env".to_string())
    );

    std::env::remove_var("VARIANTS_RESOLUTION_TEST");
}

#[test]
fn test_lookup_and_key_sources_in_environment() {
    let lookup = LookupSource::new(|key| {
        (key == "COMPUTED").then(|| RawValue::from("computed value"))
    });
    let keyed = KeySource::new("FIXED", || Some(RawValue::from("fixed value"))).unwrap();

    let environment = Environment::builder()
        .with_source(lookup)
        .with_source(keyed)
        .build();

    let computed = string_variant(&["COMPUTED"]);
    let fixed = string_variant(&["FIXED"]);
    assert_eq!(
        environment.find_variance(&computed).unwrap(),
        Some("computed value".to_string())
    );
    assert_eq!(
        environment.find_variance(&fixed).unwrap(),
        Some("fixed value".to_string())
    );
}
