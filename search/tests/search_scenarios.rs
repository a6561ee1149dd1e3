use listing_search::validation::{validate_criteria, validate_query};
use listing_search::{
    build_sql_with_offset, compile, parse_query, FilterCriteria, PredicateCompiler, Property,
    QueryParser, SearchConfig, SqlValue, TermMatchPolicy,
};

fn listings() -> Vec<Property> {
    serde_json::from_str(
        r#"[
            {"id": 1, "title": "Bel appartement vue mer", "description": "Lumineux et calme",
             "city": "Paris", "price": 300000, "bedrooms": 2},
            {"id": 2, "title": "Bel appartement vue mer", "description": "Lumineux, à rénover",
             "city": "Paris", "price": 300000, "bedrooms": 2},
            {"id": 3, "title": "T3 avec garage", "description": "Proche gare",
             "city": "Lyon", "price": 250000, "bedrooms": 3},
            {"id": 4, "title": "Maison de ville", "description": "Jardin",
             "city": "Lyon", "price": 150000, "bedrooms": 4, "active": false},
            {"id": 5, "title": "Studio", "description": "Vue mer", "address": "2 quai de Paris",
             "city": "Nice", "price": 180000, "bedrooms": 1}
        ]"#,
    )
    .unwrap()
}

fn ids(predicate: &listing_search::Predicate, records: &[Property]) -> Vec<i64> {
    predicate
        .filter(records)
        .into_iter()
        .filter_map(|p| p.id)
        .collect()
}

#[test]
fn test_empty_search_lists_active_listings() {
    let records = listings();
    let predicate = compile(&FilterCriteria::default(), &parse_query(""));
    assert_eq!(ids(&predicate, &records), vec![1, 2, 3, 5]);
}

#[test]
fn test_sea_view_in_paris_without_renovation() {
    let records = listings();
    let criteria = FilterCriteria::from_json(
        r#"{"city": "Paris", "priceMin": 200000, "priceMax": 400000}"#,
    )
    .unwrap();
    let predicate = compile(&criteria, &parse_query("\"vue mer\" -rénover"));
    assert_eq!(ids(&predicate, &records), vec![1]);
}

#[test]
fn test_room_code_and_terms() {
    let records = listings();
    let predicate = compile(&FilterCriteria::default(), &parse_query("T3 a"));
    assert_eq!(ids(&predicate, &records), vec![3]);
}

#[test]
fn test_any_term_policy_reaches_address() {
    let records = listings();
    let predicate = compile(&FilterCriteria::default(), &parse_query("paris garage"));
    assert_eq!(ids(&predicate, &records), vec![1, 2, 3, 5]);

    let strict = PredicateCompiler::new(TermMatchPolicy::All)
        .compile(&FilterCriteria::default(), &parse_query("paris garage"));
    assert!(ids(&strict, &records).is_empty());
}

#[test]
fn test_configured_locale_end_to_end() {
    let config = SearchConfig::from_yaml_str(
        "short_words: [of]\nshort_code_pattern: '^\\d[bp]$'\nterm_match: all\n",
    )
    .unwrap();
    let parser = QueryParser::from_config(&config).unwrap();
    let compiler = PredicateCompiler::from_config(&config);

    let query = parser.parse("2b house of t3");
    assert_eq!(query.include_terms(), ["2b", "house", "of"]);

    let record = Property {
        title: Some("2B house".to_string()),
        description: Some("Out of town".to_string()),
        ..Default::default()
    };
    assert!(compiler.compile(&FilterCriteria::default(), &query).matches(&record));
}

#[test]
fn test_sql_fragment_appends_to_existing_query() {
    let criteria = FilterCriteria {
        organization_id: Some(42),
        ..Default::default()
    };
    let predicate = compile(&criteria, &parse_query("-garage"));
    let (sql, values) = build_sql_with_offset(&predicate, 2);

    assert!(sql.starts_with("(organization_id = $3 AND active = $4 AND NOT ("));
    assert_eq!(values[0], SqlValue::Integer(42));
    assert_eq!(values[1], SqlValue::Bool(true));
    assert_eq!(values.len(), 5);
}

#[test]
fn test_caller_validation_runs_before_compiling() {
    let config = SearchConfig::default();
    assert!(validate_query("appartement paris", config.max_query_chars).is_ok());
    assert!(validate_query(&"x".repeat(config.max_query_chars + 1), config.max_query_chars).is_err());

    let criteria = FilterCriteria::from_json(r#"{"priceMin": 400000, "priceMax": 200000}"#).unwrap();
    assert!(validate_criteria(&criteria).is_err());
    // The compiler still accepts it and simply matches nothing
    let predicate = compile(&criteria, &parse_query(""));
    assert!(ids(&predicate, &listings()).is_empty());
}
