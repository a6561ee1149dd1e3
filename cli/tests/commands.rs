use listing_search::{SearchConfig, TermMatchPolicy};
use listing_search_cli::argparse::{FilterArgs, SearchArgs};
use listing_search_cli::commands::{handle_explain_command, handle_filter_command, load_config};
use std::io::Write;
use tempfile::NamedTempFile;

fn search(query: &str, criteria: Option<&str>) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        criteria: criteria.map(str::to_string),
    }
}

#[test]
fn test_explain_prints_predicate_and_sql() {
    let output = handle_explain_command(
        &search("\"vue mer\" loft -garage", Some(r#"{"city": "Paris"}"#)),
        &SearchConfig::default(),
    )
    .unwrap();

    assert!(output.contains("phrases:   [\"vue mer\"]"));
    assert!(output.contains("include:   [\"loft\"]"));
    assert!(output.contains("exclude:   [\"garage\"]"));
    assert!(output.contains("city = \"Paris\""));
    assert!(output.contains("sql:       (city = $1 AND active = $2"));
    assert!(output.contains("  $1 = 'Paris'"));
    assert!(output.contains("  $2 = true"));
}

#[test]
fn test_explain_rejects_invalid_criteria() {
    let err = handle_explain_command(
        &search("", Some(r#"{"priceMin": 10, "priceMax": 5}"#)),
        &SearchConfig::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("priceMin"));

    let err = handle_explain_command(&search("", Some("not json")), &SearchConfig::default())
        .unwrap_err();
    assert!(err.to_string().contains("filter criteria"));
}

#[test]
fn test_explain_rejects_long_query() {
    let config = SearchConfig {
        max_query_chars: 5,
        ..Default::default()
    };
    assert!(handle_explain_command(&search("appartement", None), &config).is_err());
}

#[test]
fn test_filter_records_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": 1, "title": "Loft", "city": "Paris", "price": 300000}},
            {{"id": 2, "title": "Loft avec garage", "city": "Paris", "price": 320000}},
            {{"id": 3, "title": "Loft", "city": "Lyon", "price": 200000}}
        ]"#
    )
    .unwrap();

    let args = FilterArgs {
        search: search("loft -garage", Some(r#"{"city": "Paris"}"#)),
        records: file.path().to_path_buf(),
    };
    let output = handle_filter_command(&args, &SearchConfig::default()).unwrap();
    let matched: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0]["id"], 1);
}

#[test]
fn test_filter_missing_records_file() {
    let args = FilterArgs {
        search: search("loft", None),
        records: "/nonexistent/properties.json".into(),
    };
    assert!(handle_filter_command(&args, &SearchConfig::default()).is_err());
}

#[test]
fn test_load_config_from_yaml() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "term_match: all").unwrap();
    let config = load_config(Some(file.path())).unwrap();
    assert_eq!(config.term_match, TermMatchPolicy::All);

    let err = load_config(Some("/nonexistent/search.yaml".as_ref())).unwrap_err();
    assert!(err.to_string().contains("Failed to load search configuration"));
}
