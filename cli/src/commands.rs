use crate::argparse::{FilterArgs, SearchArgs};
use anyhow::{Context, Result};
use listing_search::validation::{validate_criteria, validate_query};
use listing_search::{
    build_sql, FilterCriteria, Predicate, PredicateCompiler, Property, QueryParser, SearchConfig,
    SqlValue,
};
use std::path::Path;

pub fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    match path {
        Some(path) => SearchConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load search configuration from {}", path.display())),
        None => Ok(SearchConfig::from_env()),
    }
}

struct CompiledSearch {
    parsed: listing_search::ParsedQuery,
    predicate: Predicate,
}

fn compile_search(args: &SearchArgs, config: &SearchConfig) -> Result<CompiledSearch> {
    validate_query(&args.query, config.max_query_chars)?;
    let criteria = match &args.criteria {
        Some(json) => FilterCriteria::from_json(json)?,
        None => FilterCriteria::default(),
    };
    validate_criteria(&criteria)?;

    let parser = QueryParser::from_config(config)?;
    let compiler = PredicateCompiler::from_config(config);
    let parsed = parser.parse(&args.query);
    let predicate = compiler.compile(&criteria, &parsed);
    Ok(CompiledSearch { parsed, predicate })
}

fn format_bind(value: &SqlValue) -> String {
    match value {
        SqlValue::String(s) => format!("'{}'", s),
        SqlValue::Integer(i) => i.to_string(),
        SqlValue::Float(f) => f.to_string(),
        SqlValue::Bool(b) => b.to_string(),
        SqlValue::Timestamp(t) => format!("'{}'", t.to_rfc3339()),
    }
}

pub fn handle_explain_command(args: &SearchArgs, config: &SearchConfig) -> Result<String> {
    let search = compile_search(args, config)?;
    let (sql, values) = build_sql(&search.predicate);

    let mut out = String::new();
    out.push_str(&format!("phrases:   {:?}\n", search.parsed.exact_phrases()));
    out.push_str(&format!("include:   {:?}\n", search.parsed.include_terms()));
    out.push_str(&format!("exclude:   {:?}\n", search.parsed.exclude_terms()));
    out.push_str(&format!("predicate: {}\n", search.predicate));
    out.push_str(&format!("sql:       {}\n", sql));
    for (i, value) in values.iter().enumerate() {
        out.push_str(&format!("  ${} = {}\n", i + 1, format_bind(value)));
    }
    Ok(out)
}

pub fn handle_filter_command(args: &FilterArgs, config: &SearchConfig) -> Result<String> {
    let search = compile_search(&args.search, config)?;

    let content = fs_err::read_to_string(&args.records)?;
    let records: Vec<Property> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid property list in {}", args.records.display()))?;

    let matches = search.predicate.filter(&records);
    tracing::info!(
        total = records.len(),
        matched = matches.len(),
        "filtered properties"
    );
    Ok(serde_json::to_string_pretty(&matches)?)
}
