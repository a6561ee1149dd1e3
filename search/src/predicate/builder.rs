use super::types::{Field, Predicate, Value};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Timestamp(DateTime<Utc>),
}

/// Builds a SQL WHERE clause and bind values from a compiled predicate.
/// Uses PostgreSQL-style numbered placeholders ($1, $2, etc.)
pub fn build_sql(predicate: &Predicate) -> (String, Vec<SqlValue>) {
    build_sql_with_offset(predicate, 0)
}

/// Builds a SQL WHERE clause with a starting placeholder offset.
/// Useful when combining with other query parts that already have placeholders
pub fn build_sql_with_offset(predicate: &Predicate, start_offset: usize) -> (String, Vec<SqlValue>) {
    let mut bind_values = Vec::new();
    let mut placeholder_idx = start_offset;
    let sql = build_clause(predicate, &mut placeholder_idx, &mut bind_values);
    (sql, bind_values)
}

fn build_clause(predicate: &Predicate, idx: &mut usize, values: &mut Vec<SqlValue>) -> String {
    match predicate {
        Predicate::Always => "1=1".to_string(),
        Predicate::And(parts) | Predicate::Or(parts) if parts.is_empty() => "1=1".to_string(),
        Predicate::And(parts) => build_group(parts, " AND ", idx, values),
        Predicate::Or(parts) => build_group(parts, " OR ", idx, values),
        Predicate::Not(inner) => {
            let sql = build_clause(inner, idx, values);
            match inner.as_ref() {
                Predicate::And(parts) | Predicate::Or(parts) if !parts.is_empty() => {
                    format!("NOT {}", sql)
                }
                _ => format!("NOT ({})", sql),
            }
        }
        Predicate::Contains { field, needle } => build_like_clause(*field, needle, idx, values),
        Predicate::Eq { field, value } => build_comparison_clause(*field, "=", value, idx, values),
        Predicate::Gte { field, value } => build_comparison_clause(*field, ">=", value, idx, values),
        Predicate::Lte { field, value } => build_comparison_clause(*field, "<=", value, idx, values),
    }
}

fn build_group(
    parts: &[Predicate],
    separator: &str,
    idx: &mut usize,
    values: &mut Vec<SqlValue>,
) -> String {
    let clauses: Vec<String> = parts
        .iter()
        .map(|part| build_clause(part, idx, values))
        .collect();
    format!("({})", clauses.join(separator))
}

// NULL columns compare as empty text so that `NOT (... LIKE ...)` keeps them,
// matching in-memory evaluation
fn build_like_clause(
    field: Field,
    needle: &str,
    idx: &mut usize,
    values: &mut Vec<SqlValue>,
) -> String {
    *idx += 1;
    values.push(SqlValue::String(format!("%{}%", escape_like(needle))));
    format!(
        "COALESCE(LOWER({}), '') LIKE ${} ESCAPE '\\'",
        field.column(),
        *idx
    )
}

fn build_comparison_clause(
    field: Field,
    op: &str,
    value: &Value,
    idx: &mut usize,
    values: &mut Vec<SqlValue>,
) -> String {
    match to_sql_value(value) {
        Some(bind) => {
            *idx += 1;
            values.push(bind);
            format!("{} {} ${}", field.column(), op, *idx)
        }
        // A missing value never matches, same as in-memory evaluation
        None => "1=0".to_string(),
    }
}

fn to_sql_value(value: &Value) -> Option<SqlValue> {
    match value {
        Value::String(s) => Some(SqlValue::String(s.clone())),
        Value::Integer(i) => Some(SqlValue::Integer(*i)),
        Value::Number(n) => Some(SqlValue::Float(*n)),
        Value::Boolean(b) => Some(SqlValue::Bool(*b)),
        Value::Timestamp(t) => Some(SqlValue::Timestamp(*t)),
        Value::Missing => None,
    }
}

fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
