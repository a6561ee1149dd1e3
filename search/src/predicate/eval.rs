use super::types::{Predicate, Value};
use crate::record::SearchRecord;
use std::cmp::Ordering;

impl Predicate {
    /// Evaluates the predicate against one candidate record
    pub fn matches<R: SearchRecord + ?Sized>(&self, record: &R) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::And(parts) => parts.iter().all(|p| p.matches(record)),
            Predicate::Or(parts) => parts.is_empty() || parts.iter().any(|p| p.matches(record)),
            Predicate::Not(inner) => !inner.matches(record),
            Predicate::Contains { field, needle } => match record.value(*field) {
                Value::String(text) => text.to_lowercase().contains(needle.as_str()),
                _ => false,
            },
            Predicate::Eq { field, value } => record.value(*field).matches_eq(value),
            Predicate::Gte { field, value } => matches!(
                record.value(*field).compare(value),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            Predicate::Lte { field, value } => matches!(
                record.value(*field).compare(value),
                Some(Ordering::Less | Ordering::Equal)
            ),
        }
    }

    /// Keeps the records the predicate accepts, preserving their order
    pub fn filter<'a, R: SearchRecord>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }
}
