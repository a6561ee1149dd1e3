use serde::Serialize;
use std::fmt;

/// Structured form of a free-text search box input.
///
/// Every stored phrase and term is lowercase and nonempty. Instances are
/// only built by [`crate::QueryParser`], so the invariant holds for the
/// lifetime of the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedQuery {
    exact_phrases: Vec<String>,
    include_terms: Vec<String>,
    exclude_terms: Vec<String>,
    original_query: String,
}

impl ParsedQuery {
    pub(crate) fn new(
        original_query: &str,
        exact_phrases: Vec<String>,
        include_terms: Vec<String>,
        exclude_terms: Vec<String>,
    ) -> Self {
        Self {
            exact_phrases,
            include_terms,
            exclude_terms,
            original_query: original_query.to_string(),
        }
    }

    pub(crate) fn empty(original_query: &str) -> Self {
        Self::new(original_query, Vec::new(), Vec::new(), Vec::new())
    }

    /// Quoted phrases, in order of appearance
    pub fn exact_phrases(&self) -> &[String] {
        &self.exact_phrases
    }

    pub fn include_terms(&self) -> &[String] {
        &self.include_terms
    }

    pub fn exclude_terms(&self) -> &[String] {
        &self.exclude_terms
    }

    /// The raw input, for diagnostics only
    pub fn original_query(&self) -> &str {
        &self.original_query
    }

    pub fn is_empty(&self) -> bool {
        self.exact_phrases.is_empty() && self.include_terms.is_empty() && self.exclude_terms.is_empty()
    }
}

impl fmt::Display for ParsedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        parts.extend(self.exact_phrases.iter().map(|p| format!("\"{}\"", p)));
        parts.extend(self.include_terms.iter().cloned());
        parts.extend(self.exclude_terms.iter().map(|t| format!("-{}", t)));
        write!(f, "{}", parts.join(" "))
    }
}
