use super::types::ParsedQuery;
use crate::config::{SearchConfig, StopWordPolicy};

struct Scanner {
    input: Vec<char>,
    pos: usize,
}

impl Scanner {
    fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.input.get(self.pos).copied()?;
        self.pos += 1;
        Some(ch)
    }

    fn read_while<F>(&mut self, predicate: F) -> String
    where
        F: Fn(char) -> bool,
    {
        let mut result = String::new();
        while let Some(&ch) = self.input.get(self.pos) {
            if predicate(ch) {
                result.push(ch);
                self.pos += 1;
            } else {
                break;
            }
        }
        result
    }

    /// Reads up to the next `stop` and consumes it. Leaves the cursor
    /// untouched when `stop` does not occur again.
    fn read_until(&mut self, stop: char) -> Option<String> {
        let offset = self.input[self.pos..].iter().position(|&c| c == stop)?;
        let content = self.input[self.pos..self.pos + offset].iter().collect();
        self.pos += offset + 1;
        Some(content)
    }
}

/// Lowercases and trims a fragment, dropping stray quote characters
fn normalize(fragment: &str) -> String {
    fragment.replace('"', "").trim().to_lowercase()
}

/// Pulls every `"…"` span out of `raw`, leaving a single space in its place.
/// An unmatched quote stays in the remainder.
fn extract_phrases(raw: &str) -> (Vec<String>, String) {
    let mut scanner = Scanner::new(raw);
    let mut phrases = Vec::new();
    let mut rest = String::with_capacity(raw.len());

    while let Some(ch) = scanner.advance() {
        if ch == '"' {
            if let Some(content) = scanner.read_until('"') {
                let phrase = content.trim().to_lowercase();
                if !phrase.is_empty() {
                    phrases.push(phrase);
                }
                rest.push(' ');
                continue;
            }
        }
        rest.push(ch);
    }

    (phrases, rest)
}

/// Pulls every token starting with `-` out of `text`
fn extract_excludes(text: &str) -> (Vec<String>, String) {
    let mut scanner = Scanner::new(text);
    let mut excludes = Vec::new();
    let mut rest = String::with_capacity(text.len());

    loop {
        rest.push_str(&scanner.read_while(char::is_whitespace));
        let token = scanner.read_while(|c| !c.is_whitespace());
        if token.is_empty() {
            break;
        }

        match token.strip_prefix('-') {
            Some(suffix) if !suffix.is_empty() => {
                let term = normalize(suffix);
                if !term.is_empty() && term != "-" {
                    excludes.push(term);
                }
            }
            _ => rest.push_str(&token),
        }
    }

    (excludes, rest)
}

/// Google-style search box parser: `"exact phrase"`, `-excluded` and plain
/// terms. Parsing never fails; garbled input degrades to fewer constraints.
#[derive(Debug, Clone, Default)]
pub struct QueryParser {
    stop_words: StopWordPolicy,
}

impl QueryParser {
    pub fn new(stop_words: StopWordPolicy) -> Self {
        Self { stop_words }
    }

    pub fn from_config(config: &SearchConfig) -> anyhow::Result<Self> {
        Ok(Self::new(config.stop_words()?))
    }

    pub fn parse(&self, raw: &str) -> ParsedQuery {
        if raw.trim().is_empty() {
            return ParsedQuery::empty(raw);
        }

        let (exact_phrases, without_phrases) = extract_phrases(raw);
        let (exclude_terms, remainder) = extract_excludes(&without_phrases);
        let include_terms: Vec<String> = remainder
            .split_whitespace()
            .map(normalize)
            .filter(|token| self.stop_words.keeps(token))
            .collect();

        tracing::debug!(
            phrases = exact_phrases.len(),
            include = include_terms.len(),
            exclude = exclude_terms.len(),
            "parsed search query"
        );

        ParsedQuery::new(raw, exact_phrases, include_terms, exclude_terms)
    }
}

/// Parses `raw` with the default (French) stop-word policy
pub fn parse_query(raw: &str) -> ParsedQuery {
    QueryParser::default().parse(raw)
}
