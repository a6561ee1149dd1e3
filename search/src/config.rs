use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

/// Two-letter function words kept by the stop-word policy (French locale).
/// Single-character entries never survive tokenizing and are listed for
/// completeness of the locale only.
const DEFAULT_SHORT_WORDS: &[&str] = &["de", "du", "en", "la", "le", "à", "au", "les", "a"];

/// Room-size codes such as "t2" or "t3".
const DEFAULT_SHORT_CODE_PATTERN: &str = r"^t\d$";

const DEFAULT_MAX_QUERY_CHARS: usize = 500;

static DEFAULT_SHORT_CODE_REGEX: OnceLock<Regex> = OnceLock::new();

fn default_short_code_regex() -> &'static Regex {
    DEFAULT_SHORT_CODE_REGEX.get_or_init(|| Regex::new(DEFAULT_SHORT_CODE_PATTERN).unwrap())
}

/// How several include terms combine in the text condition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermMatchPolicy {
    /// A record matches when any single term is found (recall over precision)
    #[default]
    Any,
    /// Every term has to be found somewhere in the record
    All,
}

impl FromStr for TermMatchPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" | "or" => Ok(TermMatchPolicy::Any),
            "all" | "and" => Ok(TermMatchPolicy::All),
            _ => anyhow::bail!("Invalid term match policy: {}", s),
        }
    }
}

/// Deployment-level search settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Two-letter words that survive the stop-word policy
    pub short_words: Vec<String>,
    /// Regex a two-letter token may match to survive the stop-word policy
    pub short_code_pattern: String,
    pub term_match: TermMatchPolicy,
    /// Upper bound enforced by [`crate::validation::validate_query`]
    pub max_query_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            short_words: DEFAULT_SHORT_WORDS.iter().map(|w| w.to_string()).collect(),
            short_code_pattern: DEFAULT_SHORT_CODE_PATTERN.to_string(),
            term_match: TermMatchPolicy::default(),
            max_query_chars: DEFAULT_MAX_QUERY_CHARS,
        }
    }
}

impl SearchConfig {
    /// Reads overrides from `SEARCH_SHORT_WORDS`, `SEARCH_SHORT_CODE_PATTERN`,
    /// `SEARCH_TERM_MATCH` and `SEARCH_MAX_QUERY_CHARS`.
    /// Invalid values are logged and replaced by the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(words) = env::var("SEARCH_SHORT_WORDS") {
            config.short_words = words
                .split(',')
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect();
        }

        if let Ok(pattern) = env::var("SEARCH_SHORT_CODE_PATTERN") {
            match Regex::new(&pattern) {
                Ok(_) => config.short_code_pattern = pattern,
                Err(e) => tracing::warn!(
                    pattern = %pattern,
                    error = %e,
                    "invalid SEARCH_SHORT_CODE_PATTERN, using default"
                ),
            }
        }

        if let Ok(policy) = env::var("SEARCH_TERM_MATCH") {
            match policy.parse::<TermMatchPolicy>() {
                Ok(policy) => config.term_match = policy,
                Err(e) => tracing::warn!(error = %e, "invalid SEARCH_TERM_MATCH, using default"),
            }
        }

        if let Ok(max) = env::var("SEARCH_MAX_QUERY_CHARS") {
            match max.trim().parse::<usize>() {
                Ok(max) => config.max_query_chars = max,
                Err(e) => tracing::warn!(
                    value = %max,
                    error = %e,
                    "invalid SEARCH_MAX_QUERY_CHARS, using default"
                ),
            }
        }

        config
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).context("Failed to parse search configuration YAML")
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs_err::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Compiles the stop-word settings into an immutable policy
    pub fn stop_words(&self) -> Result<StopWordPolicy> {
        let short_code = if self.short_code_pattern == DEFAULT_SHORT_CODE_PATTERN {
            default_short_code_regex().clone()
        } else {
            Regex::new(&self.short_code_pattern).with_context(|| {
                format!("Invalid short code pattern: {}", self.short_code_pattern)
            })?
        };
        Ok(StopWordPolicy::new(
            self.short_words.iter().map(String::as_str),
            short_code,
        ))
    }
}

/// Decides which lowercased tokens are worth searching for.
///
/// Tokens longer than two characters are always kept, single characters are
/// always dropped, and two-character tokens are kept only when they are an
/// allowlisted word or match the short-code pattern.
#[derive(Debug, Clone)]
pub struct StopWordPolicy {
    short_words: HashSet<String>,
    short_code: Regex,
}

impl Default for StopWordPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_SHORT_WORDS.iter().copied(),
            default_short_code_regex().clone(),
        )
    }
}

impl StopWordPolicy {
    pub fn new<'a>(short_words: impl IntoIterator<Item = &'a str>, short_code: Regex) -> Self {
        Self {
            short_words: short_words.into_iter().map(|w| w.to_lowercase()).collect(),
            short_code,
        }
    }

    pub fn keeps(&self, token: &str) -> bool {
        match token.chars().count() {
            0 | 1 => false,
            2 => self.short_words.contains(token) || self.short_code.is_match(token),
            _ => true,
        }
    }
}
