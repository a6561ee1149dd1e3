use super::types::{Field, Predicate, Value};
use crate::config::{SearchConfig, TermMatchPolicy};
use crate::criteria::{FilterCriteria, UserFilterCriteria};
use crate::query::ParsedQuery;

/// Which text fields each part of a parsed query is matched against
#[derive(Debug, Clone, Copy)]
struct TextFields {
    phrases: &'static [Field],
    terms: &'static [Field],
    excludes: &'static [Field],
}

const PROPERTY_TEXT: TextFields = TextFields {
    phrases: &[Field::Title, Field::Description, Field::City],
    terms: &[Field::Title, Field::Description, Field::City, Field::Address],
    excludes: &[Field::Title, Field::Description, Field::City],
};

const USER_TEXT: TextFields = TextFields {
    phrases: &[Field::FirstName, Field::LastName, Field::Email],
    terms: &[Field::FirstName, Field::LastName, Field::Email],
    excludes: &[Field::FirstName, Field::LastName, Field::Email],
};

/// Compiles a parsed query and structured criteria into one predicate
#[derive(Debug, Clone, Copy, Default)]
pub struct PredicateCompiler {
    term_match: TermMatchPolicy,
}

impl PredicateCompiler {
    pub fn new(term_match: TermMatchPolicy) -> Self {
        Self { term_match }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.term_match)
    }

    pub fn compile(&self, criteria: &FilterCriteria, query: &ParsedQuery) -> Predicate {
        let predicate = Predicate::and([
            equal(Field::OrganizationId, criteria.organization_id),
            equal(Field::AssignedUserId, criteria.assigned_user_id),
            equal(Field::TeamId, criteria.team_id),
            equal(Field::Status, criteria.status.as_deref()),
            equal(Field::Type, criteria.property_type.as_deref()),
            equal(Field::City, criteria.city.as_deref()),
            equal(Field::Country, criteria.country.as_deref()),
            equal(Field::Bedrooms, criteria.bedrooms),
            equal(Field::Bathrooms, criteria.bathrooms),
            range(Field::Price, criteria.price_min, criteria.price_max),
            range(Field::Surface, criteria.surface_min, criteria.surface_max),
            active(criteria.active),
            range(
                Field::CreatedAt,
                criteria.created_after,
                criteria.created_before,
            ),
            self.text_condition(query, &PROPERTY_TEXT),
        ]);

        tracing::debug!(
            conjuncts = conjunct_count(&predicate),
            query = %query,
            "compiled property search predicate"
        );
        predicate
    }

    pub fn compile_users(&self, criteria: &UserFilterCriteria, query: &ParsedQuery) -> Predicate {
        let predicate = Predicate::and([
            equal(Field::OrganizationId, criteria.organization_id),
            equal(Field::Role, criteria.role.as_deref()),
            active(criteria.active),
            self.text_condition(query, &USER_TEXT),
        ]);

        tracing::debug!(
            conjuncts = conjunct_count(&predicate),
            query = %query,
            "compiled user search predicate"
        );
        predicate
    }

    fn text_condition(&self, query: &ParsedQuery, fields: &TextFields) -> Predicate {
        let phrases = Predicate::and(
            query
                .exact_phrases()
                .iter()
                .map(|phrase| any_field(fields.phrases, phrase)),
        );

        let term_matches = query
            .include_terms()
            .iter()
            .map(|term| any_field(fields.terms, term));
        // With no include term both combinators yield the identity
        let terms = match self.term_match {
            TermMatchPolicy::Any => Predicate::or(term_matches),
            TermMatchPolicy::All => Predicate::and(term_matches),
        };

        let excludes = Predicate::and(
            query
                .exclude_terms()
                .iter()
                .map(|term| Predicate::not(any_field(fields.excludes, term))),
        );

        Predicate::and([phrases, terms, excludes])
    }
}

fn any_field(fields: &[Field], needle: &str) -> Predicate {
    Predicate::or(fields.iter().map(|field| Predicate::contains(*field, needle)))
}

fn equal<V: Into<Value>>(field: Field, value: Option<V>) -> Predicate {
    value.map_or(Predicate::Always, |v| Predicate::eq(field, v))
}

fn range<V: Into<Value>>(field: Field, min: Option<V>, max: Option<V>) -> Predicate {
    Predicate::and([
        min.map_or(Predicate::Always, |v| Predicate::gte(field, v)),
        max.map_or(Predicate::Always, |v| Predicate::lte(field, v)),
    ])
}

fn active(active: Option<bool>) -> Predicate {
    Predicate::eq(Field::Active, active.unwrap_or(true))
}

fn conjunct_count(predicate: &Predicate) -> usize {
    match predicate {
        Predicate::Always => 0,
        Predicate::And(parts) => parts.len(),
        _ => 1,
    }
}

/// Compiles a property search with the default matching policy
pub fn compile(criteria: &FilterCriteria, query: &ParsedQuery) -> Predicate {
    PredicateCompiler::default().compile(criteria, query)
}

/// Compiles a user search with the default matching policy
pub fn compile_users(criteria: &UserFilterCriteria, query: &ParsedQuery) -> Predicate {
    PredicateCompiler::default().compile_users(criteria, query)
}
