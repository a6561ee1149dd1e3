//! AST types for compiled search predicates

use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt;

/// Every field a predicate can look at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    // Text-searchable
    Title,
    Description,
    Address,
    City,
    Reference,
    FirstName,
    LastName,
    Email,
    // Structured
    OrganizationId,
    AssignedUserId,
    TeamId,
    Status,
    Type,
    Country,
    Price,
    Surface,
    Bedrooms,
    Bathrooms,
    Active,
    CreatedAt,
    Role,
}

impl Field {
    /// Database column backing the field
    pub fn column(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Address => "address",
            Field::City => "city",
            Field::Reference => "reference",
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Email => "email",
            Field::OrganizationId => "organization_id",
            Field::AssignedUserId => "assigned_user_id",
            Field::TeamId => "team_id",
            Field::Status => "status",
            Field::Type => "property_type",
            Field::Country => "country",
            Field::Price => "price",
            Field::Surface => "surface",
            Field::Bedrooms => "bedrooms",
            Field::Bathrooms => "bathrooms",
            Field::Active => "active",
            Field::CreatedAt => "created_at",
            Field::Role => "role",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    Timestamp(DateTime<Utc>),
    Missing,
}

impl Value {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Equality used by predicates: integers and numbers compare numerically,
    /// a missing value equals nothing
    pub fn matches_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Missing, _) | (_, Value::Missing) => false,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Timestamp(a), Value::Timestamp(b)) => a == b,
            _ => self
                .as_f64()
                .zip(other.as_f64())
                .is_some_and(|(a, b)| a == b),
        }
    }

    /// Ordering used by range predicates, `None` when the values are not comparable
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
            _ => {
                let (a, b) = self.as_f64().zip(other.as_f64())?;
                a.partial_cmp(&b)
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Number(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Timestamp(t) => write!(f, "{}", t.to_rfc3339()),
            Value::Missing => write!(f, "null"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Timestamp(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Missing, Into::into)
    }
}

/// Boolean condition over a candidate record.
///
/// Build values through the associated constructors: they flatten nested
/// conjunctions and disjunctions and drop [`Predicate::Always`] members, so
/// the same set of conditions gives the same decision whatever order it was
/// assembled in.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Identity: matches every record
    Always,
    And(Vec<Predicate>),
    /// An empty disjunction is unconstrained, like [`Predicate::Always`]
    Or(Vec<Predicate>),
    Not(Box<Predicate>),
    /// Case-insensitive substring match; `needle` is stored lowercase
    Contains {
        field: Field,
        needle: String,
    },
    Eq {
        field: Field,
        value: Value,
    },
    Gte {
        field: Field,
        value: Value,
    },
    Lte {
        field: Field,
        value: Value,
    },
}

impl Predicate {
    pub fn and<I>(parts: I) -> Predicate
    where
        I: IntoIterator<Item = Predicate>,
    {
        let mut flat = Vec::new();
        for part in parts {
            match part {
                Predicate::Always => {}
                Predicate::And(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => Predicate::Always,
            1 => flat.remove(0),
            _ => Predicate::And(flat),
        }
    }

    pub fn or<I>(parts: I) -> Predicate
    where
        I: IntoIterator<Item = Predicate>,
    {
        let mut flat = Vec::new();
        for part in parts {
            match part {
                Predicate::Always => return Predicate::Always,
                Predicate::Or(inner) if inner.is_empty() => return Predicate::Always,
                Predicate::Or(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => Predicate::Always,
            1 => flat.remove(0),
            _ => Predicate::Or(flat),
        }
    }

    pub fn not(inner: Predicate) -> Predicate {
        match inner {
            Predicate::Not(inner) => *inner,
            other => Predicate::Not(Box::new(other)),
        }
    }

    pub fn contains(field: Field, needle: &str) -> Predicate {
        Predicate::Contains {
            field,
            needle: needle.to_lowercase(),
        }
    }

    pub fn eq(field: Field, value: impl Into<Value>) -> Predicate {
        Predicate::Eq {
            field,
            value: value.into(),
        }
    }

    pub fn gte(field: Field, value: impl Into<Value>) -> Predicate {
        Predicate::Gte {
            field,
            value: value.into(),
        }
    }

    pub fn lte(field: Field, value: impl Into<Value>) -> Predicate {
        Predicate::Lte {
            field,
            value: value.into(),
        }
    }

    pub fn is_always(&self) -> bool {
        matches!(self, Predicate::Always)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Always => write!(f, "TRUE"),
            Predicate::And(parts) | Predicate::Or(parts) if parts.is_empty() => write!(f, "TRUE"),
            Predicate::And(parts) => write_joined(f, parts, " AND "),
            Predicate::Or(parts) => write_joined(f, parts, " OR "),
            Predicate::Not(inner) => write!(f, "NOT {}", inner),
            Predicate::Contains { field, needle } => write!(f, "{} CONTAINS \"{}\"", field, needle),
            Predicate::Eq { field, value } => write!(f, "{} = {}", field, value),
            Predicate::Gte { field, value } => write!(f, "{} >= {}", field, value),
            Predicate::Lte { field, value } => write!(f, "{} <= {}", field, value),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, parts: &[Predicate], separator: &str) -> fmt::Result {
    write!(f, "(")?;
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", separator)?;
        }
        write!(f, "{}", part)?;
    }
    write!(f, ")")
}
