use crate::predicate::{Field, Value};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A candidate record a [`crate::Predicate`] can be evaluated against.
///
/// Fields the record does not carry report [`Value::Missing`], which no
/// comparison or text match accepts.
pub trait SearchRecord {
    fn value(&self, field: Field) -> Value;
}

/// Property listing as seen by the search layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Property {
    pub id: Option<i64>,
    pub reference: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub organization_id: Option<i64>,
    pub assigned_user_id: Option<i64>,
    pub team_id: Option<i64>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub price: Option<f64>,
    pub surface: Option<f64>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
    pub active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

// Listings are active unless flagged otherwise
impl Default for Property {
    fn default() -> Self {
        Self {
            id: None,
            reference: None,
            title: None,
            description: None,
            address: None,
            city: None,
            country: None,
            organization_id: None,
            assigned_user_id: None,
            team_id: None,
            status: None,
            property_type: None,
            price: None,
            surface: None,
            bedrooms: None,
            bathrooms: None,
            active: true,
            created_at: None,
        }
    }
}

impl SearchRecord for Property {
    fn value(&self, field: Field) -> Value {
        match field {
            Field::Title => self.title.clone().into(),
            Field::Description => self.description.clone().into(),
            Field::Address => self.address.clone().into(),
            Field::City => self.city.clone().into(),
            Field::Reference => self.reference.clone().into(),
            Field::OrganizationId => self.organization_id.into(),
            Field::AssignedUserId => self.assigned_user_id.into(),
            Field::TeamId => self.team_id.into(),
            Field::Status => self.status.clone().into(),
            Field::Type => self.property_type.clone().into(),
            Field::Country => self.country.clone().into(),
            Field::Price => self.price.into(),
            Field::Surface => self.surface.into(),
            Field::Bedrooms => self.bedrooms.into(),
            Field::Bathrooms => self.bathrooms.into(),
            Field::Active => self.active.into(),
            Field::CreatedAt => self.created_at.into(),
            Field::FirstName | Field::LastName | Field::Email | Field::Role => Value::Missing,
        }
    }
}

/// Back-office user as seen by the search layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: Option<i64>,
    pub organization_id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: None,
            organization_id: None,
            first_name: None,
            last_name: None,
            email: None,
            role: None,
            active: true,
            created_at: None,
        }
    }
}

impl SearchRecord for User {
    fn value(&self, field: Field) -> Value {
        match field {
            Field::FirstName => self.first_name.clone().into(),
            Field::LastName => self.last_name.clone().into(),
            Field::Email => self.email.clone().into(),
            Field::Role => self.role.clone().into(),
            Field::OrganizationId => self.organization_id.into(),
            Field::Active => self.active.into(),
            Field::CreatedAt => self.created_at.into(),
            _ => Value::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_from_json() {
        let json = r#"{
            "title": "Loft",
            "type": "APARTMENT",
            "price": 250000,
            "bedrooms": 2,
            "createdAt": "2024-03-01T10:00:00Z"
        }"#;
        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.title.as_deref(), Some("Loft"));
        assert_eq!(property.property_type.as_deref(), Some("APARTMENT"));
        assert_eq!(property.price, Some(250000.0));
        assert!(property.active);
        assert_eq!(property.value(Field::Bedrooms), Value::Integer(2));
        assert_eq!(property.value(Field::Address), Value::Missing);
        assert_eq!(property.value(Field::Email), Value::Missing);
    }

    #[test]
    fn test_inactive_flag_from_json() {
        let property: Property = serde_json::from_str(r#"{"active": false}"#).unwrap();
        assert_eq!(property.value(Field::Active), Value::Boolean(false));
    }

    #[test]
    fn test_user_fields() {
        let user = User {
            first_name: Some("Camille".to_string()),
            role: Some("AGENT".to_string()),
            ..Default::default()
        };
        assert_eq!(user.value(Field::FirstName), Value::from("Camille"));
        assert_eq!(user.value(Field::Role), Value::from("AGENT"));
        assert_eq!(user.value(Field::Title), Value::Missing);
        assert_eq!(user.value(Field::Active), Value::Boolean(true));
    }
}
