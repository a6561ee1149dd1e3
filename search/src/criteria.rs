use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured property search parameters. Every field is optional and
/// independent; an absent field leaves its dimension unconstrained, except
/// `active`, which defaults to active listings only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub organization_id: Option<i64>,
    pub assigned_user_id: Option<i64>,
    pub team_id: Option<i64>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub surface_min: Option<f64>,
    pub surface_max: Option<f64>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
    pub active: Option<bool>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
}

impl FilterCriteria {
    /// Parses the camelCase JSON shape handed over by the HTTP layer
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse filter criteria JSON")
    }
}

/// Structured user search parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserFilterCriteria {
    pub organization_id: Option<i64>,
    pub role: Option<String>,
    pub active: Option<bool>,
}

impl UserFilterCriteria {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse user filter criteria JSON")
    }
}
