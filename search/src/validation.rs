//! Caller contract checks.
//!
//! Parsing and compiling never fail; these helpers let the calling layer
//! reject input it should not have accepted in the first place.

use crate::criteria::FilterCriteria;
use anyhow::{bail, Result};

pub fn validate_query(raw: &str, max_chars: usize) -> Result<()> {
    let chars = raw.chars().count();
    if chars > max_chars {
        bail!(
            "Search query is too long ({} characters, max {})",
            chars,
            max_chars
        );
    }
    Ok(())
}

fn validate_amount(name: &str, value: Option<f64>) -> Result<()> {
    if let Some(v) = value {
        if !v.is_finite() {
            bail!("{} must be a finite number", name);
        }
        if v < 0.0 {
            bail!("{} cannot be negative", name);
        }
    }
    Ok(())
}

fn validate_count(name: &str, value: Option<i64>) -> Result<()> {
    if matches!(value, Some(v) if v < 0) {
        bail!("{} cannot be negative", name);
    }
    Ok(())
}

pub fn validate_criteria(criteria: &FilterCriteria) -> Result<()> {
    validate_amount("priceMin", criteria.price_min)?;
    validate_amount("priceMax", criteria.price_max)?;
    validate_amount("surfaceMin", criteria.surface_min)?;
    validate_amount("surfaceMax", criteria.surface_max)?;
    validate_count("bedrooms", criteria.bedrooms)?;
    validate_count("bathrooms", criteria.bathrooms)?;

    if let (Some(min), Some(max)) = (criteria.price_min, criteria.price_max) {
        if min > max {
            bail!("priceMin ({}) is greater than priceMax ({})", min, max);
        }
    }
    if let (Some(min), Some(max)) = (criteria.surface_min, criteria.surface_max) {
        if min > max {
            bail!("surfaceMin ({}) is greater than surfaceMax ({})", min, max);
        }
    }
    if let (Some(after), Some(before)) = (criteria.created_after, criteria.created_before) {
        if after > before {
            bail!(
                "createdAfter ({}) is later than createdBefore ({})",
                after.to_rfc3339(),
                before.to_rfc3339()
            );
        }
    }
    Ok(())
}
