use crate::utils::error::{HarvestError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects NaN, infinities and negative values.
pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(HarvestError::invalid_input(
            field_name,
            value,
            "Value must be a finite number",
        ));
    }
    if value < 0.0 {
        return Err(HarvestError::invalid_input(
            field_name,
            value,
            "Value must be non-negative",
        ));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(HarvestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(HarvestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HarvestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_output_formats(field_name: &str, formats: &[String], allowed: &[&str]) -> Result<()> {
    for format in formats {
        if !allowed.contains(&format.as_str()) {
            return Err(HarvestError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!("Unsupported format. Valid formats: {}", allowed.join(", ")),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("roof_area", 0.0).is_ok());
        assert!(validate_non_negative("roof_area", 120.5).is_ok());
        assert!(validate_non_negative("roof_area", -0.1).is_err());
        assert!(validate_non_negative("roof_area", f64::NAN).is_err());
        assert!(validate_non_negative("roof_area", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_output_formats() {
        let formats = vec!["json".to_string(), "csv".to_string()];
        assert!(validate_output_formats("output.formats", &formats, &["json", "csv"]).is_ok());

        let invalid = vec!["xml".to_string()];
        assert!(validate_output_formats("output.formats", &invalid, &["json", "csv"]).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("system.location", "Chennai").is_ok());
        assert!(validate_non_empty_string("system.location", "   ").is_err());
    }
}
