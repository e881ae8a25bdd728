//! Input validation utilities

use regex::Regex;
use std::sync::OnceLock;

use crate::models::{AssetStatus, RegisterRequest, Role, UpdateAsset};

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > 254 {
        return Err("Email must be at most 254 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate a registration payload, returning the parsed role
pub fn validate_registration(request: &RegisterRequest) -> Result<Role, String> {
    validate_email(&request.email)?;

    if request.full_name.trim().is_empty() {
        return Err("Full name is required".to_string());
    }

    request.role.parse()
}

/// Validate the optional status of an asset update
pub fn validate_asset_update(changes: &UpdateAsset) -> Result<(), String> {
    if let Some(status) = &changes.status {
        status.parse::<AssetStatus>()?;
    }

    Ok(())
}
