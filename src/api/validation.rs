//! Client-side input validation.
//!
//! These checks run before a request is built, so obviously bad input
//! never reaches the network. Each function mirrors a constraint the
//! server enforces; the messages match what the server would say.

use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

/// Largest accepted image upload, matching the server's cap.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

lazy_static! {
    /// Regex for a plausible email shape: something@something.tld
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Validate an email address
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > 254 {
        return Err("Email is too long (max 254 characters)".to_string());
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err("Invalid email address".to_string());
    }

    Ok(())
}

/// Validate a password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }

    Ok(())
}

/// Validate an inventory item name (2-100 characters after trimming)
pub fn validate_item_name(name: &str) -> Result<(), String> {
    let name = name.trim();

    if name.is_empty() {
        return Err("Item name is required".to_string());
    }

    let length = name.chars().count();
    if length < 2 {
        return Err("Item name is too short (min 2 characters)".to_string());
    }
    if length > 100 {
        return Err("Item name is too long (max 100 characters)".to_string());
    }

    Ok(())
}

/// Validate that a path looks like an image file, judged by extension
pub fn validate_image_path(path: &Path) -> Result<(), String> {
    match mime_guess::from_path(path).first() {
        Some(mime) if mime.type_() == mime_guess::mime::IMAGE => Ok(()),
        _ => Err("File must be an image".to_string()),
    }
}

/// Validate an upload size against the server's cap
pub fn validate_image_size(bytes: u64) -> Result<(), String> {
    if bytes > MAX_UPLOAD_BYTES {
        return Err(format!(
            "File size exceeds maximum allowed size ({}MB)",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        ));
    }

    Ok(())
}
