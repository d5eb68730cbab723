use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::{ValidationError, ValidationIssue, ValidationResult};

/// Returns `true` if the provided string is a syntactically valid email address.
pub fn is_valid_email(value: &str) -> bool {
    EmailAddress::is_valid(value)
}

/// Returns `true` if the provided string parses as a URL with a scheme.
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

/// Which input checks run before accounts and posts are created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    #[serde(default)]
    pub require_valid_email: bool,
    #[serde(default)]
    pub require_valid_url: bool,
    #[serde(default)]
    pub require_username: bool,
}

impl ValidationPolicy {
    /// Checks signup input. Uniqueness is the directory's concern, not this one.
    pub fn check_signup(&self, email: &str, username: &str) -> ValidationResult<()> {
        let mut issues = Vec::new();
        if self.require_valid_email && !is_valid_email(email) {
            issues.push(ValidationIssue::new("email", "validation.email", "Insert a valid email"));
        }
        if self.require_username && username.trim().is_empty() {
            issues.push(ValidationIssue::new(
                "username",
                "validation.required",
                "A username is required",
            ));
        }
        finish(issues)
    }

    pub fn check_post(&self, url: &str) -> ValidationResult<()> {
        let mut issues = Vec::new();
        if self.require_valid_url && !is_valid_url(url) {
            issues.push(ValidationIssue::new("url", "validation.url", "Insert a valid image URL"));
        }
        finish(issues)
    }
}

fn finish(issues: Vec<ValidationIssue>) -> ValidationResult<()> {
    let error = ValidationError::new(issues);
    if error.is_empty() { Ok(()) } else { Err(error) }
}
