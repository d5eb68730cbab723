use thiserror::Error;

/// Top-level error type returned by picfeed operations.
///
/// Every variant is a deterministic validation outcome. The `Display` text is
/// meant to be shown to the user as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Another account already registered this email.
    #[error("Email already in use.")]
    EmailTaken,

    /// Another account already uses this username (compared lowercased).
    #[error("Username already in use.")]
    UsernameTaken,

    /// No account is registered under the given email.
    #[error("User does not exist.")]
    NoSuchAccount,

    /// The account exists but the password did not match.
    #[error("Incorrect password.")]
    IncorrectPassword,

    /// The operation needs a logged-in account.
    #[error("Sorry, you have to be logged in to use that functionality")]
    NotLoggedIn,

    /// No account uses the given username.
    #[error("No such user.")]
    NoSuchUser,

    /// An account tried to follow itself.
    #[error("You cannot follow yourself.")]
    SelfFollow,

    /// Input failed field-level validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Collection of validation issues encountered while checking user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", summarize(.issues))]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new<I>(issues: I) -> Self
    where
        I: IntoIterator<Item = ValidationIssue>,
    {
        Self {
            issues: issues.into_iter().collect(),
        }
    }

    /// Convenience helper for constructing a single-field validation error.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

fn summarize(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Detailed validation failure for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Convenience alias for operations that can fail with [`AppError`].
pub type AppResult<T> = Result<T, AppError>;

/// Convenience alias used when only validation can fail.
pub type ValidationResult<T> = Result<T, ValidationError>;
