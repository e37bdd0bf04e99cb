//! Diary author

use crate::domain::validation::{validate_email, validate_non_blank};
use crate::error::Result;
use std::fmt;

/// A person who writes diary entries, identified by email
#[derive(Debug, Clone)]
pub struct Author {
    first_name: String,
    last_name: String,
    email: String,
}

impl Author {
    /// Create a validated author
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let email = email.into();

        validate_non_blank(&first_name, "First Name")?;
        validate_non_blank(&last_name, "Last Name")?;
        validate_email(&email)?;

        Ok(Author {
            first_name,
            last_name,
            email,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive email comparison used for lookups
    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.email == other.email
    }
}

impl Eq for Author {}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.first_name, self.email)
    }
}
