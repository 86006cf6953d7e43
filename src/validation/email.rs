//! Email addresses validated on construction

use crate::optional::Optional;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Local part, `@`, domain label, then one or more 2-3 character suffixes
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([\w.\-]+)@([\w\-]+)((\.(\w){2,3})+)$").expect("Valid regex pattern")
});

/// An email address that passed format validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

/// Returned when deserializing a string that is not a valid address
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a valid email address: {0}")]
pub struct InvalidEmail(pub String);

impl Email {
    /// Smart constructor: `Present` only for a well-formed address
    ///
    /// # Examples
    ///
    /// ```
    /// use katabind::validation::Email;
    ///
    /// let email = Email::create("abc@def.com");
    /// assert_eq!(email.match_with(|| "no email".to_string(), |e| e.into_inner()), "abc@def.com");
    /// assert!(Email::create("abc.def.com").is_absent());
    /// ```
    pub fn create(value: &str) -> Optional<Self> {
        if EMAIL_REGEX.is_match(value) {
            Optional::some(Self(value.to_string()))
        } else {
            Optional::none()
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = InvalidEmail;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::create(&value).match_with(|| Err(InvalidEmail(value)), Ok)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_then_extract_string() {
        let expected = "abc@def.com";
        let email = Email::create(expected).match_with(|| "email was empty".to_string(), |e| e.into_inner());
        assert_eq!(email, expected);
    }

    #[test]
    fn test_accepts_common_shapes() {
        for value in [
            "first.last@example.org",
            "user-name@host.co.uk",
            "a_b@site.io",
        ] {
            assert!(Email::create(value).is_present(), "{value} should be valid");
        }
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for value in [
            "",
            "plainaddress",
            "@no-local.com",
            "no-at.example.com",
            "two@@example.com",
            "user@host",
            "user@host.c",
            "user@host.toolong",
            "spa ce@example.com",
        ] {
            assert!(Email::create(value).is_absent(), "{value} should be rejected");
        }
    }

    #[test]
    fn test_display_and_as_str() {
        let email = Email::create("x@y.net").get_or_else(|| unreachable!());
        assert_eq!(email.as_str(), "x@y.net");
        assert_eq!(email.to_string(), "x@y.net");
    }

    #[test]
    fn test_serde_validates_on_deserialize() {
        let email: Email = serde_json::from_str(r#""ok@fine.com""#).unwrap();
        assert_eq!(serde_json::to_string(&email).unwrap(), r#""ok@fine.com""#);

        let bad = serde_json::from_str::<Email>(r#""not an email""#);
        assert!(bad.is_err());
    }
}
