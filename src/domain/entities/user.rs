//! User entity and the constrained name value it carries.

use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;
use validator::{ValidateLength, ValidationError};

/// Compiled pattern for the alphabetic-only rule.
static ALPHA_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

/// A persisted user row.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: i32, name: String) -> Self {
        Self { id, name }
    }
}

/// Constraints a user name must satisfy, expressed as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameRules {
    /// Absent or empty names are rejected.
    pub required: bool,
    /// Upper bound counted in characters, not bytes.
    pub max_chars: u64,
    /// Only ASCII letters are accepted.
    pub alphabetic: bool,
}

/// The rule set applied to every inbound name.
pub const NAME_RULES: NameRules = NameRules {
    required: true,
    max_chars: 20,
    alphabetic: true,
};

impl NameRules {
    /// Checks `value` against the rules in order: required, length, character class.
    ///
    /// The first violated rule is reported; its `code` is one of `required`,
    /// `length` or `alpha`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the violated rule.
    pub fn check(&self, value: Option<&String>) -> Result<(), ValidationError> {
        let value = match value {
            Some(v) if !v.is_empty() => v,
            _ if self.required => {
                return Err(ValidationError::new("required")
                    .with_message(Cow::Borrowed("name is required")));
            }
            _ => return Ok(()),
        };

        if !value.validate_length(None, Some(self.max_chars), None) {
            let mut err = ValidationError::new("length").with_message(Cow::Owned(format!(
                "name must be at most {} characters",
                self.max_chars
            )));
            err.add_param(Cow::Borrowed("max"), &self.max_chars);
            err.add_param(Cow::Borrowed("value"), value);
            return Err(err);
        }

        if self.alphabetic && !ALPHA_REGEX.is_match(value) {
            let mut err = ValidationError::new("alpha").with_message(Cow::Borrowed(
                "name must contain alphabetic characters only",
            ));
            err.add_param(Cow::Borrowed("value"), value);
            return Err(err);
        }

        Ok(())
    }
}

/// A user name that has passed [`NAME_RULES`].
///
/// The only way to obtain one is [`UserName::parse`], so holding a `UserName`
/// means the value is safe to hand to the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// Validates a raw name against [`NAME_RULES`].
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first violated rule.
    pub fn parse(raw: Option<String>) -> Result<Self, ValidationError> {
        NAME_RULES.check(raw.as_ref())?;
        // `required` guarantees a value once the check has passed.
        Ok(Self(raw.unwrap_or_default()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
