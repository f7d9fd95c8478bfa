//! Validated field value objects shared by every contact category.
//!
//! # Responsibility
//! - Parse raw text into strongly-typed field values.
//! - Own the format constraints used by both live edits and file loads.
//!
//! # Invariants
//! - A constructed value always satisfies its field constraint.
//! - Parsing trims surrounding whitespace before validation.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}][\p{L}\p{N} ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[\p{L}\p{N}]([\p{L}\p{N}+_.\-]*[\p{L}\p{N}])?@([\p{L}\p{N}]([\p{L}\p{N}\-]*[\p{L}\p{N}])?\.)*[\p{L}\p{N}]([\p{L}\p{N}\-]*[\p{L}\p{N}])$",
    )
    .expect("valid email regex")
});
static TABLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("valid table regex"));

/// Field selector used by validation errors and filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    Name,
    Phone,
    Email,
    Address,
    Rsvp,
    Table,
}

impl FieldKind {
    /// Stable lowercase label, also used as the persisted record key stem.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Address => "address",
            Self::Rsvp => "rsvp_status",
            Self::Table => "table_number",
        }
    }

    fn constraint(self) -> &'static str {
        match self {
            Self::Name => "names should only contain alphanumeric characters and spaces, and it should not be blank",
            Self::Phone => "phone numbers should only contain digits, and it should be at least 3 digits long",
            Self::Email => "emails should be of the format local-part@domain with an alphanumeric start and end",
            Self::Address => "addresses can take any values, and it should not be blank",
            Self::Rsvp => "rsvp status should be one of yes, no or pending",
            Self::Table => "table numbers should only contain digits and fit in an unsigned 32-bit integer",
        }
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw value failed its field format constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldKind,
    pub value: String,
}

impl FieldError {
    fn new(field: FieldKind, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }

    /// Human-readable description of the violated constraint.
    pub fn constraint(&self) -> &'static str {
        self.field.constraint()
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid {} `{}`: {}",
            self.field,
            self.value,
            self.field.constraint()
        )
    }
}

impl Error for FieldError {}

/// Contact name; the identity key for every category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let trimmed = raw.trim();
        if !NAME_RE.is_match(trimmed) {
            return Err(FieldError::new(FieldKind::Name, raw));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whitespace-delimited words of the name.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }

    /// Case-insensitive identity comparison over whitespace-delimited words.
    pub fn same_identity(&self, other: &Name) -> bool {
        let mut left = self.words();
        let mut right = other.words();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if word_eq_ignore_case(a, b) => {}
                _ => return false,
            }
        }
    }
}

fn word_eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
        || a.chars()
            .flat_map(char::to_lowercase)
            .eq(b.chars().flat_map(char::to_lowercase))
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let trimmed = raw.trim();
        if !PHONE_RE.is_match(trimmed) {
            return Err(FieldError::new(FieldKind::Phone, raw));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Phone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let trimmed = raw.trim();
        if !EMAIL_RE.is_match(trimmed) {
            return Err(FieldError::new(FieldKind::Email, raw));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FieldError::new(FieldKind::Address, raw));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Guest attendance reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RsvpStatus {
    Yes,
    No,
    #[default]
    Pending,
}

impl RsvpStatus {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            "pending" => Ok(Self::Pending),
            _ => Err(FieldError::new(FieldKind::Rsvp, raw)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Pending => "pending",
        }
    }
}

impl Display for RsvpStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seating table assigned to a guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableNumber(u32);

impl TableNumber {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let trimmed = raw.trim();
        if !TABLE_RE.is_match(trimmed) {
            return Err(FieldError::new(FieldKind::Table, raw));
        }
        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|_| FieldError::new(FieldKind::Table, raw))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Display for TableNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Address, Email, FieldKind, Name, Phone, RsvpStatus, TableNumber};

    #[test]
    fn name_rejects_blank_and_symbols() {
        assert!(Name::parse("   ").is_err());
        assert!(Name::parse("peter*").is_err());
        assert_eq!(Name::parse("  Alex Tan ").unwrap().as_str(), "Alex Tan");
    }

    #[test]
    fn name_identity_ignores_case() {
        let lower = Name::parse("alex tan").unwrap();
        let upper = Name::parse("ALEX TAN").unwrap();
        assert!(lower.same_identity(&upper));
        assert_ne!(lower, upper);
    }

    #[test]
    fn name_identity_ignores_inner_spacing() {
        let spaced = Name::parse("Alex  Tan").unwrap();
        let single = Name::parse("alex tan").unwrap();
        assert!(spaced.same_identity(&single));
        assert!(!spaced.same_identity(&Name::parse("Alex Tan Wei").unwrap()));
        assert!(!spaced.same_identity(&Name::parse("AlexTan").unwrap()));
        assert!(Name::parse("Élodie Roux")
            .unwrap()
            .same_identity(&Name::parse("ÉLODIE roux").unwrap()));
    }

    #[test]
    fn phone_requires_three_digits() {
        assert!(Phone::parse("91").is_err());
        assert!(Phone::parse("9011p041").is_err());
        assert!(Phone::parse("911").is_ok());
    }

    #[test]
    fn email_accepts_common_shapes() {
        assert!(Email::parse("alice@example.com").is_ok());
        assert!(Email::parse("a1+be.d@example1.com").is_ok());
        assert!(Email::parse("peter_jack@very-very-long-example.com").is_ok());
        assert!(Email::parse("@example.com").is_err());
        assert!(Email::parse("peterjack@").is_err());
        assert!(Email::parse("-peterjack@example.com").is_err());
        assert!(Email::parse("peterjack@example.c").is_err());
    }

    #[test]
    fn address_rejects_blank() {
        let err = Address::parse("  ").unwrap_err();
        assert_eq!(err.field, FieldKind::Address);
    }

    #[test]
    fn rsvp_parses_case_insensitively() {
        assert_eq!(RsvpStatus::parse("YES").unwrap(), RsvpStatus::Yes);
        assert_eq!(RsvpStatus::parse(" pending ").unwrap(), RsvpStatus::Pending);
        assert!(RsvpStatus::parse("maybe").is_err());
    }

    #[test]
    fn table_number_rejects_signs_and_overflow() {
        assert_eq!(TableNumber::parse("12").unwrap().value(), 12);
        assert!(TableNumber::parse("-1").is_err());
        assert!(TableNumber::parse("+3").is_err());
        assert!(TableNumber::parse("99999999999").is_err());
    }
}
