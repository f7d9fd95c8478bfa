//! Single-field contact predicates.
//!
//! # Responsibility
//! - Match one contact field against a set of keyword tokens.
//!
//! # Invariants
//! - Text comparisons are case-insensitive.
//! - Predicates are stateless and never mutate the evaluated entity.

use crate::model::contact::Contact;
use crate::model::fields::{FieldKind, RsvpStatus, TableNumber};

/// One field matcher built from tokenized keywords.
///
/// Text variants store lowercase keywords. An empty keyword set on an
/// optional field matches contacts that have no value for that field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPredicate {
    /// Whole-word name match.
    Name(Vec<String>),
    /// Substring match on the phone number.
    Phone(Vec<String>),
    /// Substring match on the email.
    Email(Vec<String>),
    /// Substring match on the address.
    Address(Vec<String>),
    Rsvp(Vec<RsvpStatus>),
    Table(Vec<TableNumber>),
}

impl FieldPredicate {
    pub fn field(&self) -> FieldKind {
        match self {
            Self::Name(_) => FieldKind::Name,
            Self::Phone(_) => FieldKind::Phone,
            Self::Email(_) => FieldKind::Email,
            Self::Address(_) => FieldKind::Address,
            Self::Rsvp(_) => FieldKind::Rsvp,
            Self::Table(_) => FieldKind::Table,
        }
    }

    /// Evaluates this predicate against one contact.
    pub fn test<C: Contact + ?Sized>(&self, contact: &C) -> bool {
        match self {
            Self::Name(keywords) => contact.name().words().any(|word| {
                let word = word.to_lowercase();
                keywords.iter().any(|keyword| *keyword == word)
            }),
            Self::Phone(keywords) => {
                matches_text(keywords, contact.phone().map(|phone| phone.as_str()))
            }
            Self::Email(keywords) => {
                matches_text(keywords, contact.email().map(|email| email.as_str()))
            }
            Self::Address(keywords) => matches_text(
                keywords,
                contact.address().map(|address| address.as_str()),
            ),
            Self::Rsvp(statuses) => contact
                .rsvp_status()
                .is_some_and(|status| statuses.contains(&status)),
            Self::Table(tables) => match contact.table_number() {
                Some(table) => tables.contains(&table),
                None => tables.is_empty(),
            },
        }
    }
}

fn matches_text(keywords: &[String], value: Option<&str>) -> bool {
    match value {
        Some(text) => {
            let text = text.to_lowercase();
            keywords.iter().any(|keyword| text.contains(keyword.as_str()))
        }
        None => keywords.is_empty(),
    }
}
