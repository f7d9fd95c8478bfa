//! Composite contact filter and its builder.
//!
//! # Responsibility
//! - Turn validated per-field criteria into an AND-combined filter.
//! - Evaluate the filter lazily over a list view.
//!
//! # Invariants
//! - A built filter holds at least one predicate, one per field.
//! - Name and RSVP criteria cannot be blank.
//! - A built filter remembers its category; show-all fits every category.
//! - Evaluation preserves the order of the evaluated view.

use crate::filter::predicate::FieldPredicate;
use crate::model::contact::{Contact, EntityKind};
use crate::model::fields::{FieldKind, RsvpStatus, TableNumber};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type FilterResult<T> = Result<T, FilterError>;

/// Filter construction failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// No criteria were supplied.
    EmptyFilter,
    /// A field that requires keywords was supplied blank.
    EmptyField(FieldKind),
    /// The same field was supplied more than once.
    DuplicateField(FieldKind),
    /// The field does not exist on this contact category.
    UnsupportedField { kind: EntityKind, field: FieldKind },
    /// A keyword cannot be read as a value of the field.
    InvalidKeyword { field: FieldKind, keyword: String },
    /// The filter was built for another contact category.
    KindMismatch {
        expected: EntityKind,
        found: EntityKind,
    },
}

impl Display for FilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFilter => write!(f, "at least one field to filter by must be provided"),
            Self::EmptyField(field) => {
                write!(f, "cannot filter for empty compulsory field `{field}`")
            }
            Self::DuplicateField(field) => {
                write!(f, "field `{field}` may only be specified once")
            }
            Self::UnsupportedField { kind, field } => {
                write!(f, "{kind} records have no `{field}` field")
            }
            Self::InvalidKeyword { field, keyword } => {
                write!(f, "`{keyword}` is not a valid {field} keyword")
            }
            Self::KindMismatch { expected, found } => {
                write!(f, "a {found} filter cannot be applied to {expected} records")
            }
        }
    }
}

impl Error for FilterError {}

/// One caller-supplied field/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriterion {
    pub field: FieldKind,
    /// Raw keyword text; tokenized on whitespace during build.
    pub value: String,
}

impl FilterCriterion {
    pub fn new(field: FieldKind, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// AND-combination of single-field predicates.
///
/// An empty predicate set is the show-all filter and can only be obtained
/// through [`ContactFilter::show_all`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFilter {
    kind: Option<EntityKind>,
    predicates: Vec<FieldPredicate>,
}

impl ContactFilter {
    /// Filter that accepts every contact.
    pub fn show_all() -> Self {
        Self::default()
    }

    /// Builds a filter for `kind` from caller criteria.
    ///
    /// # Errors
    /// - `FilterError::EmptyFilter` for zero criteria.
    /// - `FilterError::UnsupportedField` for guest-only fields on other kinds.
    /// - `FilterError::DuplicateField` for a repeated field.
    /// - `FilterError::EmptyField` for blank name/RSVP values.
    /// - `FilterError::InvalidKeyword` for unparseable RSVP/table keywords.
    pub fn build(kind: EntityKind, criteria: &[FilterCriterion]) -> FilterResult<Self> {
        if criteria.is_empty() {
            return Err(FilterError::EmptyFilter);
        }

        let mut seen = BTreeSet::new();
        let mut predicates = Vec::with_capacity(criteria.len());
        for criterion in criteria {
            if !supports_field(kind, criterion.field) {
                return Err(FilterError::UnsupportedField {
                    kind,
                    field: criterion.field,
                });
            }
            if !seen.insert(criterion.field) {
                return Err(FilterError::DuplicateField(criterion.field));
            }
            predicates.push(build_predicate(criterion)?);
        }

        Ok(Self {
            kind: Some(kind),
            predicates,
        })
    }

    pub fn is_show_all(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Category the filter was built for; `None` for show-all.
    pub fn kind(&self) -> Option<EntityKind> {
        self.kind
    }

    /// Checks that the filter may be evaluated over `kind` records.
    pub fn ensure_kind(&self, kind: EntityKind) -> FilterResult<()> {
        match self.kind {
            Some(found) if found != kind => Err(FilterError::KindMismatch {
                expected: kind,
                found,
            }),
            _ => Ok(()),
        }
    }

    pub fn predicates(&self) -> &[FieldPredicate] {
        &self.predicates
    }

    /// Returns whether every predicate accepts `contact`.
    pub fn matches<C: Contact + ?Sized>(&self, contact: &C) -> bool {
        self.predicates
            .iter()
            .all(|predicate| predicate.test(contact))
    }

    /// Filtered view over `items`, in the same order.
    pub fn apply<'a, C: Contact>(&self, items: &'a [C]) -> Vec<&'a C> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}

fn supports_field(kind: EntityKind, field: FieldKind) -> bool {
    match field {
        FieldKind::Rsvp | FieldKind::Table => kind == EntityKind::Guest,
        _ => true,
    }
}

fn requires_keywords(field: FieldKind) -> bool {
    matches!(field, FieldKind::Name | FieldKind::Rsvp)
}

fn build_predicate(criterion: &FilterCriterion) -> FilterResult<FieldPredicate> {
    let tokens = criterion.value.split_whitespace().collect::<Vec<_>>();
    if tokens.is_empty() && requires_keywords(criterion.field) {
        return Err(FilterError::EmptyField(criterion.field));
    }

    let lowercase = || -> Vec<String> {
        tokens.iter().map(|token| token.to_lowercase()).collect()
    };
    let predicate = match criterion.field {
        FieldKind::Name => FieldPredicate::Name(lowercase()),
        FieldKind::Phone => FieldPredicate::Phone(lowercase()),
        FieldKind::Email => FieldPredicate::Email(lowercase()),
        FieldKind::Address => FieldPredicate::Address(lowercase()),
        FieldKind::Rsvp => FieldPredicate::Rsvp(parse_keywords(
            criterion.field,
            &tokens,
            RsvpStatus::parse,
        )?),
        FieldKind::Table => FieldPredicate::Table(parse_keywords(
            criterion.field,
            &tokens,
            TableNumber::parse,
        )?),
    };
    Ok(predicate)
}

fn parse_keywords<T, E>(
    field: FieldKind,
    tokens: &[&str],
    parse: impl Fn(&str) -> Result<T, E>,
) -> FilterResult<Vec<T>> {
    tokens
        .iter()
        .map(|&token| {
            parse(token).map_err(|_| FilterError::InvalidKeyword {
                field,
                keyword: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{build_predicate, FilterCriterion, FilterError};
    use crate::filter::predicate::FieldPredicate;
    use crate::model::fields::{FieldKind, RsvpStatus};

    #[test]
    fn keywords_are_tokenized_and_lowercased() {
        let predicate =
            build_predicate(&FilterCriterion::new(FieldKind::Email, "  Alice@  EXAMPLE ")).unwrap();
        assert_eq!(
            predicate,
            FieldPredicate::Email(vec!["alice@".to_string(), "example".to_string()])
        );
    }

    #[test]
    fn rsvp_keywords_are_parsed() {
        let predicate = build_predicate(&FilterCriterion::new(FieldKind::Rsvp, "yes NO")).unwrap();
        assert_eq!(
            predicate,
            FieldPredicate::Rsvp(vec![RsvpStatus::Yes, RsvpStatus::No])
        );
    }

    #[test]
    fn invalid_table_keyword_is_reported() {
        let err = build_predicate(&FilterCriterion::new(FieldKind::Table, "4 four")).unwrap_err();
        assert_eq!(
            err,
            FilterError::InvalidKeyword {
                field: FieldKind::Table,
                keyword: "four".to_string(),
            }
        );
    }
}
