//! Persistence of the address book as a JSON document.
//!
//! # Responsibility
//! - Convert the aggregate to and from the persisted document shape.
//! - Read and atomically write the document on disk.
//!
//! # Invariants
//! - Loading is all-or-nothing: any invalid record rejects the document.
//! - Loaded lists are built through `UniqueEntityList::replace_all`.

use crate::model::contact::EntityKind;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod document;
pub mod json_storage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-layer error for file access and document validation.
#[derive(Debug)]
pub enum StorageError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The document is not valid JSON or does not have the expected shape.
    Json(serde_json::Error),
    /// A record field violates its format constraint.
    FieldFormat {
        /// Record path such as `guests[1].phone`.
        path: String,
        message: String,
    },
    /// Two records of one category share an identity.
    Duplicate(EntityKind),
}

impl StorageError {
    /// Stable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io_failed",
            Self::Json(_) => "json_invalid",
            Self::FieldFormat { .. } => "field_format",
            Self::Duplicate(_) => "duplicate_entity",
        }
    }
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "i/o error on `{}`: {source}", path.display()),
            Self::Json(err) => write!(f, "malformed address book document: {err}"),
            Self::FieldFormat { path, message } => write!(f, "invalid `{path}`: {message}"),
            Self::Duplicate(EntityKind::Person) => {
                write!(f, "Persons list contains duplicate person(s).")
            }
            Self::Duplicate(EntityKind::Guest) => {
                write!(f, "Guests list contains duplicate guest(s).")
            }
            Self::Duplicate(EntityKind::Vendor) => {
                write!(f, "Vendors list contains duplicate vendor(s).")
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::FieldFormat { .. } | Self::Duplicate(_) => None,
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
