//! Core domain logic for WedLog.
//! This crate is the single source of truth for contact invariants.

pub mod book;
pub mod config;
pub mod filter;
pub mod list;
pub mod logging;
pub mod model;
pub mod service;
pub mod storage;

pub use book::address_book::{AddressBook, BookEntity};
pub use config::{ConfigError, CoreConfig};
pub use filter::contact_filter::{ContactFilter, FilterCriterion, FilterError, FilterResult};
pub use filter::predicate::FieldPredicate;
pub use list::unique_list::{ListError, ListResult, UniqueEntityList};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::contact::{Contact, Entity, EntityKind, Guest, Person, Vendor};
pub use model::fields::{
    Address, Email, FieldError, FieldKind, Name, Phone, RsvpStatus, TableNumber,
};
pub use service::book_service::{BookService, Index, ServiceError, ServiceResult};
pub use storage::document::{from_json_str, to_json_string, BookDocument};
pub use storage::json_storage::{AddressBookStorage, JsonAddressBookStorage};
pub use storage::{StorageError, StorageResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
