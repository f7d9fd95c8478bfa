//! Address book use-case service.
//!
//! # Responsibility
//! - Hold the live aggregate, its storage and one active filter per category.
//! - Resolve display indices against the filtered view for edits and deletes.
//!
//! # Invariants
//! - Service APIs never bypass `AddressBook`/`UniqueEntityList` checks.
//! - `load` replaces the in-memory book only when the whole document is valid.
//! - Indices always refer to the currently filtered view of their category.

use crate::book::address_book::{AddressBook, BookEntity};
use crate::filter::contact_filter::{ContactFilter, FilterError};
use crate::list::unique_list::ListError;
use crate::model::contact::EntityKind;
use crate::storage::json_storage::AddressBookStorage;
use crate::storage::StorageError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// One-based position in a displayed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    /// Returns `None` for zero.
    pub fn from_one_based(value: usize) -> Option<Self> {
        value.checked_sub(1).map(Self)
    }

    pub fn from_zero_based(value: usize) -> Self {
        Self(value)
    }

    pub fn zero_based(self) -> usize {
        self.0
    }

    pub fn one_based(self) -> usize {
        self.0 + 1
    }
}

/// Service error for book use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Index is past the end of the filtered view.
    InvalidIndex {
        kind: EntityKind,
        index: Index,
        len: usize,
    },
    List(ListError),
    Storage(StorageError),
    Filter(FilterError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIndex { kind, index, len } => write!(
                f,
                "the {kind} index {} is invalid for a list of {len}",
                index.one_based()
            ),
            Self::List(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::Filter(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidIndex { .. } => None,
            Self::List(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::Filter(err) => Some(err),
        }
    }
}

impl From<ListError> for ServiceError {
    fn from(value: ListError) -> Self {
        Self::List(value)
    }
}

impl From<FilterError> for ServiceError {
    fn from(value: FilterError) -> Self {
        Self::Filter(value)
    }
}

impl From<StorageError> for ServiceError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

#[derive(Debug, Clone, Default)]
struct ActiveFilters {
    persons: ContactFilter,
    guests: ContactFilter,
    vendors: ContactFilter,
}

impl ActiveFilters {
    fn slot(&self, kind: EntityKind) -> &ContactFilter {
        match kind {
            EntityKind::Person => &self.persons,
            EntityKind::Guest => &self.guests,
            EntityKind::Vendor => &self.vendors,
        }
    }

    fn slot_mut(&mut self, kind: EntityKind) -> &mut ContactFilter {
        match kind {
            EntityKind::Person => &mut self.persons,
            EntityKind::Guest => &mut self.guests,
            EntityKind::Vendor => &mut self.vendors,
        }
    }
}

/// Use-case facade over an address book and its storage.
pub struct BookService<S: AddressBookStorage> {
    book: AddressBook,
    storage: S,
    filters: ActiveFilters,
}

impl<S: AddressBookStorage> BookService<S> {
    /// Creates a service with an empty book and show-all filters.
    pub fn new(storage: S) -> Self {
        Self::with_book(storage, AddressBook::new())
    }

    pub fn with_book(storage: S, book: AddressBook) -> Self {
        Self {
            book,
            storage,
            filters: ActiveFilters::default(),
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Replaces the in-memory book with the stored document.
    ///
    /// A missing file loads as an empty book. On error the current book and
    /// filters are kept unchanged.
    pub fn load(&mut self) -> ServiceResult<()> {
        let loaded = match self.storage.read() {
            Ok(loaded) => loaded,
            Err(err) => {
                warn!(
                    "event=book_load module=service status=rejected error_code={}",
                    err.code()
                );
                return Err(err.into());
            }
        };
        let book = loaded.unwrap_or_default();
        self.book.reset_data(&book);
        self.filters = ActiveFilters::default();
        info!("event=book_load module=service status=ok");
        Ok(())
    }

    pub fn save(&self) -> ServiceResult<()> {
        self.storage.save(&self.book)?;
        Ok(())
    }

    /// Adds `entity` and resets its category to the show-all view.
    pub fn add<T: BookEntity>(&mut self, entity: T) -> ServiceResult<()> {
        self.book.add(entity)?;
        *self.filters.slot_mut(T::KIND) = ContactFilter::show_all();
        Ok(())
    }

    /// Replaces the entity shown at `index` with `edited`.
    pub fn update<T: BookEntity>(&mut self, index: Index, edited: T) -> ServiceResult<()> {
        let target = self.resolve::<T>(index)?;
        self.book.set_entity(&target, edited)?;
        Ok(())
    }

    /// Removes and returns the entity shown at `index`.
    pub fn delete<T: BookEntity>(&mut self, index: Index) -> ServiceResult<T> {
        let target = self.resolve::<T>(index)?;
        Ok(self.book.remove(&target)?)
    }

    /// Installs `filter` for the `T` category.
    ///
    /// # Errors
    /// - `FilterError::KindMismatch` when `filter` was built for another
    ///   category; the active filter is kept.
    pub fn apply_filter<T: BookEntity>(&mut self, filter: ContactFilter) -> ServiceResult<()> {
        filter.ensure_kind(T::KIND)?;
        *self.filters.slot_mut(T::KIND) = filter;
        Ok(())
    }

    pub fn clear_filter<T: BookEntity>(&mut self) {
        *self.filters.slot_mut(T::KIND) = ContactFilter::show_all();
    }

    pub fn active_filter<T: BookEntity>(&self) -> &ContactFilter {
        self.filters.slot(T::KIND)
    }

    /// Current filtered view of one category, evaluated on each call.
    pub fn filtered<T: BookEntity>(&self) -> Vec<&T> {
        self.filters
            .slot(T::KIND)
            .apply(self.book.entities::<T>())
    }

    fn resolve<T: BookEntity>(&self, index: Index) -> ServiceResult<T> {
        let view = self.filtered::<T>();
        view.get(index.zero_based())
            .map(|entity| (*entity).clone())
            .ok_or(ServiceError::InvalidIndex {
                kind: T::KIND,
                index,
                len: view.len(),
            })
    }
}
