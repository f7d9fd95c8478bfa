//! Address book aggregate.
//!
//! # Responsibility
//! - Own exactly one unique list per contact category.
//! - Route category-tagged operations to the matching list.
//!
//! # Invariants
//! - Lists are only reachable mutably through this type's methods.
//! - All uniqueness rules are enforced by `UniqueEntityList`.

use crate::list::unique_list::ListResult;
use crate::model::contact::{Guest, Person, Vendor};

mod sealed {
    use crate::list::unique_list::UniqueEntityList;
    use crate::model::contact::{Entity, Guest, Person, Vendor};

    /// Category storage; only reachable through a private `AddressBook` field.
    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct Lists {
        pub(super) persons: UniqueEntityList<Person>,
        pub(super) guests: UniqueEntityList<Guest>,
        pub(super) vendors: UniqueEntityList<Vendor>,
    }

    pub trait Routed: Entity {
        fn list(lists: &Lists) -> &UniqueEntityList<Self>;
        fn list_mut(lists: &mut Lists) -> &mut UniqueEntityList<Self>;
    }

    impl Routed for Person {
        fn list(lists: &Lists) -> &UniqueEntityList<Self> {
            &lists.persons
        }

        fn list_mut(lists: &mut Lists) -> &mut UniqueEntityList<Self> {
            &mut lists.persons
        }
    }

    impl Routed for Guest {
        fn list(lists: &Lists) -> &UniqueEntityList<Self> {
            &lists.guests
        }

        fn list_mut(lists: &mut Lists) -> &mut UniqueEntityList<Self> {
            &mut lists.guests
        }
    }

    impl Routed for Vendor {
        fn list(lists: &Lists) -> &UniqueEntityList<Self> {
            &lists.vendors
        }

        fn list_mut(lists: &mut Lists) -> &mut UniqueEntityList<Self> {
            &mut lists.vendors
        }
    }
}

/// Contact category stored in an [`AddressBook`].
///
/// Sealed: implemented only for `Person`, `Guest` and `Vendor`, and the lists
/// it routes to are never handed out mutably.
///
/// ```compile_fail
/// use wedlog_core::{AddressBook, BookEntity, Person, UniqueEntityList};
///
/// fn swap<T: BookEntity>(book: &mut AddressBook) {
///     *T::list_mut(book) = UniqueEntityList::new();
/// }
/// ```
pub trait BookEntity: sealed::Routed {}

impl BookEntity for Person {}
impl BookEntity for Guest {}
impl BookEntity for Vendor {}

/// In-memory snapshot of all contact categories.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddressBook {
    lists: sealed::Lists,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every list with the contents of `other`.
    pub fn reset_data(&mut self, other: &AddressBook) {
        self.lists.persons.replace_with(&other.lists.persons);
        self.lists.guests.replace_with(&other.lists.guests);
        self.lists.vendors.replace_with(&other.lists.vendors);
    }

    pub fn contains<T: BookEntity>(&self, entity: &T) -> bool {
        T::list(&self.lists).contains(entity)
    }

    pub fn add<T: BookEntity>(&mut self, entity: T) -> ListResult<()> {
        T::list_mut(&mut self.lists).add(entity)
    }

    pub fn set_entity<T: BookEntity>(&mut self, target: &T, edited: T) -> ListResult<()> {
        T::list_mut(&mut self.lists).set_entity(target, edited)
    }

    pub fn remove<T: BookEntity>(&mut self, target: &T) -> ListResult<T> {
        T::list_mut(&mut self.lists).remove(target)
    }

    pub fn replace_all<T: BookEntity>(&mut self, entities: Vec<T>) -> ListResult<()> {
        T::list_mut(&mut self.lists).replace_all(entities)
    }

    /// Read-only view of one category, in insertion order.
    pub fn entities<T: BookEntity>(&self) -> &[T] {
        T::list(&self.lists).as_slice()
    }

    pub fn persons(&self) -> &[Person] {
        self.lists.persons.as_slice()
    }

    pub fn guests(&self) -> &[Guest] {
        self.lists.guests.as_slice()
    }

    pub fn vendors(&self) -> &[Vendor] {
        self.lists.vendors.as_slice()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.persons.is_empty()
            && self.lists.guests.is_empty()
            && self.lists.vendors.is_empty()
    }
}
