//! Contact entities: persons, guests and vendors.
//!
//! # Responsibility
//! - Define the three contact categories and their shared read surface.
//! - Define the two equivalence relations used by collections.
//!
//! # Invariants
//! - `name` is mandatory for every category; other base fields are optional.
//! - Same-identity is case-insensitive name equality; full equality is `PartialEq`.

use crate::model::fields::{Address, Email, Name, Phone, RsvpStatus, TableNumber};
use std::fmt::{Display, Formatter};

/// Contact category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Person,
    Guest,
    Vendor,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [Self::Person, Self::Guest, Self::Vendor];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Guest => "guest",
            Self::Vendor => "vendor",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read accessors shared by all contact categories.
///
/// Guest-only fields default to `None` so filters can evaluate any category
/// through one surface.
pub trait Contact {
    fn name(&self) -> &Name;
    fn phone(&self) -> Option<&Phone>;
    fn email(&self) -> Option<&Email>;
    fn address(&self) -> Option<&Address>;

    fn rsvp_status(&self) -> Option<RsvpStatus> {
        None
    }

    fn table_number(&self) -> Option<TableNumber> {
        None
    }
}

/// A contact stored in a unique list.
pub trait Entity: Contact + Clone + PartialEq + std::fmt::Debug {
    const KIND: EntityKind;

    /// Weaker-than-equality relation used to reject logical duplicates.
    fn is_same_identity(&self, other: &Self) -> bool {
        self.name().same_identity(other.name())
    }
}

/// Generic contact with no category-specific data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: Name,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
}

impl Person {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phone: None,
            email: None,
            address: None,
        }
    }
}

/// Wedding guest with attendance and seating data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    pub name: Name,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    /// Starts as `RsvpStatus::Pending`.
    pub rsvp_status: RsvpStatus,
    pub table_number: Option<TableNumber>,
}

impl Guest {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phone: None,
            email: None,
            address: None,
            rsvp_status: RsvpStatus::Pending,
            table_number: None,
        }
    }
}

/// Service provider for the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vendor {
    pub name: Name,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
}

impl Vendor {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phone: None,
            email: None,
            address: None,
        }
    }
}

macro_rules! impl_base_contact {
    () => {
        fn name(&self) -> &Name {
            &self.name
        }

        fn phone(&self) -> Option<&Phone> {
            self.phone.as_ref()
        }

        fn email(&self) -> Option<&Email> {
            self.email.as_ref()
        }

        fn address(&self) -> Option<&Address> {
            self.address.as_ref()
        }
    };
}

impl Contact for Person {
    impl_base_contact!();
}

impl Contact for Vendor {
    impl_base_contact!();
}

impl Contact for Guest {
    impl_base_contact!();

    fn rsvp_status(&self) -> Option<RsvpStatus> {
        Some(self.rsvp_status)
    }

    fn table_number(&self) -> Option<TableNumber> {
        self.table_number
    }
}

impl Entity for Person {
    const KIND: EntityKind = EntityKind::Person;
}

impl Entity for Guest {
    const KIND: EntityKind = EntityKind::Guest;
}

impl Entity for Vendor {
    const KIND: EntityKind = EntityKind::Vendor;
}
