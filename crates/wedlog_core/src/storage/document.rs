//! Serde model of the persisted address book document.
//!
//! # Responsibility
//! - Mirror the on-disk JSON layout (`persons`, `guests`, `vendors`).
//! - Convert records into validated entities and back.
//!
//! # Invariants
//! - Every declared field is written, absent values as `null`.
//! - Unknown keys are ignored on read; missing arrays read as empty.
//! - `name` is required; a missing or invalid field is reported with its
//!   record path.

use crate::book::address_book::AddressBook;
use crate::list::unique_list::ListError;
use crate::model::contact::{Guest, Person, Vendor};
use crate::model::fields::{
    Address, Email, FieldError, FieldKind, Name, Phone, RsvpStatus, TableNumber,
};
use crate::storage::{StorageError, StorageResult};
use serde::{Deserialize, Serialize};

/// Whole-file document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookDocument {
    pub persons: Vec<ContactRecord>,
    pub guests: Vec<GuestRecord>,
    pub vendors: Vec<ContactRecord>,
}

/// Persisted shape shared by persons and vendors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRecord {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuestRecord {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub rsvp_status: Option<String>,
    pub table_number: Option<String>,
}

impl BookDocument {
    /// Captures every list of `book` in order.
    pub fn from_book(book: &AddressBook) -> Self {
        Self {
            persons: book.persons().iter().map(ContactRecord::from_person).collect(),
            guests: book.guests().iter().map(GuestRecord::from_guest).collect(),
            vendors: book.vendors().iter().map(ContactRecord::from_vendor).collect(),
        }
    }

    /// Validates all records and builds a fresh aggregate.
    ///
    /// # Errors
    /// - `StorageError::FieldFormat` for the first invalid record field.
    /// - `StorageError::Duplicate` when a category holds same-identity records.
    pub fn to_book(&self) -> StorageResult<AddressBook> {
        let persons = parse_records(&self.persons, "persons", ContactRecord::to_person)?;
        let guests = parse_records(&self.guests, "guests", GuestRecord::to_guest)?;
        let vendors = parse_records(&self.vendors, "vendors", ContactRecord::to_vendor)?;

        let mut book = AddressBook::new();
        book.replace_all(persons).map_err(duplicate_error)?;
        book.replace_all(guests).map_err(duplicate_error)?;
        book.replace_all(vendors).map_err(duplicate_error)?;
        Ok(book)
    }
}

impl ContactRecord {
    fn from_person(person: &Person) -> Self {
        Self {
            name: Some(person.name.to_string()),
            phone: person.phone.as_ref().map(ToString::to_string),
            email: person.email.as_ref().map(ToString::to_string),
            address: person.address.as_ref().map(ToString::to_string),
        }
    }

    fn from_vendor(vendor: &Vendor) -> Self {
        Self {
            name: Some(vendor.name.to_string()),
            phone: vendor.phone.as_ref().map(ToString::to_string),
            email: vendor.email.as_ref().map(ToString::to_string),
            address: vendor.address.as_ref().map(ToString::to_string),
        }
    }

    fn to_person(&self, path: &str) -> StorageResult<Person> {
        Ok(Person {
            name: required(&self.name, path, FieldKind::Name, Name::parse)?,
            phone: optional(&self.phone, path, FieldKind::Phone, Phone::parse)?,
            email: optional(&self.email, path, FieldKind::Email, Email::parse)?,
            address: optional(&self.address, path, FieldKind::Address, Address::parse)?,
        })
    }

    fn to_vendor(&self, path: &str) -> StorageResult<Vendor> {
        Ok(Vendor {
            name: required(&self.name, path, FieldKind::Name, Name::parse)?,
            phone: optional(&self.phone, path, FieldKind::Phone, Phone::parse)?,
            email: optional(&self.email, path, FieldKind::Email, Email::parse)?,
            address: optional(&self.address, path, FieldKind::Address, Address::parse)?,
        })
    }
}

impl GuestRecord {
    fn from_guest(guest: &Guest) -> Self {
        Self {
            name: Some(guest.name.to_string()),
            phone: guest.phone.as_ref().map(ToString::to_string),
            email: guest.email.as_ref().map(ToString::to_string),
            address: guest.address.as_ref().map(ToString::to_string),
            rsvp_status: Some(guest.rsvp_status.to_string()),
            table_number: guest.table_number.map(|table| table.to_string()),
        }
    }

    fn to_guest(&self, path: &str) -> StorageResult<Guest> {
        Ok(Guest {
            name: required(&self.name, path, FieldKind::Name, Name::parse)?,
            phone: optional(&self.phone, path, FieldKind::Phone, Phone::parse)?,
            email: optional(&self.email, path, FieldKind::Email, Email::parse)?,
            address: optional(&self.address, path, FieldKind::Address, Address::parse)?,
            rsvp_status: optional(&self.rsvp_status, path, FieldKind::Rsvp, RsvpStatus::parse)?
                .unwrap_or_default(),
            table_number: optional(
                &self.table_number,
                path,
                FieldKind::Table,
                TableNumber::parse,
            )?,
        })
    }
}

/// Serializes `book` as pretty-printed JSON.
pub fn to_json_string(book: &AddressBook) -> StorageResult<String> {
    Ok(serde_json::to_string_pretty(&BookDocument::from_book(book))?)
}

/// Parses and validates a JSON document.
pub fn from_json_str(json: &str) -> StorageResult<AddressBook> {
    let document: BookDocument = serde_json::from_str(json)?;
    document.to_book()
}

fn parse_records<R, T>(
    records: &[R],
    category: &str,
    parse: impl Fn(&R, &str) -> StorageResult<T>,
) -> StorageResult<Vec<T>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| parse(record, &format!("{category}[{index}]")))
        .collect()
}

fn required<T>(
    value: &Option<String>,
    path: &str,
    field: FieldKind,
    parse: fn(&str) -> Result<T, FieldError>,
) -> StorageResult<T> {
    match value {
        Some(raw) => parse(raw).map_err(|err| field_format(path, field, err.constraint())),
        None => Err(field_format(path, field, "required field is missing")),
    }
}

fn optional<T>(
    value: &Option<String>,
    path: &str,
    field: FieldKind,
    parse: fn(&str) -> Result<T, FieldError>,
) -> StorageResult<Option<T>> {
    value
        .as_deref()
        .map(|raw| parse(raw).map_err(|err| field_format(path, field, err.constraint())))
        .transpose()
}

fn field_format(path: &str, field: FieldKind, message: &str) -> StorageError {
    StorageError::FieldFormat {
        path: format!("{path}.{field}"),
        message: message.to_string(),
    }
}

fn duplicate_error(err: ListError) -> StorageError {
    StorageError::Duplicate(err.kind())
}
