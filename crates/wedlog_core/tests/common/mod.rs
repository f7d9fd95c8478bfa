#![allow(dead_code)]

use wedlog_core::{
    Address, AddressBook, Email, Guest, Name, Person, Phone, RsvpStatus, TableNumber, Vendor,
};

pub fn name(value: &str) -> Name {
    Name::parse(value).unwrap()
}

pub fn person(value: &str, phone: Option<&str>, email: Option<&str>) -> Person {
    let mut person = Person::new(name(value));
    person.phone = phone.map(|raw| Phone::parse(raw).unwrap());
    person.email = email.map(|raw| Email::parse(raw).unwrap());
    person
}

pub fn guest(value: &str, rsvp: RsvpStatus, table: Option<u32>) -> Guest {
    let mut guest = Guest::new(name(value));
    guest.rsvp_status = rsvp;
    guest.table_number = table.map(TableNumber::new);
    guest
}

pub fn vendor(value: &str, phone: Option<&str>) -> Vendor {
    let mut vendor = Vendor::new(name(value));
    vendor.phone = phone.map(|raw| Phone::parse(raw).unwrap());
    vendor
}

pub fn alice() -> Person {
    let mut alice = person("Alice Pauline", Some("94351253"), Some("alice@example.com"));
    alice.address = Some(Address::parse("123, Jurong West Ave 6, #08-111").unwrap());
    alice
}

pub fn benson() -> Person {
    person("Benson Meier", Some("98765432"), Some("johnd@example.com"))
}

pub fn sam() -> Guest {
    guest("Sam", RsvpStatus::Pending, None)
}

pub fn giselle() -> Guest {
    let mut giselle = guest("Giselle Tan", RsvpStatus::Yes, Some(3));
    giselle.phone = Some(Phone::parse("81112222").unwrap());
    giselle.address = Some(Address::parse("Blk 30 Lorong 3 Toa Payoh").unwrap());
    giselle
}

pub fn florist() -> Vendor {
    vendor("Bloom Florist", Some("61234567"))
}

pub fn caterer() -> Vendor {
    let mut caterer = vendor("Feast Caterer", None);
    caterer.email = Some(Email::parse("orders@feast.com.sg").unwrap());
    caterer
}

/// Book holding every typical contact of each category.
pub fn typical_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add(alice()).unwrap();
    book.add(benson()).unwrap();
    book.add(giselle()).unwrap();
    book.add(sam()).unwrap();
    book.add(florist()).unwrap();
    book.add(caterer()).unwrap();
    book
}
