//! Address book aggregate root.

pub mod address_book;
