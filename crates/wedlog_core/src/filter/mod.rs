//! Read-only filtering over contact lists.
//!
//! # Responsibility
//! - Provide per-field predicates and their AND-composite.
//! - Validate caller criteria before a filter is built.
//!
//! # Invariants
//! - Filters are views; evaluating one never mutates a list.

pub mod contact_filter;
pub mod predicate;
