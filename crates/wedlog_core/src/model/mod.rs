//! Contact domain model.
//!
//! # Responsibility
//! - Define validated field value objects and the three contact categories.
//!
//! # Invariants
//! - Entities can only hold values that passed their field constraint.
//! - Identity between contacts is decided by `Entity::is_same_identity`.

pub mod contact;
pub mod fields;
