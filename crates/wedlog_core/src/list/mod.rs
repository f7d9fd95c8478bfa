//! Identity-guarded collections.
//!
//! # Responsibility
//! - Provide one generic list type reused by every contact category.

pub mod unique_list;
