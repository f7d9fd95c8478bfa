//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate aggregate, filter and storage calls into use-case APIs.
//! - Keep caller layers decoupled from storage details.

pub mod book_service;
