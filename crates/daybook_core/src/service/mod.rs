//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep UI layers decoupled from storage and analytics details.

pub mod journal_service;
