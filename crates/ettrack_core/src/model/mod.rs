//! Domain model for tracked users and their exercise entries.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every user is identified by a short, client-generated `UserId` that is
//!   assigned before the record ever reaches the store.
//! - Exercise entries reference their owner by `UserId`; the link is by value
//!   only and is never validated against live user rows.

pub mod exercise;
pub mod user;
