//! Entity to model mappers
//!
//! Conversions from database models to domain entities (callsheet-core).
//! Entity to column binding happens inline in the repositories, with the
//! enum labels supplied by the entities' `as_str` methods.

mod confirmation;
mod report;
mod schedule;
mod user;
