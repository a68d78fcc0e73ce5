//! Domain types
//!
//! Core entities of a build job as seen from the submitting side.

pub mod headers;
pub mod job;
