//! Data Transfer Objects (DTOs)
//!
//! Bodies exchanged with the build service over HTTP.

pub mod job;
