//! Kaniko Core
//!
//! Wire types for the kaniko build service, shared by the HTTP client and the
//! CI action.
//!
//! This crate contains:
//! - Domain types: job handles, job status, outbound header sets
//! - DTOs: request and response bodies of the `/kaniko` endpoint

pub mod domain;
pub mod dto;
