//! Imports a YouTrack JSON issue export into Jira.
//!
//! Each source issue is mapped to a Jira create-issue payload, created, given
//! its comments and moved to Done. Failed calls are reported and the import
//! moves on to the next issue.

pub mod api;
pub mod config;
pub mod errors;
pub mod import;
pub mod mapping;
pub mod models;
