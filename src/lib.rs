//! bundle-impact: maintain a "Bundle impact" section in PR/MR descriptions.
//!
//! Invoked from CI each time a pull request updates. The core is
//! [`section::upsert_bundle_impact`], a pure string transformation that
//! inserts or replaces the section without touching the rest of the
//! description. Everything else is plumbing around it: a platform service
//! for the read-modify-write cycle, a report producer that weighs changed
//! files, and an orchestrator that ties them together.

pub mod auth;
pub mod config;
pub mod error;
pub mod platform;
pub mod report;
pub mod section;
pub mod types;
pub mod update;
