//! Shared foundation: errors, configuration, and the review data model.

pub mod config;
pub mod errors;
pub mod review;
