//! Annotates Gradle version catalogs with available dependency updates.
//!
//! The [`catalog`] module is the text engine; everything else is the
//! command-line edge around it.

pub mod agents;
pub mod catalog;
pub mod error;
pub mod maven;
pub mod utils;
pub mod workflow;
