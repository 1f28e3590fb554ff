//! Data models for the team profile directory.
//!
//! These models match the frontend TypeScript interfaces exactly for seamless interoperability.

mod profile;

pub use profile::*;
