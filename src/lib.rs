//! Roomie Match - profile search and group management for the Roomie app
//!
//! This library provides the roommate profile filter and the permission
//! checks behind group membership actions, plus the HTTP service around them.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{filter_profiles, ProfileMatcher, MembershipAction, MembershipTransition, PermissionError};
pub use crate::models::{FilterCriteria, Membership, Profile, SearchProfilesRequest, SearchProfilesResponse};
