// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod permissions;

pub use filters::{filter_profiles, matches_criteria, TextQuery};
pub use matcher::{ProfileMatcher, SearchResult};
pub use permissions::{
    authorize, can_delete_group, can_leave_group, can_remove_member, permissions_for,
    MembershipAction, MembershipTransition, PermissionError,
};
