// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{FilterCriteria, Group, Member, Membership, Profile, ProfileStatus, ProfileUser, Role, School, Sex, Volume};
pub use requests::SearchProfilesRequest;
pub use responses::{ErrorResponse, HealthResponse, MembershipActionResponse, MembershipPermissions, MembershipResponse, SearchProfilesResponse};
