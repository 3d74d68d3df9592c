use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::models::domain::{Membership, Profile};

/// Response for the profile search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchProfilesResponse {
    pub profiles: Vec<Profile>,
    pub total_matches: usize,
    pub total_candidates: usize,
}

/// Which group actions the current user may take
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipPermissions {
    pub can_leave_group: bool,
    pub can_delete_group: bool,
    pub removable_member_ids: Vec<Uuid>,
}

/// Response for the group dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipResponse {
    pub membership: Membership,
    pub permissions: MembershipPermissions,
}

/// Response for a membership mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipActionResponse {
    pub success: bool,
    pub action: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
