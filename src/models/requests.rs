use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::FilterCriteria;

/// Request to search roommate profiles
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SearchProfilesRequest {
    #[validate(length(max = 200))]
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub filter: FilterCriteria,
    #[validate(range(min = 1, max = 500))]
    #[serde(default)]
    pub limit: Option<usize>,
}
