use uuid::Uuid;
use crate::core::filters::{matches_criteria, TextQuery};
use crate::models::{FilterCriteria, Profile};

/// Default cap on profiles returned by a single search
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Result of a profile search
#[derive(Debug)]
pub struct SearchResult {
    pub profiles: Vec<Profile>,
    pub total_matches: usize,
    pub total_candidates: usize,
}

/// Runs the profile filter for the explore screen
///
/// The filter itself is stateless; the matcher only adds the viewer
/// exclusion and the result cap the service applies around it.
#[derive(Debug, Clone)]
pub struct ProfileMatcher {
    max_results: usize,
}

impl ProfileMatcher {
    pub fn new(max_results: usize) -> Self {
        Self {
            max_results: max_results.max(1),
        }
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Filter candidates for a viewer
    ///
    /// # Arguments
    /// * `viewer` - User running the search; their own profile is skipped
    /// * `candidates` - Profile snapshot from the persistence layer
    /// * `query` - Free-text query over name, email and school
    /// * `filter` - Structured criteria
    /// * `limit` - Requested page size, capped at the configured maximum
    pub fn search(
        &self,
        viewer: Option<Uuid>,
        candidates: Vec<Profile>,
        query: &str,
        filter: &FilterCriteria,
        limit: Option<usize>,
    ) -> SearchResult {
        let total_candidates = candidates.len();
        let query = TextQuery::new(query);
        let limit = limit.unwrap_or(self.max_results).min(self.max_results);

        let mut profiles: Vec<Profile> = candidates
            .into_iter()
            .filter(|profile| Some(profile.user_id) != viewer)
            .filter(|profile| matches_criteria(profile, &query, filter))
            .collect();

        let total_matches = profiles.len();
        profiles.truncate(limit);

        SearchResult {
            profiles,
            total_matches,
            total_candidates,
        }
    }
}

impl Default for ProfileMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESULTS)
    }
}
