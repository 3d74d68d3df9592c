use crate::models::{FilterCriteria, Profile};

/// Offset applied to numeric minimums; an unset minimum maps to a threshold of 0
const THRESHOLD_OFFSET: i64 = 10;

/// Lower-cased free-text query, prepared once per search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Check the query against the user's name, email and school
    ///
    /// A missing name or email compares as an empty string.
    #[inline]
    pub fn matches(&self, profile: &Profile) -> bool {
        if self.needle.is_empty() {
            return true;
        }

        let name = profile.user.name.as_deref().unwrap_or_default();
        let email = profile.user.email.as_deref().unwrap_or_default();

        name.to_lowercase().contains(&self.needle)
            || email.to_lowercase().contains(&self.needle)
            || profile.school.as_str().to_lowercase().contains(&self.needle)
    }
}

#[inline]
fn excluded_by_habit(wanted: Option<bool>, has_habit: bool) -> bool {
    wanted == Some(false) && has_habit
}

/// Check the "must not" habit filters (alcohol, committed, drugs, snore)
///
/// Only an explicit `false` in the filter can exclude, and only profiles
/// that report the habit.
#[inline]
pub fn passes_habit_filters(profile: &Profile, filter: &FilterCriteria) -> bool {
    !(excluded_by_habit(filter.alcohol, profile.alcohol)
        || excluded_by_habit(filter.committed, profile.committed)
        || excluded_by_habit(filter.drugs, profile.drugs)
        || excluded_by_habit(filter.snore, profile.snore))
}

#[inline]
fn equals_if_set<T: PartialEq>(wanted: Option<T>, actual: T) -> bool {
    wanted.map_or(true, |w| w == actual)
}

/// Check the exact-match filters (sex, volumes, school, status)
#[inline]
pub fn passes_attribute_filters(profile: &Profile, filter: &FilterCriteria) -> bool {
    equals_if_set(filter.assigned_sex, profile.assigned_sex)
        && equals_if_set(filter.day_volume, profile.day_volume)
        && equals_if_set(filter.night_volume, profile.night_volume)
        && equals_if_set(filter.school, profile.school)
        && equals_if_set(filter.status, profile.status)
}

/// Inclusive threshold for a numeric minimum: `(minimum ?? -10) + 10`
#[inline]
pub fn score_threshold(minimum: Option<i32>) -> i64 {
    minimum.map_or(-THRESHOLD_OFFSET, i64::from) + THRESHOLD_OFFSET
}

/// Check the neatness and social energy minimums
#[inline]
pub fn passes_score_thresholds(profile: &Profile, filter: &FilterCriteria) -> bool {
    i64::from(profile.neatness) >= score_threshold(filter.minimum_neatness)
        && i64::from(profile.social_energy_level)
            >= score_threshold(filter.minimum_social_energy_level)
}

/// Check every structured criterion and the text query
#[inline]
pub fn matches_criteria(profile: &Profile, query: &TextQuery, filter: &FilterCriteria) -> bool {
    passes_habit_filters(profile, filter)
        && passes_attribute_filters(profile, filter)
        && passes_score_thresholds(profile, filter)
        && query.matches(profile)
}

/// Select the profiles matching `query` and `filter`, keeping input order
pub fn filter_profiles<'a>(
    profiles: &'a [Profile],
    query: &str,
    filter: &FilterCriteria,
) -> Vec<&'a Profile> {
    let query = TextQuery::new(query);

    profiles
        .iter()
        .filter(|profile| matches_criteria(profile, &query, filter))
        .collect()
}
