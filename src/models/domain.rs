use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Campus a profile belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "school", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum School {
    Ucla,
    Ucb,
    Ucsd,
    Uci,
    Ucd,
    Ucsb,
    Ucsc,
    Ucr,
    Ucm,
}

impl School {
    /// Canonical value, as stored and as matched by text search
    pub fn as_str(&self) -> &'static str {
        match self {
            School::Ucla => "UCLA",
            School::Ucb => "UCB",
            School::Ucsd => "UCSD",
            School::Uci => "UCI",
            School::Ucd => "UCD",
            School::Ucsb => "UCSB",
            School::Ucsc => "UCSC",
            School::Ucr => "UCR",
            School::Ucm => "UCM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "sex", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sex {
    Male,
    Female,
    Intersex,
}

/// Noise level a profile keeps during the day or at night
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "volume", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Volume {
    Quiet,
    Moderate,
    Loud,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "profile_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileStatus {
    Looking,
    NotLooking,
    Found,
}

/// Account data shown alongside a profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Self-reported roommate profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user: ProfileUser,
    pub school: School,
    pub assigned_sex: Sex,
    #[serde(default)]
    pub pronouns: Option<String>,
    pub alcohol: bool,
    pub committed: bool,
    pub day_volume: Volume,
    pub night_volume: Volume,
    pub drugs: bool,
    pub neatness: i32,
    pub snore: bool,
    pub social_energy_level: i32,
    pub status: ProfileStatus,
}

/// Search constraints; every unset field leaves profiles unconstrained
///
/// The boolean fields are "must not" filters: `Some(false)` excludes
/// profiles that have the habit, `Some(true)` excludes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub alcohol: Option<bool>,
    #[serde(default)]
    pub committed: Option<bool>,
    #[serde(default)]
    pub drugs: Option<bool>,
    #[serde(default)]
    pub snore: Option<bool>,
    #[serde(default)]
    pub assigned_sex: Option<Sex>,
    #[serde(default)]
    pub day_volume: Option<Volume>,
    #[serde(default)]
    pub night_volume: Option<Volume>,
    #[serde(default)]
    pub school: Option<School>,
    #[serde(default)]
    pub status: Option<ProfileStatus>,
    #[serde(default)]
    pub minimum_neatness: Option<i32>,
    #[serde(default)]
    pub minimum_social_energy_level: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "member_role", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Member,
}

/// Entry in a group's member list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: Uuid,
    pub role: Role,
    pub user_id: Uuid,
    #[serde(default)]
    pub user_name: Option<String>,
    pub joined_at: DateTime<Utc>,
}

/// Roommate group, members ordered by join time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: Uuid,
    pub members: Vec<Member>,
}

/// The current user's membership with a snapshot of its group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub id: Uuid,
    pub role: Role,
    pub user_id: Uuid,
    pub group_id: Uuid,
    pub group: Group,
}

impl Membership {
    /// Look up a member of this membership's group
    pub fn find_member(&self, member_id: Uuid) -> Option<&Member> {
        self.group.members.iter().find(|m| m.id == member_id)
    }
}
