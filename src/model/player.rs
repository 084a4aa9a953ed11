use rocket::serde::{Serialize, Deserialize};

/// Canonical player record, independent of which upstream provider supplied
/// the raw payload. Every leaf is individually nullable because provider
/// coverage varies; counters and id lists default to `0`/`[]`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct PlayerData {
    pub basic_info: BasicInfo,
    #[serde(rename = "Guild")]
    pub guild: Option<Guild>,
    pub animal: Option<Pet>,
    pub outfit: Vec<i64>,
    // Triple-encoded category/id/slot ids, preserved verbatim.
    pub skills: Vec<i64>,
    pub social_info: Option<SocialInfo>,
    pub credits: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct BasicInfo {
    pub id: String,
    pub name: String,
    pub level: Option<i64>,
    pub likes: Option<i64>,
    pub server: String,
    pub bio: Option<String>,
    // No upstream provider exposes this; always serialized as null.
    pub booyah_pass_level: Option<i64>,
    pub account_created: Option<String>,
    pub last_login: Option<String>,
    pub language: Option<String>,
    pub preferred_mode: Option<String>,
    pub credit_score: Option<i64>,
    pub rank: RankInfo,
    pub equipped_weapon: Vec<i64>,
    pub title: Option<i64>,
    pub avatar_id: Option<i64>,
    pub banner_id: Option<i64>,
    pub badge_id: Option<i64>,
    pub badge_count: Option<i64>,
    pub season_id: Option<i64>,
    pub release_version: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct RankInfo {
    pub br: RankTier,
    pub cs: RankTier,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(crate = "rocket::serde")]
pub struct RankTier {
    pub current: Option<i64>,
    pub max_rank: Option<i64>,
    pub show: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct Guild {
    pub name: Option<String>,
    pub id: Option<String>,
    pub level: Option<i64>,
    pub members_count: Option<i64>,
    pub capacity: Option<i64>,
    pub leader: Option<GuildLeader>,
}

/// Providers only carry the leader's account id; name and level stay null.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct GuildLeader {
    pub id: Option<String>,
    pub name: Option<String>,
    pub level: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct Pet {
    // Providers never supply the pet's real name.
    pub name: String,
    pub id: Option<i64>,
    pub level: Option<i64>,
    pub exp: Option<i64>,
    pub is_selected: bool,
    pub skin_id: Option<i64>,
    pub selected_skill_id: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct SocialInfo {
    pub signature: Option<String>,
    pub language: Option<String>,
    pub preferred_mode: Option<String>,
}
