use rocket::serde::{Deserialize, Deserializer, Serialize, json::Value};

// Raw wire shapes for every upstream provider. Field coverage differs per
// provider and per player, so everything is optional and numeric fields
// tolerate both JSON numbers and numeric strings.

/// Player-data payload as returned by the rich-shape providers. A payload
/// may carry the nested `AccountInfo` family, the flat `captainBasicInfo`
/// group, or both; the normalizer resolves the precedence.
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(crate = "rocket::serde")]
pub struct ProviderPayload {
    #[serde(rename = "AccountInfo")]
    pub account_info: Option<AccountInfo>,
    #[serde(rename = "AccountProfileInfo")]
    pub profile_info: Option<AccountProfileInfo>,
    #[serde(rename = "GuildInfo")]
    pub guild_info: Option<GuildInfo>,
    #[serde(rename = "petInfo")]
    pub pet_info: Option<PetInfo>,
    #[serde(rename = "socialinfo")]
    pub social_info: Option<SocialRaw>,
    #[serde(rename = "creditScoreInfo")]
    pub credit_score_info: Option<CreditScoreRaw>,
    #[serde(rename = "captainBasicInfo")]
    pub captain_basic_info: Option<CaptainBasicInfo>,
    pub credits: Option<String>,
    #[serde(rename = "_credits")]
    pub credits_alt: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(crate = "rocket::serde")]
pub struct AccountInfo {
    #[serde(rename = "AccountName")]
    pub account_name: Option<String>,
    #[serde(rename = "AccountLevel", default, deserialize_with = "lenient_i64")]
    pub account_level: Option<i64>,
    #[serde(rename = "AccountLikes", default, deserialize_with = "lenient_i64")]
    pub account_likes: Option<i64>,
    #[serde(rename = "AccountRegion")]
    pub account_region: Option<String>,
    // Epoch seconds; some providers emit these as numeric strings.
    #[serde(rename = "AccountCreateTime", default, deserialize_with = "lenient_string")]
    pub account_create_time: Option<String>,
    #[serde(rename = "AccountLastLogin", default, deserialize_with = "lenient_string")]
    pub account_last_login: Option<String>,
    #[serde(rename = "BrRankPoint", default, deserialize_with = "lenient_i64")]
    pub br_rank_point: Option<i64>,
    #[serde(rename = "BrMaxRank", default, deserialize_with = "lenient_i64")]
    pub br_max_rank: Option<i64>,
    #[serde(rename = "ShowBrRank", default, deserialize_with = "lenient_bool")]
    pub show_br_rank: Option<bool>,
    #[serde(rename = "CsRankPoint", default, deserialize_with = "lenient_i64")]
    pub cs_rank_point: Option<i64>,
    #[serde(rename = "CsMaxRank", default, deserialize_with = "lenient_i64")]
    pub cs_max_rank: Option<i64>,
    #[serde(rename = "ShowCsRank", default, deserialize_with = "lenient_bool")]
    pub show_cs_rank: Option<bool>,
    #[serde(rename = "EquippedWeapon")]
    pub equipped_weapon: Option<Vec<i64>>,
    #[serde(rename = "Title", default, deserialize_with = "lenient_i64")]
    pub title: Option<i64>,
    #[serde(rename = "AccountAvatarId", default, deserialize_with = "lenient_i64")]
    pub account_avatar_id: Option<i64>,
    #[serde(rename = "AccountBannerId", default, deserialize_with = "lenient_i64")]
    pub account_banner_id: Option<i64>,
    #[serde(rename = "AccountBPID", default, deserialize_with = "lenient_i64")]
    pub account_bp_id: Option<i64>,
    #[serde(rename = "AccountBPBadges", default, deserialize_with = "lenient_i64")]
    pub account_bp_badges: Option<i64>,
    #[serde(rename = "AccountSeasonId", default, deserialize_with = "lenient_i64")]
    pub account_season_id: Option<i64>,
    #[serde(rename = "ReleaseVersion")]
    pub release_version: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(crate = "rocket::serde")]
pub struct AccountProfileInfo {
    #[serde(rename = "EquippedOutfit")]
    pub equipped_outfit: Option<Vec<i64>>,
    #[serde(rename = "EquippedSkills")]
    pub equipped_skills: Option<Vec<i64>>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(crate = "rocket::serde")]
pub struct GuildInfo {
    #[serde(rename = "GuildName")]
    pub guild_name: Option<String>,
    #[serde(rename = "GuildID", default, deserialize_with = "lenient_string")]
    pub guild_id: Option<String>,
    #[serde(rename = "GuildLevel", default, deserialize_with = "lenient_i64")]
    pub guild_level: Option<i64>,
    #[serde(rename = "GuildMember", default, deserialize_with = "lenient_i64")]
    pub guild_member: Option<i64>,
    #[serde(rename = "GuildCapacity", default, deserialize_with = "lenient_i64")]
    pub guild_capacity: Option<i64>,
    #[serde(rename = "GuildOwner", default, deserialize_with = "lenient_string")]
    pub guild_owner: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(crate = "rocket::serde")]
pub struct PetInfo {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub level: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub exp: Option<i64>,
    #[serde(rename = "isSelected", default, deserialize_with = "lenient_bool")]
    pub is_selected: Option<bool>,
    #[serde(rename = "skinId", default, deserialize_with = "lenient_i64")]
    pub skin_id: Option<i64>,
    #[serde(rename = "selectedSkillId", default, deserialize_with = "lenient_i64")]
    pub selected_skill_id: Option<i64>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(crate = "rocket::serde")]
pub struct SocialRaw {
    #[serde(rename = "AccountSignature")]
    pub account_signature: Option<String>,
    #[serde(rename = "AccountLanguage")]
    pub account_language: Option<String>,
    #[serde(rename = "AccountPreferMode")]
    pub account_prefer_mode: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(crate = "rocket::serde")]
pub struct CreditScoreRaw {
    #[serde(rename = "creditScore", default, deserialize_with = "lenient_i64")]
    pub credit_score: Option<i64>,
}

/// Flat-shape group used by the callback provider.
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(crate = "rocket::serde")]
pub struct CaptainBasicInfo {
    #[serde(rename = "accountId", default, deserialize_with = "lenient_string")]
    pub account_id: Option<String>,
    pub nickname: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub level: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub liked: Option<i64>,
    pub region: Option<String>,
    #[serde(rename = "rankingPoints", default, deserialize_with = "lenient_i64")]
    pub ranking_points: Option<i64>,
    #[serde(rename = "maxRank", default, deserialize_with = "lenient_i64")]
    pub max_rank: Option<i64>,
    #[serde(rename = "showBrRank", default, deserialize_with = "lenient_bool")]
    pub show_br_rank: Option<bool>,
    #[serde(rename = "csRankingPoints", default, deserialize_with = "lenient_i64")]
    pub cs_ranking_points: Option<i64>,
    #[serde(rename = "csMaxRank", default, deserialize_with = "lenient_i64")]
    pub cs_max_rank: Option<i64>,
    #[serde(rename = "showCsRank", default, deserialize_with = "lenient_bool")]
    pub show_cs_rank: Option<bool>,
    #[serde(rename = "EquippedWeapon")]
    pub equipped_weapon: Option<Vec<i64>>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub title: Option<i64>,
    #[serde(rename = "headPic", default, deserialize_with = "lenient_i64")]
    pub head_pic: Option<i64>,
    #[serde(rename = "bannerId", default, deserialize_with = "lenient_i64")]
    pub banner_id: Option<i64>,
    #[serde(rename = "badgeId", default, deserialize_with = "lenient_i64")]
    pub badge_id: Option<i64>,
    #[serde(rename = "badgeCnt", default, deserialize_with = "lenient_i64")]
    pub badge_cnt: Option<i64>,
    #[serde(rename = "seasonId", default, deserialize_with = "lenient_i64")]
    pub season_id: Option<i64>,
    #[serde(rename = "releaseVersion")]
    pub release_version: Option<String>,
    #[serde(rename = "createAt", default, deserialize_with = "lenient_string")]
    pub create_at: Option<String>,
    #[serde(rename = "lastLoginAt", default, deserialize_with = "lenient_string")]
    pub last_login_at: Option<String>,
}

/// Reply from the shop2game id-login endpoint. Much narrower than the rich
/// providers; used both as the terminal fallback tier and as the ban
/// checker's identity lookup.
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(crate = "rocket::serde")]
pub struct Shop2GameLogin {
    pub nickname: Option<String>,
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub level: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub guild_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub guild_id: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "rocket::serde")]
pub struct BanStatusEnvelope {
    pub data: Option<BanStatusData>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "rocket::serde")]
pub struct BanStatusData {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub is_banned: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub period: Option<i64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "rocket::serde")]
pub struct LikeApiResponse {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub status: Option<i64>,
    #[serde(rename = "PlayerNickname")]
    pub player_nickname: Option<String>,
    #[serde(rename = "UID", default, deserialize_with = "lenient_string")]
    pub uid: Option<String>,
    #[serde(rename = "LikesGivenByAPI", default, deserialize_with = "lenient_i64")]
    pub likes_given: Option<i64>,
    #[serde(rename = "LikesbeforeCommand", default, deserialize_with = "lenient_i64")]
    pub likes_before: Option<i64>,
    #[serde(rename = "LikesafterCommand", default, deserialize_with = "lenient_i64")]
    pub likes_after: Option<i64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "rocket::serde")]
pub struct VisitApiResponse {
    pub success: Option<bool>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_time_takes: Option<f64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub total_views_sent: Option<i64>,
}

// Lenient scalar decoding: providers flip between numbers and numeric
// strings across versions, and a type wobble must never fail the whole
// payload.

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::Number(n)) => Some(n.as_i64().unwrap_or(0) != 0),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_strings_and_numbers_decode_alike() {
        let a: AccountInfo = serde_json::from_value(json!({
            "AccountLevel": "72",
            "AccountCreateTime": 1620981175,
            "ShowBrRank": 1,
        }))
        .unwrap();
        assert_eq!(a.account_level, Some(72));
        assert_eq!(a.account_create_time.as_deref(), Some("1620981175"));
        assert_eq!(a.show_br_rank, Some(true));

        let b: AccountInfo = serde_json::from_value(json!({
            "AccountLevel": 72,
            "AccountCreateTime": "1620981175",
            "ShowBrRank": true,
        }))
        .unwrap();
        assert_eq!(b.account_level, a.account_level);
        assert_eq!(b.account_create_time, a.account_create_time);
        assert_eq!(b.show_br_rank, a.show_br_rank);
    }

    #[test]
    fn unknown_scalar_types_decode_to_none_not_error() {
        let a: AccountInfo = serde_json::from_value(json!({
            "AccountLevel": {"nested": true},
            "AccountLikes": null,
        }))
        .unwrap();
        assert_eq!(a.account_level, None);
        assert_eq!(a.account_likes, None);
    }

    #[test]
    fn payload_accepts_rich_and_flat_groups_side_by_side() {
        let p: ProviderPayload = serde_json::from_value(json!({
            "AccountInfo": {"AccountName": "Rich"},
            "captainBasicInfo": {"nickname": "Flat", "accountId": 12345},
        }))
        .unwrap();
        assert_eq!(
            p.account_info.unwrap().account_name.as_deref(),
            Some("Rich")
        );
        let captain = p.captain_basic_info.unwrap();
        assert_eq!(captain.nickname.as_deref(), Some("Flat"));
        assert_eq!(captain.account_id.as_deref(), Some("12345"));
    }
}
