//! Pure mapping from raw provider payloads to the canonical [`PlayerData`]
//! shape. No I/O, no clock, no side effects: identical input yields
//! identical output.
//!
//! Precedence per field is rich group first, then the flat
//! `captainBasicInfo` equivalent, then the field's default. A present rich
//! value always wins, including zeroes and empty strings.

use crate::model::player::{
    BasicInfo, Guild, GuildLeader, Pet, PlayerData, RankInfo, RankTier, SocialInfo,
};
use crate::model::provider::{ProviderPayload, Shop2GameLogin};
use crate::util::message;

pub static UNKNOWN_PLAYER: &str = "Unknown Player";
pub static UNKNOWN_ID: &str = "Unknown ID";
pub static PET_NAME: &str = "Pet";

static LANGUAGE_TAG: &str = "Language_";
static PREFER_MODE_TAG: &str = "Prefermode_";

/// Epoch seconds (as text) to a `YYYY-MM-DD` UTC date. Anything that does
/// not parse maps to `None`, never an error.
pub fn epoch_to_date(raw: &str) -> Option<String> {
    let secs: i64 = raw.trim().parse().ok()?;
    let date = chrono::DateTime::from_timestamp(secs, 0)?;
    Some(date.format("%Y-%m-%d").to_string())
}

/// Strips a known enum prefix; values without the prefix pass through.
fn strip_tag(value: String, tag: &str) -> String {
    match value.strip_prefix(tag) {
        Some(rest) => rest.to_string(),
        None => value,
    }
}

pub fn normalize_player(
    payload: &ProviderPayload,
    player_id: &str,
    default_region: &str,
    default_credits: &str,
) -> PlayerData {
    let account = payload.account_info.as_ref();
    let captain = payload.captain_basic_info.as_ref();
    let social = payload.social_info.as_ref();
    let profile = payload.profile_info.as_ref();

    let signature = social.and_then(|s| s.account_signature.clone());
    let language = social
        .and_then(|s| s.account_language.clone())
        .map(|l| strip_tag(l, LANGUAGE_TAG));
    let preferred_mode = social
        .and_then(|s| s.account_prefer_mode.clone())
        .map(|m| strip_tag(m, PREFER_MODE_TAG));

    let basic_info = BasicInfo {
        id: player_id.to_string(),
        name: account
            .and_then(|a| a.account_name.clone())
            .or_else(|| captain.and_then(|c| c.nickname.clone()))
            .unwrap_or_else(|| UNKNOWN_PLAYER.to_string()),
        level: account
            .and_then(|a| a.account_level)
            .or_else(|| captain.and_then(|c| c.level)),
        likes: account
            .and_then(|a| a.account_likes)
            .or_else(|| captain.and_then(|c| c.liked)),
        server: account
            .and_then(|a| a.account_region.clone())
            .or_else(|| captain.and_then(|c| c.region.clone()))
            .unwrap_or_else(|| default_region.to_uppercase()),
        bio: signature.clone(),
        booyah_pass_level: None,
        account_created: account
            .and_then(|a| a.account_create_time.clone())
            .or_else(|| captain.and_then(|c| c.create_at.clone()))
            .and_then(|t| epoch_to_date(&t)),
        last_login: account
            .and_then(|a| a.account_last_login.clone())
            .or_else(|| captain.and_then(|c| c.last_login_at.clone()))
            .and_then(|t| epoch_to_date(&t)),
        language: language.clone(),
        preferred_mode: preferred_mode.clone(),
        credit_score: payload
            .credit_score_info
            .as_ref()
            .and_then(|c| c.credit_score),
        rank: RankInfo {
            br: RankTier {
                current: account
                    .and_then(|a| a.br_rank_point)
                    .or_else(|| captain.and_then(|c| c.ranking_points)),
                max_rank: account
                    .and_then(|a| a.br_max_rank)
                    .or_else(|| captain.and_then(|c| c.max_rank)),
                show: account
                    .and_then(|a| a.show_br_rank)
                    .or_else(|| captain.and_then(|c| c.show_br_rank))
                    .unwrap_or(false),
            },
            cs: RankTier {
                current: account
                    .and_then(|a| a.cs_rank_point)
                    .or_else(|| captain.and_then(|c| c.cs_ranking_points)),
                max_rank: account
                    .and_then(|a| a.cs_max_rank)
                    .or_else(|| captain.and_then(|c| c.cs_max_rank)),
                show: account
                    .and_then(|a| a.show_cs_rank)
                    .or_else(|| captain.and_then(|c| c.show_cs_rank))
                    .unwrap_or(false),
            },
        },
        equipped_weapon: account
            .and_then(|a| a.equipped_weapon.clone())
            .or_else(|| captain.and_then(|c| c.equipped_weapon.clone()))
            .unwrap_or_default(),
        title: account
            .and_then(|a| a.title)
            .or_else(|| captain.and_then(|c| c.title)),
        avatar_id: account
            .and_then(|a| a.account_avatar_id)
            .or_else(|| captain.and_then(|c| c.head_pic)),
        banner_id: account
            .and_then(|a| a.account_banner_id)
            .or_else(|| captain.and_then(|c| c.banner_id)),
        badge_id: account
            .and_then(|a| a.account_bp_id)
            .or_else(|| captain.and_then(|c| c.badge_id)),
        badge_count: account
            .and_then(|a| a.account_bp_badges)
            .or_else(|| captain.and_then(|c| c.badge_cnt)),
        season_id: account
            .and_then(|a| a.account_season_id)
            .or_else(|| captain.and_then(|c| c.season_id)),
        release_version: account
            .and_then(|a| a.release_version.clone())
            .or_else(|| captain.and_then(|c| c.release_version.clone())),
    };

    let guild = payload.guild_info.as_ref().map(|g| Guild {
        name: g.guild_name.clone(),
        id: g.guild_id.clone(),
        level: g.guild_level,
        members_count: g.guild_member,
        capacity: g.guild_capacity,
        leader: Some(GuildLeader {
            id: g.guild_owner.clone(),
            name: None,
            level: None,
        }),
    });

    let animal = payload.pet_info.as_ref().map(|pet| Pet {
        name: PET_NAME.to_string(),
        id: pet.id,
        level: pet.level,
        exp: pet.exp,
        is_selected: pet.is_selected.unwrap_or(false),
        skin_id: pet.skin_id,
        selected_skill_id: pet.selected_skill_id,
    });

    PlayerData {
        basic_info,
        guild,
        animal,
        outfit: profile
            .and_then(|p| p.equipped_outfit.clone())
            .unwrap_or_default(),
        skills: profile
            .and_then(|p| p.equipped_skills.clone())
            .unwrap_or_default(),
        social_info: Some(SocialInfo {
            signature,
            language,
            preferred_mode,
        }),
        credits: payload
            .credits
            .clone()
            .or_else(|| payload.credits_alt.clone())
            .unwrap_or_else(|| default_credits.to_string()),
    }
}

/// Player id for a pushed callback payload, which carries no query string.
pub fn callback_player_id(payload: &ProviderPayload) -> String {
    payload
        .captain_basic_info
        .as_ref()
        .and_then(|c| c.account_id.clone())
        .unwrap_or_else(|| UNKNOWN_ID.to_string())
}

/// Minimal canonical record from the narrow shop2game dataset. Everything
/// the endpoint cannot answer stays null or empty.
pub fn normalize_shop2game(login: &Shop2GameLogin, player_id: &str) -> PlayerData {
    let fallback_name = format!(
        "Player {}...",
        player_id.chars().take(4).collect::<String>()
    );

    PlayerData {
        basic_info: BasicInfo {
            id: player_id.to_string(),
            name: login.nickname.clone().unwrap_or(fallback_name),
            level: login.level,
            likes: None,
            server: login
                .region
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            bio: None,
            booyah_pass_level: None,
            account_created: None,
            last_login: None,
            language: None,
            preferred_mode: None,
            credit_score: None,
            rank: RankInfo {
                br: RankTier::default(),
                cs: RankTier::default(),
            },
            equipped_weapon: Vec::new(),
            title: None,
            avatar_id: None,
            banner_id: None,
            badge_id: None,
            badge_count: None,
            season_id: None,
            release_version: None,
        },
        guild: login.guild_name.clone().map(|name| Guild {
            name: Some(name),
            id: Some(login.guild_id.clone().unwrap_or_default()),
            level: None,
            members_count: None,
            capacity: None,
            leader: None,
        }),
        animal: None,
        outfit: Vec::new(),
        skills: Vec::new(),
        social_info: None,
        credits: message::CREDITS_SHOP2GAME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> ProviderPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn epoch_seconds_convert_to_utc_date() {
        assert_eq!(epoch_to_date("1620981175").as_deref(), Some("2021-05-14"));
        assert_eq!(epoch_to_date("0").as_deref(), Some("1970-01-01"));
    }

    #[test]
    fn non_numeric_epoch_yields_none() {
        assert_eq!(epoch_to_date("not-a-number"), None);
        assert_eq!(epoch_to_date(""), None);
        assert_eq!(epoch_to_date("12.5"), None);
    }

    #[test]
    fn rich_and_flat_shapes_normalize_identically() {
        let rich = payload(json!({
            "AccountInfo": {
                "AccountName": "Shroud",
                "AccountLevel": 72,
                "AccountLikes": 15320,
                "AccountRegion": "IND",
                "BrRankPoint": 3100,
                "BrMaxRank": 220,
                "ShowBrRank": true,
                "EquippedWeapon": [907000001],
                "ReleaseVersion": "OB43",
            }
        }));
        let flat = payload(json!({
            "captainBasicInfo": {
                "nickname": "Shroud",
                "level": 72,
                "liked": 15320,
                "region": "IND",
                "rankingPoints": 3100,
                "maxRank": 220,
                "showBrRank": true,
                "EquippedWeapon": [907000001],
                "releaseVersion": "OB43",
            }
        }));

        let a = normalize_player(&rich, "123", "ind", message::CREDITS_DEFAULT);
        let b = normalize_player(&flat, "123", "ind", message::CREDITS_DEFAULT);
        assert_eq!(a, b);
        assert_eq!(a.basic_info.level, Some(72));
        assert_eq!(a.basic_info.rank.br.current, Some(3100));
        assert!(a.basic_info.rank.br.show);
    }

    #[test]
    fn rich_value_wins_even_when_zero() {
        let both = payload(json!({
            "AccountInfo": {"AccountLikes": 0},
            "captainBasicInfo": {"liked": 55},
        }));
        let data = normalize_player(&both, "1", "ind", message::CREDITS_DEFAULT);
        assert_eq!(data.basic_info.likes, Some(0));
    }

    #[test]
    fn missing_groups_never_panic() {
        let empty = payload(json!({}));
        let data = normalize_player(&empty, "42", "ind", message::CREDITS_DEFAULT);

        assert_eq!(data.basic_info.name, UNKNOWN_PLAYER);
        assert_eq!(data.basic_info.server, "IND");
        assert_eq!(data.basic_info.level, None);
        assert_eq!(data.basic_info.booyah_pass_level, None);
        assert!(data.basic_info.equipped_weapon.is_empty());
        assert_eq!(data.guild, None);
        assert_eq!(data.animal, None);
        assert!(data.outfit.is_empty() && data.skills.is_empty());
        assert_eq!(data.credits, message::CREDITS_DEFAULT);
        // social_info is always present for rich/flat payloads, with null leaves
        let social = data.social_info.unwrap();
        assert_eq!(social.signature, None);
    }

    #[test]
    fn guild_and_pet_groups_map_when_present() {
        let p = payload(json!({
            "GuildInfo": {
                "GuildName": "NightRaid",
                "GuildID": 3051412900u64,
                "GuildLevel": 4,
                "GuildMember": 38,
                "GuildCapacity": 50,
                "GuildOwner": "777001",
            },
            "petInfo": {
                "id": 1300000113,
                "level": 5,
                "exp": 3000,
                "isSelected": true,
                "skinId": 1310000201,
                "selectedSkillId": 1315000011,
            },
        }));
        let data = normalize_player(&p, "42", "ind", message::CREDITS_DEFAULT);

        let guild = data.guild.unwrap();
        assert_eq!(guild.name.as_deref(), Some("NightRaid"));
        assert_eq!(guild.id.as_deref(), Some("3051412900"));
        assert_eq!(guild.members_count, Some(38));
        let leader = guild.leader.unwrap();
        assert_eq!(leader.id.as_deref(), Some("777001"));
        assert_eq!(leader.name, None);

        let pet = data.animal.unwrap();
        assert_eq!(pet.name, PET_NAME);
        assert!(pet.is_selected);
        assert_eq!(pet.skin_id, Some(1310000201));
    }

    #[test]
    fn social_prefixes_are_stripped() {
        let p = payload(json!({
            "socialinfo": {
                "AccountSignature": "never back down",
                "AccountLanguage": "Language_EN",
                "AccountPreferMode": "Prefermode_BR",
            }
        }));
        let data = normalize_player(&p, "42", "ind", message::CREDITS_DEFAULT);
        let social = data.social_info.unwrap();
        assert_eq!(social.language.as_deref(), Some("EN"));
        assert_eq!(social.preferred_mode.as_deref(), Some("BR"));
        assert_eq!(data.basic_info.bio.as_deref(), Some("never back down"));
    }

    #[test]
    fn unprefixed_social_values_pass_through() {
        let p = payload(json!({
            "socialinfo": {"AccountLanguage": "EN", "AccountPreferMode": "BR"}
        }));
        let data = normalize_player(&p, "42", "ind", message::CREDITS_DEFAULT);
        let social = data.social_info.unwrap();
        assert_eq!(social.language.as_deref(), Some("EN"));
        assert_eq!(social.preferred_mode.as_deref(), Some("BR"));
    }

    #[test]
    fn timestamps_convert_and_bad_ones_stay_null() {
        let p = payload(json!({
            "AccountInfo": {
                "AccountCreateTime": "1620981175",
                "AccountLastLogin": "garbage",
            }
        }));
        let data = normalize_player(&p, "42", "ind", message::CREDITS_DEFAULT);
        assert_eq!(
            data.basic_info.account_created.as_deref(),
            Some("2021-05-14")
        );
        assert_eq!(data.basic_info.last_login, None);
    }

    #[test]
    fn skills_are_preserved_without_decoding() {
        let p = payload(json!({
            "AccountProfileInfo": {
                "EquippedOutfit": [203000000, 204000000],
                "EquippedSkills": [1, 706, 0, 2, 406, 0],
            }
        }));
        let data = normalize_player(&p, "42", "ind", message::CREDITS_DEFAULT);
        assert_eq!(data.outfit, vec![203000000, 204000000]);
        assert_eq!(data.skills, vec![1, 706, 0, 2, 406, 0]);
    }

    #[test]
    fn callback_id_comes_from_captain_group() {
        let p = payload(json!({"captainBasicInfo": {"accountId": "987654"}}));
        assert_eq!(callback_player_id(&p), "987654");
        assert_eq!(callback_player_id(&payload(json!({}))), UNKNOWN_ID);
    }

    #[test]
    fn shop2game_record_is_sparse_but_valid() {
        let login: Shop2GameLogin = serde_json::from_value(json!({
            "nickname": "FFX-Karim",
            "region": "BD",
        }))
        .unwrap();
        let data = normalize_shop2game(&login, "556677");

        assert_eq!(data.basic_info.name, "FFX-Karim");
        assert_eq!(data.basic_info.server, "BD");
        assert_eq!(data.basic_info.level, None);
        assert_eq!(data.basic_info.rank.br, RankTier::default());
        assert_eq!(data.guild, None);
        assert_eq!(data.animal, None);
        assert_eq!(data.social_info, None);
        assert_eq!(data.credits, message::CREDITS_SHOP2GAME);
    }

    #[test]
    fn shop2game_falls_back_to_truncated_id_name() {
        let login = Shop2GameLogin::default();
        let data = normalize_shop2game(&login, "556677889900");
        assert_eq!(data.basic_info.name, "Player 5566...");
        assert_eq!(data.basic_info.server, "Unknown");

        // ids shorter than the truncation window are kept whole
        let data = normalize_shop2game(&login, "42");
        assert_eq!(data.basic_info.name, "Player 42...");
    }

    #[test]
    fn shop2game_guild_carries_no_leader() {
        let login: Shop2GameLogin = serde_json::from_value(json!({
            "nickname": "FFX-Karim",
            "guild_name": "DhakaKings",
            "guild_id": 991122,
        }))
        .unwrap();
        let data = normalize_shop2game(&login, "556677");
        let guild = data.guild.unwrap();
        assert_eq!(guild.name.as_deref(), Some("DhakaKings"));
        assert_eq!(guild.id.as_deref(), Some("991122"));
        assert_eq!(guild.leader, None);
    }
}
