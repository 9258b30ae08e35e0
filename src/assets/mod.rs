//! Data Dragon URL resolution. Every function here is total: an absent or
//! unresolvable identifier yields a fallback URL, never an error.

mod catalog;
mod runes;

pub use catalog::ChampionCatalog;
pub use runes::{rune_icon, rune_style_badge};

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const DDRAGON_VERSION: &str = "15.9.1";
const CDN_BASE: &str = "https://ddragon.leagueoflegends.com/cdn";

pub const FALLBACK_ICON: &str = "/fallbacks/placeholder.png";
pub const EMPTY_ITEM_ICON: &str = "/fallbacks/item_blank.png";
pub const UNRANKED_BADGE: &str = "/fallbacks/unranked.png";

// Champions whose display name diverges from their CDN asset name. Keyed by
// lowercased display name.
static CHAMPION_NAME_OVERRIDES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("fiddlesticks", "FiddleSticks"),
        ("wukong", "MonkeyKing"),
        ("cho'gath", "Chogath"),
        ("chogath", "Chogath"),
        ("leblanc", "Leblanc"),
        ("kha'zix", "Khazix"),
        ("khazix", "Khazix"),
        ("rek'sai", "RekSai"),
        ("reksai", "RekSai"),
        ("kog'maw", "KogMaw"),
        ("kogmaw", "KogMaw"),
        ("vel'koz", "Velkoz"),
        ("velkoz", "Velkoz"),
        ("aurelion sol", "AurelionSol"),
        ("aurelionsol", "AurelionSol"),
        ("nunu & willump", "Nunu"),
        ("nunu", "Nunu"),
    ])
});

fn versioned(path: &str) -> String {
    format!("{}/{}/img/{}", CDN_BASE, DDRAGON_VERSION, path)
}

/// Champion square icon by display name. The override table wins; otherwise
/// the name is stripped to alphanumerics before interpolation.
pub fn champion_icon(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return FALLBACK_ICON.to_string();
    }

    let key = trimmed.to_lowercase();
    let clean = match CHAMPION_NAME_OVERRIDES.get(key.as_str()) {
        Some(fixed) => (*fixed).to_string(),
        None => trimmed
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect(),
    };

    if clean.is_empty() {
        return FALLBACK_ICON.to_string();
    }
    versioned(&format!("champion/{}.png", clean))
}

/// Summoner-spell display name by numeric id. Unknown ids collapse to
/// "Dot", the catch-all asset the original dashboard shipped with.
pub fn spell_name(spell_id: i32) -> &'static str {
    match spell_id {
        1 => "Boost",
        3 => "Exhaust",
        4 => "Flash",
        6 => "Haste",
        7 => "Heal",
        11 => "Smite",
        12 => "Teleport",
        13 => "Clarity",
        14 => "Dot",
        21 => "Barrier",
        32 => "Mark",
        _ => "Dot",
    }
}

pub fn spell_icon(spell_id: i32) -> String {
    versioned(&format!("spell/Summoner{}.png", spell_name(spell_id)))
}

/// Item id 0 marks an empty slot and resolves to the blank-slot asset,
/// distinct from the generic fallback.
pub fn item_icon(item_id: i32) -> String {
    if item_id <= 0 {
        return EMPTY_ITEM_ICON.to_string();
    }
    versioned(&format!("item/{}.png", item_id))
}

pub fn profile_icon(icon_id: i32) -> String {
    if icon_id <= 0 {
        return FALLBACK_ICON.to_string();
    }
    versioned(&format!("profileicon/{}.png", icon_id))
}

/// Rank badge path; the tier is normalized to `Xxxx` casing. An empty tier
/// is the unranked badge.
pub fn rank_badge(tier: &str) -> String {
    let trimmed = tier.trim();
    if trimmed.is_empty() {
        return UNRANKED_BADGE.to_string();
    }

    let mut chars = trimmed.chars();
    let formatted = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => return UNRANKED_BADGE.to_string(),
    };
    format!("/fallbacks/ranks/Rank={}.png", formatted)
}

/// Queue label for match cards: the three filterable queues by id, then the
/// game mode string ("CLASSIC" reads better as "Summoner's Rift").
pub fn queue_name(queue_id: i64, game_mode: &str) -> String {
    match queue_id {
        420 => "Ranked Solo".to_string(),
        440 => "Ranked Flex".to_string(),
        450 => "ARAM".to_string(),
        _ => {
            if game_mode == "CLASSIC" {
                "Summoner's Rift".to_string()
            } else if game_mode.is_empty() {
                "Unknown".to_string()
            } else {
                game_mode.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn champion_icon_uses_override_table() {
        assert_eq!(
            champion_icon("Wukong"),
            "https://ddragon.leagueoflegends.com/cdn/15.9.1/img/champion/MonkeyKing.png"
        );
        assert_eq!(
            champion_icon("Fiddlesticks"),
            "https://ddragon.leagueoflegends.com/cdn/15.9.1/img/champion/FiddleSticks.png"
        );
    }

    #[test]
    fn champion_icon_strips_punctuation_outside_overrides() {
        // Not in the override map: punctuation and spaces are dropped.
        assert_eq!(
            champion_icon("Dr. Mundo"),
            "https://ddragon.leagueoflegends.com/cdn/15.9.1/img/champion/DrMundo.png"
        );
        assert_eq!(
            champion_icon("Kai'Sa"),
            "https://ddragon.leagueoflegends.com/cdn/15.9.1/img/champion/KaiSa.png"
        );
    }

    #[test]
    fn champion_icon_is_idempotent_and_total() {
        let first = champion_icon("Ahri");
        let second = champion_icon("Ahri");
        assert_eq!(first, second);

        assert_eq!(champion_icon(""), FALLBACK_ICON);
        assert_eq!(champion_icon("   "), FALLBACK_ICON);
        assert_eq!(champion_icon("愛"), FALLBACK_ICON);
    }

    #[test]
    fn item_zero_is_empty_slot_not_generic_fallback() {
        assert_eq!(item_icon(0), EMPTY_ITEM_ICON);
        assert_ne!(EMPTY_ITEM_ICON, FALLBACK_ICON);
        assert_eq!(
            item_icon(3089),
            "https://ddragon.leagueoflegends.com/cdn/15.9.1/img/item/3089.png"
        );
    }

    #[test]
    fn unknown_spell_degrades_to_dot() {
        assert_eq!(spell_name(4), "Flash");
        assert_eq!(spell_name(9999), "Dot");
        assert_eq!(
            spell_icon(11),
            "https://ddragon.leagueoflegends.com/cdn/15.9.1/img/spell/SummonerSmite.png"
        );
    }

    #[test]
    fn rank_badge_normalizes_casing() {
        assert_eq!(rank_badge("GOLD"), "/fallbacks/ranks/Rank=Gold.png");
        assert_eq!(rank_badge("challenger"), "/fallbacks/ranks/Rank=Challenger.png");
        assert_eq!(rank_badge(""), UNRANKED_BADGE);
        assert_eq!(rank_badge("  "), UNRANKED_BADGE);
    }

    #[test]
    fn profile_icon_handles_missing_id() {
        assert_eq!(profile_icon(0), FALLBACK_ICON);
        assert_eq!(
            profile_icon(4568),
            "https://ddragon.leagueoflegends.com/cdn/15.9.1/img/profileicon/4568.png"
        );
    }

    #[test]
    fn queue_names_map_filterable_queues() {
        assert_eq!(queue_name(420, "CLASSIC"), "Ranked Solo");
        assert_eq!(queue_name(440, "CLASSIC"), "Ranked Flex");
        assert_eq!(queue_name(450, "ARAM"), "ARAM");
        assert_eq!(queue_name(400, "CLASSIC"), "Summoner's Rift");
        assert_eq!(queue_name(1700, "CHERRY"), "CHERRY");
        assert_eq!(queue_name(0, ""), "Unknown");
    }
}
