use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::display::output::display_warning;

use super::FALLBACK_ICON;

const PERK_CDN_BASE: &str = "https://ddragon.leagueoflegends.com/cdn/img/perk-images/Styles";

// Keystone perk id -> icon path under the perk-images/Styles CDN prefix.
// Only keystones are resolved per-rune; secondary trees render as style
// badges instead.
static RUNE_ICON_PATHS: Lazy<HashMap<i64, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Precision
        (8005, "Precision/PressTheAttack/PressTheAttack.png"),
        (8008, "Precision/LethalTempo/LethalTempoTemp.png"),
        (8010, "Precision/Conqueror/Conqueror.png"),
        (8021, "Precision/FleetFootwork/FleetFootwork.png"),
        // Domination
        (8112, "Domination/Electrocute/Electrocute.png"),
        (8124, "Domination/Predator/Predator.png"),
        (8128, "Domination/DarkHarvest/DarkHarvest.png"),
        (9923, "Domination/HailOfBlades/HailOfBlades.png"),
        // Sorcery
        (8214, "Sorcery/SummonAery/SummonAery.png"),
        (8229, "Sorcery/ArcaneComet/ArcaneComet.png"),
        (8230, "Sorcery/PhaseRush/PhaseRush.png"),
        // Resolve
        (8437, "Resolve/GraspOfTheUndying/GraspOfTheUndying.png"),
        (8439, "Resolve/VeteranAftershock/VeteranAftershock.png"),
        (8465, "Resolve/Guardian/Guardian.png"),
        // Inspiration
        (8351, "Inspiration/GlacialAugment/GlacialAugment.png"),
        (8360, "Inspiration/UnsealedSpellbook/UnsealedSpellbook.png"),
        (8369, "Inspiration/FirstStrike/FirstStrike.png"),
    ])
});

/// Keystone rune icon by perk id. A missing mapping is worth a warning
/// (new keystones appear with patches) but still renders the fallback.
pub fn rune_icon(perk_id: i64) -> String {
    match RUNE_ICON_PATHS.get(&perk_id) {
        Some(path) => format!("{}/{}", PERK_CDN_BASE, path),
        None => {
            display_warning(&format!("Missing rune mapping for perk id {}", perk_id));
            FALLBACK_ICON.to_string()
        }
    }
}

/// Style badge for a secondary rune tree.
pub fn rune_style_badge(style_id: i64) -> String {
    let name = match style_id {
        8000 => "Precision",
        8100 => "Domination",
        8200 => "Sorcery",
        8300 => "Inspiration",
        8400 => "Resolve",
        _ => return FALLBACK_ICON.to_string(),
    };
    format!("/fallbacks/styles/{}.png", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keystones_resolve() {
        assert_eq!(
            rune_icon(8112),
            "https://ddragon.leagueoflegends.com/cdn/img/perk-images/Styles/Domination/Electrocute/Electrocute.png"
        );
        assert_eq!(
            rune_icon(8437),
            "https://ddragon.leagueoflegends.com/cdn/img/perk-images/Styles/Resolve/GraspOfTheUndying/GraspOfTheUndying.png"
        );
    }

    #[test]
    fn missing_perk_degrades_to_fallback() {
        assert_eq!(rune_icon(1234), FALLBACK_ICON);
        // Resolving twice is deterministic.
        assert_eq!(rune_icon(1234), rune_icon(1234));
    }

    #[test]
    fn style_badges_cover_the_five_trees() {
        assert_eq!(rune_style_badge(8000), "/fallbacks/styles/Precision.png");
        assert_eq!(rune_style_badge(8400), "/fallbacks/styles/Resolve.png");
        assert_eq!(rune_style_badge(1), FALLBACK_ICON);
    }
}
