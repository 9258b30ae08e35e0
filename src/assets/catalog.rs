use std::collections::HashMap;

use crate::api::models::{ChampionInfo, DataDragonChampions};

use super::{champion_icon, FALLBACK_ICON};

/// Champion id -> identity lookup built once from Data Dragon's
/// champion.json. The backend's mastery entries carry only numeric ids.
pub struct ChampionCatalog {
    by_numeric_id: HashMap<i64, ChampionInfo>,
}

impl ChampionCatalog {
    pub fn from_data(data: DataDragonChampions) -> Self {
        let by_numeric_id = data
            .data
            .into_values()
            .filter_map(|info| info.key.parse::<i64>().ok().map(|id| (id, info)))
            .collect();
        ChampionCatalog { by_numeric_id }
    }

    pub fn name_of(&self, champion_id: i64) -> Option<&str> {
        self.by_numeric_id
            .get(&champion_id)
            .map(|info| info.name.as_str())
    }

    /// Display name, degrading to a numbered placeholder when the catalog
    /// has no entry (or was never fetched).
    pub fn display_name(&self, champion_id: i64) -> String {
        self.name_of(champion_id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Champion #{}", champion_id))
    }

    /// Square icon URL by numeric id. The catalog's `id` field is already
    /// the CDN asset key, so no override pass is needed here.
    pub fn icon_of(&self, champion_id: i64) -> String {
        match self.by_numeric_id.get(&champion_id) {
            Some(info) => champion_icon(&info.id),
            None => FALLBACK_ICON.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ChampionCatalog {
        let data: DataDragonChampions = serde_json::from_str(
            r#"{"data": {
                "Ahri": {"id": "Ahri", "name": "Ahri", "key": "103"},
                "MonkeyKing": {"id": "MonkeyKing", "name": "Wukong", "key": "62"}
            }}"#,
        )
        .unwrap();
        ChampionCatalog::from_data(data)
    }

    #[test]
    fn resolves_numeric_ids_to_names_and_icons() {
        let catalog = catalog();
        assert_eq!(catalog.display_name(103), "Ahri");
        assert_eq!(catalog.display_name(62), "Wukong");
        assert!(catalog.icon_of(62).ends_with("/champion/MonkeyKing.png"));
    }

    #[test]
    fn unknown_id_degrades() {
        let catalog = catalog();
        assert_eq!(catalog.display_name(9999), "Champion #9999");
        assert_eq!(catalog.icon_of(9999), FALLBACK_ICON);
    }
}
