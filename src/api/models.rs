use serde::Deserialize;

// /summoner response
#[derive(Debug, Deserialize)]
pub struct SummonerResponse {
    pub profile: PlayerProfile,
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    #[serde(default)]
    pub summoner_name: String,
    pub summoner_level: i32,
    #[serde(default)]
    pub profile_icon_id: i32,
    pub puuid: String,
    #[serde(default)]
    pub riot_id: String,
    #[serde(default)]
    pub tag_line: String,
    #[serde(default)]
    pub ranked_solo: Option<RankedEntry>,
    #[serde(default)]
    pub ranked_flex: Option<RankedEntry>,
    #[serde(default)]
    pub top_champions: Vec<MasteryEntry>,
}

impl PlayerProfile {
    /// Full Riot ID for display and clipboard copy, built from whatever
    /// identifier fields the backend filled in.
    pub fn full_riot_id(&self) -> String {
        if !self.riot_id.is_empty() {
            self.riot_id.clone()
        } else if !self.tag_line.is_empty() {
            format!("{}#{}", self.summoner_name, self.tag_line)
        } else {
            self.summoner_name.clone()
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub tier: String,
    #[serde(default)]
    pub rank: String,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
    // The backend precomputes this, but the profile card derives its own
    // rounding from wins/losses.
    #[serde(default)]
    #[allow(dead_code)]
    pub win_rate: f64,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MasteryEntry {
    pub champion_id: i64,
    pub champion_level: i32,
    pub champion_points: i64,
}

// Match-V5 shaped records, passed through by the backend with the searched
// player's puuid attached as userPuuid.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    #[serde(default)]
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
    #[serde(default)]
    #[allow(dead_code)]
    pub user_puuid: String,
}

impl MatchRecord {
    pub fn participant(&self, puuid: &str) -> Option<&Participant> {
        self.info.participants.iter().find(|p| p.puuid == puuid)
    }

    /// Summed champion kills of one team. Used as the kill-participation
    /// denominator when the backend sends no precomputed ratio.
    pub fn team_kills(&self, team_id: i32) -> i32 {
        self.info
            .participants
            .iter()
            .filter(|p| p.team_id == team_id)
            .map(|p| p.kills)
            .sum()
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct MatchMetadata {
    #[serde(default)]
    pub match_id: String,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    #[serde(default)]
    pub game_duration: i64,
    #[serde(default)]
    pub game_start_timestamp: i64,
    #[serde(default)]
    pub queue_id: i64,
    #[serde(default)]
    pub game_mode: String,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub puuid: String,
    #[serde(default)]
    pub summoner_name: String,
    #[serde(default)]
    pub champion_id: i64,
    #[serde(default)]
    pub champion_name: String,
    #[serde(default)]
    pub team_id: i32,
    #[serde(default)]
    pub win: bool,
    #[serde(default)]
    pub kills: i32,
    #[serde(default)]
    pub deaths: i32,
    #[serde(default)]
    pub assists: i32,
    #[serde(default)]
    pub total_minions_killed: i32,
    #[serde(default)]
    pub neutral_minions_killed: i32,
    #[serde(default)]
    pub gold_earned: i32,
    #[serde(default)]
    pub total_damage_dealt_to_champions: i32,
    #[serde(default, rename = "summoner1Id")]
    pub summoner1_id: i32,
    #[serde(default, rename = "summoner2Id")]
    pub summoner2_id: i32,
    #[serde(default)]
    pub item0: i32,
    #[serde(default)]
    pub item1: i32,
    #[serde(default)]
    pub item2: i32,
    #[serde(default)]
    pub item3: i32,
    #[serde(default)]
    pub item4: i32,
    #[serde(default)]
    pub item5: i32,
    #[serde(default)]
    pub item6: i32,
    #[serde(default)]
    pub perks: Option<Perks>,
    #[serde(default)]
    pub challenges: Option<Challenges>,
}

impl Participant {
    pub fn items(&self) -> [i32; 7] {
        [
            self.item0, self.item1, self.item2, self.item3, self.item4, self.item5, self.item6,
        ]
    }

    /// The keystone is the first selection of the primary perk style.
    pub fn keystone_id(&self) -> Option<i64> {
        self.perks
            .as_ref()?
            .styles
            .first()?
            .selections
            .first()
            .map(|s| s.perk)
    }

    pub fn secondary_style_id(&self) -> Option<i64> {
        self.perks.as_ref()?.styles.get(1).map(|s| s.style)
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Perks {
    #[serde(default)]
    pub styles: Vec<PerkStyle>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct PerkStyle {
    #[serde(default)]
    pub style: i64,
    #[serde(default)]
    pub selections: Vec<PerkSelection>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct PerkSelection {
    #[serde(default)]
    pub perk: i64,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Challenges {
    #[serde(default)]
    pub kill_participation: Option<f64>,
}

// /livegame response
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LiveGameResponse {
    #[serde(default)]
    pub active_game: Option<LiveGameSnapshot>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LiveGameSnapshot {
    #[serde(default)]
    pub game_mode: String,
    #[serde(default)]
    pub game_length: i64,
    #[serde(default)]
    pub queue_type: String,
}

// Data Dragon champion.json
#[derive(Debug, Deserialize)]
pub struct DataDragonChampions {
    pub data: std::collections::HashMap<String, ChampionInfo>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChampionInfo {
    pub id: String,
    pub name: String,
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summoner_response_deserializes_backend_shape() {
        let body = r#"{
            "profile": {
                "summonerName": "Kanenas",
                "summonerLevel": 312,
                "profileIconId": 4568,
                "puuid": "abc-123",
                "riotId": "Kanenas#EUW",
                "tagLine": "EUW",
                "rankedSolo": {
                    "tier": "GOLD",
                    "rank": "II",
                    "leaguePoints": 54,
                    "wins": 30,
                    "losses": 24,
                    "winRate": 55.6
                },
                "rankedFlex": null,
                "topChampions": [
                    {"championId": 103, "championLevel": 7, "championPoints": 245123}
                ]
            },
            "matches": [{
                "metadata": {"matchId": "EUW1_1", "participants": ["abc-123"]},
                "info": {
                    "gameDuration": 1845,
                    "gameStartTimestamp": 1714662000000,
                    "queueId": 420,
                    "gameMode": "CLASSIC",
                    "participants": [{
                        "puuid": "abc-123",
                        "championId": 103,
                        "championName": "Ahri",
                        "teamId": 100,
                        "win": true,
                        "kills": 7,
                        "deaths": 2,
                        "assists": 9,
                        "totalMinionsKilled": 188,
                        "neutralMinionsKilled": 12,
                        "goldEarned": 12894,
                        "totalDamageDealtToChampions": 24510,
                        "summoner1Id": 4,
                        "summoner2Id": 14,
                        "item0": 3089, "item1": 0, "item2": 3020,
                        "item3": 3165, "item4": 0, "item5": 0, "item6": 3363,
                        "perks": {"styles": [
                            {"style": 8100, "selections": [{"perk": 8112}]},
                            {"style": 8200, "selections": []}
                        ]},
                        "challenges": {"killParticipation": 0.62}
                    }]
                },
                "userPuuid": "abc-123"
            }]
        }"#;

        let parsed: SummonerResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.profile.summoner_level, 312);
        assert_eq!(parsed.profile.full_riot_id(), "Kanenas#EUW");
        assert!(parsed.profile.ranked_flex.is_none());
        assert_eq!(parsed.profile.top_champions.len(), 1);

        let record = &parsed.matches[0];
        assert_eq!(record.info.queue_id, 420);
        let player = record.participant("abc-123").unwrap();
        assert_eq!(player.champion_name, "Ahri");
        assert_eq!(player.items()[2], 3020);
        assert_eq!(player.keystone_id(), Some(8112));
        assert_eq!(player.secondary_style_id(), Some(8200));
        assert_eq!(record.team_kills(100), 7);
    }

    #[test]
    fn missing_optional_fields_default() {
        let body = r#"{
            "profile": {"summonerName": "X", "summonerLevel": 1, "puuid": "p"}
        }"#;
        let parsed: SummonerResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.matches.is_empty());
        assert_eq!(parsed.profile.full_riot_id(), "X");
    }

    #[test]
    fn live_game_absent_means_none() {
        let parsed: LiveGameResponse = serde_json::from_str(r#"{"activeGame": null}"#).unwrap();
        assert!(parsed.active_game.is_none());

        let parsed: LiveGameResponse =
            serde_json::from_str(r#"{"activeGame": {"gameMode": "CLASSIC", "gameLength": 754}}"#)
                .unwrap();
        assert_eq!(parsed.active_game.unwrap().game_length, 754);
    }
}
