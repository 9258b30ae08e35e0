use std::collections::HashMap;

use crate::api::models::MatchRecord;

/// At most this many champion rows survive aggregation, ordered by games
/// played descending.
pub const TOP_CHAMPIONS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ChampionStatSummary {
    /// Grouping key; display goes by name.
    #[allow(dead_code)]
    pub champion_id: i64,
    pub champion_name: String,
    pub games: usize,
    pub wins: usize,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub cs: i32,
}

impl ChampionStatSummary {
    fn new(champion_id: i64, champion_name: String) -> Self {
        ChampionStatSummary {
            champion_id,
            champion_name,
            games: 0,
            wins: 0,
            kills: 0,
            deaths: 0,
            assists: 0,
            cs: 0,
        }
    }

    /// (kills + assists) / deaths, or kills + assists for a deathless run.
    pub fn kda(&self) -> f64 {
        let takedowns = (self.kills + self.assists) as f64;
        if self.deaths == 0 {
            takedowns
        } else {
            takedowns / self.deaths as f64
        }
    }

    pub fn winrate(&self) -> u32 {
        ((self.wins as f64 / self.games as f64) * 100.0).round() as u32
    }

    pub fn average_cs(&self) -> i32 {
        (self.cs as f64 / self.games as f64).round() as i32
    }
}

/// Single pass over the match list, grouped by the champion the target
/// player used. Matches where the player does not appear are skipped
/// entirely. Ties in games-played keep encounter order.
pub fn champion_stats(matches: &[&MatchRecord], puuid: &str) -> Vec<ChampionStatSummary> {
    let mut grouped: HashMap<i64, ChampionStatSummary> = HashMap::new();
    let mut encounter_order: Vec<i64> = Vec::new();

    for record in matches {
        let Some(player) = record.participant(puuid) else {
            continue;
        };

        let entry = grouped.entry(player.champion_id).or_insert_with(|| {
            encounter_order.push(player.champion_id);
            ChampionStatSummary::new(player.champion_id, player.champion_name.clone())
        });

        entry.games += 1;
        if player.win {
            entry.wins += 1;
        }
        entry.kills += player.kills;
        entry.deaths += player.deaths;
        entry.assists += player.assists;
        entry.cs += player.total_minions_killed + player.neutral_minions_killed;
    }

    let mut stats: Vec<ChampionStatSummary> = encounter_order
        .into_iter()
        .filter_map(|id| grouped.remove(&id))
        .collect();

    // sort_by is stable, so equal game counts stay in encounter order
    stats.sort_by(|a, b| b.games.cmp(&a.games));
    stats.truncate(TOP_CHAMPIONS);
    stats
}
