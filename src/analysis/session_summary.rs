use crate::api::models::MatchRecord;

/// Whole-session aggregates over the currently visible match list.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub winrate: u32,
    pub avg_kills: i32,
    pub avg_deaths: i32,
    pub avg_assists: i32,
    pub avg_cs: i32,
    pub avg_damage: i32,
    /// Percentage, averaged per match.
    pub kill_participation: u32,
}

/// Reduce the match list to session-wide aggregates. Matches where the
/// target player is absent contribute to nothing, denominators included.
/// Returns None when no valid match remains.
pub fn session_summary(matches: &[&MatchRecord], puuid: &str) -> Option<SessionSummary> {
    let mut games = 0usize;
    let mut wins = 0usize;
    let mut kills = 0i64;
    let mut deaths = 0i64;
    let mut assists = 0i64;
    let mut cs = 0i64;
    let mut damage = 0i64;
    let mut kp_sum = 0.0f64;

    for record in matches {
        let Some(player) = record.participant(puuid) else {
            continue;
        };

        games += 1;
        if player.win {
            wins += 1;
        }
        kills += player.kills as i64;
        deaths += player.deaths as i64;
        assists += player.assists as i64;
        // The summary view counts lane minions only; per-champion CS adds
        // neutral monsters.
        cs += player.total_minions_killed as i64;
        damage += player.total_damage_dealt_to_champions as i64;

        let ratio = match player
            .challenges
            .as_ref()
            .and_then(|c| c.kill_participation)
        {
            Some(backend_ratio) => backend_ratio,
            None => {
                let team_kills = record.team_kills(player.team_id);
                if team_kills > 0 {
                    (player.kills + player.assists) as f64 / team_kills as f64
                } else {
                    0.0
                }
            }
        };
        kp_sum += ratio;
    }

    if games == 0 {
        return None;
    }

    let avg = |total: i64| (total as f64 / games as f64).round() as i32;

    Some(SessionSummary {
        games,
        wins,
        losses: games - wins,
        winrate: ((wins as f64 / games as f64) * 100.0).round() as u32,
        avg_kills: avg(kills),
        avg_deaths: avg(deaths),
        avg_assists: avg(assists),
        avg_cs: avg(cs),
        avg_damage: avg(damage),
        kill_participation: ((kp_sum / games as f64) * 100.0).round() as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{Challenges, MatchInfo, Participant};

    const PUUID: &str = "me";

    fn player(k: i32, d: i32, a: i32, win: bool) -> Participant {
        Participant {
            puuid: PUUID.to_string(),
            team_id: 100,
            win,
            kills: k,
            deaths: d,
            assists: a,
            total_minions_killed: 150,
            total_damage_dealt_to_champions: 20_000,
            ..Participant::default()
        }
    }

    fn teammate(kills: i32) -> Participant {
        Participant {
            puuid: "ally".to_string(),
            team_id: 100,
            kills,
            ..Participant::default()
        }
    }

    fn game(participants: Vec<Participant>) -> MatchRecord {
        MatchRecord {
            info: MatchInfo {
                participants,
                ..MatchInfo::default()
            },
            ..MatchRecord::default()
        }
    }

    #[test]
    fn averages_round_to_nearest_integer() {
        let matches = vec![
            game(vec![player(7, 2, 9, true)]),
            game(vec![player(2, 5, 4, false)]),
        ];
        let refs: Vec<&MatchRecord> = matches.iter().collect();
        let summary = session_summary(&refs, PUUID).unwrap();

        assert_eq!(summary.games, 2);
        assert_eq!(summary.wins, 1);
        assert_eq!(summary.losses, 1);
        assert_eq!(summary.winrate, 50);
        assert_eq!(summary.avg_kills, 5); // 4.5 rounds up
        assert_eq!(summary.avg_deaths, 4); // 3.5 rounds up
        assert_eq!(summary.avg_assists, 7); // 6.5 rounds up
        assert_eq!(summary.avg_cs, 150);
        assert_eq!(summary.avg_damage, 20_000);
    }

    #[test]
    fn kill_participation_prefers_backend_ratio() {
        let mut p = player(5, 0, 5, true);
        p.challenges = Some(Challenges {
            kill_participation: Some(0.8),
        });
        // Team kills would give 10/40 = 25%, so only the backend ratio can
        // produce 80 here.
        let matches = vec![game(vec![p, teammate(30)])];
        let refs: Vec<&MatchRecord> = matches.iter().collect();
        let summary = session_summary(&refs, PUUID).unwrap();
        assert_eq!(summary.kill_participation, 80);
    }

    #[test]
    fn kill_participation_falls_back_to_team_kills() {
        // 5 + 5 takedowns over 5 + 15 team kills = 50%
        let matches = vec![game(vec![player(5, 0, 5, true), teammate(15)])];
        let refs: Vec<&MatchRecord> = matches.iter().collect();
        let summary = session_summary(&refs, PUUID).unwrap();
        assert_eq!(summary.kill_participation, 50);
    }

    #[test]
    fn zero_team_kills_contributes_zero_ratio() {
        let matches = vec![game(vec![player(0, 3, 0, false)])];
        let refs: Vec<&MatchRecord> = matches.iter().collect();
        let summary = session_summary(&refs, PUUID).unwrap();
        assert_eq!(summary.kill_participation, 0);
    }

    #[test]
    fn matches_without_the_player_are_excluded_everywhere() {
        let matches = vec![
            game(vec![player(10, 0, 10, true)]),
            game(vec![teammate(4)]), // searched player absent
            game(Vec::new()),        // no participants at all
        ];
        let refs: Vec<&MatchRecord> = matches.iter().collect();
        let summary = session_summary(&refs, PUUID).unwrap();

        assert_eq!(summary.games, 1);
        assert_eq!(summary.avg_kills, 10);
        assert_eq!(summary.winrate, 100);
    }

    #[test]
    fn empty_input_yields_none() {
        let refs: Vec<&MatchRecord> = Vec::new();
        assert!(session_summary(&refs, PUUID).is_none());
    }
}
