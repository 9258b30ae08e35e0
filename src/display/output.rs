use crate::analysis::champion_stats::ChampionStatSummary;
use crate::analysis::session_summary::SessionSummary;
use crate::api::models::{LiveGameSnapshot, MatchRecord, Participant, PlayerProfile};
use crate::assets::{self, ChampionCatalog};
use crate::session::QueueFilter;
use chrono::DateTime;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

const TOP_TIERS: [&str; 4] = ["DIAMOND", "MASTER", "GRANDMASTER", "CHALLENGER"];

#[derive(Tabled)]
struct RankRow {
    queue: String,
    standing: String,
    #[tabled(rename = "LP")]
    league_points: String,
    record: String,
    #[tabled(rename = "winrate")]
    win_rate: String,
}

#[derive(Tabled)]
struct MasteryRow {
    champion: String,
    level: String,
    points: String,
    icon: String,
}

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "#")]
    number: String,
    champion: String,
    queue: String,
    date: String,
    #[tabled(rename = "K/D/A")]
    kda: String,
    #[tabled(rename = "CS")]
    cs: String,
    duration: String,
    result: String,
}

#[derive(Tabled)]
struct TeamRow {
    player: String,
    champion: String,
    #[tabled(rename = "K/D/A")]
    kda: String,
    #[tabled(rename = "CS")]
    cs: String,
    gold: String,
    damage: String,
    spells: String,
}

#[derive(Tabled)]
struct StatRow {
    champion: String,
    #[tabled(rename = "KDA")]
    kda: String,
    #[tabled(rename = "CS")]
    cs: String,
    winrate: String,
    games: String,
    icon: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", "⚠️".yellow(), message);
}

/// Blocking error panel shown in place of profile content.
pub fn display_error_panel(message: &str) {
    println!();
    println!("{}", "=".repeat(60).red());
    println!("{}", message.red().bold());
    println!("{}", "=".repeat(60).red());
    println!();
}

pub fn display_toast(message: &str) {
    println!("{} {}", "🔔".blue(), message.blue());
}

pub fn display_live_banner(game: &LiveGameSnapshot) {
    let mode = if game.game_mode.is_empty() {
        "Unknown Mode"
    } else {
        game.game_mode.as_str()
    };
    let queue = if game.queue_type.is_empty() {
        "Unknown Queue"
    } else {
        game.queue_type.as_str()
    };
    println!(
        "\n{}",
        format!(
            "🔴 LIVE NOW — {} • {} • {}",
            mode,
            format_duration(game.game_length),
            queue
        )
        .red()
        .bold()
    );
}

pub fn display_profile(profile: &PlayerProfile, catalog: Option<&ChampionCatalog>) {
    println!(
        "\n{}",
        format!("👤 {}", profile.summoner_name).bold().cyan()
    );
    println!("{}", "=".repeat(60).cyan());
    println!(
        "Level {} • Riot ID: {}",
        profile.summoner_level,
        profile.full_riot_id()
    );
    println!(
        "{}",
        format!("Icon: {}", assets::profile_icon(profile.profile_icon_id)).dimmed()
    );

    let rows = vec![
        rank_row("Ranked Solo", profile.ranked_solo.as_ref()),
        rank_row("Ranked Flex", profile.ranked_flex.as_ref()),
    ];
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    for entry in [&profile.ranked_solo, &profile.ranked_flex]
        .into_iter()
        .flatten()
    {
        if TOP_TIERS.contains(&entry.tier.to_uppercase().as_str()) {
            println!("{}", "★ Top Tier".purple().bold());
            break;
        }
    }

    display_top_mastery(profile, catalog);
}

fn rank_row(queue: &str, entry: Option<&crate::api::models::RankedEntry>) -> RankRow {
    match entry {
        Some(entry) if !entry.tier.is_empty() => {
            let winrate = if entry.wins + entry.losses > 0 {
                ((entry.wins as f64 / (entry.wins + entry.losses) as f64) * 100.0).round() as i64
            } else {
                0
            };
            RankRow {
                queue: queue.to_string(),
                standing: format!("{} {}", entry.tier, entry.rank),
                league_points: entry.league_points.to_string(),
                record: format!(
                    "{}W {}L",
                    entry.wins.to_string().green(),
                    entry.losses.to_string().red()
                ),
                win_rate: format!("{}%", winrate),
            }
        }
        _ => RankRow {
            queue: queue.to_string(),
            standing: "Unranked".to_string(),
            league_points: "-".to_string(),
            record: "-".to_string(),
            win_rate: "-".to_string(),
        },
    }
}

fn display_top_mastery(profile: &PlayerProfile, catalog: Option<&ChampionCatalog>) {
    if profile.top_champions.is_empty() {
        return;
    }

    println!("\n{}", "🏆 Top Mastery Champions".bold().yellow());
    let rows: Vec<MasteryRow> = profile
        .top_champions
        .iter()
        .take(3)
        .map(|entry| {
            let (name, icon) = match catalog {
                Some(catalog) => (
                    catalog.display_name(entry.champion_id),
                    catalog.icon_of(entry.champion_id),
                ),
                None => (
                    format!("Champion #{}", entry.champion_id),
                    assets::FALLBACK_ICON.to_string(),
                ),
            };
            MasteryRow {
                champion: name,
                level: entry.champion_level.to_string(),
                points: entry.champion_points.to_string(),
                icon,
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn display_match_list(
    visible: &[&MatchRecord],
    puuid: &str,
    total_filtered: usize,
    filter: QueueFilter,
) {
    println!(
        "\n{}",
        format!("📊 RECENT MATCHES ({})", filter.label())
            .bold()
            .cyan()
    );
    println!("{}", "=".repeat(60).cyan());

    if visible.is_empty() {
        println!("{}", "No matches found for selected queue.".yellow());
        return;
    }

    let mut rows = Vec::new();
    for (idx, record) in visible.iter().enumerate() {
        let Some(player) = record.participant(puuid) else {
            continue;
        };
        let result = if player.win {
            "Victory".green().to_string()
        } else {
            "Defeat".red().to_string()
        };
        rows.push(MatchRow {
            number: (idx + 1).to_string(),
            champion: player.champion_name.clone(),
            queue: assets::queue_name(record.info.queue_id, &record.info.game_mode),
            date: format_date(record.info.game_start_timestamp),
            kda: format!("{}/{}/{}", player.kills, player.deaths, player.assists),
            cs: player.total_minions_killed.to_string(),
            duration: format_duration(record.info.game_duration),
            result,
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
    println!(
        "{}",
        format!("Loaded {} of {}", visible.len(), total_filtered).yellow()
    );
}

/// Full match breakdown: both teams, plus the searched player's build with
/// resolved asset URLs.
pub fn display_match_detail(record: &MatchRecord, puuid: &str) {
    if record.info.participants.is_empty() {
        println!("{}", "Invalid match data.".yellow());
        return;
    }

    println!(
        "\n{}",
        format!(
            "⚔️  {} • {}",
            assets::queue_name(record.info.queue_id, &record.info.game_mode),
            format_duration(record.info.game_duration)
        )
        .bold()
        .cyan()
    );

    display_team("Blue Side", record, 100);
    display_team("Red Side", record, 200);

    if let Some(player) = record.participant(puuid) {
        display_build(player);
    }
}

fn display_team(title: &str, record: &MatchRecord, team_id: i32) {
    let rows: Vec<TeamRow> = record
        .info
        .participants
        .iter()
        .filter(|p| p.team_id == team_id)
        .map(|p| TeamRow {
            player: if p.summoner_name.is_empty() {
                "Unknown".to_string()
            } else {
                p.summoner_name.clone()
            },
            champion: p.champion_name.clone(),
            kda: format!("{}/{}/{}", p.kills, p.deaths, p.assists),
            cs: p.total_minions_killed.to_string(),
            gold: format!("{}g", p.gold_earned),
            damage: p.total_damage_dealt_to_champions.to_string(),
            spells: format!(
                "{}/{}",
                assets::spell_name(p.summoner1_id),
                assets::spell_name(p.summoner2_id)
            ),
        })
        .collect();

    if rows.is_empty() {
        return;
    }

    let header = if team_id == 100 {
        title.blue().bold()
    } else {
        title.red().bold()
    };
    println!("\n{}", header);
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

fn display_build(player: &Participant) {
    println!(
        "\n{}",
        format!("🔧 Build — {}", player.champion_name).bold().yellow()
    );
    println!(
        "  Champion: {}",
        assets::champion_icon(&player.champion_name).dimmed()
    );
    println!(
        "  Spells:   {} {}",
        assets::spell_icon(player.summoner1_id).dimmed(),
        assets::spell_icon(player.summoner2_id).dimmed()
    );
    if let Some(keystone) = player.keystone_id() {
        println!("  Keystone: {}", assets::rune_icon(keystone).dimmed());
    }
    if let Some(style) = player.secondary_style_id() {
        println!("  Style:    {}", assets::rune_style_badge(style).dimmed());
    }
    for (slot, item) in player.items().iter().enumerate() {
        println!(
            "  Item {}:   {}",
            slot,
            assets::item_icon(*item).dimmed()
        );
    }
}

pub fn display_champion_stats(stats: &[ChampionStatSummary]) {
    if stats.is_empty() {
        return;
    }

    println!("\n{}", "🏆 CHAMPION STATS".bold().cyan());
    println!("{}", "=".repeat(60).cyan());

    let rows: Vec<StatRow> = stats
        .iter()
        .map(|s| StatRow {
            champion: s.champion_name.clone(),
            kda: format!("{:.2}:1", s.kda()),
            cs: format!("{} CS", s.average_cs()),
            winrate: format!("{}%", s.winrate()),
            games: s.games.to_string(),
            icon: assets::champion_icon(&s.champion_name),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn display_session_summary(summary: &SessionSummary) {
    println!("\n{}", "📊 MATCH SUMMARY".bold().cyan());
    println!("{}", "=".repeat(60).cyan());

    print_win_loss_bar(summary.wins, summary.losses);
    println!(
        "Total Games: {} • Winrate: {}%",
        summary.games, summary.winrate
    );
    println!(
        "Average KDA: {} / {} / {}",
        summary.avg_kills, summary.avg_deaths, summary.avg_assists
    );
    println!("Average CS: {}", summary.avg_cs);
    println!("Avg Damage: {}", summary.avg_damage);
    println!("Kill Participation: {}%", summary.kill_participation);
}

fn print_win_loss_bar(wins: usize, losses: usize) {
    const BAR_WIDTH: usize = 30;
    let total = wins + losses;
    if total == 0 {
        return;
    }
    let win_cells = (wins as f64 / total as f64 * BAR_WIDTH as f64).round() as usize;
    let bar = format!(
        "{}{}",
        "█".repeat(win_cells).green(),
        "█".repeat(BAR_WIDTH - win_cells).red()
    );
    println!(
        "{} {} W / {} L",
        bar,
        wins.to_string().green(),
        losses.to_string().red()
    );
}

pub fn display_help() {
    println!("\n{}", "Commands".bold().yellow());
    println!("  search <Name#Tag> [region]   Look up a summoner");
    println!("  region <euw1|eun1|na1|kr>    Change the active region");
    println!("  filter <all|solo|flex|aram>  Filter matches by queue");
    println!("  more                         Reveal the next page of matches");
    println!("  matches                      Show the visible match list");
    println!("  match <n>                    Full detail for visible match n");
    println!("  stats                        Per-champion stats for visible matches");
    println!("  summary                      Win/loss summary for visible matches");
    println!("  profile                      Show the loaded profile again");
    println!("  copy                         Copy the Riot ID");
    println!("  quit                         Exit\n");
}

fn format_duration(seconds: i64) -> String {
    format!("{}m {}s", seconds / 60, seconds % 60)
}

fn format_date(timestamp_ms: i64) -> String {
    match DateTime::from_timestamp_millis(timestamp_ms) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => "-".to_string(),
    }
}
