mod analysis;
mod api;
mod assets;
mod config;
mod display;
mod error;
mod session;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use analysis::champion_stats::champion_stats;
use analysis::session_summary::session_summary;
use api::client::BackendClient;
use assets::ChampionCatalog;
use clap::Parser;
use config::Config;
use display::output::{
    display_champion_stats, display_error, display_error_panel, display_help, display_info,
    display_live_banner, display_match_detail, display_match_list, display_profile,
    display_session_summary, display_success, display_toast, display_warning,
};
use indicatif::ProgressBar;
use session::{ClipboardSink, QueueFilter, SearchPhase, Session};

#[derive(Parser, Debug)]
#[command(name = "LoL Edge")]
#[command(about = "Summoner lookup: profile, ranked, mastery and match history", long_about = None)]
struct Args {
    /// Riot ID to search immediately (format: Name#TAG)
    riot_id: Option<String>,

    /// Region (euw1, eun1, na1, kr)
    #[arg(short, long)]
    region: Option<String>,
}

/// Terminal stand-in for the browser clipboard: echoes what was copied.
struct ConsoleClipboard;

impl ClipboardSink for ConsoleClipboard {
    fn copy(&mut self, text: &str) {
        display_success(&format!("Riot ID copied: {}", text));
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(region) = args.region {
        config.region = region;
    }

    let mut session = Session::new(&config.region)?;
    let client = BackendClient::new(config.clone());

    // Mastery entries arrive as bare champion ids; the catalog names them.
    // Losing it only degrades those labels.
    let catalog = match client.fetch_champion_data() {
        Ok(data) => Some(ChampionCatalog::from_data(data)),
        Err(e) => {
            display_warning(&format!("Champion catalog unavailable: {}", e));
            None
        }
    };
    let mut clipboard = ConsoleClipboard;

    // Deep link: mount arguments trigger a search immediately, the way URL
    // query parameters did.
    if let Some(riot_id) = args.riot_id.as_deref() {
        submit_search(&client, &mut session, riot_id);
        render_session(&session, catalog.as_ref());
    }

    display_info("Type 'help' for commands, 'quit' to exit.");

    loop {
        session.tick_toast(Instant::now());
        if let Some(toast) = session.toast() {
            display_toast(toast.message());
        }

        print!("lol-edge> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match command.to_lowercase().as_str() {
            "help" => display_help(),
            "quit" | "exit" => break,
            "search" => {
                if rest.is_empty() {
                    display_warning("Usage: search <Name#Tag> [region]");
                    continue;
                }
                let (riot_id, region) = split_search_args(rest);
                if let Some(region) = region {
                    if let Err(e) = session.set_region(region) {
                        display_error(&e.to_string());
                        continue;
                    }
                }
                submit_search(&client, &mut session, riot_id);
                render_session(&session, catalog.as_ref());
            }
            "region" => match session.set_region(rest) {
                Ok(()) => display_success(&format!("Region set to {}", rest)),
                Err(e) => display_error(&e.to_string()),
            },
            "filter" => match QueueFilter::parse(rest) {
                Some(filter) => {
                    session.set_filter(filter);
                    render_matches(&session);
                }
                None => display_warning("Usage: filter <all|solo|flex|aram>"),
            },
            "more" => {
                if session.can_load_more() {
                    session.load_more();
                    render_matches(&session);
                } else {
                    display_info("No more matches to show.");
                }
            }
            "matches" => render_matches(&session),
            "match" => match rest.parse::<usize>() {
                Ok(n) if n >= 1 => {
                    let puuid = session
                        .profile()
                        .map(|p| p.puuid.clone())
                        .unwrap_or_default();
                    match session.visible_matches().get(n - 1) {
                        Some(record) => display_match_detail(record, &puuid),
                        None => display_warning(&format!("No visible match #{}", n)),
                    }
                }
                _ => display_warning("Usage: match <number>"),
            },
            "stats" => {
                if let Some(profile) = session.profile() {
                    display_champion_stats(&champion_stats(
                        &session.visible_matches(),
                        &profile.puuid,
                    ));
                } else {
                    display_info("No profile loaded. Try 'search <Name#Tag>'.");
                }
            }
            "summary" => {
                match session.profile().and_then(|profile| {
                    session_summary(&session.visible_matches(), &profile.puuid)
                }) {
                    Some(summary) => display_session_summary(&summary),
                    None => display_info("No matches to summarize."),
                }
            }
            "profile" => match session.profile() {
                Some(profile) => display_profile(profile, catalog.as_ref()),
                None => display_info("No profile loaded. Try 'search <Name#Tag>'."),
            },
            "copy" => {
                if !session.copy_riot_id(&mut clipboard) {
                    display_info("No profile loaded.");
                }
            }
            _ => display_warning(&format!("Unknown command '{}'. Type 'help'.", command)),
        }
    }

    Ok(())
}

/// `search` takes an optional trailing region, e.g. `search Foo#NA1 na1`.
/// Riot IDs may contain spaces, so only a trailing known region splits off.
fn split_search_args(rest: &str) -> (&str, Option<&str>) {
    if let Some((head, tail)) = rest.rsplit_once(char::is_whitespace) {
        if session::REGIONS.contains(&tail) {
            return (head.trim(), Some(tail));
        }
    }
    (rest, None)
}

fn submit_search(client: &BackendClient, session: &mut Session, input: &str) {
    let (name, tag) = match Session::parse_riot_id(input) {
        Ok(parts) => parts,
        Err(e) => {
            // Validation failure surfaces inline; no request is issued.
            display_error(&e.to_string());
            return;
        }
    };

    let generation = session.begin_search();
    let region = session.region().to_string();

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Fetching data for {}#{} in {}", name, tag, region));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = client.fetch_summoner(&name, &tag, &region);
    spinner.finish_and_clear();

    let fetched_ok = result.is_ok();
    session.complete_search(generation, result);

    // The live-game check runs only after the primary fetch succeeded.
    if fetched_ok {
        if let Some(puuid) = session.profile().map(|p| p.puuid.clone()) {
            let live = client.fetch_live_game(&puuid, &region);
            session.apply_live_result(generation, live, Instant::now());
        }
    }
}

fn render_session(session: &Session, catalog: Option<&ChampionCatalog>) {
    match session.phase() {
        SearchPhase::Failed(message) => display_error_panel(message),
        SearchPhase::Ready => {
            if let Some(game) = session.live_game() {
                display_live_banner(game);
            }
            if let Some(profile) = session.profile() {
                display_profile(profile, catalog);
            }
            render_matches(session);
        }
        SearchPhase::Idle | SearchPhase::Loading => {}
    }
}

fn render_matches(session: &Session) {
    let Some(profile) = session.profile() else {
        display_info("No profile loaded. Try 'search <Name#Tag>'.");
        return;
    };

    let visible = session.visible_matches();
    let total_filtered = session.filtered_matches().len();

    if let Some(summary) = session_summary(&visible, &profile.puuid) {
        display_session_summary(&summary);
    }
    display_champion_stats(&champion_stats(&visible, &profile.puuid));
    display_match_list(&visible, &profile.puuid, total_filtered, session.filter());

    if session.can_load_more() {
        display_info("Type 'more' to load more matches.");
    }
}

#[cfg(test)]
mod tests {
    use super::split_search_args;

    #[test]
    fn search_args_split_off_a_trailing_region() {
        assert_eq!(split_search_args("Foo#NA1 na1"), ("Foo#NA1", Some("na1")));
        assert_eq!(
            split_search_args("Foo Bar#EUW euw1"),
            ("Foo Bar#EUW", Some("euw1"))
        );
        assert_eq!(split_search_args("Foo#NA1"), ("Foo#NA1", None));
        // A non-region trailing token stays part of the Riot ID.
        assert_eq!(split_search_args("Foo Bar#EUW"), ("Foo Bar#EUW", None));
    }
}
