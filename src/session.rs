//! Search/session state machine. Owns everything the page owned in the
//! dashboard: query phase, fetched profile and matches, queue filter,
//! pagination cursor, live-game banner and the advisory toast.

use std::time::{Duration, Instant};

use crate::api::client::LiveGameResult;
use crate::api::models::{LiveGameSnapshot, MatchRecord, PlayerProfile, SummonerResponse};
use crate::error::AppError;

/// Matches revealed initially and added per "load more".
pub const INITIAL_LOAD: usize = 10;

pub const REGIONS: &[&str] = &["euw1", "eun1", "na1", "kr"];

const TOAST_DURATION: Duration = Duration::from_millis(3500);

const SEARCH_FAILED_MESSAGE: &str = "Summoner not found or Riot API error.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueFilter {
    All,
    Solo,
    Flex,
    Aram,
}

impl QueueFilter {
    pub fn queue_id(self) -> Option<i64> {
        match self {
            QueueFilter::All => None,
            QueueFilter::Solo => Some(420),
            QueueFilter::Flex => Some(440),
            QueueFilter::Aram => Some(450),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QueueFilter::All => "ALL",
            QueueFilter::Solo => "SOLO",
            QueueFilter::Flex => "FLEX",
            QueueFilter::Aram => "ARAM",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_uppercase().as_str() {
            "ALL" => Some(QueueFilter::All),
            "SOLO" => Some(QueueFilter::Solo),
            "FLEX" => Some(QueueFilter::Flex),
            "ARAM" => Some(QueueFilter::Aram),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Transient advisory notification with a fixed-delay deadline. Expiry is
/// checked against a caller-supplied instant so tests never sleep.
#[derive(Debug)]
pub struct Toast {
    message: String,
    deadline: Instant,
}

impl Toast {
    fn new(message: String, now: Instant) -> Self {
        Toast {
            message,
            deadline: now + TOAST_DURATION,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// Clipboard access as an injected capability, so the copy action is
/// testable without a terminal.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str);
}

pub struct Session {
    region: String,
    phase: SearchPhase,
    profile: Option<PlayerProfile>,
    matches: Vec<MatchRecord>,
    live_game: Option<LiveGameSnapshot>,
    filter: QueueFilter,
    visible_count: usize,
    toast: Option<Toast>,
    generation: u64,
}

impl Session {
    pub fn new(region: &str) -> Result<Self, AppError> {
        if !REGIONS.contains(&region) {
            return Err(AppError::InvalidRegion(region.to_string()));
        }
        Ok(Session {
            region: region.to_string(),
            phase: SearchPhase::Idle,
            profile: None,
            matches: Vec::new(),
            live_game: None,
            filter: QueueFilter::All,
            visible_count: INITIAL_LOAD,
            toast: None,
            generation: 0,
        })
    }

    /// Split `Name#Tag` into its parts. The separator is mandatory and both
    /// sides must be non-empty after trimming.
    pub fn parse_riot_id(input: &str) -> Result<(String, String), AppError> {
        let trimmed = input.trim();
        let Some((name, tag)) = trimmed.split_once('#') else {
            return Err(AppError::InvalidRiotId);
        };
        let name = name.trim();
        let tag = tag.trim();
        if name.is_empty() || tag.is_empty() {
            return Err(AppError::InvalidRiotId);
        }
        Ok((name.to_string(), tag.to_string()))
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn set_region(&mut self, region: &str) -> Result<(), AppError> {
        if !REGIONS.contains(&region) {
            return Err(AppError::InvalidRegion(region.to_string()));
        }
        self.region = region.to_string();
        Ok(())
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    pub fn profile(&self) -> Option<&PlayerProfile> {
        self.profile.as_ref()
    }

    pub fn live_game(&self) -> Option<&LiveGameSnapshot> {
        self.live_game.as_ref()
    }

    pub fn filter(&self) -> QueueFilter {
        self.filter
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Enter the loading state, clearing all prior results. Returns the
    /// generation token the caller must hand back with fetch results; a
    /// result carrying a superseded token is discarded.
    pub fn begin_search(&mut self) -> u64 {
        self.phase = SearchPhase::Loading;
        self.profile = None;
        self.matches.clear();
        self.live_game = None;
        self.toast = None;
        self.visible_count = INITIAL_LOAD;
        self.generation += 1;
        self.generation
    }

    /// Apply the primary fetch result. Returns false when the result was
    /// stale and ignored.
    pub fn complete_search(
        &mut self,
        generation: u64,
        result: Result<SummonerResponse, AppError>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        match result {
            Ok(bundle) => {
                self.profile = Some(bundle.profile);
                self.matches = bundle.matches;
                self.phase = SearchPhase::Ready;
            }
            Err(_) => {
                self.phase = SearchPhase::Failed(SEARCH_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    /// Apply the secondary live-game result. Anything short of an active
    /// game becomes the advisory toast; the primary state is untouched.
    pub fn apply_live_result(
        &mut self,
        generation: u64,
        result: LiveGameResult,
        now: Instant,
    ) -> bool {
        if generation != self.generation || self.phase != SearchPhase::Ready {
            return false;
        }
        match result {
            LiveGameResult::InGame(game) => {
                self.live_game = Some(game);
            }
            LiveGameResult::NotInGame | LiveGameResult::Unavailable => {
                let name = self
                    .profile
                    .as_ref()
                    .map(|p| p.summoner_name.as_str())
                    .filter(|n| !n.is_empty())
                    .unwrap_or("Summoner");
                self.toast = Some(Toast::new(
                    format!("{} is not in an active game.", name),
                    now,
                ));
            }
        }
        true
    }

    /// Changing the filter resets the pagination cursor; it never refetches.
    pub fn set_filter(&mut self, filter: QueueFilter) {
        self.filter = filter;
        self.visible_count = INITIAL_LOAD;
    }

    /// Reveal one more page of already-fetched matches.
    pub fn load_more(&mut self) {
        self.visible_count += INITIAL_LOAD;
    }

    /// Matches that pass the queue filter and actually contain the searched
    /// player. Records missing the player are invalid data and are dropped
    /// from rendering and aggregation alike.
    pub fn filtered_matches(&self) -> Vec<&MatchRecord> {
        let Some(puuid) = self.profile.as_ref().map(|p| p.puuid.as_str()) else {
            return Vec::new();
        };
        self.matches
            .iter()
            .filter(|m| m.participant(puuid).is_some())
            .filter(|m| match self.filter.queue_id() {
                None => true,
                Some(queue_id) => m.info.queue_id == queue_id,
            })
            .collect()
    }

    pub fn visible_matches(&self) -> Vec<&MatchRecord> {
        let mut filtered = self.filtered_matches();
        filtered.truncate(self.visible_count);
        filtered
    }

    pub fn can_load_more(&self) -> bool {
        self.visible_count < self.filtered_matches().len()
    }

    /// Drop the toast once its deadline passed. Returns true when a toast
    /// was dismissed by this tick.
    pub fn tick_toast(&mut self, now: Instant) -> bool {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
            return true;
        }
        false
    }

    /// Copy the loaded profile's full Riot ID into the injected sink.
    pub fn copy_riot_id(&self, clipboard: &mut dyn ClipboardSink) -> bool {
        match &self.profile {
            Some(profile) => {
                clipboard.copy(&profile.full_riot_id());
                true
            }
            None => false,
        }
    }
}
