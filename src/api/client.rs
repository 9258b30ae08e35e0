use crate::config::Config;
use crate::error::AppError;
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;

use super::endpoints;
use super::models::*;

/// Outcome of the secondary live-game fetch. Both `NotInGame` and
/// `Unavailable` degrade to an advisory toast; neither disturbs a
/// successful primary search.
#[derive(Debug)]
pub enum LiveGameResult {
    InGame(LiveGameSnapshot),
    NotInGame,
    Unavailable,
}

pub struct BackendClient {
    config: Config,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl BackendClient {
    pub fn new(config: Config) -> Self {
        // 10 requests per second against our own backend
        let rate_limiter = RateLimiter::direct(Quota::per_second(NonZeroU32::new(10).unwrap()));
        BackendClient {
            config,
            rate_limiter,
        }
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        while self.rate_limiter.check().is_err() {
            thread::sleep(Duration::from_millis(50));
        }

        let mut retry_count = 0;
        const MAX_RETRIES: u32 = 3;

        loop {
            let response = ureq::get(url).set("User-Agent", "lol-edge/0.1.0").call();

            match response {
                Ok(resp) => {
                    return resp
                        .into_string()
                        .map_err(|e| AppError::HttpError(e.to_string()));
                }
                Err(ureq::Error::Status(404, _)) => {
                    return Err(AppError::SummonerNotFound);
                }
                Err(ureq::Error::Status(429, _)) => {
                    if retry_count >= MAX_RETRIES {
                        return Err(AppError::RateLimited);
                    }
                    let wait_ms = 2000 * (retry_count + 1) as u64;
                    thread::sleep(Duration::from_millis(wait_ms));
                    retry_count += 1;
                }
                Err(e) => {
                    return Err(AppError::HttpError(e.to_string()));
                }
            }
        }
    }

    /// Primary fetch: profile plus full match list in one response.
    pub fn fetch_summoner(
        &self,
        name: &str,
        tag: &str,
        region: &str,
    ) -> Result<SummonerResponse, AppError> {
        let url = endpoints::summoner_url(&self.config.api_base, name, tag, region);
        let body = self.execute_request(&url)?;
        serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))
    }

    /// Secondary fetch, only issued after the primary succeeded. Never
    /// returns an error: any failure collapses to `Unavailable`.
    pub fn fetch_live_game(&self, puuid: &str, region: &str) -> LiveGameResult {
        let url = endpoints::live_game_url(&self.config.api_base, puuid, region);
        let body = match self.execute_request(&url) {
            Ok(body) => body,
            Err(_) => return LiveGameResult::Unavailable,
        };

        match serde_json::from_str::<LiveGameResponse>(&body) {
            Ok(LiveGameResponse {
                active_game: Some(game),
            }) => LiveGameResult::InGame(game),
            Ok(_) => LiveGameResult::NotInGame,
            Err(_) => LiveGameResult::Unavailable,
        }
    }

    /// One-time champion catalog from Data Dragon, used to name mastery
    /// entries. Callers treat a failure as a degraded display, not an error.
    pub fn fetch_champion_data(&self) -> Result<DataDragonChampions, AppError> {
        let body = self.execute_request(&endpoints::champion_data_url())?;
        serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))
    }
}
