use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid Riot ID format. Use format: Name#TAG")]
    InvalidRiotId,

    #[error("Unknown region: {0}. Supported: euw1, eun1, na1, kr")]
    InvalidRegion(String),

    #[error("Summoner not found or Riot API error.")]
    SummonerNotFound,

    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}
