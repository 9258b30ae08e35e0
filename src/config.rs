use crate::error::AppError;
use crate::session;
use std::env;

const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    pub region: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_base = env::var("LOL_EDGE_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        let region = env::var("LOL_EDGE_REGION").unwrap_or_else(|_| "euw1".to_string());
        if !session::REGIONS.contains(&region.as_str()) {
            return Err(AppError::ConfigError(format!(
                "LOL_EDGE_REGION is set to unsupported region '{}'",
                region
            )));
        }

        Ok(Config { api_base, region })
    }
}
