use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use tracing::{info, warn};

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
const DEFAULT_TIMEOUT_SECS: &str = "10";

pub struct Config {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub data_dir: PathBuf,
    /// Subcategory to preselect on startup, matched by name
    pub start_category: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        let api_base_url: String = try_load("TRADE_API_BASE_URL", DEFAULT_API_BASE_URL);
        let timeout_secs: u64 = try_load("TRADE_REQUEST_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);

        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(timeout_secs),
            data_dir: data_dir(),
            start_category: var("TRADE_START_CATEGORY"),
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    parse_or_default(key, &raw, default)
}

fn parse_or_default<T: FromStr>(key: &str, raw: &str, default: &str) -> T
where
    T::Err: Display,
{
    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            match default.parse() {
                Ok(value) => value,
                // defaults are compile-time constants that always parse
                Err(_) => unreachable!("default for {key} does not parse"),
            }
        }
    }
}

/// Where the session database lives.
///
/// - Linux: ~/.local/share/trade-catalog
/// - macOS: ~/Library/Application Support/trade-catalog
/// - Windows: %APPDATA%\trade-catalog
fn data_dir() -> PathBuf {
    if let Some(dir) = var("TRADE_DATA_DIR") {
        return PathBuf::from(dir);
    }

    let mut path = dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(env::temp_dir);

    path.push("trade-catalog");
    path
}
