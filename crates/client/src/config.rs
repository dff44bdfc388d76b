//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Settings for one client run.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// TOML game config; bundled defaults when unset.
    pub config_path: Option<PathBuf>,
    pub seed: u64,
    pub frame_rate: u32,
    /// Directory for the log file; logs go to stderr when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            seed: 0,
            frame_rate: 60,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_CONFIG` - Path to a TOML game config (default: bundled)
    /// - `DUNGEON_SEED` - Game seed (default: current unix time)
    /// - `DUNGEON_FRAME_RATE` - Simulation frames per second (default: 60)
    /// - `DUNGEON_LOG_DIR` - Write logs to `dungeon.log` in this directory
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.config_path = env::var_os("DUNGEON_CONFIG").map(PathBuf::from);

        config.seed = read_env::<u64>("DUNGEON_SEED").unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default()
        });

        if let Some(frame_rate) = read_env::<u32>("DUNGEON_FRAME_RATE") {
            config.frame_rate = frame_rate.max(1);
        }

        config.log_dir = env::var_os("DUNGEON_LOG_DIR").map(PathBuf::from);

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
