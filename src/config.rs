use std::str::FromStr;

pub struct Config {
    pub log_level: log::Level,
}

impl Config {
    /// Reads `TREASURE_HUNT_LOG` at build time; the browser has no process
    /// environment to consult.
    pub fn new() -> Self {
        Self::from_level(option_env!("TREASURE_HUNT_LOG"))
    }

    pub fn from_level(level: Option<&str>) -> Self {
        Self {
            log_level: level
                .and_then(|level| log::Level::from_str(level).ok())
                .unwrap_or(log::Level::Info),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
