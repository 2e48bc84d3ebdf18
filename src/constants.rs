/// Config file read when neither `--config` nor `PODIUM_CONFIG` is given.
pub const DEFAULT_CONFIG_PATH: &str = "podium.toml";

/// Competition data asset read when the config does not name one.
pub const DEFAULT_DATA_PATH: &str = "competitions.json";

pub const CONFIG_PATH_ENV: &str = "PODIUM_CONFIG";
pub const DATA_PATH_ENV: &str = "PODIUM_DATA";

pub const LOG_DIR: &str = "logs";
pub const LOG_FILE: &str = "podium.log";
