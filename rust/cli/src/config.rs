use serde::{Deserialize, Serialize};
use std::fs;

/// Default snapshot location, relative to the working directory.
pub const DEFAULT_STATE_PATH: &str = "game_state.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where the game snapshot is read from and written to
    pub state_path: String,
    /// Player selected when `--player` is omitted (1 or 2)
    pub player: u8,
    /// Round selected when `--round` is omitted (1-3)
    pub round: u8,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub state_path: ValueSource,
    pub player: ValueSource,
    pub round: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            state_path: ValueSource::Default,
            player: ValueSource::Default,
            round: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_path: DEFAULT_STATE_PATH.into(),
            player: 1,
            round: 1,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("LOSTCITIES_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.state_path {
            cfg.state_path = v;
            sources.state_path = ValueSource::File;
        }
        if let Some(v) = f.player {
            cfg.player = v;
            sources.player = ValueSource::File;
        }
        if let Some(v) = f.round {
            cfg.round = v;
            sources.round = ValueSource::File;
        }
    }

    if let Ok(path) = std::env::var("LOSTCITIES_STATE")
        && !path.is_empty()
    {
        cfg.state_path = path;
        sources.state_path = ValueSource::Env;
    }
    if let Ok(player) = std::env::var("LOSTCITIES_PLAYER")
        && !player.is_empty()
    {
        cfg.player = player
            .parse()
            .map_err(|_| ConfigError::Invalid("LOSTCITIES_PLAYER must be a number".into()))?;
        sources.player = ValueSource::Env;
    }
    if let Ok(round) = std::env::var("LOSTCITIES_ROUND")
        && !round.is_empty()
    {
        cfg.round = round
            .parse()
            .map_err(|_| ConfigError::Invalid("LOSTCITIES_ROUND must be a number".into()))?;
        sources.round = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    state_path: Option<String>,
    #[serde(default)]
    player: Option<u8>,
    #[serde(default)]
    round: Option<u8>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.state_path.trim().is_empty() {
        return Err(ConfigError::Invalid("state_path must not be empty".into()));
    }
    if !(1..=2).contains(&cfg.player) {
        return Err(ConfigError::Invalid("player must be 1 or 2".into()));
    }
    if !(1..=3).contains(&cfg.round) {
        return Err(ConfigError::Invalid("round must be between 1 and 3".into()));
    }
    Ok(())
}
