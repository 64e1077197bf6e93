//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Scenario played when none is named.
pub const DEFAULT_SCENARIO: &str = "duel";

/// Decision rounds played when none are requested.
pub const DEFAULT_ROUNDS: u32 = 8;

/// Settings the binary needs before any content is loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Content directory; `None` uses the data bundled with `skirmish-content`.
    pub data_dir: Option<PathBuf>,
    pub scenario: String,
    /// Replaces the depth from `search.toml` when set.
    pub depth_override: Option<u32>,
    pub rounds: u32,
    /// Directory for a log file in addition to stderr.
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            scenario: DEFAULT_SCENARIO.to_string(),
            depth_override: None,
            rounds: DEFAULT_ROUNDS,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SKIRMISH_DATA_DIR` - Content directory (default: bundled data)
    /// - `SKIRMISH_SCENARIO` - Scenario name under `scenarios/` (default: duel)
    /// - `SKIRMISH_DEPTH` - Search depth override (default: from search.toml)
    /// - `SKIRMISH_ROUNDS` - Decision rounds to play (default: 8)
    /// - `SKIRMISH_LOG_DIR` - Also write logs to `<dir>/skirmish.log`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.data_dir = lookup("SKIRMISH_DATA_DIR").map(PathBuf::from);

        if let Some(scenario) = lookup("SKIRMISH_SCENARIO").filter(|name| !name.is_empty()) {
            config.scenario = scenario;
        }

        // Zero is passed through so agent construction reports it.
        config.depth_override = parse(lookup("SKIRMISH_DEPTH"));

        if let Some(rounds) = parse::<u32>(lookup("SKIRMISH_ROUNDS")) {
            config.rounds = rounds;
        }

        config.log_dir = lookup("SKIRMISH_LOG_DIR").map(PathBuf::from);

        config
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}
