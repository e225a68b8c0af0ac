//! CLI configuration from the process environment.
use std::env;
use std::path::PathBuf;

/// Settings that do not come from command-line flags.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub json: bool,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `RIGSHEET_DATA_DIR` - Directory holding catalogs and characters
    /// - `RIGSHEET_LOG_DIR` - Also write logs to `rigsheet.log` in this directory
    /// - `RIGSHEET_JSON` - Print JSON instead of text (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.data_dir = env::var("RIGSHEET_DATA_DIR").ok().map(PathBuf::from);
        config.log_dir = env::var("RIGSHEET_LOG_DIR").ok().map(PathBuf::from);

        if let Some(json) = read_env::<bool>("RIGSHEET_JSON") {
            config.json = json;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
