//! CLI.

use super::*;

/// Arguments for the `sift` binary.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The feed document to filter.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,
    /// Where to write the filtered feed.
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
    /// The category label entries must carry, matched exactly.
    #[arg(short = 't', long, value_name = "CATEGORY")]
    pub category: Option<String>,
    /// Path to a toml configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Log at debug level.
    #[arg(long, default_value_t = false)]
    pub debug: bool,
    /// Log at trace level.
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// Parse the configuration file.
    /// An explicit `--config` must exist; the default path is optional.
    pub fn parse_config(&self) -> Result<Config> {
        let config_path: PathBuf = match &self.config {
            Some(path) => path.resolve().into(),
            None => {
                let path: PathBuf =
                    PathBuf::from(DEFAULT_CONFIG_PATH).resolve().into();
                if !path.exists() {
                    return Ok(Config::default());
                }
                path
            }
        };
        let config_data = match std::fs::read_to_string(&config_path) {
            Ok(data) => data,
            Err(e) => bail!(
                "Unable to read data from config file {:?}: {}",
                config_path,
                e
            ),
        };
        match toml::from_str::<Config>(&config_data) {
            Ok(config) => Ok(config),
            Err(e) => bail!("Configuration file is not valid: {}", e),
        }
    }
}
