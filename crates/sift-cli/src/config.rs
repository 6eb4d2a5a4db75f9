//! Config.

use super::*;

/// Configuration for sift.
/// This is parsed from the toml sift configuration file.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// The feed document to filter.
    pub input: Option<PathBuf>,
    /// Where to write the filtered feed.
    pub output: Option<PathBuf>,
    /// The category label entries must carry.
    pub category: Option<Category>,
    /// Log file.
    pub log: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            category: None,
            log: None,
        }
    }
}

impl Config {
    /// Resolve a filter job from the cli arguments and this config.
    /// Command-line values win over config values.
    pub fn job(&self, cli: &Cli) -> Result<Job> {
        let input: PathBuf = match cli.input.as_ref().or(self.input.as_ref())
        {
            Some(path) => path.resolve().into(),
            None => bail!("No input feed given (argument or config)."),
        };
        let output: PathBuf =
            match cli.output.as_ref().or(self.output.as_ref()) {
                Some(path) => path.resolve().into(),
                None => bail!("No output path given (argument or config)."),
            };
        let category = match &cli.category {
            Some(category) => Category::new(category.clone()),
            None => match &self.category {
                Some(category) => category.clone(),
                None => bail!("No category given (argument or config)."),
            },
        };
        if AsRef::<str>::as_ref(&category).is_empty() {
            bail!("Category must not be empty.");
        }
        Ok(Job {
            input,
            output,
            category,
        })
    }
}

/// A resolved filter run.
#[derive(Clone, Debug)]
pub struct Job {
    /// The feed document to filter.
    pub input: PathBuf,
    /// Where to write the filtered feed.
    pub output: PathBuf,
    /// Entries must carry this category label.
    pub category: Category,
}
