use super::*;

pub use cli::*;
pub use config::*;
pub use logging::*;

pub(crate) mod internal {
    pub use std::path::PathBuf;

    pub use anyhow::{Context, Result, bail};
    pub use clap::Parser;
    pub use resolve_path::PathResolveExt;
    pub use serde::{Deserialize, Serialize};
    pub use sift_feeds::prelude::*;
}
