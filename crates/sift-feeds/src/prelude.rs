use super::*;

pub use category::*;
pub use document::*;
pub use entry::*;
pub use error::*;
pub use filter::*;

pub(crate) mod internal {
    pub use std::path::{Path, PathBuf};
    pub use std::sync::Arc;

    pub use serde::{Deserialize, Serialize};
}
