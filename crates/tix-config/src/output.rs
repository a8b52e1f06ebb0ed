//! Output file locations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

fn default_export_path() -> PathBuf {
    PathBuf::from("tickets_export.csv")
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Destination of `tix export`.
    #[serde(default = "default_export_path")]
    pub export_path: PathBuf,

    /// Directory for `tix fetch` files, named `{api_abbr}.csv`.
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            export_path: default_export_path(),
            directory: default_directory(),
        }
    }
}

impl OutputConfig {
    /// Path of the fetch output for an API.
    #[must_use]
    pub fn fetch_path(&self, api_abbr: &str) -> PathBuf {
        self.directory.join(format!("{api_abbr}.csv"))
    }

    #[must_use]
    pub fn export_path(&self) -> &Path {
        &self.export_path
    }
}
