use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::enrichment::EnrichmentConfig;
use self::tracker::TrackerConfig;

pub mod dictionary;
pub mod enrichment;
pub mod tracker;

fn default_project_name() -> String {
    "Lightning Dictionary".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Shown in report titles
    #[serde(default = "default_project_name")]
    pub project_name: String,
    /// Every relative path below resolves against this directory
    #[serde(skip)]
    pub root: PathBuf,
    pub dictionary: DictionaryConfig,
    pub enrichment: EnrichmentConfig,
    pub tracker: TrackerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
            root: PathBuf::from("."),
            dictionary: DictionaryConfig::default(),
            enrichment: EnrichmentConfig::default(),
            tracker: TrackerConfig::default(),
        }
    }
}

impl Config {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn enhanced_path(&self) -> PathBuf {
        self.dictionary
            .output_dir(&self.root)
            .join(&self.enrichment.enhanced_file)
    }
}
