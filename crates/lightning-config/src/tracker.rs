use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

fn default_docs_dir() -> String {
    "docs".to_string()
}

fn default_log_file() -> String {
    "implementation_log.json".to_string()
}

fn default_handoff_dir() -> String {
    "handoffs".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TrackerConfig {
    /// Holds the log, generated plans and handoffs
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    /// Relative to `docs_dir`
    #[serde(default = "default_handoff_dir")]
    pub handoff_dir: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            docs_dir: default_docs_dir(),
            log_file: default_log_file(),
            handoff_dir: default_handoff_dir(),
        }
    }
}

impl TrackerConfig {
    pub fn docs_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.docs_dir)
    }

    pub fn log_path(&self, root: &Path) -> PathBuf {
        self.docs_dir(root).join(&self.log_file)
    }

    pub fn handoff_dir(&self, root: &Path) -> PathBuf {
        self.docs_dir(root).join(&self.handoff_dir)
    }
}
