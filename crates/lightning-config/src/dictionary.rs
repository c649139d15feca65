use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

fn default_spreadsheet() -> String {
    "data/wordFrequency.xlsx".to_string()
}

fn default_sheet_name() -> String {
    "1 lemmas".to_string()
}

fn default_max_words() -> usize {
    10_000
}

fn default_output_dir() -> String {
    "data/processed".to_string()
}

fn default_pretty_file() -> String {
    "dictionary.json".to_string()
}

fn default_minified_file() -> String {
    "dictionary.min.json".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Word frequency workbook, relative to the project root
    #[serde(default = "default_spreadsheet")]
    pub spreadsheet: String,
    /// Worksheet to read, first sheet is used when missing
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
    /// Maximum number of words kept from the spreadsheet
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Indented development copy
    #[serde(default = "default_pretty_file")]
    pub pretty_file: String,
    /// Minified production copy
    #[serde(default = "default_minified_file")]
    pub minified_file: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            spreadsheet: default_spreadsheet(),
            sheet_name: default_sheet_name(),
            max_words: default_max_words(),
            output_dir: default_output_dir(),
            pretty_file: default_pretty_file(),
            minified_file: default_minified_file(),
        }
    }
}

impl DictionaryConfig {
    pub fn spreadsheet_path(&self, root: &Path) -> PathBuf {
        root.join(&self.spreadsheet)
    }

    pub fn output_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir)
    }

    pub fn pretty_path(&self, root: &Path) -> PathBuf {
        self.output_dir(root).join(&self.pretty_file)
    }

    pub fn minified_path(&self, root: &Path) -> PathBuf {
        self.output_dir(root).join(&self.minified_file)
    }
}
