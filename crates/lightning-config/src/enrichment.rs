use serde::{Deserialize, Serialize};

fn default_enhanced_file() -> String {
    "dictionary_enhanced.json".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Written next to the converted dictionary
    #[serde(default = "default_enhanced_file")]
    pub enhanced_file: String,
    /// Only enrich the first N words when set
    #[serde(default)]
    pub sample_size: Option<usize>,
    /// Pins the random draws for reproducible runs
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            enhanced_file: default_enhanced_file(),
            sample_size: None,
            seed: None,
        }
    }
}
