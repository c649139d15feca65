use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DOCUMENT_VERSION: &str = "1.0";
pub const UNKNOWN_POS: &str = "n/a";

/// One vocabulary entry, keyed by its lower-cased word form in [`DictionaryDocument::words`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    pub rank: u32,
    #[serde(rename = "pos", default = "default_pos")]
    pub part_of_speech: String,
    #[serde(default)]
    pub frequency: u64,
    #[serde(default)]
    pub definitions: Vec<String>,
    #[serde(default)]
    pub pronunciation: String,
    #[serde(default)]
    pub examples: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antonyms: Option<Vec<String>>,
    /// Usage register tag (informal, formal, technical, archaic, regional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Keys this crate does not know about, carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_pos() -> String {
    "n".to_string()
}

impl WordRecord {
    pub fn new(rank: u32, part_of_speech: impl Into<String>, frequency: u64) -> Self {
        Self {
            rank,
            part_of_speech: part_of_speech.into(),
            frequency,
            definitions: Vec::new(),
            pronunciation: String::new(),
            examples: Vec::new(),
            synonyms: None,
            antonyms: None,
            usage: None,
            usage_notes: None,
            source: None,
            extra: Map::new(),
        }
    }

    pub fn has_synonyms(&self) -> bool {
        self.synonyms.as_ref().is_some_and(|s| !s.is_empty())
    }

    pub fn has_antonyms(&self) -> bool {
        self.antonyms.as_ref().is_some_and(|a| !a.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryDocument {
    pub version: String,
    pub metadata: Metadata,
    pub statistics: Statistics,
    pub words: IndexMap<String, WordRecord>,
}

impl DictionaryDocument {
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub total_words: usize,
    pub source_file: String,
    #[serde(default)]
    pub generated_date: String,
    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhanced: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhancement_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhancement_stats: Option<EnhancementStats>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancementStats {
    pub words_enhanced: usize,
    pub words_with_synonyms: usize,
    pub words_with_antonyms: usize,
    pub words_with_examples: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub parts_of_speech: IndexMap<String, usize>,
    pub frequency_ranges: FrequencyRanges,
}

/// Rank buckets, inclusive upper bounds checked in declaration order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyRanges {
    pub top_100: usize,
    pub top_1000: usize,
    pub top_5000: usize,
    pub rest: usize,
}

impl FrequencyRanges {
    pub fn record(&mut self, rank: u32) {
        match rank {
            0..=100 => self.top_100 += 1,
            101..=1000 => self.top_1000 += 1,
            1001..=5000 => self.top_5000 += 1,
            _ => self.rest += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.top_100 + self.top_1000 + self.top_5000 + self.rest
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> {
        [
            ("top_100", self.top_100),
            ("top_1000", self.top_1000),
            ("top_5000", self.top_5000),
            ("rest", self.rest),
        ]
        .into_iter()
    }
}
