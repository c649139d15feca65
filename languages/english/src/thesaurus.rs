use std::collections::HashMap;

use crate::pos::PartOfSpeech;

const MAX_SYNONYMS: usize = 3;
const MAX_DERIVED_SYNONYMS: usize = 2;
const MAX_ANTONYMS: usize = 2;

/// Prefixes that usually negate the stem they're attached to
const NEGATING_PREFIXES: [&str; 5] = ["un", "in", "im", "dis", "non"];

/// Static synonym/antonym lookup
pub struct Thesaurus {
    synonyms: HashMap<String, Vec<String>>,
    antonyms: HashMap<String, Vec<String>>,
}

impl Thesaurus {
    /// Create empty thesaurus
    pub fn new() -> Self {
        Self {
            synonyms: HashMap::new(),
            antonyms: HashMap::new(),
        }
    }

    /// Create with the embedded relationships for common words
    pub fn with_defaults() -> Self {
        let synonyms: [(&str, &[&str]); 20] = [
            ("good", &["excellent", "fine", "great", "superb", "positive", "beneficial"]),
            ("bad", &["poor", "terrible", "awful", "negative", "harmful", "detrimental"]),
            ("big", &["large", "huge", "enormous", "vast", "gigantic", "immense"]),
            ("small", &["little", "tiny", "minute", "petite", "diminutive", "compact"]),
            ("fast", &["quick", "rapid", "swift", "speedy", "hasty", "expeditious"]),
            ("slow", &["sluggish", "gradual", "leisurely", "unhurried", "deliberate"]),
            ("happy", &["joyful", "cheerful", "delighted", "pleased", "content", "elated"]),
            ("sad", &["unhappy", "sorrowful", "melancholy", "dejected", "miserable", "gloomy"]),
            ("start", &["begin", "commence", "initiate", "launch", "inaugurate"]),
            ("end", &["finish", "conclude", "terminate", "complete", "finalize"]),
            ("help", &["assist", "aid", "support", "facilitate", "contribute"]),
            ("run", &["sprint", "race", "dash", "jog", "hurry"]),
            ("walk", &["stroll", "amble", "stride", "march", "pace"]),
            ("talk", &["speak", "converse", "chat", "discuss", "communicate"]),
            ("think", &["ponder", "consider", "reflect", "contemplate", "deliberate"]),
            ("make", &["create", "produce", "construct", "build", "form"]),
            ("take", &["grab", "seize", "obtain", "acquire", "receive"]),
            ("give", &["provide", "offer", "present", "donate", "contribute"]),
            ("see", &["observe", "view", "witness", "perceive", "notice"]),
            ("hear", &["listen", "perceive", "detect", "discern"]),
        ];

        let antonyms: [(&str, &[&str]); 20] = [
            ("good", &["bad", "poor", "evil", "harmful"]),
            ("bad", &["good", "excellent", "beneficial"]),
            ("big", &["small", "little", "tiny", "miniature"]),
            ("small", &["big", "large", "huge", "enormous"]),
            ("fast", &["slow", "sluggish", "gradual"]),
            ("slow", &["fast", "quick", "rapid", "swift"]),
            ("happy", &["sad", "unhappy", "miserable", "dejected"]),
            ("sad", &["happy", "joyful", "cheerful", "pleased"]),
            ("start", &["end", "finish", "stop", "conclude"]),
            ("end", &["start", "begin", "commence"]),
            ("up", &["down", "below", "beneath"]),
            ("down", &["up", "above", "over"]),
            ("in", &["out", "outside", "external"]),
            ("out", &["in", "inside", "internal"]),
            ("hot", &["cold", "cool", "freezing"]),
            ("cold", &["hot", "warm", "heated"]),
            ("light", &["dark", "heavy", "dim"]),
            ("dark", &["light", "bright", "illuminated"]),
            ("new", &["old", "ancient", "outdated"]),
            ("old", &["new", "young", "modern"]),
        ];

        let mut thesaurus = Self::new();
        for (word, related) in synonyms {
            thesaurus.insert_synonyms(word, related);
        }
        for (word, related) in antonyms {
            thesaurus.insert_antonyms(word, related);
        }
        thesaurus
    }

    pub fn insert_synonyms(&mut self, word: &str, related: &[&str]) {
        self.synonyms
            .insert(word.to_string(), related.iter().map(|s| s.to_string()).collect());
    }

    pub fn insert_antonyms(&mut self, word: &str, related: &[&str]) {
        self.antonyms
            .insert(word.to_string(), related.iter().map(|s| s.to_string()).collect());
    }

    /// Up to three synonyms. Words missing from the table fall back to
    /// their stem for `-ly` adverbs and `-ed` past-tense verbs.
    pub fn synonyms(&self, word: &str, pos: Option<PartOfSpeech>) -> Vec<String> {
        if let Some(list) = self.synonyms.get(word) {
            return list.iter().take(MAX_SYNONYMS).cloned().collect();
        }

        match pos {
            Some(PartOfSpeech::Adverb) => word
                .strip_suffix("ly")
                .map(|stem| self.derived_synonyms(word, stem, "ly"))
                .unwrap_or_default(),
            Some(PartOfSpeech::Verb) if word.ends_with("ed") => {
                // "used" -> "use", "tried" -> "tri"; "helped" keeps its "e" and misses
                let cut = if word.ends_with("ied") { 2 } else { 1 };
                self.derived_synonyms(word, &word[..word.len() - cut], "ed")
            }
            _ => Vec::new(),
        }
    }

    fn derived_synonyms(&self, word: &str, stem: &str, suffix: &str) -> Vec<String> {
        self.synonyms
            .get(stem)
            .map(|list| {
                list.iter()
                    .take(MAX_DERIVED_SYNONYMS)
                    .map(|s| format!("{s}{suffix}"))
                    .filter(|candidate| candidate != word)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Up to two antonyms, else the stem left after a negating prefix
    pub fn antonyms(&self, word: &str) -> Vec<String> {
        if let Some(list) = self.antonyms.get(word) {
            return list.iter().take(MAX_ANTONYMS).cloned().collect();
        }

        NEGATING_PREFIXES
            .iter()
            .filter_map(|prefix| word.strip_prefix(prefix))
            .find(|stem| stem.chars().count() > 2)
            .map(|stem| vec![stem.to_string()])
            .unwrap_or_default()
    }
}

impl Default for Thesaurus {
    fn default() -> Self {
        Self::with_defaults()
    }
}
