use indexmap::IndexMap;
use lightning_core::{DictionaryDocument, Metadata, Statistics, WordRecord};

use super::*;
use crate::chance::RandomChance;

/// Replays the same draw for every roll and pick
struct Scripted {
    roll: f64,
    pick: usize,
}

impl Chance for Scripted {
    fn roll(&mut self) -> f64 {
        self.roll
    }

    fn pick(&mut self, len: usize) -> usize {
        self.pick.min(len - 1)
    }
}

fn lucky() -> Scripted {
    Scripted { roll: 0.99, pick: 0 }
}

fn unlucky() -> Scripted {
    Scripted { roll: 0.0, pick: 0 }
}

fn document(words: &[(&str, &str, u64)]) -> DictionaryDocument {
    let words: IndexMap<String, WordRecord> = words
        .iter()
        .enumerate()
        .map(|(i, (word, pos, frequency))| {
            (word.to_string(), WordRecord::new(i as u32 + 1, *pos, *frequency))
        })
        .collect();

    DictionaryDocument {
        version: "1.0".to_string(),
        metadata: Metadata {
            total_words: words.len(),
            source_file: "data/wordFrequency.xlsx".to_string(),
            generated_date: String::new(),
            description: String::new(),
            enhanced: None,
            enhancement_version: None,
            enhancement_stats: None,
            extra: Default::default(),
        },
        statistics: Statistics::default(),
        words,
    }
}

#[test]
fn good_gets_synonyms_antonyms_and_informal_register() {
    let mut enricher = Enricher::new(unlucky());
    let mut record = WordRecord::new(115, "n", 600_000);

    enricher.enrich_record("good", &mut record);

    assert_eq!(record.synonyms.as_deref().unwrap(), ["excellent", "fine", "great"]);
    assert_eq!(record.antonyms.as_deref().unwrap(), ["bad", "poor"]);
    assert_eq!(record.usage.as_deref(), Some("informal"));
    assert_eq!(record.usage_notes, None);
    assert_eq!(
        record.examples,
        ["'Good' is one of the most common words in English."]
    );
    assert_eq!(record.source.as_deref(), Some(SOURCE_ATTRIBUTION));
    assert_eq!(record.definitions, ["Definition of good (n)"]);
}

#[test]
fn lucky_draws_add_pos_sentence_and_note() {
    let mut enricher = Enricher::new(lucky());
    let mut record = WordRecord::new(9000, "j", 4_000);

    enricher.enrich_record("tidy", &mut record);

    assert_eq!(record.examples, ["It was a very tidy situation."]);
    assert_eq!(record.usage.as_deref(), Some("technical"));
    assert_eq!(
        record.usage_notes.as_deref(),
        Some("Specialized term used in technical or scientific contexts.")
    );
    assert!(record.synonyms.is_none());
    assert!(record.antonyms.is_none());
}

#[test]
fn mid_frequency_words_get_no_register() {
    let mut enricher = Enricher::new(lucky());
    let mut record = WordRecord::new(3000, "n/a", 50_000);

    enricher.enrich_record("whereas", &mut record);

    assert!(record.usage.is_none());
    assert!(record.usage_notes.is_none());
    assert!(record.examples.is_empty());
}

#[test]
fn existing_definitions_and_notes_are_kept() {
    let mut enricher = Enricher::new(lucky());
    let mut record = WordRecord::new(1, "v", 2_000_000);
    record.definitions = vec!["to move swiftly on foot".to_string()];
    record.usage_notes = Some("hand written".to_string());
    record.examples = vec!["Run!".to_string()];

    enricher.enrich_record("run", &mut record);

    assert_eq!(record.definitions, ["to move swiftly on foot"]);
    assert_eq!(record.usage_notes.as_deref(), Some("hand written"));
    assert_eq!(
        record.examples,
        [
            "Run!",
            "'Run' is one of the most common words in English.",
            "They decided to run the project immediately.",
        ]
    );
}

#[test]
fn rerun_keeps_deterministic_fields_stable() {
    let mut doc = document(&[
        ("good", "j", 900_000),
        ("unhappy", "j", 8_000),
        ("badly", "r", 20_000),
    ]);

    Enricher::new(RandomChance::from_thread()).enrich_document(&mut doc, None);
    let first = doc.clone();
    Enricher::new(RandomChance::from_thread()).enrich_document(&mut doc, None);

    for (word, record) in &doc.words {
        let before = &first.words[word];
        assert_eq!(record.synonyms, before.synonyms, "{word}");
        assert_eq!(record.antonyms, before.antonyms, "{word}");
        assert_eq!(record.definitions, before.definitions, "{word}");
        assert_eq!(record.source, before.source, "{word}");
    }
    assert_eq!(doc.words["unhappy"].antonyms.as_deref().unwrap(), ["happy"]);
    assert_eq!(doc.words["badly"].synonyms.as_deref().unwrap(), ["poorly", "terribly"]);
}

#[test]
fn document_metadata_records_stats() {
    let mut doc = document(&[
        ("good", "j", 900_000),
        ("table", "n", 50_000),
        ("unhappy", "j", 50_000),
    ]);

    let stats = Enricher::new(unlucky()).enrich_document(&mut doc, None);

    assert_eq!(
        stats,
        EnhancementStats {
            words_enhanced: 3,
            words_with_synonyms: 1,
            words_with_antonyms: 2,
            words_with_examples: 1,
        }
    );
    assert_eq!(doc.metadata.enhanced, Some(true));
    assert_eq!(doc.metadata.enhancement_version.as_deref(), Some("1.0"));
    assert_eq!(doc.metadata.enhancement_stats, Some(stats));
}

#[test]
fn sample_size_limits_processing_to_a_prefix() {
    let mut doc = document(&[("good", "j", 10), ("bad", "j", 10), ("big", "j", 10)]);

    let stats = Enricher::new(unlucky()).enrich_document(&mut doc, Some(2));

    assert_eq!(stats.words_enhanced, 2);
    assert_eq!(doc.words.len(), 3);
    assert!(doc.words["bad"].source.is_some());
    assert!(doc.words["big"].source.is_none());
    assert!(doc.words["big"].synonyms.is_none());
}

#[test]
fn enrich_file_writes_an_enhanced_copy() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("dictionary.json");
    let output = dir.path().join("processed/dictionary_enhanced.json");
    lightning_core::fs::write_json_pretty(&input, &document(&[("start", "v", 300_000)])).unwrap();

    Enricher::new(unlucky())
        .enrich_file(&input, &output, None)
        .unwrap();

    let written: serde_json::Value = lightning_core::fs::read_json(&output).unwrap();
    assert_eq!(written["metadata"]["enhanced"], true);
    assert_eq!(written["metadata"]["enhancement_stats"]["words_with_synonyms"], 1);
    assert_eq!(
        written["words"]["start"]["synonyms"],
        serde_json::json!(["begin", "commence", "initiate"])
    );
    assert_eq!(written["words"]["start"]["usage"], "formal");
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Enricher::new(unlucky()).enrich_file(
        &dir.path().join("missing.json"),
        &dir.path().join("out.json"),
        None,
    );

    assert!(matches!(result, Err(StoreError::FileNotFound(_))));
    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn entries_without_pos_or_frequency_are_enriched_as_nouns() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("dictionary.json");
    let output = dir.path().join("dictionary_enhanced.json");
    let mut value = serde_json::to_value(document(&[("tidy", "j", 4000)])).unwrap();
    value["words"]["tidy"] = serde_json::json!({ "rank": 1 });
    lightning_core::fs::write_json_pretty(&input, &value).unwrap();

    let document = Enricher::new(unlucky())
        .enrich_file(&input, &output, None)
        .unwrap();

    let tidy = &document.words["tidy"];
    assert_eq!(tidy.part_of_speech, "n");
    assert_eq!(tidy.frequency, 0);
    assert_eq!(tidy.definitions, ["Definition of tidy (n)"]);
}
