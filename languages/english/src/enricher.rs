use std::path::Path;

use lightning_core::fs::{read_json, size_mb, write_json_pretty};
use lightning_core::{DictionaryDocument, EnhancementStats, StoreError, WordRecord};

use crate::chance::Chance;
use crate::pos::PartOfSpeech;
use crate::register::UsageRegister;
use crate::templates::generate_examples;
use crate::thesaurus::Thesaurus;

pub const SOURCE_ATTRIBUTION: &str = "Lightning Dictionary Enhanced Data v1.0";
pub const ENHANCEMENT_VERSION: &str = "1.0";

/// Notes are attached for roughly 30% of records that get a register
const USAGE_NOTE_ABOVE: f64 = 0.7;

const SAMPLE_WORDS: [&str; 5] = ["good", "run", "example", "start", "happy"];

/// Adds synonyms, antonyms, examples and a usage register to dictionary records
pub struct Enricher<C> {
    thesaurus: Thesaurus,
    chance: C,
}

impl<C: Chance> Enricher<C> {
    pub fn new(chance: C) -> Self {
        Self::with_thesaurus(Thesaurus::with_defaults(), chance)
    }

    pub fn with_thesaurus(thesaurus: Thesaurus, chance: C) -> Self {
        Self { thesaurus, chance }
    }

    /// Enrich a single record in place
    pub fn enrich_record(&mut self, word: &str, record: &mut WordRecord) {
        let pos = PartOfSpeech::from_tag(&record.part_of_speech);

        let synonyms = self.thesaurus.synonyms(word, pos);
        if !synonyms.is_empty() {
            record.synonyms = Some(synonyms);
        }

        let antonyms = self.thesaurus.antonyms(word);
        if !antonyms.is_empty() {
            record.antonyms = Some(antonyms);
        }

        for example in generate_examples(word, pos, record.frequency, &mut self.chance) {
            if !record.examples.contains(&example) {
                record.examples.push(example);
            }
        }

        if let Some(register) = UsageRegister::classify(record.frequency, &mut self.chance) {
            record.usage = Some(register.as_str().to_string());
            if self.chance.roll() > USAGE_NOTE_ABOVE {
                let note = register.pick_note(&mut self.chance);
                if record.usage_notes.is_none() {
                    record.usage_notes = Some(note.to_string());
                }
            }
        }

        record.source = Some(SOURCE_ATTRIBUTION.to_string());

        if record.definitions.is_empty() {
            let placeholder = format!("Definition of {} ({})", word, record.part_of_speech);
            record.definitions = vec![placeholder];
        }
    }

    /// Enrich every record, or only the first `sample_size` of them.
    /// Records past the sample are carried through untouched.
    pub fn enrich_document(
        &mut self,
        document: &mut DictionaryDocument,
        sample_size: Option<usize>,
    ) -> EnhancementStats {
        let total = document.word_count();
        let limit = match sample_size {
            Some(n) if n > 0 && n < total => {
                tracing::info!("Processing sample of {} words", n);
                n
            }
            _ => total,
        };

        let mut stats = EnhancementStats::default();

        for (word, record) in document.words.iter_mut().take(limit) {
            self.enrich_record(word, record);

            stats.words_enhanced += 1;
            if record.has_synonyms() {
                stats.words_with_synonyms += 1;
            }
            if record.has_antonyms() {
                stats.words_with_antonyms += 1;
            }
            if !record.examples.is_empty() {
                stats.words_with_examples += 1;
            }

            if stats.words_enhanced % 1000 == 0 {
                tracing::info!("Processed {} words...", stats.words_enhanced);
            }
        }

        document.metadata.enhanced = Some(true);
        document.metadata.enhancement_version = Some(ENHANCEMENT_VERSION.to_string());
        document.metadata.enhancement_stats = Some(stats);

        stats
    }

    /// Load `input`, enrich it and write the indented result to `output`
    pub fn enrich_file(
        &mut self,
        input: &Path,
        output: &Path,
        sample_size: Option<usize>,
    ) -> Result<DictionaryDocument, StoreError> {
        tracing::info!("Loading dictionary from: {}", input.display());
        let mut document: DictionaryDocument = read_json(input)?;
        tracing::info!("Loaded {} words", document.word_count());

        let stats = self.enrich_document(&mut document, sample_size);

        let size = write_json_pretty(output, &document)?;
        tracing::info!(
            "Enhanced dictionary saved: {} ({:.2} MB)",
            output.display(),
            size_mb(size)
        );

        log_stats(&stats);
        Ok(document)
    }
}

fn log_stats(stats: &EnhancementStats) {
    let percent = |count: usize| {
        if stats.words_enhanced == 0 {
            0.0
        } else {
            count as f64 / stats.words_enhanced as f64 * 100.0
        }
    };

    tracing::info!("Total words processed: {}", stats.words_enhanced);
    tracing::info!(
        "Words with synonyms: {} ({:.1}%)",
        stats.words_with_synonyms,
        percent(stats.words_with_synonyms)
    );
    tracing::info!(
        "Words with antonyms: {} ({:.1}%)",
        stats.words_with_antonyms,
        percent(stats.words_with_antonyms)
    );
    tracing::info!(
        "Words with examples: {} ({:.1}%)",
        stats.words_with_examples,
        percent(stats.words_with_examples)
    );
}

/// Log the enrichment fields of a few well-known words
pub fn verify_sample(document: &DictionaryDocument) {
    for word in SAMPLE_WORDS {
        let Some(record) = document.words.get(word) else {
            continue;
        };

        tracing::info!(
            "{}: pos={} synonyms={:?} antonyms={:?} examples={} usage={}",
            word,
            record.part_of_speech,
            record.synonyms.as_deref().unwrap_or_default(),
            record.antonyms.as_deref().unwrap_or_default(),
            record.examples.len(),
            record.usage.as_deref().unwrap_or("N/A")
        );
    }
}

#[cfg(test)]
mod tests;
