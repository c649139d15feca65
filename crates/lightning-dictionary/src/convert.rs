use std::path::Path;

use indexmap::IndexMap;
use lightning_core::fs::{size_mb, write_json_minified, write_json_pretty};
use lightning_core::preprocess::normalize_word;
use lightning_core::types::{DOCUMENT_VERSION, UNKNOWN_POS};
use lightning_core::{DictionaryDocument, Metadata, Statistics, StoreError, WordRecord};

use crate::error::RowError;
use crate::types::{Cell, SheetRow};

const DESCRIPTION: &str = "Lightning Dictionary - Core vocabulary data";
const MAX_REPORTED_ERRORS: usize = 5;

/// Turns frequency spreadsheet rows into a [`DictionaryDocument`]
pub struct Converter {
    max_words: usize,
    source_file: String,
}

#[derive(Debug)]
pub struct Conversion {
    pub document: DictionaryDocument,
    pub report: ConversionReport,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConversionReport {
    /// Rows that produced a record, duplicates included
    pub rows_accepted: usize,
    pub errors: usize,
    /// First few row errors, in row order
    pub error_samples: Vec<String>,
}

impl Converter {
    pub fn new(max_words: usize, source_file: impl Into<String>) -> Self {
        Self {
            max_words,
            source_file: source_file.into(),
        }
    }

    pub fn convert<I>(&self, rows: I) -> Conversion
    where
        I: IntoIterator<Item = SheetRow>,
    {
        let mut words: IndexMap<String, WordRecord> = IndexMap::new();
        let mut report = ConversionReport::default();

        for row in rows {
            if words.len() >= self.max_words {
                break;
            }

            if row.is_empty() {
                continue;
            }

            match parse_row(&row, report.rows_accepted + 1) {
                Ok(Some((word, record))) => {
                    // last row wins, position of the first occurrence is kept
                    words.insert(word, record);
                    report.rows_accepted += 1;

                    if report.rows_accepted % 1000 == 0 {
                        tracing::info!("Processed {} words...", report.rows_accepted);
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    report.errors += 1;
                    if report.errors <= MAX_REPORTED_ERRORS {
                        tracing::warn!("{}", e);
                        report.error_samples.push(e.to_string());
                    }
                }
            }
        }

        tracing::info!(
            "Processing complete: {} words, {} errors",
            words.len(),
            report.errors
        );

        let statistics = compute_statistics(&words);
        let document = DictionaryDocument {
            version: DOCUMENT_VERSION.to_string(),
            metadata: Metadata {
                total_words: words.len(),
                source_file: self.source_file.clone(),
                generated_date: chrono::Local::now()
                    .format("%Y-%m-%dT%H:%M:%S")
                    .to_string(),
                description: DESCRIPTION.to_string(),
                enhanced: None,
                enhancement_version: None,
                enhancement_stats: None,
                extra: Default::default(),
            },
            statistics,
            words,
        };

        Conversion { document, report }
    }
}

/// `Ok(None)` for rows without a usable word
fn parse_row(row: &SheetRow, position: usize) -> Result<Option<(String, WordRecord)>, RowError> {
    let word_cell = row.cell(SheetRow::WORD);
    if word_cell.is_blank() {
        return Ok(None);
    }

    let word = normalize_word(&word_cell.to_text());
    if word.is_empty() {
        return Ok(None);
    }

    let rank = match row.cell(SheetRow::RANK) {
        cell if cell.is_blank() => position as i64,
        cell => integer(cell, row.number, "rank")?,
    };
    let rank = u32::try_from(rank).map_err(|_| RowError::OutOfRange {
        row: row.number,
        column: "rank",
        value: rank,
    })?;

    let part_of_speech = match row.cell(SheetRow::POS) {
        cell if cell.is_blank() => UNKNOWN_POS.to_string(),
        cell => cell.to_text().trim().to_string(),
    };

    let frequency = match row.cell(SheetRow::FREQUENCY) {
        cell if cell.is_blank() => 0,
        cell => integer(cell, row.number, "frequency")?,
    };
    let frequency = u64::try_from(frequency).map_err(|_| RowError::OutOfRange {
        row: row.number,
        column: "frequency",
        value: frequency,
    })?;

    Ok(Some((word, WordRecord::new(rank, part_of_speech, frequency))))
}

fn integer(cell: &Cell, row: usize, column: &'static str) -> Result<i64, RowError> {
    cell.to_integer().ok_or_else(|| RowError::NotANumber {
        row,
        column,
        value: cell.to_text(),
    })
}

/// Per-pos counts and rank buckets over the final word set
pub fn compute_statistics(words: &IndexMap<String, WordRecord>) -> Statistics {
    let mut statistics = Statistics::default();

    for record in words.values() {
        *statistics
            .parts_of_speech
            .entry(record.part_of_speech.clone())
            .or_insert(0) += 1;
        statistics.frequency_ranges.record(record.rank);
    }

    statistics
}

/// Indented copy first; if that fails the minified copy is never attempted
pub fn write_outputs(
    document: &DictionaryDocument,
    pretty_path: &Path,
    minified_path: &Path,
) -> Result<(), StoreError> {
    let pretty_size = write_json_pretty(pretty_path, document)?;
    tracing::info!(
        "Development version saved: {} ({:.2} MB)",
        pretty_path.display(),
        size_mb(pretty_size)
    );

    let min_size = write_json_minified(minified_path, document)?;
    tracing::info!(
        "Production version saved: {} ({:.2} MB, saved {:.2} MB)",
        minified_path.display(),
        size_mb(min_size),
        size_mb(pretty_size.saturating_sub(min_size))
    );

    Ok(())
}

/// Log the distribution summary shown after a conversion run
pub fn summarize(document: &DictionaryDocument) {
    tracing::info!("Total words: {}", document.metadata.total_words);

    let mut pos: Vec<_> = document.statistics.parts_of_speech.iter().collect();
    pos.sort_by(|a, b| b.1.cmp(a.1));
    for (tag, count) in pos.into_iter().take(5) {
        tracing::info!("  {}: {} words", tag, count);
    }

    for (bucket, count) in document.statistics.frequency_ranges.iter() {
        tracing::info!("  {}: {} words", bucket, count);
    }

    let mut sample: Vec<_> = document.words.iter().collect();
    sample.sort_by_key(|(_, record)| record.rank);
    for (word, record) in sample.into_iter().take(10) {
        tracing::info!(
            "  #{}: {} ({}) - freq: {}",
            record.rank,
            word,
            record.part_of_speech,
            record.frequency
        );
    }
}
