use std::iter;
use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};

use crate::error::ConvertError;
use crate::types::{Cell, SheetRow};

pub struct XlsxLoader;

impl XlsxLoader {
    /// Read every data row of `sheet_name` (first sheet when absent), header row skipped
    pub fn load(path: &Path, sheet_name: &str) -> Result<Vec<SheetRow>, ConvertError> {
        if !path.exists() {
            return Err(ConvertError::SpreadsheetNotFound(path.to_path_buf()));
        }

        tracing::info!("Loading workbook: {}", path.display());
        let mut workbook = open_workbook_auto(path)?;

        let names = workbook.sheet_names();
        tracing::debug!("Available sheets: {:?}", names);

        let chosen = if names.iter().any(|n| n == sheet_name) {
            tracing::info!("Using sheet: '{}'", sheet_name);
            sheet_name.to_string()
        } else {
            let first = names.first().cloned().ok_or(ConvertError::NoWorksheet)?;
            tracing::warn!("Sheet '{}' not found, using: '{}'", sheet_name, first);
            first
        };

        let range = workbook.worksheet_range(&chosen)?;
        let rows = sheet_rows(&range);

        tracing::info!("Read {} data rows from '{}'", rows.len(), chosen);
        Ok(rows)
    }
}

/// Rows below the header, with cells at their absolute column positions.
/// The range starts at the first used cell, so leading blank columns are padded back.
fn sheet_rows(range: &Range<Data>) -> Vec<SheetRow> {
    let (first_row, first_col) = range
        .start()
        .map(|(row, col)| (row as usize, col as usize))
        .unwrap_or((0, 0));

    range
        .rows()
        .enumerate()
        .map(|(i, cells)| {
            let cells = iter::repeat_with(|| Cell::Empty)
                .take(first_col)
                .chain(cells.iter().map(Cell::from))
                .collect();
            SheetRow::new(first_row + i + 1, cells)
        })
        .filter(|row| row.number > 1)
        .collect()
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Int(i) => Cell::Int(*i),
            Data::Float(f) => Cell::Float(*f),
            Data::String(s) => Cell::Text(s.clone()),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::DateTime(dt) => Cell::Float(dt.as_f64()),
            Data::Error(_) | Data::Empty => Cell::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_workbook_is_a_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = XlsxLoader::load(&dir.path().join("wordFrequency.xlsx"), "1 lemmas");
        assert!(matches!(result, Err(ConvertError::SpreadsheetNotFound(_))));
    }

    #[test]
    fn cells_convert_from_workbook_data() {
        assert_eq!(Cell::from(&Data::Int(3)), Cell::Int(3));
        assert_eq!(
            Cell::from(&Data::String("the".into())),
            Cell::Text("the".into())
        );
        assert_eq!(Cell::from(&Data::Empty), Cell::Empty);
    }

    #[test]
    fn leading_blank_columns_are_padded() {
        let mut range = Range::new((0, 1), (1, 3));
        range.set_value((0, 1), Data::String("lemma".into()));
        range.set_value((1, 1), Data::String("the".into()));
        range.set_value((1, 2), Data::String("a".into()));
        range.set_value((1, 3), Data::Float(5_000_000.0));

        let rows = sheet_rows(&range);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].number, 2);
        assert_eq!(rows[0].cell(SheetRow::RANK), &Cell::Empty);
        assert_eq!(rows[0].cell(SheetRow::WORD), &Cell::Text("the".into()));
        assert_eq!(rows[0].cell(SheetRow::FREQUENCY), &Cell::Float(5_000_000.0));
    }
}
