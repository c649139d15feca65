/// A single spreadsheet cell, already detached from the workbook reader
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl Cell {
    /// Blank, zero or false cells count as missing and fall back to defaults
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Int(i) => *i == 0,
            Cell::Float(f) => *f == 0.0,
            Cell::Text(s) => s.is_empty(),
            Cell::Bool(b) => !b,
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) if f.fract() == 0.0 && f.is_finite() => format!("{f:.1}"),
            Cell::Float(f) => f.to_string(),
            Cell::Text(s) => s.clone(),
            Cell::Bool(b) => b.to_string(),
        }
    }

    /// Integer coercion: floats truncate, text must parse as a whole number
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            Cell::Empty => None,
            Cell::Int(i) => Some(*i),
            Cell::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            Cell::Float(_) => None,
            Cell::Text(s) => s.trim().parse().ok(),
            Cell::Bool(b) => Some(i64::from(*b)),
        }
    }
}

/// One data row; columns are rank, word, part of speech, frequency
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    /// 1-based row number in the sheet, used in error messages
    pub number: usize,
    pub cells: Vec<Cell>,
}

impl SheetRow {
    pub const RANK: usize = 0;
    pub const WORD: usize = 1;
    pub const POS: usize = 2;
    pub const FREQUENCY: usize = 3;

    pub fn new(number: usize, cells: Vec<Cell>) -> Self {
        Self { number, cells }
    }

    pub fn cell(&self, column: usize) -> &Cell {
        self.cells.get(column).unwrap_or(&Cell::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_blank)
    }
}
