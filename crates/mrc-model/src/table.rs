#![deny(unsafe_code)]

/// A single cell of the record table.
///
/// `Missing` is the explicit missing-value sentinel; numeric predicates over
/// cells (age bounds, negative expenses) must treat it as "comparison is
/// false" rather than relying on NaN propagation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    /// Build a cell from a raw string, mapping empty/whitespace to `Missing`.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            CellValue::Missing
        } else {
            CellValue::Text(trimmed.to_string())
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            CellValue::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

/// An in-memory record table: ordered column names plus rows of cells.
///
/// Each row holds exactly one cell per column, at the matching index. The
/// table is exclusively owned by the pipeline for one run and mutated in
/// place stage by stage.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.columns.len(), CellValue::Missing);
        self.rows.push(row);
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Index of `name`, appending the column (with `Missing` cells in every
    /// row) when it does not exist yet.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(index) = self.column_index(name) {
            return index;
        }
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(CellValue::Missing);
        }
        self.columns.len() - 1
    }

    /// Remove a column and its cells. Returns false when absent.
    pub fn drop_column(&mut self, name: &str) -> bool {
        let Some(index) = self.column_index(name) else {
            return false;
        };
        self.columns.remove(index);
        for row in &mut self.rows {
            row.remove(index);
        }
        true
    }

    /// Rename a column in place. Returns false when absent.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        let Some(index) = self.column_index(from) else {
            return false;
        };
        self.columns[index] = to.to_string();
        true
    }

    pub fn cell(&self, row: usize, column: usize) -> &CellValue {
        &self.rows[row][column]
    }

    pub fn set_cell(&mut self, row: usize, column: usize, value: CellValue) {
        self.rows[row][column] = value;
    }
}
