/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Generic tabular presentation over JSON rows.
//!
//! Rows are `serde_json::Value` objects so every list page shares one
//! component. Column paths may be dotted (`agent.name`) and resolve through
//! nested objects; a missing path renders and sorts as empty.

use serde_json::Value;
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct Column {
    pub header: String,
    pub path: String,
}

impl Column {
    pub fn new(header: &str, path: &str) -> Self {
        Column {
            header: header.to_string(),
            path: path.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Value>,
    filter_column: Option<usize>,
    filter: String,
    sort: Option<(usize, SortDirection)>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
            filter_column: None,
            filter: String::new(),
            sort: None,
        }
    }

    /// Designates the one column the text filter applies to.
    pub fn with_filter_column(mut self, index: usize) -> Self {
        self.filter_column = Some(index);
        self
    }

    pub fn set_rows(&mut self, rows: Vec<Value>) {
        self.rows = rows;
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
    }

    /// Sorts by the given column, flipping direction when it is already the
    /// sort column.
    pub fn toggle_sort(&mut self, column: usize) {
        self.sort = match self.sort {
            Some((current, SortDirection::Ascending)) if current == column => {
                Some((column, SortDirection::Descending))
            }
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    pub fn sort_state(&self) -> Option<(usize, SortDirection)> {
        self.sort
    }

    /// The rows after filtering and sorting. The underlying row set is never
    /// reordered.
    pub fn visible_rows(&self) -> Vec<&Value> {
        let mut rows: Vec<&Value> = self
            .rows
            .iter()
            .filter(|row| self.row_passes_filter(row))
            .collect();

        if let Some((column, direction)) = self.sort {
            if let Some(col) = self.columns.get(column) {
                rows.sort_by(|a, b| {
                    let ord = compare_cells(lookup(a, &col.path), lookup(b, &col.path));
                    match direction {
                        SortDirection::Ascending => ord,
                        SortDirection::Descending => ord.reverse(),
                    }
                });
            }
        }
        rows
    }

    fn row_passes_filter(&self, row: &Value) -> bool {
        if self.filter.is_empty() {
            return true;
        }
        let Some(index) = self.filter_column else {
            return true;
        };
        let Some(col) = self.columns.get(index) else {
            return true;
        };
        cell_text(lookup(row, &col.path))
            .to_lowercase()
            .contains(&self.filter.to_lowercase())
    }

    /// Renders a plain-text table for terminal output.
    pub fn render(&self) -> String {
        let rows = self.visible_rows();
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.header.len()).collect();
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .enumerate()
                    .map(|(i, col)| {
                        let text = cell_text(lookup(row, &col.path));
                        widths[i] = widths[i].max(text.len());
                        text
                    })
                    .collect()
            })
            .collect();

        let mut out = String::new();
        for (i, col) in self.columns.iter().enumerate() {
            out.push_str(&format!("{:<width$}  ", col.header, width = widths[i]));
        }
        out.push('\n');
        for row in cells {
            for (i, cell) in row.iter().enumerate() {
                out.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
            }
            out.push('\n');
        }
        out
    }
}

/// Resolves a dotted path through nested objects. Anything missing or
/// non-object along the way yields `None`.
fn lookup<'a>(row: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = row;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Numbers compare numerically; everything else falls back to its text form.
fn compare_cells(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a.and_then(Value::as_f64), b.and_then(Value::as_f64)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => cell_text(a).cmp(&cell_text(b)),
    }
}
