//! Date-indexed panel of named macro series.

use crate::error::{PrepError, Result};
use crate::names::NameMapper;
use crate::transform::{DifferencePolicy, TransformConfig, TransformTable};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::fmt;

/// Decimal places used when displaying a frame.
pub const DISPLAY_DECIMALS: usize = 3;

/// A panel of series sharing one date index.
///
/// Columns keep their insertion order. Every column has exactly one value per
/// index entry; missing observations are NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct MacroFrame {
    index: Vec<DateTime<Utc>>,
    labels: Vec<String>,
    columns: Vec<Vec<f64>>,
}

/// Builder for constructing a [`MacroFrame`] column by column.
#[derive(Debug, Clone, Default)]
pub struct MacroFrameBuilder {
    index: Vec<DateTime<Utc>>,
    columns: Vec<(String, Vec<f64>)>,
}

impl MacroFrameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(mut self, index: Vec<DateTime<Utc>>) -> Self {
        self.index = index;
        self
    }

    pub fn column(mut self, label: impl Into<String>, values: Vec<f64>) -> Self {
        self.columns.push((label.into(), values));
        self
    }

    pub fn build(self) -> Result<MacroFrame> {
        MacroFrame::new(self.index, self.columns)
    }
}

impl MacroFrame {
    /// Create a frame from an index and labelled columns.
    ///
    /// # Errors
    /// - [`PrepError::TimestampError`] if the index is not strictly increasing
    /// - [`PrepError::DimensionMismatch`] if a column length differs from the index
    /// - [`PrepError::DuplicateColumn`] if two columns share a label
    pub fn new(index: Vec<DateTime<Utc>>, columns: Vec<(String, Vec<f64>)>) -> Result<Self> {
        for i in 1..index.len() {
            if index[i] <= index[i - 1] {
                return Err(PrepError::TimestampError(
                    "index must be strictly increasing".to_string(),
                ));
            }
        }

        let mut seen = HashSet::with_capacity(columns.len());
        let mut labels = Vec::with_capacity(columns.len());
        let mut values = Vec::with_capacity(columns.len());

        for (label, column) in columns {
            if column.len() != index.len() {
                return Err(PrepError::DimensionMismatch {
                    expected: index.len(),
                    got: column.len(),
                });
            }
            if !seen.insert(label.clone()) {
                return Err(PrepError::DuplicateColumn(label));
            }
            labels.push(label);
            values.push(column);
        }

        Ok(Self {
            index,
            labels,
            columns: values,
        })
    }

    pub fn builder() -> MacroFrameBuilder {
        MacroFrameBuilder::new()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.labels.len()
    }

    pub fn index(&self) -> &[DateTime<Utc>] {
        &self.index
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Values of a column.
    ///
    /// # Errors
    /// [`PrepError::UnknownSeries`] if no column carries `label`.
    pub fn column(&self, label: &str) -> Result<&[f64]> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.columns[i].as_slice())
            .ok_or_else(|| PrepError::UnknownSeries(label.to_string()))
    }

    /// Iterate over `(label, values)` in column order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.labels
            .iter()
            .zip(self.columns.iter())
            .map(|(l, c)| (l.as_str(), c.as_slice()))
    }

    /// Relabel columns whose label is a known identifier.
    ///
    /// Labels the mapper does not know are kept unchanged.
    ///
    /// # Errors
    /// [`PrepError::DuplicateColumn`] if renaming makes two labels collide.
    pub fn renamed(&self, mapper: &NameMapper) -> Result<MacroFrame> {
        let columns = self
            .columns()
            .map(|(label, values)| {
                let new_label = match mapper.lookup(label) {
                    Ok(name) => name.to_string(),
                    Err(_) => {
                        log::debug!("column '{}' has no mapped name; keeping label", label);
                        label.to_string()
                    }
                };
                (new_label, values.to_vec())
            })
            .collect();

        MacroFrame::new(self.index.clone(), columns)
    }

    /// Apply the table's transform to every column it knows.
    ///
    /// Columns without a table entry are dropped. The differencing transform
    /// is computed with [`DifferencePolicy::FillNan`] so every output column
    /// stays aligned with the index.
    pub fn transformed(
        &self,
        table: &TransformTable,
        config: &TransformConfig,
    ) -> Result<MacroFrame> {
        let aligned = config.with_difference_policy(DifferencePolicy::FillNan);

        let mut columns = Vec::with_capacity(self.width());
        for (label, values) in self.columns() {
            let kind = match table.lookup(label) {
                Ok(kind) => kind,
                Err(_) => {
                    log::debug!("column '{}' has no transform; dropping", label);
                    continue;
                }
            };
            columns.push((label.to_string(), kind.apply(values, &aligned)?));
        }

        MacroFrame::new(self.index.clone(), columns)
    }

    /// Keep only the rows where every column is finite.
    pub fn drop_incomplete_rows(&self) -> MacroFrame {
        let keep: Vec<usize> = (0..self.len())
            .filter(|&row| self.columns.iter().all(|c| c[row].is_finite()))
            .collect();

        let dropped = self.len() - keep.len();
        if dropped > 0 {
            log::debug!("dropping {} incomplete rows of {}", dropped, self.len());
        }

        MacroFrame {
            index: keep.iter().map(|&row| self.index[row]).collect(),
            labels: self.labels.clone(),
            columns: self
                .columns
                .iter()
                .map(|c| keep.iter().map(|&row| c[row]).collect())
                .collect(),
        }
    }

    /// Rows `start..end` of the frame.
    pub fn slice(&self, start: usize, end: usize) -> Result<MacroFrame> {
        if start > end || end > self.len() {
            return Err(PrepError::InvalidParameter(format!(
                "invalid slice {}..{} for frame of length {}",
                start,
                end,
                self.len()
            )));
        }

        Ok(MacroFrame {
            index: self.index[start..end].to_vec(),
            labels: self.labels.clone(),
            columns: self.columns.iter().map(|c| c[start..end].to_vec()).collect(),
        })
    }
}

impl fmt::Display for MacroFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|c| {
                c.iter()
                    .map(|v| format!("{:.*}", DISPLAY_DECIMALS, v))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = self
            .labels
            .iter()
            .zip(cells.iter())
            .map(|(label, col)| {
                col.iter()
                    .map(String::len)
                    .chain(std::iter::once(label.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:<10}", "date")?;
        for (label, width) in self.labels.iter().zip(widths.iter()) {
            write!(f, "  {:>width$}", label, width = width)?;
        }
        writeln!(f)?;

        for (row, date) in self.index.iter().enumerate() {
            write!(f, "{:<10}", date.format("%Y-%m-%d").to_string())?;
            for (col, width) in cells.iter().zip(widths.iter()) {
                write!(f, "  {:>width$}", col[row], width = width)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
