//! Final `(outcome, percentage)` listing of an evaluated expression.

use crate::common::Int;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Row {
    pub outcome: Int,
    /// Chance of `outcome`, between 0 and 100.
    pub percentage: f64,
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.outcome, self.percentage)
    }
}

/// Rows sorted ascending by outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: impl IntoIterator<Item = Row>) -> Self {
        let mut rows: Vec<_> = rows.into_iter().collect();
        rows.sort_by_key(|row| row.outcome);
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn percentage(&self, outcome: Int) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.outcome == outcome)
            .map(|row| row.percentage)
    }

    pub fn total(&self) -> f64 {
        self.rows.iter().map(|row| row.percentage).sum()
    }
}

impl FromIterator<(Int, f64)> for Table {
    fn from_iter<I: IntoIterator<Item = (Int, f64)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(outcome, percentage)| Row { outcome, percentage }),
        )
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_sorted() {
        let table: Table = [(3, 25.0), (-1, 50.0), (2, 25.0)].into_iter().collect();
        let outcomes: Vec<_> = table.rows().iter().map(|row| row.outcome).collect();
        assert_eq!(outcomes, vec![-1, 2, 3]);
        assert_eq!(table.percentage(-1), Some(50.0));
        assert_eq!(table.percentage(0), None);
        assert_eq!(table.total(), 100.0);
    }

    #[test]
    fn test_display() {
        let table: Table = [(7, 100.0 / 6.0), (2, 100.0 / 36.0)].into_iter().collect();
        assert_eq!(table.to_string(), "2 2.78\n7 16.67\n");
        assert_eq!(Table::default().to_string(), "");
    }
}
