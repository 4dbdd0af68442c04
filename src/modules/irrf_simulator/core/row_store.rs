// Ordered, in-memory collection of batch rows.
//
// Invariants
// - Never empty: starts with one blank row and refuses to remove the last one.
// - Ids are unique; a new row takes the current maximum id plus one.

use crate::modules::irrf_simulator::core::row::{Row, RowId, RowOutcome};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

pub type SharedRowStore = Arc<RwLock<RowStore>>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowStoreError {
    #[error("row {0} not found")]
    NotFound(RowId),
}

/// Operator-editable text fields of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Identifier,
    Name,
    GrossSalary,
    Dependents,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub applied: usize,
    pub dropped: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowStore {
    rows: Vec<Row>,
}

impl Default for RowStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RowStore {
    pub fn new() -> Self {
        Self {
            rows: vec![Row::blank(1)],
        }
    }

    pub fn shared() -> SharedRowStore {
        Arc::new(RwLock::new(Self::new()))
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

    pub fn ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|row| row.id).collect()
    }

    pub fn get(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn add_row(&mut self) -> RowId {
        let id = self.rows.iter().map(|row| row.id).max().map_or(1, |max| max + 1);
        self.rows.push(Row::blank(id));
        id
    }

    /// Returns whether a row was removed. The last remaining row is kept.
    pub fn remove_row(&mut self, id: RowId) -> bool {
        if self.rows.len() <= 1 {
            return false;
        }
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() != before
    }

    pub fn update_row(
        &mut self,
        id: RowId,
        field: RowField,
        value: impl Into<String>,
    ) -> Result<(), RowStoreError> {
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(RowStoreError::NotFound(id))?;
        let value = value.into();
        match field {
            RowField::Identifier => row.identifier = value,
            RowField::Name => row.name = value,
            RowField::GrossSalary => row.gross_salary = value,
            RowField::Dependents => row.dependents = value,
        }
        Ok(())
    }

    /// Apply batch outcomes in one pass. Outcomes for ids no longer present are dropped.
    pub fn merge_outcomes(
        &mut self,
        outcomes: impl IntoIterator<Item = (RowId, RowOutcome)>,
    ) -> MergeReport {
        let mut report = MergeReport::default();
        for (id, outcome) in outcomes {
            match self.rows.iter_mut().find(|row| row.id == id) {
                Some(row) => {
                    row.apply(outcome);
                    report.applied += 1;
                }
                None => report.dropped += 1,
            }
        }
        report
    }
}
