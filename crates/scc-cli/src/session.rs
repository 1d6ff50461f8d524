//! Comparison session: two uploaded sources and their column selections.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use scc_compare::compare_columns;
use scc_ingest::{IngestError, LoadOptions, SourceTable, guess_id_column, load_source};
use scc_model::{ComparisonReport, ComparisonResult, OutputPaths, Side, SourceRef};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("file {} has not been loaded", .0.index())]
    NotLoaded(Side),

    #[error("Please upload both files and select the smartcard columns")]
    NotReady,
}

#[derive(Debug, Default)]
struct Slot {
    source: Option<SourceTable>,
    column: Option<String>,
}

/// State of one comparison: what has been loaded and which columns are chosen.
///
/// Loading a new file into a side clears that side's column selection.
#[derive(Debug, Default)]
pub struct CompareSession {
    a: Slot,
    b: Slot,
}

/// A finished comparison together with what fed it.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub source_a: SourceRef,
    pub source_b: SourceRef,
    pub result: ComparisonResult,
}

impl Comparison {
    pub fn source(&self, side: Side) -> &SourceRef {
        match side {
            Side::A => &self.source_a,
            Side::B => &self.source_b,
        }
    }

    pub fn report(&self, outputs: OutputPaths) -> ComparisonReport {
        ComparisonReport {
            source_a: self.source_a.clone(),
            source_b: self.source_b.clone(),
            summary: self.result.summary(),
            outputs,
        }
    }
}

impl CompareSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, side: Side) -> &Slot {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    fn slot_mut(&mut self, side: Side) -> &mut Slot {
        match side {
            Side::A => &mut self.a,
            Side::B => &mut self.b,
        }
    }

    /// Loads a file into one side, replacing whatever was there.
    pub fn load(
        &mut self,
        side: Side,
        path: &Path,
        options: &LoadOptions,
    ) -> Result<&SourceTable, SessionError> {
        let table = load_source(path, options)?;
        Ok(self.set_source(side, table))
    }

    /// Puts an already loaded table into one side.
    pub fn set_source(&mut self, side: Side, table: SourceTable) -> &SourceTable {
        let slot = self.slot_mut(side);
        slot.column = None;
        slot.source.insert(table)
    }

    pub fn source(&self, side: Side) -> Option<&SourceTable> {
        self.slot(side).source.as_ref()
    }

    pub fn selected_column(&self, side: Side) -> Option<&str> {
        self.slot(side).column.as_deref()
    }

    /// Chooses the identifier column of one side by name.
    ///
    /// Returns the column's name as stored in the source.
    pub fn select_column(&mut self, side: Side, name: &str) -> Result<String, SessionError> {
        let source = self.source(side).ok_or(SessionError::NotLoaded(side))?;
        let resolved = match source.resolve_column(name) {
            Some(resolved) => resolved.to_string(),
            None => {
                return Err(IngestError::ColumnNotFound {
                    column: name.to_string(),
                    available: source.column_names().into_iter().map(str::to_string).collect(),
                }
                .into());
            }
        };
        debug!(side = side.index(), column = %resolved, "column selected");
        self.slot_mut(side).column = Some(resolved.clone());
        Ok(resolved)
    }

    /// Picks the identifier column of one side by name guessing.
    ///
    /// Returns `None` when the side is not loaded or has no columns.
    pub fn auto_select(&mut self, side: Side, keyword: &str) -> Option<String> {
        let guessed = {
            let source = self.source(side)?;
            let names = source.column_names();
            guess_id_column(&names, keyword)?.to_string()
        };
        debug!(side = side.index(), column = %guessed, "column guessed");
        self.slot_mut(side).column = Some(guessed.clone());
        Some(guessed)
    }

    /// True when both sides have a source and a selected column.
    pub fn is_ready(&self) -> bool {
        [Side::A, Side::B].into_iter().all(|side| {
            let slot = self.slot(side);
            slot.source.is_some() && slot.column.is_some()
        })
    }

    /// Compares the selected columns.
    pub fn run(&self) -> Result<Comparison, SessionError> {
        let (source_a, values_a) = self.selected(Side::A)?;
        let (source_b, values_b) = self.selected(Side::B)?;

        let result = compare_columns(values_a, values_b);
        let summary = result.summary();
        info!(
            distinct_a = summary.distinct_a,
            distinct_b = summary.distinct_b,
            shared = summary.shared,
            total_unique = summary.total_unique,
            "comparison complete"
        );

        Ok(Comparison {
            source_a,
            source_b,
            result,
        })
    }

    fn selected(&self, side: Side) -> Result<(SourceRef, &scc_model::RawColumn), SessionError> {
        let slot = self.slot(side);
        let (Some(source), Some(column)) = (slot.source.as_ref(), slot.column.as_deref()) else {
            return Err(SessionError::NotReady);
        };
        let values = source.column(column)?;
        let source_ref = SourceRef {
            label: source.name.clone(),
            column: column.to_string(),
        };
        Ok((source_ref, values))
    }
}
