//! Per-session state: the four loaded survey tables and the
//! selection-driven recomputation entry point.

use std::fs::File;
use std::path::Path;

use chrono::Utc;
use tracing::info;

use crate::analyzers::frequency::symptom_frequency;
use crate::analyzers::hospitalization::hospitalization_by_age;
use crate::analyzers::income::income_by_fever;
use crate::analyzers::types::AnalysisReport;
use crate::error::{AnalysisError, Result};
use crate::filter::filter_by_selection;
use crate::parser::parse_table;
use crate::schema::{COL_PERIOD, COL_REGION};
use crate::table::{Table, Value};

/// Everything one analysis session holds: the four extracts, loaded once,
/// recomputed against on every selection change. The behavior extract is
/// carried for its consumers in the rendering layer; no aggregator here
/// reads it.
pub struct Session {
    pub population: Table,
    pub symptoms: Table,
    pub behavior: Table,
    pub economic: Table,
}

impl Session {
    pub fn from_tables(population: Table, symptoms: Table, behavior: Table, economic: Table) -> Self {
        Self {
            population,
            symptoms,
            behavior,
            economic,
        }
    }

    /// Loads the four extracts from CSV files.
    ///
    /// # Errors
    ///
    /// Fails if any file cannot be opened or is not well-formed CSV; either
    /// failure aborts the whole session's analysis.
    pub fn load(
        population: &Path,
        symptoms: &Path,
        behavior: &Path,
        economic: &Path,
    ) -> Result<Self> {
        Ok(Self {
            population: load_table("populacao", population)?,
            symptoms: load_table("sintomas", symptoms)?,
            behavior: load_table("comportamento", behavior)?,
            economic: load_table("economia", economic)?,
        })
    }

    /// Months available for selection: sorted distinct values observed in
    /// the symptoms extract.
    pub fn periods(&self) -> Result<Vec<Value>> {
        self.symptoms.distinct_sorted(COL_PERIOD)
    }

    /// States available for selection: sorted distinct values observed in
    /// the population extract.
    pub fn regions(&self) -> Result<Vec<Value>> {
        self.population.distinct_sorted(COL_REGION)
    }

    /// Recomputes the three summary tables for one month/state selection.
    ///
    /// Reads only `&self` and returns a fresh report, so repeating a
    /// selection yields identical summaries without accumulating state.
    pub fn analyze(&self, period: &Value, region: &Value) -> Result<AnalysisReport> {
        let filtered = filter_by_selection(&self.symptoms, period, region)?;

        Ok(AnalysisReport {
            generated_at: Utc::now(),
            period: period.clone(),
            region: region.clone(),
            symptom_frequency: symptom_frequency(&filtered)?,
            hospitalization_by_age: hospitalization_by_age(
                &self.population,
                &self.symptoms,
                region,
            )?,
            income_by_fever: income_by_fever(&self.symptoms, &self.economic, region)?,
        })
    }
}

/// Finds the observed selection value whose textual form matches `raw`.
pub fn resolve_selection(available: &[Value], raw: &str) -> Option<Value> {
    available.iter().find(|v| v.to_string() == raw).cloned()
}

fn load_table(name: &str, path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|source| AnalysisError::Io {
        table: name.to_string(),
        source,
    })?;
    let table = parse_table(name, file)?;
    info!(
        table = name,
        rows = table.len(),
        columns = table.headers().len(),
        "Extract loaded"
    );
    Ok(table)
}
