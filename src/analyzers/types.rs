//! Summary tables produced by the aggregation pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::table::Value;

/// One symptom column and its affirmative answer count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymptomCount {
    pub symptom: String,
    pub total: u64,
}

/// Hospitalization count for one fixed age band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeBandCount {
    pub band: &'static str,
    pub hospitalizations: u64,
}

/// Mean reported income for one fever status group. A group with no
/// numeric income observations has no mean, serialized as null.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeverIncome {
    pub fever: Value,
    pub mean_income: Option<f64>,
}

/// Complete recomputation result for one month/state selection, consumed
/// by the rendering layer.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub period: Value,
    pub region: Value,
    pub symptom_frequency: Vec<SymptomCount>,
    pub hospitalization_by_age: Vec<AgeBandCount>,
    pub income_by_fever: Vec<FeverIncome>,
}
