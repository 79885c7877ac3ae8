use std::collections::HashMap;

use crate::analyzers::types::FeverIncome;
use crate::analyzers::utility::mean;
use crate::error::Result;
use crate::join::inner_join;
use crate::schema::{COL_FEVER, COL_INCOME_BAND, COL_REGION, PERSON_PERIOD_KEY};
use crate::table::{Table, Value};

/// Mean reported income band per fever status for one state.
///
/// Symptom and economic rows are inner-joined per person-month. Income
/// cells that cannot be read as numbers become missing for that row only,
/// excluded from the mean but not from the group. Fever status is grouped
/// as-is, a missing answer forming its own group, and groups are emitted in
/// sorted key order.
pub fn income_by_fever(
    symptoms: &Table,
    economic: &Table,
    region: &Value,
) -> Result<Vec<FeverIncome>> {
    let joined = inner_join(symptoms, economic, &PERSON_PERIOD_KEY)?;
    let region_col = joined.column_index(COL_REGION)?;
    let fever_col = joined.column_index(COL_FEVER)?;
    let income_col = joined.column_index(COL_INCOME_BAND)?;

    let mut groups: HashMap<Value, Vec<f64>> = HashMap::new();
    for row in joined.rows() {
        if &row[region_col] != region {
            continue;
        }
        let incomes = groups.entry(row[fever_col].clone()).or_default();
        if let Some(income) = row[income_col].as_f64() {
            incomes.push(income);
        }
    }

    let mut result: Vec<FeverIncome> = groups
        .into_iter()
        .map(|(fever, incomes)| FeverIncome {
            mean_income: mean(&incomes),
            fever,
        })
        .collect();
    result.sort_by(|a, b| a.fever.cmp(&b.fever));
    Ok(result)
}
