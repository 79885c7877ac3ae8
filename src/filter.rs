use crate::error::Result;
use crate::schema::{COL_PERIOD, COL_REGION};
use crate::table::{Table, Value};

/// Narrows the symptoms table to rows matching the selected month and state,
/// preserving row order. No matching rows is not an error; downstream
/// aggregations produce zero-filled output from an empty table.
pub fn filter_by_selection(symptoms: &Table, period: &Value, region: &Value) -> Result<Table> {
    let period_col = symptoms.column_index(COL_PERIOD)?;
    let region_col = symptoms.column_index(COL_REGION)?;

    let rows = symptoms
        .rows()
        .iter()
        .filter(|row| &row[period_col] == period && &row[region_col] == region)
        .cloned()
        .collect();

    Ok(Table::new(symptoms.name(), symptoms.headers().to_vec(), rows))
}
