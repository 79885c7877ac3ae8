use crate::analyzers::types::SymptomCount;
use crate::error::Result;
use crate::schema::SYMPTOM_KEY_COLUMNS;
use crate::table::Table;

/// Counts affirmative answers per symptom column over the filtered symptom
/// table, sorted descending. Ties keep the original column order.
///
/// Every non-key column is counted, the hospitalization flag included.
/// Negative and missing answers both map to zero; the distinction is not
/// recoverable from this summary.
pub fn symptom_frequency(filtered: &Table) -> Result<Vec<SymptomCount>> {
    for key in SYMPTOM_KEY_COLUMNS {
        filtered.column_index(key)?;
    }

    let mut counts = Vec::new();
    for (i, header) in filtered.headers().iter().enumerate() {
        if SYMPTOM_KEY_COLUMNS.contains(&header.as_str()) {
            continue;
        }
        let total = filtered
            .rows()
            .iter()
            .filter(|row| row[i].is_affirmative())
            .count() as u64;
        counts.push(SymptomCount {
            symptom: header.clone(),
            total,
        });
    }

    // sort_by is stable, so equal totals stay in column order
    counts.sort_by(|a, b| b.total.cmp(&a.total));
    Ok(counts)
}
