use crate::analyzers::types::AgeBandCount;
use crate::error::Result;
use crate::join::inner_join;
use crate::schema::{AGE_BANDS, COL_AGE, COL_HOSPITALIZATION, COL_REGION, PERSON_KEY};
use crate::table::{Table, Value};

/// Counts affirmative hospitalizations per fixed age band for one state.
///
/// Population and symptom rows are inner-joined per person: a person with a
/// record on only one side contributes nothing, while a person key
/// duplicated on either side multiplies rows and overstates counts. That
/// multiplication is inherited from the merge the survey extracts were
/// designed for; the extracts are expected to be key-unique.
///
/// Always emits all six bands in ascending order, zero counts included.
/// Non-numeric ages and ages outside 0..=120 stay unassigned.
pub fn hospitalization_by_age(
    population: &Table,
    symptoms: &Table,
    region: &Value,
) -> Result<Vec<AgeBandCount>> {
    let joined = inner_join(population, symptoms, &PERSON_KEY)?;
    let region_col = joined.column_index(COL_REGION)?;
    let age_col = joined.column_index(COL_AGE)?;
    let flag_col = joined.column_index(COL_HOSPITALIZATION)?;

    let mut counts = [0u64; AGE_BANDS.len()];
    for row in joined.rows() {
        if &row[region_col] != region || !row[flag_col].is_affirmative() {
            continue;
        }
        let Some(age) = row[age_col].as_f64() else {
            continue;
        };
        if let Some(band) = AGE_BANDS.iter().position(|b| b.contains(age)) {
            counts[band] += 1;
        }
    }

    Ok(AGE_BANDS
        .iter()
        .zip(counts)
        .map(|(band, hospitalizations)| AgeBandCount {
            band: band.label,
            hospitalizations,
        })
        .collect())
}
