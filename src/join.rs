//! Hash join over in-memory tables.

use std::collections::HashMap;

use crate::error::{AnalysisError, Result};
use crate::table::{Table, Value};

/// Inner join of two tables on a composite column key.
///
/// An index is built over the right table and the left table is scanned in
/// row order, so output keeps left row order with right matches in right
/// row order within a key. Rows whose key has no match on the other side
/// are dropped. A key duplicated on either side multiplies output rows
/// (cartesian within key) exactly as the dataframe merge the survey
/// extracts were built for; the extracts are expected to be key-unique.
/// Missing key cells match other missing key cells.
///
/// Key columns appear once in the output, in the left table's positions.
///
/// # Errors
///
/// Returns a missing-column error if either table lacks a key column, and a
/// duplicate-column error if the tables share a non-key column name.
pub fn inner_join(left: &Table, right: &Table, keys: &[&str]) -> Result<Table> {
    let left_keys: Vec<usize> = keys
        .iter()
        .map(|key| left.column_index(key))
        .collect::<Result<_>>()?;
    let right_keys: Vec<usize> = keys
        .iter()
        .map(|key| right.column_index(key))
        .collect::<Result<_>>()?;

    let right_extra: Vec<usize> = (0..right.headers().len())
        .filter(|i| !right_keys.contains(i))
        .collect();

    let mut headers: Vec<String> = left.headers().to_vec();
    for &i in &right_extra {
        let column = &right.headers()[i];
        if headers.contains(column) {
            return Err(AnalysisError::DuplicateColumn {
                left: left.name().to_string(),
                right: right.name().to_string(),
                column: column.clone(),
            });
        }
        headers.push(column.clone());
    }

    let mut index: HashMap<Vec<Value>, Vec<usize>> = HashMap::new();
    for (i, row) in right.rows().iter().enumerate() {
        let key: Vec<Value> = right_keys.iter().map(|&k| row[k].clone()).collect();
        index.entry(key).or_default().push(i);
    }

    let mut rows = Vec::new();
    for row in left.rows() {
        let key: Vec<Value> = left_keys.iter().map(|&k| row[k].clone()).collect();
        let Some(matches) = index.get(&key) else {
            continue;
        };
        for &m in matches {
            let mut joined = row.clone();
            joined.extend(right_extra.iter().map(|&i| right.rows()[m][i].clone()));
            rows.push(joined);
        }
    }

    Ok(Table::new(
        format!("{}+{}", left.name(), right.name()),
        headers,
        rows,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    fn population(rows: Vec<Vec<Value>>) -> Table {
        Table::new(
            "populacao",
            vec![
                "UF".to_string(),
                "Numero_selecao_domicilio".to_string(),
                "Idade".to_string(),
            ],
            rows,
        )
    }

    fn symptoms(rows: Vec<Vec<Value>>) -> Table {
        Table::new(
            "sintomas",
            vec![
                "UF".to_string(),
                "Numero_selecao_domicilio".to_string(),
                "Febre".to_string(),
            ],
            rows,
        )
    }

    const KEY: [&str; 2] = ["UF", "Numero_selecao_domicilio"];

    #[test]
    fn test_inner_join_drops_unmatched_rows() {
        let left = population(vec![
            vec![t("SP"), Value::Int(1), Value::Int(70)],
            vec![t("SP"), Value::Int(2), Value::Int(25)],
        ]);
        let right = symptoms(vec![vec![t("SP"), Value::Int(1), t("Sim")]]);

        let joined = inner_join(&left, &right, &KEY).unwrap();
        assert_eq!(joined.len(), 1);
        assert_eq!(
            joined.headers(),
            &["UF", "Numero_selecao_domicilio", "Idade", "Febre"]
        );
        assert_eq!(
            joined.rows()[0],
            vec![t("SP"), Value::Int(1), Value::Int(70), t("Sim")]
        );
    }

    #[test]
    fn test_same_id_in_another_region_does_not_match() {
        let left = population(vec![vec![t("SP"), Value::Int(1), Value::Int(70)]]);
        let right = symptoms(vec![vec![t("RJ"), Value::Int(1), t("Sim")]]);

        assert!(inner_join(&left, &right, &KEY).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_keys_multiply_rows() {
        let left = population(vec![vec![t("SP"), Value::Int(1), Value::Int(70)]]);
        let right = symptoms(vec![
            vec![t("SP"), Value::Int(1), t("Sim")],
            vec![t("SP"), Value::Int(1), t("Não")],
        ]);

        let joined = inner_join(&left, &right, &KEY).unwrap();
        assert_eq!(joined.len(), 2);
        assert_eq!(joined.rows()[0][3], t("Sim"));
        assert_eq!(joined.rows()[1][3], t("Não"));
    }

    #[test]
    fn test_missing_key_cells_match_each_other() {
        let left = population(vec![vec![t("SP"), Value::Missing, Value::Int(70)]]);
        let right = symptoms(vec![vec![t("SP"), Value::Missing, t("Sim")]]);

        assert_eq!(inner_join(&left, &right, &KEY).unwrap().len(), 1);
    }

    #[test]
    fn test_colliding_non_key_column_is_an_error() {
        let left = population(vec![]);
        let right = Table::new(
            "outra",
            vec![
                "UF".to_string(),
                "Numero_selecao_domicilio".to_string(),
                "Idade".to_string(),
            ],
            vec![],
        );

        assert!(matches!(
            inner_join(&left, &right, &KEY),
            Err(AnalysisError::DuplicateColumn { .. })
        ));
    }

    #[test]
    fn test_missing_key_column_is_an_error() {
        let left = population(vec![]);
        let right = Table::new("economia", vec!["UF".to_string()], vec![]);

        assert!(matches!(
            inner_join(&left, &right, &KEY),
            Err(AnalysisError::MissingColumn { .. })
        ));
    }
}
