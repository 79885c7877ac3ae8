//! CSV loading with per-column type inference.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{AnalysisError, Result};
use crate::table::{Table, Value};

#[derive(Clone, Copy, PartialEq)]
enum ColumnType {
    Int,
    Float,
    Text,
}

/// Parses a CSV byte stream into a typed [`Table`].
///
/// Columns are typed by best-effort inference: a column where every
/// non-empty cell parses as an integer becomes integer-typed, then float,
/// otherwise text. Empty cells are missing. No schema validation happens
/// here; absent columns surface later at the stage that needs them.
///
/// # Errors
///
/// Returns a parse error naming the table if the stream is not well-formed
/// delimited UTF-8 text (ragged rows included). That failure is fatal to the
/// session's analysis.
pub fn parse_table<R: Read>(name: &str, reader: R) -> Result<Table> {
    let mut rdr = ReaderBuilder::new().from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|source| parse_error(name, source))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut records: Vec<StringRecord> = Vec::new();
    for record in rdr.records() {
        records.push(record.map_err(|source| parse_error(name, source))?);
    }

    let types: Vec<ColumnType> = (0..headers.len())
        .map(|col| infer_column(&records, col))
        .collect();

    let rows = records
        .iter()
        .map(|record| {
            record
                .iter()
                .zip(&types)
                .map(|(cell, ty)| typed_cell(cell, *ty))
                .collect()
        })
        .collect();

    Ok(Table::new(name, headers, rows))
}

fn parse_error(table: &str, source: csv::Error) -> AnalysisError {
    AnalysisError::Parse {
        table: table.to_string(),
        source,
    }
}

fn infer_column(records: &[StringRecord], col: usize) -> ColumnType {
    let mut ty = ColumnType::Int;
    for record in records {
        let cell = record.get(col).unwrap_or("").trim();
        if cell.is_empty() {
            continue;
        }
        if ty == ColumnType::Int && cell.parse::<i64>().is_err() {
            ty = ColumnType::Float;
        }
        if ty == ColumnType::Float && cell.parse::<f64>().is_err() {
            return ColumnType::Text;
        }
    }
    ty
}

fn typed_cell(raw: &str, ty: ColumnType) -> Value {
    if raw.trim().is_empty() {
        return Value::Missing;
    }
    match ty {
        ColumnType::Int => raw
            .trim()
            .parse()
            .map(Value::Int)
            .unwrap_or_else(|_| Value::Text(raw.to_string())),
        ColumnType::Float => raw
            .trim()
            .parse()
            .map(Value::Float)
            .unwrap_or_else(|_| Value::Text(raw.to_string())),
        ColumnType::Text => Value::Text(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;

    fn parse(data: &str) -> Table {
        parse_table("sintomas", data.as_bytes()).expect("fixture should parse")
    }

    #[test]
    fn test_integer_column_inference() {
        let table = parse("mes,UF\n5,SP\n6,RJ\n");
        assert_eq!(table.rows()[0][0], Value::Int(5));
        assert_eq!(table.rows()[1][1], Value::Text("RJ".to_string()));
    }

    #[test]
    fn test_mixed_numeric_column_becomes_float() {
        let table = parse("Idade\n70\n2.5\n");
        assert_eq!(table.rows()[0][0], Value::Float(70.0));
        assert_eq!(table.rows()[1][0], Value::Float(2.5));
    }

    #[test]
    fn test_one_bad_cell_demotes_column_to_text() {
        let table = parse("Faixa_rendimento\n1000\nabc\n2000\n");
        assert_eq!(table.rows()[0][0], Value::Text("1000".to_string()));
        assert_eq!(table.rows()[1][0], Value::Text("abc".to_string()));
    }

    #[test]
    fn test_empty_cells_are_missing() {
        let table = parse("Febre,Tosse\nSim,\n,Não\n");
        assert!(table.rows()[0][1].is_missing());
        assert!(table.rows()[1][0].is_missing());
    }

    #[test]
    fn test_header_only_input_yields_empty_table() {
        let table = parse("UF,mes\n");
        assert!(table.is_empty());
        assert_eq!(table.headers(), &["UF".to_string(), "mes".to_string()]);
    }

    #[test]
    fn test_ragged_row_is_a_parse_error() {
        let result = parse_table("economia", "UF,mes\nSP,5,extra\n".as_bytes());
        match result {
            Err(AnalysisError::Parse { table, .. }) => assert_eq!(table, "economia"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_is_a_parse_error() {
        let bytes: &[u8] = b"UF\n\xFF\xFE\n";
        assert!(matches!(
            parse_table("populacao", bytes),
            Err(AnalysisError::Parse { .. })
        ));
    }
}
