use pnad_covid_analyzer::parser::parse_table;
use pnad_covid_analyzer::session::Session;
use pnad_covid_analyzer::table::Value;

fn fixture_session() -> Session {
    let population = parse_table(
        "populacao",
        include_str!("fixtures/populacao.csv").as_bytes(),
    )
    .expect("population fixture should parse");
    let symptoms = parse_table("sintomas", include_str!("fixtures/sintomas.csv").as_bytes())
        .expect("symptoms fixture should parse");
    let behavior = parse_table(
        "comportamento",
        include_str!("fixtures/comportamento.csv").as_bytes(),
    )
    .expect("behavior fixture should parse");
    let economic = parse_table("economia", include_str!("fixtures/economia.csv").as_bytes())
        .expect("economic fixture should parse");

    Session::from_tables(population, symptoms, behavior, economic)
}

fn sp() -> Value {
    Value::Text("SP".to_string())
}

#[test]
fn test_full_pipeline() {
    let session = fixture_session();

    assert_eq!(session.periods().unwrap(), vec![Value::Int(5), Value::Int(6)]);
    assert_eq!(
        session.regions().unwrap(),
        vec![Value::Text("RJ".to_string()), sp()]
    );

    let report = session.analyze(&Value::Int(5), &sp()).unwrap();

    // Symptom frequency: Febre and Tosse tie at 2, column order breaks the
    // tie; the hospitalization flag is counted like any other column.
    let frequency: Vec<(&str, u64)> = report
        .symptom_frequency
        .iter()
        .map(|c| (c.symptom.as_str(), c.total))
        .collect();
    assert_eq!(
        frequency,
        vec![("Febre", 2), ("Tosse", 2), ("Internacao_hospitalar", 1)]
    );

    // One hospitalized 70-year-old in SP lands in the 61-80 band
    let bands: Vec<(&str, u64)> = report
        .hospitalization_by_age
        .iter()
        .map(|c| (c.band, c.hospitalizations))
        .collect();
    assert_eq!(
        bands,
        vec![
            ("0-17", 0),
            ("18-30", 0),
            ("31-45", 0),
            ("46-60", 0),
            ("61-80", 1),
            ("80+", 0),
        ]
    );

    // The malformed income cell is excluded from the Sim mean; the month 6
    // observation feeds the Não group through the person-month join
    assert_eq!(report.income_by_fever.len(), 2);
    assert_eq!(report.income_by_fever[0].fever, Value::Text("Não".to_string()));
    assert_eq!(report.income_by_fever[0].mean_income, Some(900.0));
    assert_eq!(report.income_by_fever[1].fever, Value::Text("Sim".to_string()));
    assert_eq!(report.income_by_fever[1].mean_income, Some(1500.0));
}

#[test]
fn test_selection_without_matching_rows_is_not_an_error() {
    let session = fixture_session();
    let report = session.analyze(&Value::Int(7), &sp()).unwrap();

    assert_eq!(report.symptom_frequency.len(), 3);
    assert!(report.symptom_frequency.iter().all(|c| c.total == 0));
    assert_eq!(report.hospitalization_by_age.len(), 6);
}

#[test]
fn test_repeated_analysis_is_identical() {
    let session = fixture_session();
    let first = session.analyze(&Value::Int(5), &sp()).unwrap();
    let second = session.analyze(&Value::Int(5), &sp()).unwrap();

    assert_eq!(first.symptom_frequency, second.symptom_frequency);
    assert_eq!(first.hospitalization_by_age, second.hospitalization_by_age);
    assert_eq!(first.income_by_fever, second.income_by_fever);
}
