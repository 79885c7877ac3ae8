//! Column names and fixed constants of the PNAD COVID survey extracts.

/// State code column (`UF`), present in every extract.
pub const COL_REGION: &str = "UF";
/// Selected household member identifier, unique within a state.
pub const COL_HOUSEHOLD: &str = "Numero_selecao_domicilio";
/// Survey reference month.
pub const COL_PERIOD: &str = "mes";
/// Age in years, population extract.
pub const COL_AGE: &str = "Idade";
/// Hospitalization flag, symptoms extract.
pub const COL_HOSPITALIZATION: &str = "Internacao_hospitalar";
/// Fever answer, symptoms extract.
pub const COL_FEVER: &str = "Febre";
/// Reported income band, economic extract.
pub const COL_INCOME_BAND: &str = "Faixa_rendimento";

/// Affirmative answer literal used by every ternary survey column.
pub const AFFIRMATIVE: &str = "Sim";
/// Negative answer literal.
pub const NEGATIVE: &str = "Não";

/// Key columns of the symptoms extract, excluded from per-symptom counting.
pub const SYMPTOM_KEY_COLUMNS: [&str; 3] = [COL_REGION, COL_HOUSEHOLD, COL_PERIOD];

/// Join key identifying a person across extracts.
pub const PERSON_KEY: [&str; 2] = [COL_REGION, COL_HOUSEHOLD];
/// Join key identifying a person-month observation across extracts.
pub const PERSON_PERIOD_KEY: [&str; 3] = [COL_REGION, COL_HOUSEHOLD, COL_PERIOD];

/// One reporting band of the age distribution. Both bounds are inclusive.
pub struct AgeBand {
    pub label: &'static str,
    pub min: u32,
    pub max: u32,
}

impl AgeBand {
    pub fn contains(&self, age: f64) -> bool {
        age >= f64::from(self.min) && age <= f64::from(self.max)
    }
}

/// The six reporting bands, ascending. Ages outside 0..=120 belong to no
/// band and are dropped from the hospitalization summary.
pub const AGE_BANDS: [AgeBand; 6] = [
    AgeBand { label: "0-17", min: 0, max: 17 },
    AgeBand { label: "18-30", min: 18, max: 30 },
    AgeBand { label: "31-45", min: 31, max: 45 },
    AgeBand { label: "46-60", min: 46, max: 60 },
    AgeBand { label: "61-80", min: 61, max: 80 },
    AgeBand { label: "80+", min: 81, max: 120 },
];
