use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Product fragment returned by the Open Food Facts v2 product endpoint.
///
/// Only the fields named in the request's `fields` parameter are present.
/// `nutriments` stays an open map because its keys are dynamic
/// (`energy_100g`, `energy_unit`, `fat_100g`, ...), and the Nutri-Score
/// component lists stay untyped so the table builders own the policy for
/// records with missing keys.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub product_name: Option<String>,
    pub nutrition_grades: Option<String>,
    #[serde(default)]
    pub nutriments: Map<String, Value>,
    #[serde(default)]
    pub nutriscore_data: NutriscoreData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NutriscoreData {
    pub score: Option<i64>,
    pub negative_points: Option<i64>,
    pub positive_points: Option<i64>,
    #[serde(default)]
    pub components: ScoreComponents,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreComponents {
    #[serde(default)]
    pub negative: Vec<Value>,
    #[serde(default)]
    pub positive: Vec<Value>,
}

/// One row of the "Nutrition Facts (per 100g)" table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientRow {
    pub nutrient: String,
    pub per_100g: f64,
    pub unit: String,
}

/// One row of the Nutri-Score component breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentRow {
    pub component: String,
    pub value: Option<f64>,
    pub unit: Option<String>,
    pub points: Option<i64>,
    pub points_max: Option<i64>,
    pub kind: ComponentKind,
}

/// Which component list a row came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ComponentKind {
    Negative,
    Positive,
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentKind::Negative => write!(f, "Negative"),
            ComponentKind::Positive => write!(f, "Positive"),
        }
    }
}

/// Final Nutri-Score plus the negative/positive point totals.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreSummary {
    pub score: Option<i64>,
    pub negative_points: Option<i64>,
    pub positive_points: Option<i64>,
}

/// Everything a renderer needs for one fetched product: the header fields
/// plus the three flattened tables. Also the body of the JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct ProductReport {
    pub barcode: String,
    pub product_name: String,
    pub nutrition_grade: String,
    pub nutrients: Vec<NutrientRow>,
    pub components: Vec<ComponentRow>,
    pub summary: ScoreSummary,
}
