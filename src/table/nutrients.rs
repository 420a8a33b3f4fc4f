use anyhow::{anyhow, Result};
use serde_json::{Map, Value};

use crate::models::NutrientRow;
use crate::table::humanize;

/// Suffix marking a nutrient value normalized to 100 g of product.
const PER_100G_SUFFIX: &str = "_100g";

/// Flatten a `nutriments` map into table rows.
///
/// Every key ending in `_100g` produces one row: the stripped base key is
/// humanized for the name, the value is rounded to 2 decimals, and the unit
/// comes from the companion `<base>_unit` key (empty string when absent).
/// Keys without the suffix are ignored. A non-numeric value under a matching
/// key is surfaced to the caller as an error, never coerced.
pub fn nutrient_rows(nutriments: &Map<String, Value>) -> Result<Vec<NutrientRow>> {
    let mut rows = Vec::new();

    for (key, value) in nutriments {
        let base = match key.strip_suffix(PER_100G_SUFFIX) {
            Some(base) => base,
            None => continue,
        };

        let number = value
            .as_f64()
            .ok_or_else(|| anyhow!("non-numeric value for `{}`: {}", key, value))?;

        let unit = nutriments
            .get(&format!("{}_unit", base))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        rows.push(NutrientRow {
            nutrient: humanize(base),
            per_100g: round2(number),
            unit,
        });
    }

    Ok(rows)
}

/// Round to 2 decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
