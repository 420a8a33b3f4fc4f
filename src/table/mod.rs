//! Table builders for the fetched product payload.
//!
//! - [`nutrients`] — flattens the open `nutriments` map into
//!   (name, per-100g value, unit) rows.
//! - [`score`] — flattens the Nutri-Score negative/positive component lists
//!   into tagged rows and extracts the point totals.

pub mod nutrients;
pub mod score;

use anyhow::Result;

use crate::models::{Product, ProductReport};

/// Flatten a fetched product into the renderer-facing report.
///
/// Header fallbacks match the upstream UI: a nameless product renders as
/// "Unknown Product" and a missing nutrition grade as "N/A"; the grade
/// letter is upper-cased.
pub fn build_report(barcode: &str, product: &Product) -> Result<ProductReport> {
    let nutrient_rows = nutrients::nutrient_rows(&product.nutriments)?;
    let component_rows = score::component_rows(
        &product.nutriscore_data.components.negative,
        &product.nutriscore_data.components.positive,
    )?;
    let summary = score::summary(&product.nutriscore_data);

    Ok(ProductReport {
        barcode: barcode.to_string(),
        product_name: product
            .product_name
            .clone()
            .unwrap_or_else(|| "Unknown Product".to_string()),
        nutrition_grade: product
            .nutrition_grades
            .as_deref()
            .unwrap_or("N/A")
            .to_uppercase(),
        nutrients: nutrient_rows,
        components: component_rows,
        summary,
    })
}

/// Turn a raw payload key into a display name: `-`/`_` separators become
/// spaces and each word is title-cased (`saturated-fat` → `Saturated Fat`,
/// `vitamin_b12` → `Vitamin B12`).
pub(crate) fn humanize(key: &str) -> String {
    key.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
