use anyhow::{anyhow, Result};
use serde_json::Value;

use crate::models::{ComponentKind, ComponentRow, NutriscoreData, ScoreSummary};
use crate::table::humanize;

/// Flatten the negative and positive Nutri-Score component lists into one
/// table: negative rows first, order within each list preserved, no
/// resorting.
pub fn component_rows(negative: &[Value], positive: &[Value]) -> Result<Vec<ComponentRow>> {
    let mut rows = Vec::with_capacity(negative.len() + positive.len());

    for record in negative {
        rows.push(component_row(record, ComponentKind::Negative)?);
    }
    for record in positive {
        rows.push(component_row(record, ComponentKind::Positive)?);
    }

    Ok(rows)
}

/// Map one component record to a row.
///
/// `id` is mandatory — a record without one is malformed and reported as an
/// error rather than defaulted to a blank name. The remaining fields pass
/// through as `None` when absent.
fn component_row(record: &Value, kind: ComponentKind) -> Result<ComponentRow> {
    let id = record
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow!("{} component record has no id: {}", kind, record))?;

    Ok(ComponentRow {
        component: humanize(id),
        value: record.get("value").and_then(Value::as_f64),
        unit: record.get("unit").and_then(Value::as_str).map(str::to_string),
        points: record.get("points").and_then(Value::as_i64),
        points_max: record.get("points_max").and_then(Value::as_i64),
        kind,
    })
}

/// Extract the final score and point totals.
pub fn summary(data: &NutriscoreData) -> ScoreSummary {
    ScoreSummary {
        score: data.score,
        negative_points: data.negative_points,
        positive_points: data.positive_points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_negative_rows_precede_positive_rows() {
        let negative = vec![json!({
            "id": "saturated_fat", "value": 5, "unit": "g", "points": 3, "points_max": 10,
        })];
        let positive = vec![json!({
            "id": "fiber", "value": 2, "unit": "g", "points": 1, "points_max": 5,
        })];

        let rows = component_rows(&negative, &positive).unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].component, "Saturated Fat");
        assert_eq!(rows[0].value, Some(5.0));
        assert_eq!(rows[0].unit.as_deref(), Some("g"));
        assert_eq!(rows[0].points, Some(3));
        assert_eq!(rows[0].points_max, Some(10));
        assert_eq!(rows[0].kind, ComponentKind::Negative);

        assert_eq!(rows[1].component, "Fiber");
        assert_eq!(rows[1].points, Some(1));
        assert_eq!(rows[1].kind, ComponentKind::Positive);
    }

    #[test]
    fn test_order_within_a_list_preserved() {
        let negative = vec![
            json!({"id": "energy", "points": 2}),
            json!({"id": "sugars", "points": 4}),
            json!({"id": "sodium", "points": 1}),
        ];

        let rows = component_rows(&negative, &[]).unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.component.as_str()).collect();
        assert_eq!(names, vec!["Energy", "Sugars", "Sodium"]);
    }

    #[test]
    fn test_missing_fields_pass_through_as_none() {
        let positive = vec![json!({"id": "proteins"})];

        let rows = component_rows(&[], &positive).unwrap();
        assert_eq!(rows[0].component, "Proteins");
        assert_eq!(rows[0].value, None);
        assert_eq!(rows[0].unit, None);
        assert_eq!(rows[0].points, None);
        assert_eq!(rows[0].points_max, None);
    }

    #[test]
    fn test_missing_id_is_an_error() {
        let negative = vec![json!({"value": 5, "points": 3})];

        assert!(component_rows(&negative, &[]).is_err());
    }

    #[test]
    fn test_non_string_id_is_an_error() {
        let positive = vec![json!({"id": 7})];

        assert!(component_rows(&[], &positive).is_err());
    }

    #[test]
    fn test_summary_passthrough() {
        let data = NutriscoreData {
            score: Some(14),
            negative_points: Some(18),
            positive_points: Some(4),
            components: Default::default(),
        };

        let summary = summary(&data);
        assert_eq!(summary.score, Some(14));
        assert_eq!(summary.negative_points, Some(18));
        assert_eq!(summary.positive_points, Some(4));
    }
}
