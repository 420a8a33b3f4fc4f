use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::models::ProductReport;

/// Render the spreadsheet report: one sheet per table, bold header rows.
pub fn render(report: &ProductReport, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Nutrition Facts")?;
    write_header(sheet, &["Nutrient", "Per 100g", "Unit"], &header)?;
    for (i, row) in report.nutrients.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write(r, 0, row.nutrient.as_str())?;
        sheet.write(r, 1, row.per_100g)?;
        sheet.write(r, 2, row.unit.as_str())?;
    }

    let sheet = workbook.add_worksheet();
    sheet.set_name("NutriScore Breakdown")?;
    write_header(
        sheet,
        &["Component", "Value", "Unit", "Points", "Max", "Type"],
        &header,
    )?;
    for (i, row) in report.components.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write(r, 0, row.component.as_str())?;
        if let Some(value) = row.value {
            sheet.write(r, 1, value)?;
        }
        if let Some(unit) = &row.unit {
            sheet.write(r, 2, unit.as_str())?;
        }
        if let Some(points) = row.points {
            sheet.write(r, 3, points)?;
        }
        if let Some(points_max) = row.points_max {
            sheet.write(r, 4, points_max)?;
        }
        sheet.write(r, 5, row.kind.to_string())?;
    }

    let sheet = workbook.add_worksheet();
    sheet.set_name("Summary")?;
    write_header(sheet, &["Metric", "Value"], &header)?;
    let summary = [
        ("Final Score", report.summary.score),
        ("Negative Points", report.summary.negative_points),
        ("Positive Points", report.summary.positive_points),
    ];
    for (i, (metric, value)) in summary.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write(r, 0, *metric)?;
        if let Some(value) = value {
            sheet.write(r, 1, *value)?;
        }
    }

    workbook
        .save(output_path)
        .with_context(|| format!("failed to write workbook to {}", output_path.display()))?;

    println!("Xlsx report written to: {}", output_path.display());
    Ok(())
}

fn write_header(sheet: &mut Worksheet, columns: &[&str], format: &Format) -> Result<()> {
    for (col, name) in columns.iter().enumerate() {
        sheet.write_with_format(0, col as u16, *name, format)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComponentKind, ComponentRow, NutrientRow, ScoreSummary};

    fn sample_report() -> ProductReport {
        ProductReport {
            barcode: "0011110119681".to_string(),
            product_name: "Granola".to_string(),
            nutrition_grade: "B".to_string(),
            nutrients: vec![NutrientRow {
                nutrient: "Energy".to_string(),
                per_100g: 123.46,
                unit: "kcal".to_string(),
            }],
            components: vec![ComponentRow {
                component: "Fiber".to_string(),
                value: Some(2.0),
                unit: Some("g".to_string()),
                points: Some(1),
                points_max: Some(5),
                kind: ComponentKind::Positive,
            }],
            summary: ScoreSummary {
                score: Some(2),
                negative_points: Some(6),
                positive_points: Some(4),
            },
        }
    }

    #[test]
    fn test_workbook_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");

        render(&sample_report(), &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_sparse_rows_leave_cells_blank() {
        // Components with every optional field absent must still produce a
        // saveable workbook
        let mut report = sample_report();
        report.components = vec![ComponentRow {
            component: "Proteins".to_string(),
            value: None,
            unit: None,
            points: None,
            points_max: None,
            kind: ComponentKind::Negative,
        }];
        report.summary = ScoreSummary {
            score: None,
            negative_points: None,
            positive_points: None,
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sparse.xlsx");

        render(&report, &path).unwrap();
        assert!(path.exists());
    }
}
