use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{ComponentKind, ProductReport};

/// Render a colored terminal report.
pub fn render(report: &ProductReport, quiet: bool) -> Result<()> {
    if quiet {
        println!(
            "{}  Grade: {}",
            report.product_name,
            grade_colored(&report.nutrition_grade)
        );
        return Ok(());
    }

    println!("\n {} v{}", "nutriscan".bold(), env!("CARGO_PKG_VERSION"));
    println!(" Barcode: {}\n", report.barcode);

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", report.product_name.bold());
    println!(
        " │  {:<48} │",
        format!("Nutrition Grade: {}", grade_colored(&report.nutrition_grade))
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    println!(" {}\n", "Nutrition Facts (per 100g)".bold());
    render_nutrients(report);

    if !report.components.is_empty() {
        println!("\n {}\n", "Nutri-Score Components".bold());
        render_components(report);
    }

    println!("\n {}\n", "Nutri-Score Summary".bold());
    render_summary(report);
    println!();

    Ok(())
}

fn render_nutrients(report: &ProductReport) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Nutrient").add_attribute(Attribute::Bold),
            Cell::new("Per 100g").add_attribute(Attribute::Bold),
            Cell::new("Unit").add_attribute(Attribute::Bold),
        ]);

    for row in &report.nutrients {
        table.add_row(vec![
            Cell::new(&row.nutrient),
            Cell::new(row.per_100g).set_alignment(CellAlignment::Right),
            Cell::new(&row.unit),
        ]);
    }

    println!("{}", table);
}

fn render_components(report: &ProductReport) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Component").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
            Cell::new("Unit").add_attribute(Attribute::Bold),
            Cell::new("Points").add_attribute(Attribute::Bold),
            Cell::new("Max").add_attribute(Attribute::Bold),
            Cell::new("Type").add_attribute(Attribute::Bold),
        ]);

    for row in &report.components {
        let kind_color = match row.kind {
            ComponentKind::Negative => Color::Red,
            ComponentKind::Positive => Color::Green,
        };

        table.add_row(vec![
            Cell::new(&row.component),
            Cell::new(opt(&row.value)).set_alignment(CellAlignment::Right),
            Cell::new(row.unit.as_deref().unwrap_or_default()),
            Cell::new(opt(&row.points)).set_alignment(CellAlignment::Right),
            Cell::new(opt(&row.points_max)).set_alignment(CellAlignment::Right),
            Cell::new(row.kind.to_string()).fg(kind_color),
        ]);
    }

    println!("{}", table);
}

fn render_summary(report: &ProductReport) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

    table.add_row(vec![
        Cell::new("Final Score"),
        Cell::new(opt(&report.summary.score)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Negative Points"),
        Cell::new(opt(&report.summary.negative_points)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Positive Points"),
        Cell::new(opt(&report.summary.positive_points)).set_alignment(CellAlignment::Right),
    ]);

    println!("{}", table);
}

/// Absent fields render as empty cells, matching the sparse upstream data.
fn opt<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(T::to_string).unwrap_or_default()
}

/// Color a nutrition grade letter the way the label does: green for A/B,
/// yellow for C, red for D/E.
fn grade_colored(grade: &str) -> ColoredString {
    match grade {
        "A" | "B" => grade.green().bold(),
        "C" => grade.yellow().bold(),
        "D" | "E" => grade.red().bold(),
        _ => grade.dimmed(),
    }
}
