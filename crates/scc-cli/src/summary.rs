use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use scc_model::{ColumnKind, IdentifierSet};

use crate::types::{CompareOutcome, SourceOverview};

/// Prints the column overview of one loaded file.
pub fn print_overview(title: &str, overview: &SourceOverview) {
    match &overview.sheet {
        Some(sheet) => println!(
            "{title}: {} ({}, sheet '{sheet}', {} rows)",
            overview.label, overview.kind, overview.rows
        ),
        None => println!(
            "{title}: {} ({}, {} rows)",
            overview.label, overview.kind, overview.rows
        ),
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Data Type"),
        header_cell("Non-null"),
        header_cell("Missing"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for profile in &overview.profiles {
        let is_id = overview.id_column.as_deref() == Some(profile.name.as_str());
        table.add_row(vec![
            column_cell(&profile.name, is_id),
            kind_cell(profile.kind),
            Cell::new(profile.rows.saturating_sub(profile.nulls)),
            count_cell(profile.nulls, Color::Yellow),
        ]);
    }
    println!("{table}");
}

/// Prints the metrics, result previews and written files of a comparison.
pub fn print_comparison(outcome: &CompareOutcome) {
    let comparison = &outcome.comparison;
    let summary = comparison.result.summary();
    println!(
        "Comparing '{}' from {} with '{}' from {}.",
        comparison.source_a.column,
        comparison.source_a.label,
        comparison.source_b.column,
        comparison.source_b.label
    );

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(format!("Distinct in {}", comparison.source_a.label)),
        Cell::new(summary.distinct_a),
    ]);
    table.add_row(vec![
        Cell::new(format!("Distinct in {}", comparison.source_b.label)),
        Cell::new(summary.distinct_b),
    ]);
    table.add_row(vec![
        Cell::new("In both files"),
        count_cell(summary.shared, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Total unique across both")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.total_unique).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    let header = outcome.id_header.as_str();
    let previews = [
        (
            "In both files",
            &comparison.result.shared,
            outcome.outputs.shared.as_deref(),
        ),
        (
            "Only in file 1",
            &comparison.result.only_a,
            outcome.outputs.only_a.as_deref(),
        ),
        (
            "Only in file 2",
            &comparison.result.only_b,
            outcome.outputs.only_b.as_deref(),
        ),
    ];
    for (title, ids, path) in previews {
        println!();
        println!("{title} ({}):", ids.len());
        print_preview(ids, header, outcome.preview_rows);
        if let Some(path) = path {
            println!("Saved: {}", path.display());
        }
    }

    println!();
    if outcome.outputs.shared.is_some() {
        println!("Output: {}", outcome.output_dir.display());
    } else {
        println!("Dry run: no files written.");
    }
    if let Some(path) = &outcome.summary_json {
        println!("Summary: {}", path.display());
    }
}

/// Prints the guessed identifier column for `inspect`.
pub fn print_guess(overview: &SourceOverview, keyword: &str) {
    match &overview.id_column {
        Some(column) => println!("Likely smartcard column: '{column}' (keyword '{keyword}')"),
        None => println!("No columns found."),
    }
}

fn print_preview(ids: &IdentifierSet, header: &str, limit: usize) {
    if ids.is_empty() {
        println!("(none)");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell(header)]);
    apply_table_style(&mut table);
    for id in ids.iter().take(limit) {
        table.add_row(vec![Cell::new(id.as_str())]);
    }
    let hidden = ids.len().saturating_sub(limit);
    if hidden > 0 {
        table.add_row(vec![dim_cell(format!("... and {hidden} more"))]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn column_cell(name: &str, is_id: bool) -> Cell {
    if is_id {
        Cell::new(format!("{name} *"))
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(name)
    }
}

fn kind_cell(kind: ColumnKind) -> Cell {
    match kind {
        ColumnKind::Empty => dim_cell(kind.label()),
        ColumnKind::Mixed => Cell::new(kind.label()).fg(Color::Yellow),
        _ => Cell::new(kind.label()),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
