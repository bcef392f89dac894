use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use eda_ingest::format_numeric;
use eda_model::{
    AmountRanking, ColumnKind, EntityFragment, NumericSummary, Report, Statistics, TablePreview,
};

use crate::commands::AnalyzeResult;

pub fn print_summary(result: &AnalyzeResult) {
    let report = &result.report;
    println!(
        "Dataset: {} ({} rows x {} columns)",
        report.source, report.row_count, report.column_count
    );
    println!("Output: {}", result.output_dir.display());
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }

    print_section("Preview", preview_table(&report.preview));
    print_section("Columns", column_table(report));
    if let Some(table) = numeric_table(&report.statistics) {
        print_section("Numeric statistics", table);
    }
    if let Some(table) = category_table(&report.statistics) {
        print_section("Top categories", table);
    }
    print_section("Charts", chart_table(report));
    print_entity("Customers", &report.entities.customers);
    print_entity("Products", &report.entities.products);

    if !report.recommendations.is_empty() {
        println!();
        println!("Recommendations:");
        for recommendation in &report.recommendations {
            println!("- {recommendation}");
        }
    }
    if result.has_dropped_charts() {
        eprintln!("Dropped charts:");
        for dropped in &report.dropped_charts {
            eprintln!("- {}: {}", dropped.title, dropped.reason);
        }
    }
}

fn print_section(title: &str, table: Table) {
    println!();
    println!("{title}:");
    println!("{table}");
}

fn preview_table(preview: &TablePreview) -> Table {
    let mut table = Table::new();
    table.set_header(preview.columns.iter().map(|name| header_cell(name)));
    apply_table_style(&mut table);
    for row in &preview.rows {
        table.add_row(row.iter().map(|value| {
            if value.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(value)
            }
        }));
    }
    table
}

fn column_table(report: &Report) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Kind"),
        header_cell("Distinct"),
        header_cell("Missing"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for profile in report.profiles.iter() {
        table.add_row(vec![
            Cell::new(&profile.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            dim_cell(&profile.dtype),
            kind_cell(profile.kind),
            Cell::new(profile.cardinality),
            count_cell(profile.missing_count, Color::Yellow),
        ]);
    }
    table
}

fn numeric_table(statistics: &Statistics) -> Option<Table> {
    let summaries = statistics.numeric.as_ref()?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Count"),
        header_cell("Mean"),
        header_cell("Std"),
        header_cell("Min"),
        header_cell("25%"),
        header_cell("50%"),
        header_cell("75%"),
        header_cell("Max"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..9 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for summary in summaries {
        table.add_row(numeric_row(summary));
    }
    Some(table)
}

fn numeric_row(summary: &NumericSummary) -> Vec<Cell> {
    vec![
        Cell::new(&summary.column).add_attribute(Attribute::Bold),
        Cell::new(summary.count),
        number_cell(summary.mean),
        number_cell(summary.std),
        number_cell(summary.min),
        number_cell(summary.q25),
        number_cell(summary.median),
        number_cell(summary.q75),
        number_cell(summary.max),
    ]
}

fn category_table(statistics: &Statistics) -> Option<Table> {
    if statistics.categorical.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Value"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for frequencies in &statistics.categorical {
        for (rank, entry) in frequencies.top.iter().enumerate() {
            let column = if rank == 0 {
                Cell::new(&frequencies.column).add_attribute(Attribute::Bold)
            } else {
                Cell::new("")
            };
            table.add_row(vec![column, Cell::new(&entry.value), Cell::new(entry.count)]);
        }
    }
    Some(table)
}

fn chart_table(report: &Report) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Chart"),
        header_cell("Kind"),
        header_cell("Artifact"),
    ]);
    apply_table_style(&mut table);
    for chart in &report.charts {
        table.add_row(vec![
            Cell::new(&chart.descriptor.title),
            dim_cell(chart.descriptor.kind()),
            Cell::new(chart.artifact.path().display()),
        ]);
    }
    for dropped in &report.dropped_charts {
        table.add_row(vec![
            Cell::new(&dropped.title).fg(Color::DarkGrey),
            dim_cell("-"),
            Cell::new("dropped").fg(Color::Red),
        ]);
    }
    table
}

fn print_entity(title: &str, fragment: &EntityFragment) {
    println!();
    match fragment {
        EntityFragment::NotDetected { message } => {
            println!("{title}: {message}");
        }
        EntityFragment::Detected {
            column,
            by_frequency,
            by_amount,
        } => {
            println!("{title} ({column}):");
            let mut table = Table::new();
            table.set_header(vec![header_cell("Value"), header_cell("Rows")]);
            apply_table_style(&mut table);
            align_column(&mut table, 1, CellAlignment::Right);
            for entry in by_frequency {
                table.add_row(vec![Cell::new(&entry.value), Cell::new(entry.count)]);
            }
            println!("{table}");

            // A failed ranking is omitted; the frequency table stands alone.
            if let AmountRanking::Ranked { rows } = by_amount {
                let mut table = Table::new();
                table.set_header(vec![header_cell("Value"), header_cell("Total")]);
                apply_table_style(&mut table);
                align_column(&mut table, 1, CellAlignment::Right);
                for row in rows {
                    table.add_row(vec![Cell::new(&row.value), Cell::new(format_numeric(row.total))]);
                }
                println!("{table}");
            }
        }
    }
}

fn kind_cell(kind: ColumnKind) -> Cell {
    match kind {
        ColumnKind::Numeric => Cell::new(kind).fg(Color::Green),
        ColumnKind::Categorical => Cell::new(kind).fg(Color::Magenta),
        ColumnKind::Temporal => Cell::new(kind).fg(Color::Cyan),
        ColumnKind::Unclassified => dim_cell(kind),
    }
}

fn number_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format_numeric(value)),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
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
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
