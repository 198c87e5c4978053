//! Table rendering for command output.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use vitals_core::TimelineEvent;
use vitals_model::{CanonicalRecord, EntityType, FieldKind, FieldSpec, NumberConstraint, schema_for};
use vitals_transform::normalization::{aliases_for, date_aliases};

use crate::commands::{ExportOutcome, ImportOutcome};

/// Widest a free-text cell gets before it is cut.
const MAX_CELL_CHARS: usize = 40;

pub fn print_import_summary(outcome: &ImportOutcome) {
    println!("File: {}", outcome.file.display());
    if outcome.dry_run {
        println!("Dry run: nothing was written to the store.");
    }
    println!("{}", import_table(outcome));
}

pub fn print_export_summary(outcome: &ExportOutcome) {
    println!(
        "Exported {} {} record(s) to {}",
        outcome.records,
        outcome.entity,
        outcome.path.display()
    );
}

pub fn print_records(entity: EntityType, records: &[CanonicalRecord]) {
    if records.is_empty() {
        println!("No {} records stored.", entity.label().to_lowercase());
        return;
    }
    println!("{}", records_table(entity, records));
}

pub fn print_timeline(events: &[TimelineEvent]) {
    if events.is_empty() {
        println!("The store is empty.");
        return;
    }
    println!("{}", timeline_table(events));
}

pub fn print_fields(entity: Option<EntityType>) {
    let entities: Vec<EntityType> = match entity {
        Some(entity) => vec![entity],
        None => EntityType::ALL.to_vec(),
    };
    for entity in entities {
        println!("{} ({entity})", entity.label());
        println!("{}", fields_table(entity));
    }
}

/// Per-entity counts for an import, with a date range.
pub fn import_table(outcome: &ImportOutcome) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Entity"),
        header_cell("Records"),
        header_cell("Stored"),
        header_cell("From"),
        header_cell("To"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    let dates = outcome.records.iter().map(CanonicalRecord::date);
    let from = dates.clone().min().unwrap_or("-");
    let to = dates.max().unwrap_or("-");
    table.add_row(vec![
        Cell::new(outcome.entity.label()),
        Cell::new(outcome.records.len()),
        count_cell(outcome.stored(), Color::Green),
        Cell::new(from),
        Cell::new(to),
    ]);
    table
}

/// One row per record: short id, then every declared field.
pub fn records_table(entity: EntityType, records: &[CanonicalRecord]) -> Table {
    let schema = schema_for(entity);
    let mut table = Table::new();
    let mut header = vec![header_cell("Id")];
    header.extend(schema.field_names().map(header_cell));
    table.set_header(header);
    apply_table_style(&mut table);

    for (index, spec) in schema.fields.iter().enumerate() {
        if matches!(spec.kind, FieldKind::Number(_)) {
            align_column(&mut table, index + 1, CellAlignment::Right);
        }
    }

    for record in records {
        let id = record
            .id()
            .map(|id| id.to_string().chars().take(8).collect::<String>())
            .unwrap_or_else(|| "-".to_string());
        let mut row = vec![dim_cell(id)];
        row.extend(
            record
                .field_values()
                .into_iter()
                .map(|(_, value)| text_cell(&value.render())),
        );
        table.add_row(row);
    }
    table
}

pub fn timeline_table(events: &[TimelineEvent]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Category"),
        header_cell("Title"),
        header_cell("Details"),
        header_cell("Notes"),
    ]);
    apply_table_style(&mut table);
    for event in events {
        table.add_row(vec![
            Cell::new(&event.entry_date),
            Cell::new(event.category).fg(Color::Cyan),
            text_cell(&event.title).add_attribute(Attribute::Bold),
            text_cell(&event.subtitle),
            text_cell(event.notes.as_deref().unwrap_or_default()),
        ]);
    }
    table
}

/// Canonical fields of `entity` with their type, default and the CSV
/// headers that map onto them.
pub fn fields_table(entity: EntityType) -> Table {
    let schema = schema_for(entity);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Type"),
        header_cell("Required"),
        header_cell("Default"),
        header_cell("Accepted headers"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);

    for spec in schema.fields {
        let mut headers = vec![spec.name];
        if spec.name == entity.date_field() {
            headers.extend(date_aliases(entity).iter().copied());
        } else {
            headers.extend(aliases_for(entity, spec.name));
        }
        headers.dedup();
        table.add_row(vec![
            Cell::new(spec.name).add_attribute(Attribute::Bold),
            Cell::new(kind_label(spec)),
            if spec.required && spec.default.is_none() {
                Cell::new("yes").fg(Color::Yellow)
            } else {
                dim_cell("no")
            },
            spec.default.map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(headers.join(", ")),
        ]);
    }
    table
}

fn kind_label(spec: &FieldSpec) -> String {
    match spec.kind {
        FieldKind::Text => "text".to_string(),
        FieldKind::Date => "date".to_string(),
        FieldKind::Number(NumberConstraint::Any) => "number".to_string(),
        FieldKind::Number(NumberConstraint::Positive) => "number > 0".to_string(),
        FieldKind::Number(NumberConstraint::NonNegative) => "number >= 0".to_string(),
        FieldKind::Enum(values) => values.join(" | "),
        FieldKind::Boolean => "yes/no".to_string(),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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

/// Free text, cut to [`MAX_CELL_CHARS`].
fn text_cell(value: &str) -> Cell {
    if value.chars().count() > MAX_CELL_CHARS {
        let cut: String = value.chars().take(MAX_CELL_CHARS - 1).collect();
        Cell::new(format!("{cut}…"))
    } else {
        Cell::new(value)
    }
}
