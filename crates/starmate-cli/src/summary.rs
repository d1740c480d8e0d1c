use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use chrono::NaiveDate;
use starmate_client::RemoteProfile;
use starmate_model::{FormValidationError, ProfileRecord};

use crate::types::BatchReport;

const NO_VALUE: &str = "-";

pub fn print_record(record: &ProfileRecord) {
    println!("{}", record_table(record));
}

pub fn record_table(record: &ProfileRecord) -> Table {
    let mut table = key_value_table();
    add_pair(&mut table, "Name", Cell::new(&record.name));
    add_pair(&mut table, "Birthday", Cell::new(record.birthday_text()));
    add_pair(&mut table, "Age", Cell::new(record.age));
    add_pair(&mut table, "Gender", Cell::new(record.gender.label()));
    add_pair(&mut table, "Zodiac", sign_cell(record.zodiac.as_str()));
    add_pair(&mut table, "Horoscope", Cell::new(&record.horoscope));
    add_pair(&mut table, "Height", Cell::new(format!("{} cm", record.height)));
    add_pair(&mut table, "Weight", Cell::new(format!("{} kg", record.weight)));
    add_pair(&mut table, "Interests", Cell::new(record.interests.join(", ")));
    table
}

pub fn print_errors(errors: &FormValidationError) {
    eprintln!("{}", error_table(errors));
}

/// One row per failing field, in form order.
pub fn error_table(errors: &FormValidationError) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Message")]);
    apply_table_style(&mut table);
    for (field, message) in errors.iter() {
        table.add_row(vec![
            Cell::new(field.as_str()).fg(Color::Blue),
            Cell::new(message).fg(Color::Red),
        ]);
    }
    table
}

pub fn print_batch_summary(report: &BatchReport) {
    println!("File: {}", report.source.display());
    println!("{}", batch_table(report));
    let signs = report.zodiac_counts();
    if !signs.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Zodiac"), header_cell("Profiles")]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for (sign, count) in signs {
            table.add_row(vec![sign_cell(sign.as_str()), Cell::new(count)]);
        }
        println!("{table}");
    }
}

pub fn batch_table(report: &BatchReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Name"),
        header_cell("Zodiac"),
        header_cell("Age"),
        header_cell("Errors"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for outcome in &report.rows {
        let row = match &outcome.result {
            Ok(record) => vec![
                Cell::new(outcome.row),
                Cell::new(&record.name),
                sign_cell(record.zodiac.as_str()),
                Cell::new(record.age),
                dim_cell(NO_VALUE),
            ],
            Err(errors) => vec![
                Cell::new(outcome.row),
                dim_cell(NO_VALUE),
                dim_cell(NO_VALUE),
                dim_cell(NO_VALUE),
                Cell::new(
                    errors
                        .iter()
                        .map(|(field, message)| format!("{field}: {message}"))
                        .collect::<Vec<_>>()
                        .join("\n"),
                )
                .fg(Color::Red),
            ],
        };
        table.add_row(row);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} valid", report.valid_count())).add_attribute(Attribute::Bold),
        dim_cell(NO_VALUE),
        dim_cell(NO_VALUE),
        count_cell(report.invalid_count(), Color::Red).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Stored profile as returned by the API, with the age recomputed for `today`.
pub fn print_remote_profile(profile: &RemoteProfile, today: NaiveDate) {
    let mut table = key_value_table();
    add_pair(&mut table, "Email", optional_cell(profile.email.as_deref()));
    add_pair(&mut table, "Username", optional_cell(profile.username.as_deref()));
    add_pair(&mut table, "Name", optional_cell(profile.name.as_deref()));
    add_pair(&mut table, "Birthday", optional_cell(profile.birthday.as_deref()));
    add_pair(
        &mut table,
        "Age",
        profile
            .age_on(today)
            .map_or_else(|| dim_cell(NO_VALUE), Cell::new),
    );
    add_pair(&mut table, "Gender", optional_cell(profile.gender.as_deref()));
    add_pair(
        &mut table,
        "Zodiac",
        profile
            .zodiac()
            .map_or_else(|| dim_cell(NO_VALUE), |sign| sign_cell(sign.as_str())),
    );
    add_pair(&mut table, "Horoscope", optional_cell(profile.horoscope()));
    add_pair(
        &mut table,
        "Height",
        profile
            .height
            .map_or_else(|| dim_cell(NO_VALUE), |h| Cell::new(format!("{h} cm"))),
    );
    add_pair(
        &mut table,
        "Weight",
        profile
            .weight
            .map_or_else(|| dim_cell(NO_VALUE), |w| Cell::new(format!("{w} kg"))),
    );
    let interests = profile.interests.join(", ");
    add_pair(
        &mut table,
        "Interests",
        optional_cell(Some(interests.as_str()).filter(|text| !text.is_empty())),
    );
    println!("{table}");
}

fn key_value_table() -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table
}

fn add_pair(table: &mut Table, label: &str, value: Cell) {
    table.add_row(vec![header_cell(label), value]);
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(text) => Cell::new(text),
        None => dim_cell(NO_VALUE),
    }
}

fn sign_cell(sign: &str) -> Cell {
    Cell::new(sign)
        .fg(Color::Magenta)
        .add_attribute(Attribute::Bold)
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
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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
