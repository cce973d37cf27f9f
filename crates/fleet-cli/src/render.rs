//! Terminal rendering with `comfy-table`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use fleet_model::{
    Band, Condition, HistoryRecord, Limit, PartCatalog, PartStatus, RuleBook, ThresholdRule,
    Vehicle,
};
use fleet_query::FleetStats;

/// Part columns shown in the fleet table. The full catalog does not fit a
/// terminal; `fleet show` prints every part for one vehicle.
const MAX_PART_COLUMNS: usize = 7;

pub fn print_stats(stats: &FleetStats) {
    println!(
        "Vehicles: {}   good: {}   warning: {}   critical: {}",
        stats.total, stats.with_good, stats.with_warning, stats.with_critical
    );
}

pub fn print_fleet_table(vehicles: &[&Vehicle], catalog: &PartCatalog, rules: &RuleBook) {
    let part_names: Vec<&str> = catalog.names().take(MAX_PART_COLUMNS).collect();
    let mut table = Table::new();
    let mut header = vec![
        header_cell("City"),
        header_cell("License"),
        header_cell("Model"),
        header_cell("Year"),
        header_cell("Mileage"),
    ];
    header.extend(part_names.iter().map(|name| header_cell(name)));
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    for vehicle in vehicles {
        let mut row = vec![
            Cell::new(&vehicle.city),
            Cell::new(&vehicle.license).add_attribute(Attribute::Bold),
            Cell::new(&vehicle.model),
            Cell::new(&vehicle.year),
            Cell::new(group_digits(vehicle.current_mileage)),
        ];
        for name in &part_names {
            let status = vehicle.parts.get(*name).and_then(Option::as_ref);
            row.push(part_cell(status, rules.rule_for(name)));
        }
        table.add_row(row);
    }
    println!("{table}");
}

pub fn print_vehicle(vehicle: &Vehicle, catalog: &PartCatalog) {
    println!("License: {}", vehicle.license);
    println!("Model: {} ({})", vehicle.model, vehicle.year);
    println!("City: {}", vehicle.city);
    println!("Mileage: {} km", group_digits(vehicle.current_mileage));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Part"),
        header_cell("Last service"),
        header_cell("At mileage"),
        header_cell("Since, km"),
        header_cell("Since"),
        header_cell("Condition"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    // Catalog order, not BTreeMap order.
    for name in catalog.names() {
        let status = vehicle.parts.get(name).and_then(Option::as_ref);
        let row = match status {
            Some(status) => vec![
                Cell::new(name),
                Cell::new(&status.date),
                Cell::new(group_digits(status.mileage)),
                Cell::new(group_digits(status.mileage_diff)),
                Cell::new(&status.time_diff),
                condition_cell(status.condition),
            ],
            None => vec![
                Cell::new(name),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("no record"),
            ],
        };
        table.add_row(row);
    }
    println!("{table}");
}

pub fn print_history(records: &[&HistoryRecord]) {
    if records.is_empty() {
        println!("No matching history records.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Description"),
        header_cell("Mileage"),
        header_cell("Code"),
        header_cell("Unit"),
        header_cell("Qty"),
        header_cell("Price"),
        header_cell("Total"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Right);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.date),
            Cell::new(&record.description),
            Cell::new(group_digits(record.mileage)),
            Cell::new(&record.part_code),
            Cell::new(&record.unit),
            Cell::new(format_quantity(record.quantity)),
            Cell::new(format_money(record.price)),
            Cell::new(format_money(record.total_with_vat)),
            Cell::new(&record.status),
        ]);
    }
    println!("{table}");
}

pub fn print_catalog(catalog: &PartCatalog, rules: &RuleBook) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Part"),
        header_cell("Keywords"),
        header_cell("Rule"),
    ]);
    apply_table_style(&mut table);
    for category in &catalog.categories {
        table.add_row(vec![
            Cell::new(&category.name),
            Cell::new(category.keywords.join(", ")),
            Cell::new(describe_rule(rules.rule_for(&category.name))),
        ]);
    }
    println!("{table}");
}

fn part_cell(status: Option<&PartStatus>, rule: ThresholdRule) -> Cell {
    let Some(status) = status else {
        return dim_cell("-");
    };
    let text = match rule {
        ThresholdRule::Months { .. } | ThresholdRule::Years { .. } => status.time_diff.clone(),
        _ => format!("{} км", group_digits(status.mileage_diff)),
    };
    Cell::new(text).fg(condition_color(status.condition))
}

fn condition_cell(condition: Condition) -> Cell {
    let cell = Cell::new(condition.as_str()).fg(condition_color(condition));
    match condition {
        Condition::Critical => cell.add_attribute(Attribute::Bold),
        _ => cell,
    }
}

fn condition_color(condition: Condition) -> Color {
    match condition {
        Condition::Good => Color::Green,
        Condition::Warning => Color::Yellow,
        Condition::Critical => Color::Red,
    }
}

fn describe_rule(rule: ThresholdRule) -> String {
    match rule {
        ThresholdRule::Distance { band } => format!("distance: {}", describe_band(band, "km")),
        ThresholdRule::DistanceByModelYear {
            cutoff_year,
            at_or_after,
            before,
        } => format!(
            "distance, from {cutoff_year}: {}; older: {}",
            describe_band(at_or_after, "km"),
            describe_band(before, "km")
        ),
        ThresholdRule::Months { band } => format!("age: {}", describe_band(band, "months")),
        ThresholdRule::Years { band } => format!("age: {}", describe_band(band, "years")),
    }
}

fn describe_band(band: Band, unit: &str) -> String {
    format!(
        "warn {}, critical {} {unit}",
        describe_limit(band.warning),
        describe_limit(band.critical)
    )
}

fn describe_limit(limit: Limit) -> String {
    let symbol = if limit.inclusive { ">=" } else { ">" };
    format!("{symbol}{}", group_digits(limit.value as i64))
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
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

/// Thousands grouping with spaces, matching the source sheets.
fn group_digits(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn format_quantity(value: f64) -> String {
    if (value - value.round()).abs() < f64::EPSILON {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.2}")
    }
}

fn format_money(value: f64) -> String {
    format!("{value:.2}")
}
