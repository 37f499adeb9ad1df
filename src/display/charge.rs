//! Charge list display formatting

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};

use super::number::format_number;
use crate::models::ChargeRecord;

/// Format the charge list as a table with 1-based row numbers
pub fn format_charge_list(records: &[ChargeRecord]) -> String {
    if records.is_empty() {
        return "No records yet.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record([
        "#",
        "Date",
        "Providing Unit",
        "Service",
        "Receiving Unit",
        "Unit Price",
        "Quantity",
        "Total",
    ]);

    for (i, record) in records.iter().enumerate() {
        builder.push_record([
            (i + 1).to_string(),
            record.date().to_string(),
            record.providing_unit().to_string(),
            record.service_name().to_string(),
            record.receiving_unit().to_string(),
            format_number(record.unit_price()),
            format_number(record.quantity()),
            format_number(record.total_amount()),
        ]);
    }

    let grand_total: f64 = records.iter().map(ChargeRecord::total_amount).sum();

    let mut table = builder.build();
    table
        .with(Style::sharp())
        .with(Modify::new(Columns::new(5..)).with(Alignment::right()));

    format!(
        "{}\n{} record(s), total {}",
        table,
        records.len(),
        format_number(grand_total)
    )
}

/// Format a single charge for display
pub fn format_charge_details(number: usize, record: &ChargeRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Charge #{} ({})\n", number, record.id()));
    output.push_str(&format!("Date:           {}\n", record.date()));
    output.push_str(&format!("Providing unit: {}\n", record.providing_unit()));
    output.push_str(&format!("Service:        {}\n", record.service_name()));
    output.push_str(&format!("Receiving unit: {}\n", record.receiving_unit()));
    output.push_str(&format!("Unit price:     {}\n", format_number(record.unit_price())));
    output.push_str(&format!("Quantity:       {}\n", format_number(record.quantity())));
    output.push_str(&format!("Total:          {}\n", format_number(record.total_amount())));

    output
}
