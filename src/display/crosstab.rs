//! Crosstab display formatting

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};

use super::number::format_number;
use crate::reports::Crosstab;

/// Marker for a receiver with no charges in a row
const ABSENT: &str = "-";

/// Format the pivot: one row per service/provider/price, one column per
/// receiving unit, plus a row total
pub fn format_crosstab(crosstab: &Crosstab) -> String {
    if crosstab.is_empty() {
        return "No data to summarize.".to_string();
    }

    let mut builder = Builder::default();

    let mut header = vec![
        "Service".to_string(),
        "Providing Unit".to_string(),
        "Unit Price".to_string(),
    ];
    header.extend(crosstab.columns.iter().cloned());
    header.push("Total".to_string());
    builder.push_record(header);

    for row in &crosstab.rows {
        let mut line = vec![
            row.service_name.clone(),
            row.providing_unit.clone(),
            format_number(row.unit_price),
        ];
        line.extend(
            crosstab
                .cells(row)
                .map(|cell| cell.map_or_else(|| ABSENT.to_string(), format_number)),
        );
        line.push(format_number(row.total_quantity()));
        builder.push_record(line);
    }

    let mut table = builder.build();
    table
        .with(Style::sharp())
        .with(Modify::new(Columns::new(2..)).with(Alignment::right()));

    table.to_string()
}
