//! CSV Export functionality
//!
//! Writes charge records in the dialect `import::csv` reads back: a UTF-8
//! byte-order mark, a localized header row, then one line per record with
//! the total amount as a trailing column.
//!
//! Values are written verbatim, without quoting. A value containing a comma
//! or a line break produces a file that does not read back correctly.

use std::io::Write;

use chrono::NaiveDate;
use clap::ValueEnum;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{PricingError, PricingResult};
use crate::models::ChargeRecord;

/// Byte-order mark so spreadsheet tools detect UTF-8
pub const BOM: &str = "\u{feff}";

/// Language of the exported header row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HeaderLanguage {
    #[default]
    Thai,
    English,
}

impl HeaderLanguage {
    /// Column titles, in column order
    pub fn header(&self) -> [&'static str; 7] {
        match self {
            Self::Thai => [
                "วันที่",
                "หน่วยงานให้บริการ",
                "ชื่อบริการ",
                "ราคา",
                "หน่วยงานรับบริการ",
                "จำนวน",
                "ยอดรวม",
            ],
            Self::English => [
                "Date",
                "Providing Unit",
                "Service",
                "Unit Price",
                "Receiving Unit",
                "Quantity",
                "Total Amount",
            ],
        }
    }
}

/// Write records as CSV, BOM first
pub fn write_records<W: Write>(
    writer: W,
    records: &[ChargeRecord],
    language: HeaderLanguage,
) -> PricingResult<()> {
    let mut writer = writer;
    writer
        .write_all(BOM.as_bytes())
        .map_err(|e| PricingError::Export(e.to_string()))?;

    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer
        .write_record(language.header())
        .map_err(|e| PricingError::Export(e.to_string()))?;

    for record in records {
        let unit_price = record.unit_price().to_string();
        let quantity = record.quantity().to_string();
        let total_amount = record.total_amount().to_string();

        csv_writer
            .write_record([
                record.date(),
                record.providing_unit(),
                record.service_name(),
                unit_price.as_str(),
                record.receiving_unit(),
                quantity.as_str(),
                total_amount.as_str(),
            ])
            .map_err(|e| PricingError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| PricingError::Export(e.to_string()))?;

    Ok(())
}

/// Encode records to CSV text
pub fn encode(records: &[ChargeRecord], language: HeaderLanguage) -> PricingResult<String> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, records, language)?;
    String::from_utf8(buffer).map_err(|e| PricingError::Export(e.to_string()))
}

/// Suggested file name, e.g. `transfer_pricing_2024-01-31.csv`
pub fn export_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", prefix, date.format("%Y-%m-%d"))
}
