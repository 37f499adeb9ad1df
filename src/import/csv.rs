//! CSV import
//!
//! Reads the plain comma dialect written by `export::csv`: one header line
//! (ignored), then `date, providingUnit, serviceName, unitPrice,
//! receivingUnit, quantity` per line. Any further columns are ignored.
//!
//! Quoting is not part of the dialect. A `"` is an ordinary character and a
//! comma inside a value always splits it, so values containing commas cannot
//! be imported intact.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{PricingError, PricingResult};
use crate::models::charge::today_iso_date;
use crate::models::{parse_lenient, ChargeDetails, ChargeRecord};

/// Number of leading columns a data line must have
pub const FIELD_COUNT: usize = 6;

/// Decode CSV text into new records, defaulting blank dates to today.
///
/// Lines that are blank or have fewer than six fields are skipped. Input
/// that cannot be read at all (invalid UTF-8, no header line) fails the
/// whole batch.
pub fn decode<R: Read>(input: R) -> PricingResult<Vec<ChargeRecord>> {
    decode_with_default_date(input, &today_iso_date())
}

/// Same as [`decode`] with an explicit date for rows that have none
pub fn decode_with_default_date<R: Read>(
    input: R,
    default_date: &str,
) -> PricingResult<Vec<ChargeRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(input);

    let mut header_seen = false;
    let mut records = Vec::new();

    for (line, result) in reader.records().enumerate() {
        let row = result.map_err(|e| {
            PricingError::ImportParse(format!("Unreadable CSV near line {}: {}", line + 1, e))
        })?;

        if is_blank(&row) {
            continue;
        }

        if !header_seen {
            header_seen = true;
            continue;
        }

        if row.len() < FIELD_COUNT {
            debug!(line = line + 1, fields = row.len(), "skipping short CSV line");
            continue;
        }

        records.push(ChargeRecord::create(parse_row(&row, default_date)));
    }

    if !header_seen {
        return Err(PricingError::ImportParse(
            "Input has no header line".to_string(),
        ));
    }

    Ok(records)
}

fn parse_row(row: &StringRecord, default_date: &str) -> ChargeDetails {
    let field = |i: usize| row.get(i).map(trim_field).unwrap_or_default();

    let date = match field(0) {
        "" => default_date.to_string(),
        date => date.to_string(),
    };

    ChargeDetails {
        date,
        providing_unit: field(1).to_string(),
        service_name: field(2).to_string(),
        unit_price: parse_lenient(field(3)),
        receiving_unit: field(4).to_string(),
        quantity: parse_lenient(field(5)),
    }
}

/// A line with nothing but whitespace on it
fn is_blank(row: &StringRecord) -> bool {
    row.len() <= 1 && row.get(0).map(trim_field).unwrap_or_default().is_empty()
}

/// Whitespace trim that also drops a byte-order mark
fn trim_field(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_str(text: &str) -> Vec<ChargeRecord> {
        decode_with_default_date(text.as_bytes(), "2024-06-30").unwrap()
    }

    #[test]
    fn test_single_line() {
        let records = decode_str("h1,h2,h3,h4,h5,h6\n2024-01-01,A,S,10,X,2");
        assert_eq!(records.len(), 1);

        let r = &records[0];
        assert_eq!(r.date(), "2024-01-01");
        assert_eq!(r.providing_unit(), "A");
        assert_eq!(r.service_name(), "S");
        assert_eq!(r.unit_price(), 10.0);
        assert_eq!(r.receiving_unit(), "X");
        assert_eq!(r.quantity(), 2.0);
        assert_eq!(r.total_amount(), 20.0);
    }

    #[test]
    fn test_short_line_is_skipped() {
        let records = decode_str("h\n2024-01-01,A,S,10,X,2\n2024-01-02,A,S,10,X\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date(), "2024-01-01");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let text = "\n   \nheader\n\n2024-01-01,A,S,1,X,1\n  \n2024-01-02,B,T,2,Y,2\n\n";
        let records = decode_str(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].providing_unit(), "B");
    }

    #[test]
    fn test_header_is_never_read_as_data() {
        let records = decode_str("2024-01-01,A,S,10,X,2\n2024-01-02,B,T,3,Y,4");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date(), "2024-01-02");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let records = decode_str("h\r\n 2024-01-01 , IT Dept ,  Support ,  7.5 , HQ ,\t4 \r\n");
        let r = &records[0];
        assert_eq!(r.date(), "2024-01-01");
        assert_eq!(r.providing_unit(), "IT Dept");
        assert_eq!(r.service_name(), "Support");
        assert_eq!(r.unit_price(), 7.5);
        assert_eq!(r.receiving_unit(), "HQ");
        assert_eq!(r.quantity(), 4.0);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let records = decode_str("h\n2024-01-01,A,S,10,X,2,20,ignored");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].total_amount(), 20.0);
    }

    #[test]
    fn test_unparsable_numbers_become_zero() {
        let records = decode_str("h\n2024-01-01,A,S,free,X,lots");
        assert_eq!(records[0].unit_price(), 0.0);
        assert_eq!(records[0].quantity(), 0.0);
        assert_eq!(records[0].total_amount(), 0.0);
    }

    #[test]
    fn test_blank_date_uses_default() {
        let records = decode_str("h\n,A,S,1,X,1");
        assert_eq!(records[0].date(), "2024-06-30");
    }

    #[test]
    fn test_quotes_are_literal() {
        let records = decode_str("h\n2024-01-01,\"A,B\",S,1,X,1");
        // The quoted comma still splits the value
        assert_eq!(records[0].providing_unit(), "\"A");
        assert_eq!(records[0].service_name(), "B\"");
    }

    #[test]
    fn test_bom_prefixed_header() {
        let records = decode_str("\u{feff}วันที่,a,b,c,d,e\n2024-01-01,A,S,1,X,1");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_ids_unique_within_batch() {
        let text = "h\n2024-01-01,A,S,1,X,1\n2024-01-01,A,S,1,X,1\n2024-01-01,A,S,1,X,1";
        let records = decode_str(text);
        let ids: std::collections::HashSet<_> = records.iter().map(|r| r.id()).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        for text in ["", "\n\n", "   \n \t \n"] {
            let err = decode_with_default_date(text.as_bytes(), "2024-01-01").unwrap_err();
            assert!(matches!(err, PricingError::ImportParse(_)), "{:?}", text);
        }
    }

    #[test]
    fn test_header_only_is_empty_batch() {
        assert!(decode_str("h1,h2,h3,h4,h5,h6\n").is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let bytes: &[u8] = b"h\n2024-01-01,\xff\xfe,S,1,X,1\n";
        let err = decode_with_default_date(bytes, "2024-01-01").unwrap_err();
        assert!(matches!(err, PricingError::ImportParse(_)));
    }
}
