//! Export/import round trip through the public API

use std::collections::HashMap;

use transfer_pricing::export::{encode, HeaderLanguage};
use transfer_pricing::import::{decode, decode_with_default_date};
use transfer_pricing::models::{ChargeDetails, ChargeRecord};
use transfer_pricing::reports::Crosstab;

fn details(
    date: &str,
    provider: &str,
    service: &str,
    price: f64,
    receiver: &str,
    quantity: f64,
) -> ChargeDetails {
    ChargeDetails {
        date: date.into(),
        providing_unit: provider.into(),
        service_name: service.into(),
        unit_price: price,
        receiving_unit: receiver.into(),
        quantity,
    }
}

/// Count of each 6-tuple, keyed by its textual form
fn multiset(records: &[ChargeRecord]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for record in records {
        let d = record.details();
        let key = format!(
            "{}|{}|{}|{:?}|{}|{:?}",
            d.date, d.providing_unit, d.service_name, d.unit_price, d.receiving_unit, d.quantity
        );
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

fn sample() -> Vec<ChargeRecord> {
    vec![
        details("2024-01-01", "IT แผนก", "บริการ IT Support", 1500.0, "สาขา A", 2.0),
        details("2024-01-02", "HR แผนก", "บริการปรึกษา", 0.1, "โรงงาน 1", 3.0),
        details("2024-01-02", "HR แผนก", "บริการปรึกษา", 0.1, "โรงงาน 1", 3.0),
        details("2024-02-29", "Finance", "Audit", 0.0, "HQ", 0.5),
        details("2024-03-01", "Finance", "Audit", 1e-7, "HQ", 123456789.25),
        details("2024-03-02", "Marketing", "Campaign", -20.0, "Branch C", 1.0),
    ]
    .into_iter()
    .map(ChargeRecord::create)
    .collect()
}

#[test]
fn round_trip_preserves_multiset() {
    let records = sample();

    for language in [HeaderLanguage::Thai, HeaderLanguage::English] {
        let text = encode(&records, language).unwrap();
        let decoded = decode(text.as_bytes()).unwrap();

        assert_eq!(decoded.len(), records.len());
        assert_eq!(multiset(&decoded), multiset(&records));
    }
}

#[test]
fn round_trip_mints_new_ids() {
    let records = sample();
    let text = encode(&records, HeaderLanguage::Thai).unwrap();
    let decoded = decode(text.as_bytes()).unwrap();

    for record in &decoded {
        assert!(records.iter().all(|r| r.id() != record.id()));
    }
}

#[test]
fn round_trip_preserves_crosstab() {
    let records = sample();
    let text = encode(&records, HeaderLanguage::Thai).unwrap();
    let decoded = decode(text.as_bytes()).unwrap();

    assert_eq!(Crosstab::aggregate(&decoded), Crosstab::aggregate(&records));
}

#[test]
fn decode_reference_example() {
    let records = decode("h1,h2,h3,h4,h5,h6\n2024-01-01,A,S,10,X,2".as_bytes()).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].details(),
        &details("2024-01-01", "A", "S", 10.0, "X", 2.0)
    );
    assert_eq!(records[0].total_amount(), 20.0);
}

#[test]
fn decode_skips_five_field_line() {
    let text = "header\n2024-01-01,A,S,10,X\n2024-01-02,B,T,1,Y,1\n";
    let records = decode_with_default_date(text.as_bytes(), "2024-12-31").unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].providing_unit(), "B");
}
