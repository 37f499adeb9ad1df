//! Charge form validation
//!
//! Only presence is checked. Numbers are never rejected: a quantity that
//! does not parse becomes 0 and an absent price is 0.

use crate::error::{Field, PricingError, PricingResult};
use crate::models::{ChargeDetails, ChargeInput};

/// Fields that must be non-blank, in the order they are checked
const REQUIRED_FIELDS: [Field; 4] = [
    Field::ServiceName,
    Field::ProvidingUnit,
    Field::ReceivingUnit,
    Field::Quantity,
];

/// Check the required fields and coerce the input into typed details.
///
/// Reports the first blank field in `REQUIRED_FIELDS` order.
pub fn validate(input: &ChargeInput) -> PricingResult<ChargeDetails> {
    for field in REQUIRED_FIELDS {
        if field_text(input, field).trim().is_empty() {
            return Err(PricingError::MissingField(field));
        }
    }

    Ok(input.to_details())
}

fn field_text(input: &ChargeInput, field: Field) -> &str {
    match field {
        Field::Date => &input.date,
        Field::ProvidingUnit => &input.providing_unit,
        Field::ServiceName => &input.service_name,
        Field::UnitPrice => &input.unit_price,
        Field::ReceivingUnit => &input.receiving_unit,
        Field::Quantity => &input.quantity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_input() -> ChargeInput {
        ChargeInput {
            date: "2024-01-01".into(),
            providing_unit: "IT".into(),
            service_name: "Support".into(),
            unit_price: "150".into(),
            receiving_unit: "Branch A".into(),
            quantity: "3".into(),
        }
    }

    #[test]
    fn test_complete_input_passes() {
        let details = validate(&complete_input()).unwrap();
        assert_eq!(details.unit_price, 150.0);
        assert_eq!(details.quantity, 3.0);
        assert_eq!(details.total_amount(), 450.0);
    }

    #[test]
    fn test_missing_receiving_unit() {
        let mut input = complete_input();
        input.receiving_unit.clear();
        assert!(matches!(
            validate(&input),
            Err(PricingError::MissingField(Field::ReceivingUnit))
        ));
    }

    #[test]
    fn test_each_required_field_is_enforced() {
        for field in REQUIRED_FIELDS {
            let mut input = complete_input();
            match field {
                Field::ServiceName => input.service_name = "  ".into(),
                Field::ProvidingUnit => input.providing_unit.clear(),
                Field::ReceivingUnit => input.receiving_unit.clear(),
                Field::Quantity => input.quantity.clear(),
                _ => unreachable!(),
            }
            let err = validate(&input).unwrap_err();
            assert!(err.is_missing_field(), "{} should be required", field);
        }
    }

    #[test]
    fn test_all_blank_reports_a_missing_field() {
        let err = validate(&ChargeInput::default()).unwrap_err();
        assert!(err.is_missing_field());
    }

    #[test]
    fn test_empty_price_defaults_to_zero() {
        let mut input = complete_input();
        input.unit_price.clear();
        let details = validate(&input).unwrap();
        assert_eq!(details.unit_price, 0.0);
        assert_eq!(details.total_amount(), 0.0);
    }

    #[test]
    fn test_unparsable_quantity_is_accepted_as_zero() {
        let mut input = complete_input();
        input.quantity = "n/a".into();
        let details = validate(&input).unwrap();
        assert_eq!(details.quantity, 0.0);
    }

    #[test]
    fn test_blank_date_is_not_a_validation_error() {
        let mut input = complete_input();
        input.date.clear();
        assert!(validate(&input).is_ok());
    }
}
