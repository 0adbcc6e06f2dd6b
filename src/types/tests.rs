use super::{Amount, AmountError};
use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn test_amount_successfully_parses_valid_strings() -> Result<()> {
    let test_cases = vec![
        ("1", "1.00"),
        ("1.5", "1.50"),
        ("50000.0", "50000.00"),
        ("  12.34  ", "12.34"),
        ("+7", "7.00"),
        ("0", "0.00"),
        ("-0", "0.00"),
        ("9999.99", "9999.99"),
        ("1.0E7", "10000000.00"),
        ("2.5e3", "2500.00"),
        ("1.25E-1", "0.13"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(Amount::from_str(input_string)?.to_string(), expected_output);
    }

    Ok(())
}

#[test]
fn test_amount_fails_to_parse_invalid_strings() {
    assert!(matches!(Amount::from_str(""), Err(AmountError::InvalidFormat(_))));
    assert!(matches!(Amount::from_str("abc"), Err(AmountError::InvalidFormat(_))));
    assert!(matches!(Amount::from_str("1_000"), Err(AmountError::InvalidFormat(_))));
    assert!(matches!(Amount::from_str("NaN"), Err(AmountError::InvalidFormat(_))));
    assert!(Amount::from_str("1.2.3").is_err());
    assert!(Amount::from_str("1.0E").is_err());
    assert!(Amount::from_str("Infinity").is_err());
}

#[test]
fn test_amount_rejects_negative_values() {
    assert!(matches!(Amount::from_str("-0.01"), Err(AmountError::Negative(_))));
    assert!(matches!(Amount::from_str("-1.0E3"), Err(AmountError::Negative(_))));
    assert!(matches!(Amount::try_from(Decimal::NEGATIVE_ONE), Err(AmountError::Negative(_))));
}

#[test]
fn test_amount_display_rounds_half_away_from_zero() -> Result<()> {
    assert_eq!(Amount::from_str("10.005")?.to_string(), "10.01");
    assert_eq!(Amount::from_str("10.004")?.to_string(), "10.00");

    Ok(())
}

#[test]
fn test_amount_display_respects_width_flags() -> Result<()> {
    let amount = Amount::from_str("5")?;

    assert_eq!(format!("[{amount:<8}]"), "[5.00    ]");
    assert_eq!(format!("[{amount:>8}]"), "[    5.00]");

    Ok(())
}

#[test]
fn test_amount_supports_addition() -> Result<()> {
    let mut total = Amount::default();
    total += Amount::from_str("1.25")?;
    total += Amount::from_str("2.75")?;

    assert_eq!(total.to_string(), "4.00");
    assert_eq!(total.value(), Decimal::from(4));

    Ok(())
}

#[test]
fn test_amount_provides_overflow_protection_for_large_values() -> Result<()> {
    let mut amount = Amount::try_from(Decimal::MAX)?;
    let previous_value = amount;

    amount += Amount::from_str("1")?;

    assert_eq!(amount, previous_value);

    Ok(())
}
