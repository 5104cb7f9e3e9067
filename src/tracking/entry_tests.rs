use anyhow::{bail, Result};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::entry::{Clock, EntryBuilder, EntryDraft};
use super::EntryError;

pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

fn draft(date: &str, location: &str, transport: &str, expense: &str) -> EntryDraft {
    EntryDraft::new(date, location, transport, expense)
}

fn test_builder() -> EntryBuilder<FixedClock> {
    EntryBuilder::with_clock(FixedClock(1_722_000_000_000))
}

#[test]
fn test_build_car_entry_captures_expense() -> Result<()> {
    let mut builder = test_builder();
    let entry = builder.build(draft("2025-07-29", "DC", "car", "12.50"))?;

    assert_eq!(entry.date(), "2025-07-29");
    assert_eq!(entry.location(), "DC");
    assert_eq!(entry.transport(), "car");
    assert_eq!(entry.expense(), dec!(12.5));

    Ok(())
}

#[test]
fn test_build_mixed_case_car_captures_expense() -> Result<()> {
    let mut builder = test_builder();
    let entry = builder.build(draft("2025-07-29", "DC", "Car", "7"))?;

    // The comparison is case-insensitive, the stored value is not
    // rewritten.
    assert_eq!(entry.transport(), "Car");
    assert_eq!(entry.expense(), dec!(7));

    Ok(())
}

#[test]
fn test_build_non_car_forces_zero_expense() -> Result<()> {
    let mut builder = test_builder();
    let entry = builder.build(draft("2025-07-30", "Reston", "metro", "5"))?;

    assert_eq!(entry.expense(), Decimal::ZERO);

    Ok(())
}

#[test]
fn test_build_car_blank_expense_is_zero() -> Result<()> {
    let mut builder = test_builder();
    let entry = builder.build(draft("2025-07-29", "DC", "car", ""))?;

    assert_eq!(entry.expense(), Decimal::ZERO);

    Ok(())
}

#[test]
fn test_build_car_garbage_expense_is_zero() -> Result<()> {
    let mut builder = test_builder();
    let entry = builder.build(draft("2025-07-29", "DC", "car", "about 12"))?;

    assert_eq!(entry.expense(), Decimal::ZERO);

    Ok(())
}

#[test]
fn test_build_car_negative_expense_is_zero() -> Result<()> {
    let mut builder = test_builder();
    let entry = builder.build(draft("2025-07-29", "DC", "car", "-3.25"))?;

    assert_eq!(entry.expense(), Decimal::ZERO);

    Ok(())
}

#[test]
fn test_build_missing_fields() {
    let mut builder = test_builder();

    let cases = [
        (draft("", "DC", "car", "1"), EntryError::MissingDate),
        (draft("2025-07-29", "", "car", "1"), EntryError::MissingLocation),
        (draft("2025-07-29", "DC", "", "1"), EntryError::MissingTransport),
        (draft("  ", "DC", "car", "1"), EntryError::MissingDate),
    ];

    for (input, expected) in cases {
        assert_eq!(builder.build(input).unwrap_err(), expected);
    }
}

#[test]
fn test_ids_unique_within_one_millisecond() -> Result<()> {
    let mut builder = test_builder();
    let first = builder.build(draft("2025-07-29", "DC", "car", "1"))?;
    let second = builder.build(draft("2025-07-29", "DC", "car", "1"))?;
    let third = builder.build(draft("2025-07-29", "DC", "car", "1"))?;

    // The clock never advances, so uniqueness has to come from the
    // builder bumping past the last issued id.
    assert_eq!(first.id(), "1722000000000");
    assert_eq!(second.id(), "1722000000001");
    assert_eq!(third.id(), "1722000000002");

    Ok(())
}

#[test]
fn test_ids_follow_clock_when_it_advances() -> Result<()> {
    struct SteppingClock(std::cell::Cell<u64>);

    impl Clock for SteppingClock {
        fn now_millis(&self) -> u64 {
            let now = self.0.get();
            self.0.set(now + 10);
            now
        }
    }

    let mut builder = EntryBuilder::with_clock(SteppingClock(std::cell::Cell::new(100)));
    let first = builder.build(draft("2025-07-29", "DC", "car", "1"))?;
    let second = builder.build(draft("2025-07-29", "DC", "car", "1"))?;

    assert_eq!(first.id(), "100");
    assert_eq!(second.id(), "110");

    Ok(())
}

#[test]
fn test_failed_build_does_not_consume_an_id() -> Result<()> {
    let mut builder = test_builder();

    if builder.build(draft("", "DC", "car", "1")).is_ok() {
        bail!("blank date should not build");
    }

    let entry = builder.build(draft("2025-07-29", "DC", "car", "1"))?;
    assert_eq!(entry.id(), "1722000000000");

    Ok(())
}
