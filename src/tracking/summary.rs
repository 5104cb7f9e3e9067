use rust_decimal::Decimal;

use super::entry::Entry;

/// Sum of parking expenses over the given entries. Always computed
/// over whatever subset the caller is viewing, never the full store.
pub fn total_expense(entries: &[Entry]) -> Decimal {
    entries.iter().map(Entry::expense).sum()
}

/// Number of entries travelled with `label`, compared
/// case-insensitively.
pub fn count_by_transport(entries: &[Entry], label: &str) -> usize {
    entries
        .iter()
        .filter(|entry| entry.transport().eq_ignore_ascii_case(label))
        .count()
}
