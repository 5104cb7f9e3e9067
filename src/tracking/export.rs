use super::entry::Entry;

/// Serializes entries into the export payload: one
/// `date,location,transport,expense` line per entry, joined with `\n`.
/// No header, no trailing newline, no quoting or escaping. Consumers
/// parsing this back rely on these exact bytes, so a field containing
/// a comma produces an ambiguous row rather than a quoted one. The
/// expense is the plain numeric value as parsed, not the two-decimal
/// on-screen rendering.
pub fn serialize(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{},{},{},{}",
                entry.date(),
                entry.location(),
                entry.transport(),
                entry.expense()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
