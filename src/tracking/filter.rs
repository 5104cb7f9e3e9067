use super::entry::Entry;

/// Narrowing criteria for the entry list. `None` matches anything;
/// a set value must equal the entry's field exactly, case included.
/// This is deliberately stricter than the case-insensitive transport
/// normalization used when capturing the expense, so "Car" and "car"
/// remain distinct display categories.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub location: Option<String>,
    pub transport: Option<String>,
}

impl FilterCriteria {
    /// Builds criteria from raw field values, treating blanks as
    /// match-any.
    pub fn from_raw(location: &str, transport: &str) -> FilterCriteria {
        FilterCriteria {
            location: non_blank(location),
            transport: non_blank(transport),
        }
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        self.location.as_deref().map_or(true, |location| location == entry.location())
            && self.transport.as_deref().map_or(true, |transport| transport == entry.transport())
    }

    pub fn is_unrestricted(&self) -> bool {
        self.location.is_none() && self.transport.is_none()
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_owned())
    }
}

/// Subset of `entries` matching `criteria`, in the original order.
pub fn apply(entries: &[Entry], criteria: &FilterCriteria) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| criteria.matches(entry))
        .cloned()
        .collect()
}
