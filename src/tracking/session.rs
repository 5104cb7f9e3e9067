use rust_decimal::Decimal;

use super::entry::{Clock, Entry, EntryBuilder, EntryDraft, SystemClock};
use super::filter::{self, FilterCriteria};
use super::store::EntryStore;
use super::{export, summary, EntryError, METRO};

/// Snapshot of what the user is currently looking at: the filtered
/// entries and their aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub entries: Vec<Entry>,
    pub total_expense: Decimal,
    pub metro_days: usize,
}

/// Owns the state for one interactive session: the entry store, the
/// active filter, and the id-issuing builder. Everything derived is
/// recomputed from store + criteria on each read.
#[derive(Debug, Default)]
pub struct Session<C = SystemClock> {
    store: EntryStore,
    criteria: FilterCriteria,
    builder: EntryBuilder<C>,
}

impl Session {
    pub fn new() -> Session {
        Session::with_clock(SystemClock)
    }
}

impl<C: Clock> Session<C> {
    pub fn with_clock(clock: C) -> Session<C> {
        Session {
            store: EntryStore::new(),
            criteria: FilterCriteria::default(),
            builder: EntryBuilder::with_clock(clock),
        }
    }

    /// Validates the draft and appends the resulting entry. A
    /// validation failure changes nothing.
    pub fn add_entry(&mut self, draft: EntryDraft) -> Result<Entry, EntryError> {
        let entry = self.builder.build(draft)?;
        self.store.append(entry.clone());
        Ok(entry)
    }

    pub fn set_filter(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn filter(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn entry_count(&self) -> usize {
        self.store.len()
    }

    pub fn current_view(&self) -> View {
        let entries = filter::apply(self.store.read_all(), &self.criteria);
        let total_expense = summary::total_expense(&entries);
        let metro_days = summary::count_by_transport(&entries, METRO);
        View {
            entries,
            total_expense,
            metro_days,
        }
    }

    /// Export payload for the current view. The filter applies here
    /// too: exporting while filtered exports exactly what is shown.
    pub fn export_payload(&self) -> String {
        export::serialize(&self.current_view().entries)
    }
}
