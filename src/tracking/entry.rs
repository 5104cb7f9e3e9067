use std::time::{SystemTime, UNIX_EPOCH};

use getset::{CopyGetters, Getters};
use log::debug;
use rust_decimal::Decimal;

use super::{EntryError, CAR};

/// One recorded workday. Immutable once built; every field is only
/// reachable through its getter.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct Entry {
    #[getset(get = "pub")]
    id: String,
    #[getset(get = "pub")]
    date: String,
    #[getset(get = "pub")]
    location: String,
    #[getset(get = "pub")]
    transport: String,
    #[getset(get_copy = "pub")]
    expense: Decimal,
}

/// Raw form input for one entry. An empty string means the field was
/// left blank.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub date: String,
    pub location: String,
    pub transport: String,
    pub expense: String,
}

impl EntryDraft {
    pub fn new(date: &str, location: &str, transport: &str, expense: &str) -> EntryDraft {
        EntryDraft {
            date: date.to_owned(),
            location: location.to_owned(),
            transport: transport.to_owned(),
            expense: expense.to_owned(),
        }
    }
}

pub trait Clock {
    fn now_millis(&self) -> u64;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Validates drafts into entries and issues their ids.
#[derive(Debug, Default)]
pub struct EntryBuilder<C = SystemClock> {
    clock: C,
    last_id: u64,
}

impl EntryBuilder {
    pub fn new() -> EntryBuilder {
        EntryBuilder::with_clock(SystemClock)
    }
}

impl<C: Clock> EntryBuilder<C> {
    pub fn with_clock(clock: C) -> EntryBuilder<C> {
        EntryBuilder { clock, last_id: 0 }
    }

    /// Every required field must be non-blank. The parking expense is
    /// captured only for car travel, compared case-insensitively; the
    /// stored transport keeps the case it was typed with. Unusable
    /// expense text never rejects the draft, it just becomes zero.
    pub fn build(&mut self, draft: EntryDraft) -> Result<Entry, EntryError> {
        if draft.date.trim().is_empty() {
            return Err(EntryError::MissingDate);
        }
        if draft.location.trim().is_empty() {
            return Err(EntryError::MissingLocation);
        }
        if draft.transport.trim().is_empty() {
            return Err(EntryError::MissingTransport);
        }

        let expense = if draft.transport.trim().eq_ignore_ascii_case(CAR) {
            parse_expense(&draft.expense)
        } else {
            Decimal::ZERO
        };

        Ok(Entry {
            id: self.next_id(),
            date: draft.date,
            location: draft.location,
            transport: draft.transport,
            expense,
        })
    }

    // Millisecond timestamps collide when two entries land in the same
    // millisecond; bump past the last issued id so ids stay unique and
    // strictly increasing.
    fn next_id(&mut self) -> String {
        let now = self.clock.now_millis();
        self.last_id = now.max(self.last_id + 1);
        self.last_id.to_string()
    }
}

fn parse_expense(raw: &str) -> Decimal {
    let raw = raw.trim();
    match raw.parse::<Decimal>() {
        Ok(amount) if amount.is_sign_negative() => {
            debug!("negative expense {:?}, using 0", raw);
            Decimal::ZERO
        }
        // Trailing zeros are stripped so the export renders the value
        // as parsed (12.50 exports as 12.5).
        Ok(amount) => amount.normalize(),
        Err(_) => {
            if !raw.is_empty() {
                debug!("expense {:?} is not numeric, using 0", raw);
            }
            Decimal::ZERO
        }
    }
}
