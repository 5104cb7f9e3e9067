use std::fs;
use std::fs::File;
use std::path::Path;

use anyhow::Result;
use log::debug;
use serde::Deserialize;

use crate::tracking::entry::{Clock, EntryDraft};
use crate::tracking::session::Session;

/// Default file name handed to the export collaborator.
pub const EXPORT_FILE_NAME: &str = "work_log.csv";

/// One row of the export format: `date,location,transport,expense`,
/// no header. The expense column may be absent entirely.
#[derive(Debug, Deserialize)]
pub struct EntryRecord {
    pub date: String,
    pub location: String,
    pub transport: String,
    #[serde(default)] // Default to `None` if the column is missing
    pub expense: Option<String>,
}

impl From<EntryRecord> for EntryDraft {
    fn from(record: EntryRecord) -> Self {
        EntryDraft {
            date: record.date,
            location: record.location,
            transport: record.transport,
            expense: record.expense.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct ImportReport {
    pub added: usize,
    pub skipped: usize,
}

/// Reads an export-format file back into the session. Each row goes
/// through the normal entry validation, so imported entries get fresh
/// ids and the expense rule is re-applied. Bad rows are skipped and
/// counted, never fatal.
pub fn import_csv<C: Clock>(file_path: &Path, session: &mut Session<C>) -> Result<ImportReport> {
    let file = File::open(file_path)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut report = ImportReport::default();
    for record in csv_reader.deserialize::<EntryRecord>() {
        match record {
            Ok(record) => match session.add_entry(record.into()) {
                Ok(_) => report.added += 1,
                Err(err) => {
                    debug!("skipped row, err={}", err);
                    report.skipped += 1;
                }
            },
            Err(err) => {
                debug!("failed to deserialize record, err={}", err);
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

/// Writes the export payload to a durable location so it can be
/// shared. The session is never touched; a failed write leaves no
/// in-memory trace.
pub fn export_file(path: &Path, payload: &str) -> Result<()> {
    fs::write(path, payload)?;
    Ok(())
}
