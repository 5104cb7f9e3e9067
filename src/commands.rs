use std::path::PathBuf;

use anyhow::Result;
use enum_dispatch::enum_dispatch;
use thiserror::Error;

use crate::data;
use crate::tracking::entry::EntryDraft;
use crate::tracking::filter::FilterCriteria;
use crate::tracking::session::{Session, View};

const ADD_USAGE: &str = "add <date>,<location>,<transport>[,<expense>]";
const IMPORT_USAGE: &str = "import <file>";

const HELP: &str = "\
commands:
  add <date>,<location>,<transport>[,<expense>]   record a work day
  filter [<location>][,<transport>]               narrow the view (no argument clears)
  view                                            list entries with totals
  export [<file>]                                 write the view as csv (default work_log.csv)
  import <file>                                   load entries from a csv file
  help                                            show this help
  quit                                            leave";

#[derive(Debug, PartialEq, Error)]
pub enum CommandError {
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

pub enum Outcome {
    Message(String),
    Quit,
}

#[enum_dispatch]
pub trait RunnableCommand {
    fn run(&self, session: &mut Session) -> Result<Outcome>;
}

#[enum_dispatch(RunnableCommand)]
pub enum Command {
    AddEntry,
    SetFilter,
    ShowView,
    ExportCsv,
    ImportCsv,
    ShowHelp,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        match keyword.to_ascii_lowercase().as_str() {
            "add" => parse_add(rest),
            "filter" => Ok(Command::SetFilter(SetFilter {
                criteria: parse_criteria(rest),
            })),
            "view" | "list" => Ok(Command::ShowView(ShowView)),
            "export" => Ok(Command::ExportCsv(ExportCsv {
                path: if rest.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(rest))
                },
            })),
            "import" => {
                if rest.is_empty() {
                    Err(CommandError::Usage(IMPORT_USAGE))
                } else {
                    Ok(Command::ImportCsv(ImportCsv {
                        path: PathBuf::from(rest),
                    }))
                }
            }
            "help" => Ok(Command::ShowHelp(ShowHelp)),
            "quit" | "exit" => Ok(Command::Quit(Quit)),
            other => Err(CommandError::Unknown(other.to_owned())),
        }
    }
}

fn parse_add(rest: &str) -> Result<Command, CommandError> {
    let fields: Vec<&str> = rest.split(',').map(str::trim).collect();
    if rest.is_empty() || fields.len() < 3 || fields.len() > 4 {
        return Err(CommandError::Usage(ADD_USAGE));
    }

    Ok(Command::AddEntry(AddEntry {
        draft: EntryDraft::new(
            fields[0],
            fields[1],
            fields[2],
            fields.get(3).copied().unwrap_or(""),
        ),
    }))
}

fn parse_criteria(rest: &str) -> FilterCriteria {
    match rest.split_once(',') {
        Some((location, transport)) => FilterCriteria::from_raw(location, transport),
        None => FilterCriteria::from_raw(rest, ""),
    }
}

pub struct AddEntry {
    pub draft: EntryDraft,
}

impl RunnableCommand for AddEntry {
    fn run(&self, session: &mut Session) -> Result<Outcome> {
        let entry = session.add_entry(self.draft.clone())?;
        Ok(Outcome::Message(format!(
            "added {} - {} - {} - ${:.2}",
            entry.date(),
            entry.location(),
            entry.transport(),
            entry.expense()
        )))
    }
}

pub struct SetFilter {
    pub criteria: FilterCriteria,
}

impl RunnableCommand for SetFilter {
    fn run(&self, session: &mut Session) -> Result<Outcome> {
        session.set_filter(self.criteria.clone());
        if self.criteria.is_unrestricted() {
            return Ok(Outcome::Message("filter cleared".to_owned()));
        }

        let mut parts = Vec::new();
        if let Some(location) = &self.criteria.location {
            parts.push(format!("location={}", location));
        }
        if let Some(transport) = &self.criteria.transport {
            parts.push(format!("transport={}", transport));
        }
        Ok(Outcome::Message(format!("filtering by {}", parts.join(", "))))
    }
}

pub struct ShowView;

impl RunnableCommand for ShowView {
    fn run(&self, session: &mut Session) -> Result<Outcome> {
        Ok(Outcome::Message(render_view(&session.current_view())))
    }
}

// On-screen rendering pads expenses to two decimals; the export
// payload keeps the plain parsed value instead.
fn render_view(view: &View) -> String {
    let mut lines: Vec<String> = view
        .entries
        .iter()
        .map(|entry| {
            format!(
                "{} - {} - {} - ${:.2}",
                entry.date(),
                entry.location(),
                entry.transport(),
                entry.expense()
            )
        })
        .collect();

    if view.entries.is_empty() {
        lines.push("no entries".to_owned());
    }
    lines.push(format!("total parking expense: ${:.2}", view.total_expense));
    lines.push(format!("metro days: {}", view.metro_days));
    lines.join("\n")
}

pub struct ExportCsv {
    pub path: Option<PathBuf>,
}

impl RunnableCommand for ExportCsv {
    fn run(&self, session: &mut Session) -> Result<Outcome> {
        let entry_count = session.current_view().entries.len();
        let payload = session.export_payload();
        let path = self
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(data::EXPORT_FILE_NAME));
        data::export_file(&path, &payload)?;
        Ok(Outcome::Message(format!(
            "exported {} entries to {}",
            entry_count,
            path.display()
        )))
    }
}

pub struct ImportCsv {
    pub path: PathBuf,
}

impl RunnableCommand for ImportCsv {
    fn run(&self, session: &mut Session) -> Result<Outcome> {
        let report = data::import_csv(&self.path, session)?;
        Ok(Outcome::Message(format!(
            "imported {} entries ({} skipped)",
            report.added, report.skipped
        )))
    }
}

pub struct ShowHelp;

impl RunnableCommand for ShowHelp {
    fn run(&self, _session: &mut Session) -> Result<Outcome> {
        Ok(Outcome::Message(HELP.to_owned()))
    }
}

pub struct Quit;

impl RunnableCommand for Quit {
    fn run(&self, _session: &mut Session) -> Result<Outcome> {
        Ok(Outcome::Quit)
    }
}
