use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use worklog::commands::{Command, Outcome, RunnableCommand};
use worklog::data;
use worklog::tracking::session::Session;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: cargo run -- [entries.csv]");
        std::process::exit(1);
    }

    let mut session = Session::new();
    if let Some(path) = args.get(1) {
        let report = data::import_csv(Path::new(path), &mut session)?;
        println!("loaded {} entries from {} ({} skipped)", report.added, path, report.skipped);
    }

    repl(&mut session)
}

fn repl(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Ok(command) => match command.run(session) {
                Ok(Outcome::Message(message)) => println!("{}", message),
                Ok(Outcome::Quit) => break,
                Err(err) => eprintln!("error: {}", err),
            },
            Err(err) => eprintln!("{}", err),
        }
    }

    Ok(())
}
