//! Interactive shell over a single engine, so the snapshot cache spans
//! commands the way the original dashboard's memoized load did.

use anyhow::Result;
use bookscape_exec::engine::Engine;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::commands::{self, RunArgs};

const HELP: &[(&str, &str)] = &[
    ("\\help", "Show this help text"),
    ("\\list", "List the built-in analytical queries"),
    (
        "\\search [keyword]",
        "Search titles, authors, and publishers; no keyword matches everything",
    ),
    (
        "\\run <n> [keyword]",
        "Run the n-th query from \\list, passing the keyword if it needs one",
    ),
    ("\\run <label>", "Run a query by its exact label"),
    ("\\refresh", "Drop the cached books snapshot"),
    ("\\quit", "Exit the session"),
];

enum Signal {
    Continue,
    Exit,
}

pub async fn run(engine: Engine) -> Result<()> {
    println!("Bookscape ({})", env!("CARGO_PKG_VERSION"));
    println!("Type \\help for available commands.");

    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline("bookscape> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);
                match execute_line(&engine, line).await {
                    Ok(Signal::Continue) => (),
                    Ok(Signal::Exit) => break,
                    Err(e) => println!("ERROR: {e}"),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

async fn execute_line(engine: &Engine, line: &str) -> Result<Signal> {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "\\help" | "\\h" => {
            for (name, help) in HELP {
                println!("{name:20} {help}");
            }
        }
        "\\list" | "\\l" => commands::print_queries(),
        "\\search" | "\\s" => commands::search(engine, rest).await?,
        "\\run" | "\\r" => run_query(engine, rest).await?,
        "\\refresh" => {
            engine.invalidate_books();
            println!("Snapshot cache cleared.");
        }
        "\\quit" | "\\q" => return Ok(Signal::Exit),
        other => {
            println!("Unknown command: {other}. Type \\help for available commands.");
        }
    }

    Ok(Signal::Continue)
}

async fn run_query(engine: &Engine, rest: &str) -> Result<()> {
    if rest.is_empty() {
        println!("Usage: \\run <n> [keyword]  or  \\run <label>");
        return Ok(());
    }

    // A leading number selects by position and leaves the remainder as the
    // keyword; anything else is taken as a whole label.
    let (query, keyword) = match rest.split_once(char::is_whitespace) {
        Some((first, remainder)) if first.parse::<usize>().is_ok() => {
            (first.to_string(), Some(remainder.trim().to_string()))
        }
        _ => (rest.to_string(), None),
    };

    commands::run_query(
        engine,
        &RunArgs {
            query,
            keyword,
        },
    )
    .await
}
