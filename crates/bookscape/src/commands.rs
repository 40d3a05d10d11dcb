use anyhow::Result;
use bookscape_core::books::BookRecord;
use bookscape_core::catalog::BUILTIN_QUERIES;
use bookscape_exec::engine::{Engine, QueryOutput};
use clap::{Args, Subcommand};
use tokio::runtime::{Builder, Runtime};
use tracing::warn;
use url::Url;

use crate::args::ConnectionArgs;
use crate::session;
use crate::table;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the built-in analytical queries.
    Queries,
    /// Search the catalog by keyword.
    Search(SearchArgs),
    /// Run one of the built-in queries and show its table and chart.
    Run(RunArgs),
    /// Start an interactive session (default).
    Shell,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Keyword matched case-insensitively against titles, authors, and
    /// publishers. An empty keyword matches everything.
    pub keyword: String,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Query label, or its 1-based position from `bookscape queries`.
    pub query: String,

    /// Keyword for queries that require one.
    #[clap(short, long)]
    pub keyword: Option<String>,
}

impl Commands {
    pub fn run(self, connection: ConnectionArgs) -> Result<()> {
        match self {
            Commands::Queries => {
                print_queries();
                Ok(())
            }
            Commands::Search(args) => {
                let runtime = build_runtime()?;
                runtime.block_on(search(&connection.engine(), &args.keyword))
            }
            Commands::Run(args) => {
                let runtime = build_runtime()?;
                runtime.block_on(run_query(&connection.engine(), &args))
            }
            Commands::Shell => {
                let runtime = build_runtime()?;
                runtime.block_on(session::run(connection.engine()))
            }
        }
    }
}

fn build_runtime() -> Result<Runtime> {
    Ok(Builder::new_multi_thread()
        .enable_io()
        .enable_time()
        .thread_name("bookscape")
        .build()?)
}

pub(crate) fn print_queries() {
    for (idx, query) in BUILTIN_QUERIES.iter().enumerate() {
        let marker = if query.needs_keyword() {
            "  (requires a keyword)"
        } else {
            ""
        };
        println!("{:2}. {}{}", idx + 1, query.label(), marker);
    }
}

pub(crate) async fn search(engine: &Engine, keyword: &str) -> Result<()> {
    let matches = engine.search(keyword).await?;
    if matches.is_empty() {
        println!("No books found matching your search.");
        return Ok(());
    }

    println!("Found {} matching books:", matches.len());
    for record in &matches {
        print_match(record);
    }
    Ok(())
}

fn print_match(record: &BookRecord) {
    println!("{}", record.title);
    println!("  Author: {}", record.authors);

    // A bad image link is a warning, never a failure; the title above is
    // already out.
    let image = record.display_image();
    match Url::parse(image) {
        Ok(url) => println!("  Image: {url}"),
        Err(e) => warn!(%e, title = %record.title, "failed to resolve image link"),
    }
}

pub(crate) async fn run_query(engine: &Engine, args: &RunArgs) -> Result<()> {
    let keyword = args.keyword.as_deref();
    let output = match args.query.parse::<usize>() {
        Ok(position) => engine.run_query_at(position, keyword).await?,
        Err(_) => engine.run_query(&args.query, keyword).await?,
    };
    print_output(&output)?;
    Ok(())
}

pub(crate) fn print_output(output: &QueryOutput) -> Result<()> {
    println!("Query Results:");
    print!("{}", table::format_table(&output.result));
    println!();
    println!("Visualization: {}", output.chart.title());
    println!("{}", serde_json::to_string_pretty(&output.chart)?);
    Ok(())
}
