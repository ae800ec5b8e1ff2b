//! `folio` multitool: launches the portfolio TUI by default, with
//! headless subcommands that run the same catalog and filter for
//! scripting.

use std::path::Path;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use folio_core::Catalog;
use folio_core::FilterState;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Terminal portfolio browser")]
struct MultitoolCli {
    /// Load the catalog from a TOML file instead of the built-in one.
    #[arg(
        long = "catalog",
        short = 'c',
        value_name = "FILE",
        global = true
    )]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the projects matching a query and/or selected tags.
    List(ListArgs),
    /// Print the tag vocabulary, one tag per line.
    Tags,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Free-text query matched against titles and tags.
    #[arg(long, short = 'q', value_name = "QUERY", default_value = "")]
    query: String,

    /// Tag that matched projects must carry; repeatable, all must match.
    #[arg(long = "tag", short = 't', value_name = "TAG")]
    tags: Vec<String>,
}

fn main() -> Result<()> {
    let cli = MultitoolCli::parse();
    match cli.command {
        None => folio_tui::run_main(folio_tui::Cli {
            catalog: cli.catalog,
            debug: false,
        }),
        Some(command) => {
            init_logging();
            let catalog = load_catalog(cli.catalog.as_deref())?;
            match command {
                Command::List(args) => run_list(&catalog, &args),
                Command::Tags => run_tags(&catalog),
            }
            Ok(())
        }
    }
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Ok(Catalog::load(path)?),
        None => Ok(Catalog::builtin()),
    }
}

fn run_list(catalog: &Catalog, args: &ListArgs) {
    let mut filter = FilterState::new();
    filter.set_query(args.query.clone());
    for tag in &args.tags {
        if !filter.is_selected(tag) {
            filter.toggle_tag(tag);
        }
    }

    let visible = filter.apply(&catalog.projects);
    if visible.is_empty() {
        println!("No projects match your search.");
        return;
    }
    for project in visible {
        println!("{}: {}", project.title, project.description);
    }
}

fn run_tags(catalog: &Catalog) {
    for tag in catalog.tag_vocabulary() {
        println!("{tag}");
    }
}
