use clap::Parser;
use folio_tui::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    folio_tui::run_main(cli)
}
