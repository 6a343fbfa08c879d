//! # CLI Layer
//!
//! One of two front ends, and the only code that knows about process
//! arguments, stdout and exit codes. It parses arguments, opens the
//! file-backed repository, dispatches to the command layer and prints the
//! [`CmdResult`](stockpile::commands::CmdResult). With no command it hands
//! the terminal over to the interactive [`Navigator`].

mod render;
mod setup;

use clap::Parser;
use render::{print_messages, print_table, NO_GROUPS, NO_ITEMS};
use setup::{init_logging, log_target, Cli, Commands, LOG_ENV};
use stockpile::commands;
use stockpile::config::StockConfig;
use stockpile::error::Result;
use stockpile::navigator::Navigator;
use stockpile::repository::StockRepository;
use stockpile::store::fs::FileBackend;
use stockpile::ui::keys::{CancelToken, RawModeGuard, TerminalKeys};
use stockpile::ui::table::Table;
use stockpile::ui::{Screen, Viewport};
use tracing::debug;

type FileRepository = StockRepository<FileBackend>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let requested = cli.verbose || std::env::var_os(LOG_ENV).is_some();
    init_logging(
        cli.verbose,
        log_target(cli.command.is_none(), requested, &data_dir),
    )?;
    let config = StockConfig::load(&data_dir)?;
    debug!(data_dir = %data_dir.display(), ?config, "opening repository");
    let mut repo = StockRepository::open(&data_dir, &config);

    match cli.command {
        Some(Commands::AddItem {
            name,
            quantity,
            group,
        }) => handle_add_item(&mut repo, &name, quantity, group.as_deref()),
        Some(Commands::ListItems { group }) => handle_list_items(&repo, group.as_deref()),
        Some(Commands::ListGroups) => handle_list_groups(&repo),
        None => handle_interactive(&mut repo),
    }
}

fn handle_add_item(
    repo: &mut FileRepository,
    name: &str,
    quantity: i64,
    group: Option<&str>,
) -> Result<()> {
    let result = commands::add::run(repo, name, quantity, group)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list_items(repo: &FileRepository, group: Option<&str>) -> Result<()> {
    let result = commands::list::items(repo, group)?;
    print_messages(&result.messages);
    print_table(&Table::summary(&result.listed_items), NO_ITEMS);
    Ok(())
}

fn handle_list_groups(repo: &FileRepository) -> Result<()> {
    let result = commands::list::groups(repo)?;
    print_table(&Table::groups(&result.listed_groups), NO_GROUPS);
    Ok(())
}

fn handle_interactive(repo: &mut FileRepository) -> Result<()> {
    let _guard = RawModeGuard::enable()?;
    let screen = Screen::new(TerminalKeys, std::io::stdout(), CancelToken::new())
        .with_viewport(Viewport::Terminal);
    Navigator::new(repo, screen).run()
}
