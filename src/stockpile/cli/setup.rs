use clap::{Parser, Subcommand};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use stockpile::error::Result;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "STOCKPILE_LOG";
pub const LOG_FILENAME: &str = "stockpile.log";

#[derive(Parser, Debug)]
#[command(name = "stockpile", bin_name = "stockpile", version)]
#[command(
    about = "Track inventory items and groups in CSV files",
    long_about = "Track inventory items and groups in CSV files.\n\nRun without a command to open the interactive menu."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the data files and stockpile.json [default: current directory]
    #[arg(long, global = true, env = "STOCKPILE_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an item, or add to the quantity of an existing one
    #[command(display_order = 1)]
    AddItem {
        /// Item name
        name: String,

        /// How many to add
        #[arg(value_parser = clap::value_parser!(i64).range(1..))]
        quantity: i64,

        /// Group to file the item under (created if missing)
        #[arg(short, long)]
        group: Option<String>,
    },

    /// List items
    #[command(display_order = 2)]
    ListItems {
        /// Only items in this group
        #[arg(short, long)]
        group: Option<String>,
    },

    /// List groups
    #[command(display_order = 3)]
    ListGroups,
}

/// Where log events go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Off,
}

/// One-shot commands log to stderr. The interactive menu owns the terminal,
/// so it logs to `stockpile.log` in the data directory, and only when logging
/// was asked for with `--verbose` or `STOCKPILE_LOG`.
pub fn log_target(interactive: bool, requested: bool, data_dir: &Path) -> LogTarget {
    match (interactive, requested) {
        (false, _) => LogTarget::Stderr,
        (true, true) => LogTarget::File(data_dir.join(LOG_FILENAME)),
        (true, false) => LogTarget::Off,
    }
}

/// `STOCKPILE_LOG` takes an `EnvFilter` directive; `--verbose` overrides it
/// with `debug`.
pub fn init_logging(verbose: bool, target: LogTarget) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
        LogTarget::File(path) => {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            let _ = builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_item_with_group() {
        let cli = Cli::try_parse_from(["stockpile", "add-item", "Mouse", "5", "-g", "Peripherals"]).unwrap();
        match cli.command {
            Some(Commands::AddItem {
                name,
                quantity,
                group,
            }) => {
                assert_eq!(name, "Mouse");
                assert_eq!(quantity, 5);
                assert_eq!(group.as_deref(), Some("Peripherals"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_non_positive_quantity() {
        assert!(Cli::try_parse_from(["stockpile", "add-item", "Mouse", "0"]).is_err());
        assert!(Cli::try_parse_from(["stockpile", "add-item", "Mouse", "many"]).is_err());
    }

    #[test]
    fn no_command_means_interactive() {
        let cli = Cli::try_parse_from(["stockpile", "--data-dir", "/tmp/stock"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/stock")));
    }

    #[test]
    fn one_shot_commands_log_to_stderr() {
        let dir = Path::new("/tmp/stock");
        assert_eq!(log_target(false, false, dir), LogTarget::Stderr);
        assert_eq!(log_target(false, true, dir), LogTarget::Stderr);
    }

    #[test]
    fn interactive_session_keeps_logs_off_the_terminal() {
        let dir = Path::new("/tmp/stock");
        assert_eq!(log_target(true, false, dir), LogTarget::Off);
        assert_eq!(
            log_target(true, true, dir),
            LogTarget::File(dir.join("stockpile.log"))
        );
    }

    #[test]
    fn list_items_group_filter() {
        let cli = Cli::try_parse_from(["stockpile", "list-items", "--group", "Tools"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::ListItems { group: Some(ref g) }) if g == "Tools"
        ));
    }
}
