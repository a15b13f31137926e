mod commands;
mod snapshot;
mod terminal;

use commands::{CommandLine, Commands, book, options, resync, summary};
use fleetsync_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        dry_run: commands.dry_run,
    };

    logging::init_logging(cfg.quiet);
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Summary { snapshot } => {
            print::header("fleet summary", cfg.quiet);
            summary::summary(&snapshot, &cfg)
        }
        Commands::Resync { snapshot, output } => {
            print::header("resynchronizing fleet", cfg.quiet);
            resync::resync(&snapshot, output.as_deref(), &cfg)
        }
        Commands::Book {
            snapshot,
            trip,
            edit,
        } => {
            print::header("booking trip", cfg.quiet);
            book::book(&snapshot, &trip, edit, &cfg)
        }
        Commands::Options { snapshot, trip } => {
            print::header("assignment options", cfg.quiet);
            options::options(&snapshot, trip, &cfg)
        }
    }
}
