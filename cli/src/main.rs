mod commands;
mod config;
mod terminal;

use commands::{CommandLine, Commands, check, scan};
use config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    match commands.command {
        Commands::Scan {
            paths,
            ipv4_only,
            count,
        } => {
            print::header("scanning for IPv6 literals");
            let cfg = Config { ipv4_only, count };
            scan::scan(&paths, &cfg)
        }
        Commands::Check { literals } => {
            print::header("checking literals");
            check::check(&literals)
        }
    }
}
