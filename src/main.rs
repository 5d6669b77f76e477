use clap::{Arg, ArgAction, Command as ClapCommand};
use log::LevelFilter;
use std::process;

use oruxgmaps::commands::{Command, InsertCommand};
use oruxgmaps::utils::logger::{default_level, init_logger};

fn cli() -> ClapCommand {
    ClapCommand::new("oruxgmaps")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Add the Google Maps source to an OruxMaps onlinemapsources.xml")
        .override_usage("oruxgmaps /path/to/onlinemapsources.xml > output.xml")
        .arg(
            Arg::new("input")
                .help("Path to onlinemapsources.xml")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("max-uid")
                .long("max-uid")
                .help("Number the new source after the largest uid instead of the last one")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = cli().get_matches();

    init_logger(default_level(matches.get_flag("verbose"), LevelFilter::Warn));

    let command = match InsertCommand::new(&matches) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = command.execute() {
        eprintln!("Error inserting gmaps definition: {}", e);
        process::exit(1);
    }
}
