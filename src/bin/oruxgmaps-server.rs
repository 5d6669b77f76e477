use clap::{Arg, ArgAction, Command as ClapCommand};
use log::{error, LevelFilter};
use std::process;

use oruxgmaps::server::{self, ServerConfig, DEFAULT_HOST};
use oruxgmaps::utils::logger::{default_level, init_logger};

fn cli() -> ClapCommand {
    ClapCommand::new("oruxgmaps-server")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Web front end adding the Google Maps source to uploaded onlinemapsources.xml files")
        .arg(
            Arg::new("host")
                .long("host")
                .help("Listening port and hostname")
                .value_name("ADDR")
                .default_value(DEFAULT_HOST),
        )
        .arg(
            Arg::new("cert")
                .long("cert")
                .help("PEM certificate [default: $HOME/keys/cert.pem]")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("key")
                .long("key")
                .help("PEM private key [default: $HOME/keys/key.pem]")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("plain")
                .long("plain")
                .help("Serve plain HTTP instead of HTTPS")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["cert", "key"]),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}

#[tokio::main]
async fn main() {
    let matches = cli().get_matches();

    init_logger(default_level(matches.get_flag("verbose"), LevelFilter::Info));

    let config = match ServerConfig::from_args(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = server::serve(config).await {
        error!("Server error: {}", e);
        process::exit(1);
    }
}
