mod commands;
mod session;
mod terminal;

use commands::{CommandLine, Commands, arp, echo, ping};
use netdiag_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = Config {
        quiet: commands.quiet,
    };

    match commands.command {
        Commands::Arp { vendor } => {
            print::header("arp table", cfg.quiet);
            arp::arp(vendor, &cfg).await
        }
        Commands::Echo { probe, message } => {
            print::header("udp echo", cfg.quiet);
            echo::echo(probe.to_config(), &message, &cfg).await
        }
        Commands::Ping {
            probe,
            size,
            count,
            flavor,
        } => {
            print::header("ping", cfg.quiet);
            let mut probe_cfg = probe.to_config();
            if let Some(flavor) = flavor {
                probe_cfg = probe_cfg.with_ping_flavor(flavor);
            }
            ping::ping(probe_cfg, size, count, &cfg).await
        }
    }
}
