use anyhow::Context;
use colored::*;
use tracing::warn;

use crate::terminal::{print, spinner};
use netdiag_common::{config::Config, network::echo::EchoReply};
use netdiag_core::probe::{EchoProbe, ProbeConfig};

pub async fn echo(probe_cfg: ProbeConfig, message: &str, cfg: &Config) -> anyhow::Result<()> {
    let mut probe = EchoProbe::bind(probe_cfg)
        .await
        .context("setting up the echo probe")?;

    if cfg.quiet == 0 {
        print::aligned_line("Local", probe.local_addr()?.to_string());
        print::aligned_line("Remote", probe.destination().to_string());
    }

    let spinner = spinner::start(format!("Waiting up to {:?} for a reply...", probe.timeout()), cfg.quiet);
    let reply = probe.send_and_receive(message).await;
    spinner.finish_and_clear();

    match reply? {
        EchoReply::Reply(text) => match cfg.quiet {
            2 => print::print(&text),
            _ => print::aligned_line("Reply", text.bold().green()),
        },
        no_response @ EchoReply::NoResponse => warn!("{no_response}"),
    }
    Ok(())
}
