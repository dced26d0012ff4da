use anyhow::Context;
use colored::*;

use crate::terminal::{print, spinner};
use netdiag_common::{config::Config, network::ping::PingResult};
use netdiag_core::probe::{EchoProbe, ProbeConfig};

pub async fn ping(probe_cfg: ProbeConfig, size: u32, count: u32, cfg: &Config) -> anyhow::Result<()> {
    let flavor = probe_cfg.ping_flavor;
    let mut probe = EchoProbe::bind(probe_cfg)
        .await
        .context("setting up the probe")?;
    let target = probe.destination().ip();

    let spinner = spinner::start(
        format!("Sending {count} x {size} byte echo requests to {target}..."),
        cfg.quiet,
    );
    let result = probe.ping(size, count).await;
    spinner.finish_and_clear();

    let result: PingResult = result.with_context(|| format!("pinging {target} ({flavor} ping)"))?;

    match cfg.quiet {
        2 => print::print(&result.to_string()),
        _ => {
            let loss: String = format!("{}%", result.packet_loss_percent);
            let loss = if result.packet_loss_percent == 0 {
                loss.green().bold()
            } else {
                loss.yellow().bold()
            };
            print::aligned_line("Target", target.to_string());
            print::aligned_line("Loss", loss);
            print::aligned_line("Avg RTT", format!("{}ms", result.avg_rtt_ms).bold());
        }
    }
    Ok(())
}
