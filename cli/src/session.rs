use anyhow::Context;
use async_trait::async_trait;
use netdiag_common::session::CommandSession;
use tokio::io::AsyncReadExt;
use tracing::info;

/// Stands in for a device session: the operator runs the command on the device
/// and pipes its output in.
pub struct StdinSession;

#[async_trait]
impl CommandSession for StdinSession {
    async fn send_command(&mut self, command: &str) -> anyhow::Result<String> {
        info!("Reading the output of '{command}' from stdin");
        let mut raw = String::new();
        tokio::io::stdin()
            .read_to_string(&mut raw)
            .await
            .context("reading ARP table from stdin")?;
        Ok(raw)
    }
}
