use std::process::Stdio;
use std::time::Duration;

use netdiag_common::error::ProbeError;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Runs `program` to completion and returns its stdout.
///
/// The child is killed if it outlives `deadline`. A non-zero exit is reported
/// with its stderr; the output is only handed to a parser on success.
pub(super) async fn run(program: &str, args: &[String], deadline: Duration) -> Result<String, ProbeError> {
    debug!(program, ?args, ?deadline, "spawning ping");

    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| spawn_error(program, source))?;

    let output = match timeout(deadline, child.wait_with_output()).await {
        Ok(result) => result.map_err(|source| spawn_error(program, source))?,
        Err(_elapsed) => {
            warn!("{program} still running after {deadline:?}, killed");
            return Err(ProbeError::PingTimeout(deadline));
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        warn!("{program} exited with {}", output.status);
        return Err(ProbeError::PingExit {
            status: output.status,
            stderr,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn spawn_error(program: &str, source: std::io::Error) -> ProbeError {
    ProbeError::PingSpawn {
        program: program.to_string(),
        source,
    }
}
