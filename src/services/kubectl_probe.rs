use std::io;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::ports::{CliStatus, ClusterCliProbe};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Checks for `kubectl` by running `kubectl version --client`.
#[derive(Debug, Clone)]
pub struct KubectlProbe {
    program: String,
}

impl KubectlProbe {
    pub fn new() -> Self {
        Self::with_program("kubectl")
    }

    /// Probe a different executable; used to point at a fake binary.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl Default for KubectlProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ClusterCliProbe for KubectlProbe {
    fn check(&self, timeout: Duration) -> CliStatus {
        let mut child = match Command::new(&self.program)
            .args(["version", "--client"])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return CliStatus::Missing,
            Err(err) => return CliStatus::Failed(err.to_string()),
        };

        let started = Instant::now();
        loop {
            match child.try_wait() {
                Ok(Some(status)) if status.success() => return CliStatus::Available,
                Ok(Some(status)) => {
                    return CliStatus::Failed(format!("{} exited with {}", self.program, status));
                }
                Ok(None) if started.elapsed() >= timeout => {
                    let _ = child.kill();
                    let _ = child.wait();
                    tracing::debug!(program = %self.program, ?timeout, "cli probe timed out");
                    return CliStatus::TimedOut;
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(err) => return CliStatus::Failed(err.to_string()),
            }
        }
    }
}
