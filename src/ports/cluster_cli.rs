use std::time::Duration;

/// Outcome of looking for the orchestration CLI on the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliStatus {
    Available,
    Missing,
    /// The CLI ran but reported an error.
    Failed(String),
    TimedOut,
}

/// Port for the advisory `kubectl` presence check.
pub trait ClusterCliProbe {
    /// Never fails; any problem is folded into the returned status.
    fn check(&self, timeout: Duration) -> CliStatus;
}
