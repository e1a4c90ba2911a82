use super::sweep::Sweep;
use std::time::Duration;

/// Summary of a solve that reached its fixed point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Convergence {
    sweeps: usize,
    last: Sweep,
    elapsed: Duration,
}

impl Convergence {
    /// number of full passes, the final quiet one included
    pub fn sweeps(&self) -> usize {
        self.sweeps
    }
    /// diagnostics of the final pass
    pub fn last(&self) -> Sweep {
        self.last
    }
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl From<(usize, Sweep, Duration)> for Convergence {
    fn from((sweeps, last, elapsed): (usize, Sweep, Duration)) -> Self {
        Self {
            sweeps,
            last,
            elapsed,
        }
    }
}

impl std::fmt::Display for Convergence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<16}{}{:?}",
            format!("sweeps {}", self.sweeps),
            self.last,
            self.elapsed
        )
    }
}
