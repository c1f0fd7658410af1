use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// Point-in-time summary of a running filter task.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub instances_seen: u64,
    pub accepted: u64,
    pub rejected: u64,
    pub acceptance_rate: f64,
    pub mean_loss: f64,
    pub seconds: f64,
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "seen={}, accepted={}, rejected={}, acc_rate={:.6}, loss={:.6}, t={:.3}s",
            self.instances_seen,
            self.accepted,
            self.rejected,
            self.acceptance_rate,
            self.mean_loss,
            self.seconds
        )
    }
}
