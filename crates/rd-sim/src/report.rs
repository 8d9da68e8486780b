//! Per-frame and per-epoch results.

use rd_core::{AgentId, Frame};

/// Outcome of one [`Population::step`](crate::Population::step).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// The frame that was just simulated.
    pub frame:     Frame,
    /// Agents that crashed during this frame, ascending by id.
    pub crashed:   Vec<AgentId>,
    /// Agents still alive after this frame.
    pub alive:     usize,
    /// `true` only on the frame the last live agent crashed.
    pub game_over: bool,
}

impl FrameReport {
    #[inline]
    pub fn crash_count(&self) -> usize {
        self.crashed.len()
    }
}

/// Outcome of one [`Population::run_epoch`](crate::Population::run_epoch).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EpochSummary {
    pub epoch:     u32,
    /// Frames simulated in the epoch.
    pub frames:    u64,
    /// `false` if the epoch stopped at the frame cap with agents alive.
    pub game_over: bool,
    /// `(agent, obstacles passed)`, best first.
    pub ranking:   Vec<(AgentId, u32)>,
}

impl EpochSummary {
    pub fn best(&self) -> Option<(AgentId, u32)> {
        self.ranking.first().copied()
    }
}
