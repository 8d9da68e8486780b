//! Plain data row types written by output backends.

use rd_agent::Status;

/// One agent's state at a snapshot frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub epoch:            u32,
    pub frame:            u64,
    pub agent_id:         u32,
    pub status:           Status,
    pub x:                f64,
    pub y:                f64,
    pub jumping:          bool,
    pub ducking:          bool,
    pub obstacles_passed: u32,
    pub jump_count:       u32,
}

/// Population totals for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSummaryRow {
    pub epoch:     u32,
    pub frame:     u64,
    pub alive:     u64,
    pub crashed:   u64,
    pub game_over: bool,
}

/// One line of an end-of-epoch ranking.  `rank` starts at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingRow {
    pub epoch:            u32,
    pub rank:             u32,
    pub agent_id:         u32,
    pub obstacles_passed: u32,
    pub frames:           u64,
}
