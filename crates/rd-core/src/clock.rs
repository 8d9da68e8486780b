//! Simulation frame counter.
//!
//! # Design
//!
//! The population advances one frame per `step` call.  The frame driver
//! supplies the elapsed time of each frame, which may vary; `FrameClock`
//! keeps both the integer frame count (exact, used for ordering and output
//! intervals) and the accumulated simulated milliseconds.

use std::fmt;

// ── Frame ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter within one epoch.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);
}

impl std::ops::Add<u64> for Frame {
    type Output = Frame;
    #[inline]
    fn add(self, rhs: u64) -> Frame {
        Frame(self.0 + rhs)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Tracks the current frame and the simulated time elapsed in the epoch.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameClock {
    pub current_frame: Frame,
    /// Simulated milliseconds since the epoch started.
    pub running_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame that lasted `delta_ms`.
    #[inline]
    pub fn advance(&mut self, delta_ms: f64) {
        self.current_frame = self.current_frame + 1;
        self.running_ms += delta_ms;
    }

    /// Back to frame 0 for a new epoch.
    pub fn reset(&mut self) {
        self.current_frame = Frame::ZERO;
        self.running_ms = 0.0;
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1} s)", self.current_frame, self.running_ms / 1000.0)
    }
}
