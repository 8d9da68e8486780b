//! Agent status and the per-status animation table.

use std::fmt;

/// The state-machine status of one agent.
///
/// ```text
/// Waiting ──start / first input──► Running ◄──► Jumping
///                                     ▲  │
///                                     │  ▼
///                                   Ducking
/// any ──collision──► Crashed   (terminal until revive)
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    #[default]
    Waiting,
    Running,
    Jumping,
    Ducking,
    Crashed,
}

/// Animation parameters of one status.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnimSpec {
    /// Sprite-sheet x offsets of the frames, in display order.
    pub frames:       &'static [u16],
    /// How long each frame is shown, in ms.
    pub ms_per_frame: f64,
}

const WAITING: AnimSpec = AnimSpec { frames: &[44, 0],    ms_per_frame: 1000.0 / 3.0 };
const RUNNING: AnimSpec = AnimSpec { frames: &[88, 132],  ms_per_frame: 1000.0 / 12.0 };
const CRASHED: AnimSpec = AnimSpec { frames: &[220],      ms_per_frame: 1000.0 / 60.0 };
const JUMPING: AnimSpec = AnimSpec { frames: &[0],        ms_per_frame: 1000.0 / 60.0 };
const DUCKING: AnimSpec = AnimSpec { frames: &[264, 323], ms_per_frame: 1000.0 / 8.0 };

impl Status {
    /// Animation table entry for this status.
    #[inline]
    pub fn anim(self) -> &'static AnimSpec {
        match self {
            Status::Waiting => &WAITING,
            Status::Running => &RUNNING,
            Status::Crashed => &CRASHED,
            Status::Jumping => &JUMPING,
            Status::Ducking => &DUCKING,
        }
    }

    #[inline]
    pub fn is_crashed(self) -> bool {
        self == Status::Crashed
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Waiting => "WAITING",
            Status::Running => "RUNNING",
            Status::Jumping => "JUMPING",
            Status::Ducking => "DUCKING",
            Status::Crashed => "CRASHED",
        };
        f.write_str(s)
    }
}
