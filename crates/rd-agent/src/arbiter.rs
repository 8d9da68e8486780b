//! Edge-triggered translation of per-frame decisions into press/release
//! commands.
//!
//! The arbiter remembers the previous decision and emits commands only on
//! changes, reproducing "held key" semantics: a decision stream of
//! `JUMP, JUMP, JUMP` presses jump once.
//!
//! | previous | next    | commands                   |
//! |----------|---------|----------------------------|
//! | NEUTRAL  | JUMP    | `JumpStart`                |
//! | NEUTRAL  | DUCK    | `DuckOn`                   |
//! | JUMP     | NEUTRAL | `JumpRelease`              |
//! | JUMP     | DUCK    | `JumpRelease`, `DuckOn`    |
//! | DUCK     | NEUTRAL | `DuckOff`                  |
//! | DUCK     | JUMP    | `DuckOff`, `JumpStart`     |
//! | same     | same    | none                       |

use std::fmt;

use rd_core::Action;

use crate::AgentState;

// ── Command ───────────────────────────────────────────────────────────────────

/// A single input transition applied to an agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Command {
    JumpStart,
    JumpRelease,
    DuckOn,
    DuckOff,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Command::JumpStart   => "jump-start",
            Command::JumpRelease => "jump-release",
            Command::DuckOn      => "duck-on",
            Command::DuckOff     => "duck-off",
        };
        f.write_str(s)
    }
}

/// The (at most two) commands issued for one decision, in order.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Commands {
    buf: [Option<Command>; 2],
    len: usize,
}

impl Commands {
    fn push(&mut self, cmd: Command) {
        self.buf[self.len] = Some(cmd);
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Command> + '_ {
        self.buf[..self.len].iter().flatten().copied()
    }

    pub fn contains(&self, cmd: Command) -> bool {
        self.iter().any(|c| c == cmd)
    }
}

// ── ActionArbiter ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionArbiter {
    last_action: Action,
}

impl ActionArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn last_action(&self) -> Action {
        self.last_action
    }

    /// Commands for moving from the previous decision to `next`.
    ///
    /// `next` becomes the previous decision unconditionally.
    pub fn arbitrate(&mut self, next: Action) -> Commands {
        let mut out = Commands::default();
        match (self.last_action, next) {
            (Action::Jump, Action::Jump) | (Action::Duck, Action::Duck) => {}
            (Action::Jump, _) => {
                out.push(Command::JumpRelease);
                if next == Action::Duck {
                    out.push(Command::DuckOn);
                }
            }
            (Action::Duck, _) => {
                out.push(Command::DuckOff);
                if next == Action::Jump {
                    out.push(Command::JumpStart);
                }
            }
            (Action::Neutral, Action::Jump) => out.push(Command::JumpStart),
            (Action::Neutral, Action::Duck) => out.push(Command::DuckOn),
            (Action::Neutral, Action::Neutral) => {}
        }
        self.last_action = next;
        out
    }

    /// Forget the held input.
    pub fn reset(&mut self) {
        self.last_action = Action::Neutral;
    }
}

// ── Applying commands ─────────────────────────────────────────────────────────

impl AgentState {
    /// Apply one input transition.
    ///
    /// `DuckOn` mid-jump becomes a speed drop.  A jump or duck press also
    /// wakes a waiting agent.
    pub fn apply(&mut self, cmd: Command, speed: f64) {
        if self.is_crashed() {
            return;
        }
        match cmd {
            Command::JumpStart => {
                self.start();
                self.start_jump(speed);
            }
            Command::JumpRelease => self.end_jump(),
            Command::DuckOn => {
                self.start();
                if self.jumping {
                    self.set_speed_drop();
                } else {
                    self.set_duck(true);
                }
            }
            Command::DuckOff => {
                self.speed_drop = false;
                self.set_duck(false);
            }
        }
    }

    /// Arbitrate `action` against the held input and apply the resulting
    /// commands.  Crashed agents neither arbitrate nor change.
    pub fn act(&mut self, action: Action, speed: f64) -> Commands {
        if self.is_crashed() {
            return Commands::default();
        }
        let cmds = self.arbiter.arbitrate(action);
        for cmd in cmds.iter() {
            self.apply(cmd, speed);
        }
        cmds
    }
}
