//! `rd-agent` — one simulated runner: physics, animation, collision and
//! input arbitration.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`status`]      | `Status` enum, per-state `AnimSpec` table                  |
//! | [`state`]       | `AgentState` (all mutable per-agent data), `AgentSnapshot` |
//! | [`physics`]     | jump integrator, duck, speed drop, intro walk-in           |
//! | [`animation`]   | frame cadence and blink timer                              |
//! | [`collision`]   | agent collision boxes and the obstacle test                |
//! | [`arbiter`]     | `ActionArbiter`, `Command`, `Commands`                     |
//!
//! # Per-frame flow
//!
//! ```text
//! agent.advance(dt, speed, intro)        // jump integration + animation
//! agent.check_collision(&obstacle)       // Clear / Hit / AlreadyCrashed
//! agent.act(decision, speed)             // edge-triggered press/release
//! ```
//!
//! A crashed agent ignores `advance` and `act` until [`AgentState::revive`].
//! Invalid transitions (jumping while already airborne, ducking while
//! crashed, …) are silent no-ops, like debounced key presses.

pub mod animation;
pub mod arbiter;
pub mod collision;
pub mod physics;
pub mod state;
pub mod status;


pub use arbiter::{ActionArbiter, Command, Commands};
pub use collision::{CollisionCheck, DUCKING_BOXES, RUNNING_BOXES};
pub use state::{AgentSnapshot, AgentState};
pub use status::{AnimSpec, Status};
