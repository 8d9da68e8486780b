//! `rd-core` — foundational types for the `rust_rd` runner simulation.
//!
//! This crate is a dependency of every other `rd-*` crate.  It has no `rd-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`ids`]        | `AgentId`, `ObstacleId`                                |
//! | [`action`]     | `Action` — the three discrete decisions                |
//! | [`geometry`]   | `CollisionBox`, `overlaps`                             |
//! | [`obstacle`]   | `ObstacleKind`, `Obstacle`                             |
//! | [`config`]     | `PhysicsConfig`, `SimConfig`                           |
//! | [`clock`]      | `Frame`, `FrameClock`                                  |
//! | [`rng`]        | `AgentRng` (per-agent), `SimRng` (global)              |
//! | [`error`]      | `RdError`, `RdResult`                                  |
//!
//! # Coordinate system
//!
//! Screen coordinates: `x` grows to the right, `y` grows **downwards**.  An
//! agent standing on the ground has `y == ground_y`; a jump makes `y`
//! smaller.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod action;
pub mod clock;
pub mod config;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod obstacle;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::Action;
pub use clock::{Frame, FrameClock};
pub use config::{PhysicsConfig, SimConfig};
pub use error::{RdError, RdResult};
pub use geometry::{CollisionBox, overlaps};
pub use ids::{AgentId, ObstacleId};
pub use obstacle::{Obstacle, ObstacleKind};
pub use rng::{AgentRng, SimRng};
