//! `rd-sim` — runs a population of agents in lockstep.
//!
//! # Per-frame flow
//!
//! ```text
//! population.step(&world):
//!   ① Agents   : for every live agent (parallel with the `parallel` feature):
//!                   advance physics and animation by world.delta_ms
//!                   collision test against world.obstacles[0]
//!                     hit → CRASHED, flagged as newly crashed
//!                   if playing and an obstacle is sensed:
//!                     decide → arbitrate → apply commands
//!   ② Tally    : collect newly crashed ids in ascending AgentId order;
//!                 when no agent is left alive, the epoch is over.
//!   ③ Clock    : advance the frame counter.
//! ```
//!
//! Agents only read shared, immutable data (obstacles, classifiers), so the
//! order in which they are stepped never changes the result.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                        |
//! |------------|-----------------------------------------------|
//! | `parallel` | Runs the agent phase on Rayon's thread pool.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rd_brain::FeedForward;
//! use rd_sim::{NoopObserver, PopulationBuilder};
//!
//! let net = Arc::new(FeedForward::random_default(&mut rng)?);
//! let mut population = PopulationBuilder::new(config)
//!     .shared_classifier(net)
//!     .build()?;
//! population.revive();
//! let summary = population.run_epoch(&mut world, &mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod population;
pub mod report;
pub mod world;


pub use builder::PopulationBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, PopulationObserver};
pub use population::Population;
pub use report::{EpochSummary, FrameReport};
pub use world::{World, WorldFrame};
