//! Simulation configuration.
//!
//! Defaults reproduce the constants of the classic runner game at 60 FPS.
//! Every value is an explicit field.  The core never reads ambient global
//! state such as frame rate or display density.

use crate::{RdError, RdResult};

// ── PhysicsConfig ─────────────────────────────────────────────────────────────

/// Agent body and jump constants.
///
/// Vertical values are in screen pixels with `y` growing downwards, so jump
/// velocities are negative.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhysicsConfig {
    /// Velocity a released jump is clamped to once minimum height is reached.
    pub drop_velocity: f64,
    /// Added to the vertical velocity every reference frame.
    pub gravity: f64,
    pub height: f64,
    pub width: f64,
    pub width_duck: f64,
    /// Take-off velocity before the speed adjustment.
    pub initial_jump_velocity: f64,
    /// Duration of the walk-in from `x = 0` to `start_x_pos`, in ms.
    pub intro_duration_ms: f64,
    /// Absolute `y` above which (i.e. smaller than) the jump is ended.
    pub max_jump_height: f64,
    /// Height above ground the agent must clear before a release can cut the
    /// jump short.
    pub min_jump_height: f64,
    /// Vertical displacement multiplier during a speed drop.
    pub speed_drop_coefficient: f64,
    pub start_x_pos: f64,
    /// Height of the play field.
    pub world_height: f64,
    /// Gap between the bottom of the play field and the ground line.
    pub bottom_pad: f64,
    /// Duration of one reference frame in ms (1000 / 60).
    pub reference_frame_ms: f64,
    /// Upper bound for the randomized blink delay while waiting, in ms.
    pub blink_timing_ms: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            drop_velocity:          -5.0,
            gravity:                0.6,
            height:                 47.0,
            width:                  44.0,
            width_duck:             59.0,
            initial_jump_velocity:  -10.0,
            intro_duration_ms:      1500.0,
            max_jump_height:        30.0,
            min_jump_height:        30.0,
            speed_drop_coefficient: 3.0,
            start_x_pos:            50.0,
            world_height:           150.0,
            bottom_pad:             10.0,
            reference_frame_ms:     1000.0 / 60.0,
            blink_timing_ms:        7000.0,
        }
    }
}

impl PhysicsConfig {
    /// `y` of an agent standing on the ground.
    #[inline]
    pub fn ground_y(&self) -> f64 {
        self.world_height - self.height - self.bottom_pad
    }

    /// `y` the agent must rise above before it has "reached minimum height".
    #[inline]
    pub fn min_jump_y(&self) -> f64 {
        self.ground_y() - self.min_jump_height
    }

    /// Set the take-off velocity to `-setting`; the drop velocity follows at
    /// half of it.
    pub fn set_jump_velocity(&mut self, setting: f64) {
        self.initial_jump_velocity = -setting;
        self.drop_velocity = -setting / 2.0;
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically loaded from a TOML/JSON file by the application crate and passed
/// to the population builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of agents in the population.
    pub agent_count: usize,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,

    /// Hard cap on frames per epoch; `0` means "until every agent crashed".
    pub max_frames: u64,

    /// Emit a per-frame summary every N frames.  1 = every frame.
    pub output_interval_frames: u64,

    pub physics: PhysicsConfig,
}

impl SimConfig {
    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> RdResult<()> {
        if self.agent_count == 0 {
            return Err(RdError::Config("agent_count must be at least 1".into()));
        }
        let frame_ms = self.physics.reference_frame_ms;
        if !frame_ms.is_finite() || frame_ms <= 0.0 {
            return Err(RdError::Config(format!(
                "reference_frame_ms must be positive, got {frame_ms}"
            )));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            agent_count:            1,
            seed:                   0,
            num_threads:            None,
            max_frames:             0,
            output_interval_frames: 1,
            physics:                PhysicsConfig::default(),
        }
    }
}
