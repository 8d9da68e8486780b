//! `AgentState` — everything one agent owns.
//!
//! The struct is plain data; behaviour is split across the sibling modules
//! (`physics`, `animation`, `collision`, `arbiter`), each adding an `impl
//! AgentState` block for its concern.  Fields the population or a renderer
//! may read are exposed through accessors and [`AgentState::snapshot`];
//! mutation only goes through the state-machine methods.

use rd_core::{AgentId, AgentRng, ObstacleId, PhysicsConfig};

use crate::{ActionArbiter, Status};

// ── Sub-states ────────────────────────────────────────────────────────────────

/// Frame cadence of the current status.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct AnimClock {
    /// Time since the frame index last advanced, in ms.
    pub(crate) timer_ms: f64,
    /// Index into the current status' frame list.
    pub(crate) frame:    usize,
}

/// Blink timer, active only while waiting.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct BlinkClock {
    pub(crate) delay_ms:   f64,
    pub(crate) elapsed_ms: f64,
    pub(crate) count:      u32,
}

// ── AgentState ────────────────────────────────────────────────────────────────

/// Mutable state of one agent.
#[derive(Clone, Debug)]
pub struct AgentState {
    pub(crate) id:     AgentId,
    pub(crate) config: PhysicsConfig,
    pub(crate) rng:    AgentRng,

    pub(crate) status: Status,
    pub(crate) x:      f64,
    /// Sub-pixel; read through [`AgentState::y`].
    pub(crate) y:      f64,
    /// Vertical velocity in pixels per reference frame (negative = up).
    pub(crate) velocity: f64,

    pub(crate) jumping:            bool,
    pub(crate) ducking:            bool,
    pub(crate) reached_min_height: bool,
    pub(crate) speed_drop:         bool,

    pub(crate) anim:  AnimClock,
    pub(crate) blink: BlinkClock,

    pub(crate) jump_count:       u32,
    pub(crate) obstacles_passed: u32,
    /// Identity of the last obstacle tested; `INVALID` after spawn/revive.
    pub(crate) last_obstacle:    ObstacleId,

    pub(crate) arbiter: ActionArbiter,
}

impl AgentState {
    /// Spawn an agent in `Waiting` at `x = 0` on the ground line.
    ///
    /// The blink delay is drawn from the agent's own RNG, seeded from
    /// `global_seed` and `id`.
    pub fn new(id: AgentId, config: PhysicsConfig, global_seed: u64) -> Self {
        let ground_y = config.ground_y();
        let mut agent = Self {
            id,
            config,
            rng: AgentRng::new(global_seed, id),
            status: Status::Waiting,
            x: 0.0,
            y: ground_y,
            velocity: 0.0,
            jumping: false,
            ducking: false,
            reached_min_height: false,
            speed_drop: false,
            anim: AnimClock::default(),
            blink: BlinkClock::default(),
            jump_count: 0,
            obstacles_passed: 0,
            last_obstacle: ObstacleId::INVALID,
            arbiter: ActionArbiter::new(),
        };
        agent.enter(Status::Waiting);
        agent
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn is_crashed(&self) -> bool {
        self.status.is_crashed()
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y.round()
    }

    #[inline]
    pub fn ground_y(&self) -> f64 {
        self.config.ground_y()
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    #[inline]
    pub fn is_ducking(&self) -> bool {
        self.ducking
    }

    #[inline]
    pub fn reached_min_height(&self) -> bool {
        self.reached_min_height
    }

    #[inline]
    pub fn is_speed_dropping(&self) -> bool {
        self.speed_drop
    }

    #[inline]
    pub fn jump_count(&self) -> u32 {
        self.jump_count
    }

    #[inline]
    pub fn obstacles_passed(&self) -> u32 {
        self.obstacles_passed
    }

    #[inline]
    pub fn blink_count(&self) -> u32 {
        self.blink.count
    }

    #[inline]
    pub fn anim_frame(&self) -> usize {
        self.anim.frame
    }

    #[inline]
    pub fn anim_timer_ms(&self) -> f64 {
        self.anim.timer_ms
    }

    #[inline]
    pub fn arbiter(&self) -> &ActionArbiter {
        &self.arbiter
    }

    #[inline]
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Change the take-off velocity for future jumps.  See
    /// [`PhysicsConfig::set_jump_velocity`].
    pub fn set_jump_velocity(&mut self, setting: f64) {
        self.config.set_jump_velocity(setting);
    }

    /// Read-only projection consumed by a rendering collaborator.
    pub fn snapshot(&self) -> AgentSnapshot {
        AgentSnapshot {
            id:               self.id,
            status:           self.status,
            x:                self.x,
            y:                self.y(),
            ducking:          self.ducking,
            jumping:          self.jumping,
            obstacles_passed: self.obstacles_passed,
            jump_count:       self.jump_count,
            sprite_frame:     self.status.anim().frames[self.anim.frame],
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Leave `Waiting` for `Running`.  No-op in any other status.
    pub fn start(&mut self) {
        if self.status == Status::Waiting {
            self.enter(Status::Running);
        }
    }

    /// Freeze the agent.  Idempotent; returns `true` only on the transition.
    pub fn crash(&mut self) -> bool {
        if self.is_crashed() {
            return false;
        }
        self.enter(Status::Crashed);
        true
    }

    /// Restore a (possibly crashed) agent for a new epoch: `Running` on the
    /// ground at the start position, counters zeroed, obstacle reference and
    /// held inputs cleared.
    pub fn revive(&mut self) {
        self.last_obstacle = ObstacleId::INVALID;
        self.obstacles_passed = 0;
        self.jump_count = 0;
        self.x = self.config.start_x_pos;
        self.y = self.config.ground_y();
        self.velocity = 0.0;
        self.jumping = false;
        self.ducking = false;
        self.reached_min_height = false;
        self.speed_drop = false;
        self.arbiter.reset();
        self.enter(Status::Running);
    }
}

// ── AgentSnapshot ─────────────────────────────────────────────────────────────

/// Plain-data view of one agent at the end of a frame.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub id:               AgentId,
    pub status:           Status,
    pub x:                f64,
    pub y:                f64,
    pub ducking:          bool,
    pub jumping:          bool,
    pub obstacles_passed: u32,
    pub jump_count:       u32,
    /// Sprite-sheet x offset of the frame to draw.
    pub sprite_frame:     u16,
}
