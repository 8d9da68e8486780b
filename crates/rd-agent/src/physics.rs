//! Jump integrator, duck toggle, speed drop and intro walk-in.
//!
//! # Integration
//!
//! Motion is expressed per *reference frame* (1000/60 ms).  A frame that
//! lasted `dt` ms advances by `dt / reference_frame_ms` reference frames:
//!
//! ```text
//! frames = dt / reference_frame_ms
//! y     += velocity * frames * (speed_drop ? coefficient : 1)
//! v     += gravity * frames
//! ```
//!
//! `y` is integrated unrounded and only rounded to a whole pixel when read
//! (`AgentState::y`, snapshots, collision boxes).  At 60 FPS the visible
//! trajectory is the per-pixel one: 82, 72, 63, 54, ...
//!
//! Frame times from 1 ms up to two reference frames keep the apex within
//! 8 px and the airtime within 50 ms of the 60 FPS jump.

use crate::{AgentState, Status};

impl AgentState {
    // ── Per-frame update ──────────────────────────────────────────────────

    /// Advance one frame of `delta_ms` at world `speed`.
    ///
    /// Integrates an active jump, walks the agent in while the intro is
    /// playing, then advances the animation.  Does nothing once crashed.
    pub fn advance(&mut self, delta_ms: f64, speed: f64, playing_intro: bool) {
        if self.is_crashed() {
            return;
        }
        if playing_intro && self.x < self.config.start_x_pos {
            let step = (self.config.start_x_pos / self.config.intro_duration_ms * delta_ms).round();
            self.x = (self.x + step).min(self.config.start_x_pos);
        }
        if self.jumping {
            self.update_jump(delta_ms, speed);
        }
        self.animate(delta_ms);
    }

    // ── Jump ──────────────────────────────────────────────────────────────

    /// Take off.  Ignored while already jumping, ducking, or crashed.
    ///
    /// The take-off is steeper at higher world speed:
    /// `v = initial_jump_velocity - speed / 10`.
    pub fn start_jump(&mut self, speed: f64) {
        if self.jumping || self.ducking || self.is_crashed() {
            return;
        }
        self.enter(Status::Jumping);
        self.velocity = self.config.initial_jump_velocity - speed / 10.0;
        self.jumping = true;
        self.reached_min_height = false;
        self.speed_drop = false;
    }

    /// One integration step of an active jump.
    ///
    /// `_speed` is accepted for symmetry with [`start_jump`](Self::start_jump);
    /// the airborne trajectory itself does not depend on world speed.
    pub fn update_jump(&mut self, delta_ms: f64, _speed: f64) {
        if !self.jumping || self.is_crashed() {
            return;
        }
        let frames = delta_ms / self.config.reference_frame_ms;

        let displacement = if self.speed_drop {
            self.velocity * self.config.speed_drop_coefficient * frames
        } else {
            self.velocity * frames
        };
        self.y += displacement;
        self.velocity += self.config.gravity * frames;

        if self.y < self.config.min_jump_y() || self.speed_drop {
            self.reached_min_height = true;
        }
        if self.y < self.config.max_jump_height || self.speed_drop {
            self.end_jump();
        }
        if self.y > self.config.ground_y() {
            self.land();
        }
    }

    /// Cut the ascent short (jump input released).
    ///
    /// The velocity is clamped to the drop velocity only once minimum height
    /// was reached, so a very short tap still completes a small hop instead
    /// of slamming back down.
    pub fn end_jump(&mut self) {
        if !self.jumping {
            return;
        }
        if self.reached_min_height && self.velocity < self.config.drop_velocity {
            self.velocity = self.config.drop_velocity;
        }
    }

    /// Fast fall.  Only available mid-jump.
    pub fn set_speed_drop(&mut self) {
        if !self.jumping || self.is_crashed() {
            return;
        }
        self.speed_drop = true;
        self.velocity = 1.0;
    }

    fn land(&mut self) {
        let drop_to_duck = self.speed_drop;
        self.y = self.config.ground_y();
        self.velocity = 0.0;
        self.jumping = false;
        self.ducking = false;
        self.speed_drop = false;
        self.jump_count += 1;
        self.enter(Status::Running);
        // A speed drop only stays latched while duck is held.
        if drop_to_duck {
            self.set_duck(true);
        }
    }

    // ── Duck ──────────────────────────────────────────────────────────────

    /// Enter or leave `Ducking`.
    ///
    /// Mid-jump, entering becomes a speed drop and the agent lands ducking.
    /// Otherwise entering works from any non-ducking, non-crashed status;
    /// leaving returns to `Running` and only applies while ducking.
    pub fn set_duck(&mut self, ducking: bool) {
        if self.is_crashed() {
            return;
        }
        if ducking && self.jumping {
            self.set_speed_drop();
        } else if ducking && self.status != Status::Ducking {
            self.enter(Status::Ducking);
            self.ducking = true;
        } else if !ducking && self.status == Status::Ducking {
            self.enter(Status::Running);
            self.ducking = false;
        }
    }
}
