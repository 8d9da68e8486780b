//! Frame cadence and the waiting blink.
//!
//! Each status owns a frame list and a frame duration (see
//! [`Status::anim`]).  The cadence timer accumulates simulated time and, once
//! it reaches the frame duration, advances the frame index with wraparound
//! and starts over.
//!
//! While waiting the eyes stay open (frame 0) until a randomized blink delay
//! has elapsed; the blink then shows frame 1 for one cadence period, a new
//! delay is drawn and the blink counter goes up.

use crate::{AgentState, Status};

impl AgentState {
    /// Switch to `status`, restarting its animation from frame 0.
    pub(crate) fn enter(&mut self, status: Status) {
        self.status = status;
        self.anim.frame = 0;
        if status == Status::Waiting {
            self.blink.elapsed_ms = 0.0;
            self.draw_blink_delay();
        }
    }

    /// Advance the animation by `delta_ms`.  Crashed agents are frozen.
    pub(crate) fn animate(&mut self, delta_ms: f64) {
        if self.is_crashed() {
            return;
        }
        self.anim.timer_ms += delta_ms;

        if self.status == Status::Waiting && self.anim.frame == 0 {
            self.blink.elapsed_ms += delta_ms;
            if self.blink.elapsed_ms >= self.blink.delay_ms {
                self.anim.frame = 1 % self.status.anim().frames.len();
                self.anim.timer_ms = 0.0;
                self.blink.count += 1;
                self.blink.elapsed_ms = 0.0;
                self.draw_blink_delay();
            }
            return;
        }

        let spec = self.status.anim();
        if self.anim.timer_ms >= spec.ms_per_frame {
            self.anim.frame = (self.anim.frame + 1) % spec.frames.len();
            self.anim.timer_ms = 0.0;
        }
    }

    fn draw_blink_delay(&mut self) {
        self.blink.delay_ms = self.rng.blink_delay(self.config.blink_timing_ms);
    }
}
