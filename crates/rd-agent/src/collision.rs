//! Agent collision geometry and the obstacle test.
//!
//! The test runs in two phases.  The outer bounds of both entities (each
//! trimmed by a 1-pixel border) are compared first; only when they overlap
//! are the detailed box lists compared, each translated to its entity's
//! trimmed origin.

use rd_core::{CollisionBox, Obstacle, overlaps};

use crate::{AgentState, Status};

/// Detailed boxes while running, jumping or waiting.
pub const RUNNING_BOXES: [CollisionBox; 6] = [
    CollisionBox::new(22.0, 0.0, 17.0, 16.0),
    CollisionBox::new(1.0, 18.0, 30.0, 9.0),
    CollisionBox::new(10.0, 35.0, 14.0, 8.0),
    CollisionBox::new(1.0, 24.0, 29.0, 5.0),
    CollisionBox::new(5.0, 30.0, 21.0, 4.0),
    CollisionBox::new(9.0, 34.0, 15.0, 4.0),
];

/// Single box while ducking.
pub const DUCKING_BOXES: [CollisionBox; 1] = [CollisionBox::new(1.0, 18.0, 55.0, 25.0)];

/// Outcome of [`AgentState::check_collision`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CollisionCheck {
    Clear,
    /// Boxes overlap; the caller decides whether to crash the agent.
    Hit,
    /// The agent was already crashed; nothing was tested or counted.
    AlreadyCrashed,
}

impl CollisionCheck {
    #[inline]
    pub fn is_hit(self) -> bool {
        self == CollisionCheck::Hit
    }
}

impl AgentState {
    /// Detailed boxes for the current pose.
    pub fn active_boxes(&self) -> &'static [CollisionBox] {
        if self.status == Status::Ducking {
            &DUCKING_BOXES
        } else {
            &RUNNING_BOXES
        }
    }

    /// Trimmed outer bounds in world space.
    pub fn outer_box(&self) -> CollisionBox {
        let width = if self.status == Status::Ducking {
            self.config.width_duck
        } else {
            self.config.width
        };
        CollisionBox::new(self.x + 1.0, self.y() + 1.0, width - 2.0, self.config.height - 2.0)
    }

    /// Pure geometric test against `obstacle`.  Ignores crash state.
    pub fn collides_with(&self, obstacle: &Obstacle) -> bool {
        let agent_outer = self.outer_box();
        let obstacle_outer = obstacle.outer_box();
        if !agent_outer.intersects(&obstacle_outer) {
            return false;
        }
        overlaps(
            self.active_boxes(),
            (agent_outer.x, agent_outer.y),
            obstacle.boxes(),
            (obstacle_outer.x, obstacle_outer.y),
        )
    }

    /// Test against the nearest obstacle and count it as encountered.
    ///
    /// The obstacle counter goes up whenever the tested obstacle's identity
    /// differs from the last one seen, so each obstacle is counted once.
    pub fn check_collision(&mut self, obstacle: &Obstacle) -> CollisionCheck {
        if self.is_crashed() {
            return CollisionCheck::AlreadyCrashed;
        }
        if obstacle.id != self.last_obstacle {
            self.last_obstacle = obstacle.id;
            self.obstacles_passed += 1;
        }
        if self.collides_with(obstacle) {
            CollisionCheck::Hit
        } else {
            CollisionCheck::Clear
        }
    }
}
