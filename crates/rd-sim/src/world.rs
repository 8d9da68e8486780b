//! What the outside world hands the population every frame.

use rd_core::Obstacle;

/// Inputs for one frame.
///
/// `obstacles` is ordered front to back; only the first one is sensed and
/// tested for collisions.
#[derive(Copy, Clone, Debug)]
pub struct WorldFrame<'a> {
    /// Elapsed simulated time of this frame, in ms.
    pub delta_ms:      f64,
    /// Current scroll speed.
    pub speed:         f64,
    /// Decisions are only taken while the game is playing.
    pub playing:       bool,
    /// Agents walk in to their start position while the intro plays.
    pub playing_intro: bool,
    pub obstacles:     &'a [Obstacle],
}

impl<'a> WorldFrame<'a> {
    /// A regular in-game frame: playing, no intro.
    pub fn playing(delta_ms: f64, speed: f64, obstacles: &'a [Obstacle]) -> Self {
        Self {
            delta_ms,
            speed,
            playing: true,
            playing_intro: false,
            obstacles,
        }
    }

    #[inline]
    pub fn leading_obstacle(&self) -> Option<&'a Obstacle> {
        self.obstacles.first()
    }
}

/// A frame driver: scrolls obstacles, ramps speed, and so on.
///
/// [`Population::run_epoch`](crate::Population::run_epoch) asks it for the
/// next frame's inputs once per frame.
pub trait World {
    /// Advance the world by one frame and describe it.
    fn next_frame(&mut self) -> WorldFrame<'_>;

    /// Called when a new epoch starts.
    fn reset(&mut self) {}
}
