//! The classifier's input vector.

use rd_core::Obstacle;

/// What an agent senses in one frame, in fixed order:
///
/// | index | value                                  |
/// |-------|----------------------------------------|
/// | 0     | obstacle x                             |
/// | 1     | obstacle y                             |
/// | 2     | obstacle effective width (base × size) |
/// | 3     | obstacle height                        |
/// | 4     | agent y                                |
/// | 5     | world speed                            |
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Observation(pub [f64; Observation::LEN]);

impl Observation {
    pub const LEN: usize = 6;

    pub fn new(obstacle: &Obstacle, agent_y: f64, speed: f64) -> Self {
        Self([
            obstacle.x,
            obstacle.y,
            obstacle.effective_width(),
            obstacle.height(),
            agent_y,
            speed,
        ])
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}
