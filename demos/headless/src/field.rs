//! A toy obstacle stream: cacti and pterodactyls scrolling in from the right
//! edge, spaced by speed-dependent random gaps, with a slowly rising speed.

use rd_core::{Obstacle, ObstacleId, ObstacleKind, SimRng};
use rd_sim::{World, WorldFrame};

const WORLD_WIDTH:        f64 = 600.0;
const FPS:                f64 = 60.0;
const FRAME_MS:           f64 = 1000.0 / FPS;
const INITIAL_SPEED:      f64 = 6.0;
const MAX_SPEED:          f64 = 13.0;
const ACCELERATION:       f64 = 0.001;
const GAP_COEFFICIENT:    f64 = 0.6;
const MAX_GAP_RATIO:      f64 = 1.5;
const MAX_OBSTACLE_SIZE:  u32 = 3;
/// Only at this speed and above do pterodactyls appear.
const PTERODACTYL_MIN_SPEED: f64 = 8.5;
const PTERODACTYL_HEIGHTS: [f64; 3] = [100.0, 75.0, 50.0];

struct Template {
    kind:           ObstacleKind,
    heights:        &'static [f64],
    min_gap:        f64,
    /// Multi-unit obstacles are only spawned above this speed.
    multiple_speed: f64,
    min_speed:      f64,
}

pub struct ObstacleField {
    seed:      u64,
    epoch:     u64,
    rng:       SimRng,
    templates: Vec<Template>,
    obstacles: Vec<Obstacle>,
    next_id:   u64,
    /// Distance that must open up behind the last obstacle before the next
    /// one spawns.
    next_gap:  f64,
    speed:     f64,
}

impl ObstacleField {
    pub fn new(seed: u64) -> Self {
        let templates = vec![
            Template {
                kind:           ObstacleKind::small_cactus(),
                heights:        &[105.0],
                min_gap:        120.0,
                multiple_speed: 4.0,
                min_speed:      0.0,
            },
            Template {
                kind:           ObstacleKind::large_cactus(),
                heights:        &[90.0],
                min_gap:        120.0,
                multiple_speed: 7.0,
                min_speed:      0.0,
            },
            Template {
                kind:           ObstacleKind::pterodactyl(),
                heights:        &PTERODACTYL_HEIGHTS,
                min_gap:        150.0,
                multiple_speed: 999.0,
                min_speed:      PTERODACTYL_MIN_SPEED,
            },
        ];
        Self {
            seed,
            epoch: 0,
            rng: SimRng::new(seed),
            templates,
            obstacles: Vec::new(),
            next_id: 0,
            next_gap: 0.0,
            speed: INITIAL_SPEED,
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    fn spawn(&mut self) {
        let eligible: Vec<usize> = (0..self.templates.len())
            .filter(|&i| self.speed >= self.templates[i].min_speed)
            .collect();
        let template = &self.templates[eligible[self.rng.gen_range(0..eligible.len())]];

        let size = if self.speed > template.multiple_speed {
            self.rng.gen_range(1..=MAX_OBSTACLE_SIZE)
        } else {
            1
        };
        let y = template.heights[self.rng.gen_range(0..template.heights.len())];

        let obstacle = Obstacle::new(ObstacleId(self.next_id), &template.kind, size, WORLD_WIDTH, y);
        let min_gap = (obstacle.effective_width() * self.speed + template.min_gap * GAP_COEFFICIENT).round();
        let max_gap = (min_gap * MAX_GAP_RATIO).round();
        self.next_gap = self.rng.gen_range(min_gap..=max_gap);
        self.next_id += 1;
        self.obstacles.push(obstacle);
    }
}

impl World for ObstacleField {
    fn next_frame(&mut self) -> WorldFrame<'_> {
        let shift = (self.speed * FPS / 1000.0 * FRAME_MS).floor();
        for obstacle in &mut self.obstacles {
            obstacle.x -= shift;
        }
        self.obstacles.retain(|o| !o.is_behind(0.0));

        let room = match self.obstacles.last() {
            Some(last) => last.x + last.effective_width() + self.next_gap < WORLD_WIDTH,
            None => true,
        };
        if room {
            self.spawn();
        }

        self.speed = (self.speed + ACCELERATION).min(MAX_SPEED);
        WorldFrame::playing(FRAME_MS, self.speed, &self.obstacles)
    }

    fn reset(&mut self) {
        self.epoch += 1;
        self.rng = SimRng::new(self.seed).child(self.epoch);
        self.obstacles.clear();
        self.next_id = 0;
        self.next_gap = 0.0;
        self.speed = INITIAL_SPEED;
    }
}
