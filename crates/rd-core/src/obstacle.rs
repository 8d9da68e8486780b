//! Obstacle data as seen by the simulation core.
//!
//! Obstacles are produced and moved by a world collaborator outside the core.
//! The core only reads them: position, identity, effective geometry and the
//! collision boxes.

use crate::{CollisionBox, ObstacleId};

// ── ObstacleKind ──────────────────────────────────────────────────────────────

/// Base geometry shared by every obstacle of one kind.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleKind {
    /// Width of a single unit (size multiplier 1).
    pub width:  f64,
    pub height: f64,
    /// Collision boxes for a single unit, relative to the obstacle origin.
    pub boxes:  Vec<CollisionBox>,
}

impl ObstacleKind {
    pub fn small_cactus() -> Self {
        Self {
            width:  17.0,
            height: 35.0,
            boxes:  vec![
                CollisionBox::new(0.0, 7.0, 5.0, 27.0),
                CollisionBox::new(4.0, 0.0, 6.0, 34.0),
                CollisionBox::new(10.0, 4.0, 7.0, 14.0),
            ],
        }
    }

    pub fn large_cactus() -> Self {
        Self {
            width:  25.0,
            height: 50.0,
            boxes:  vec![
                CollisionBox::new(0.0, 12.0, 7.0, 38.0),
                CollisionBox::new(8.0, 0.0, 7.0, 49.0),
                CollisionBox::new(13.0, 10.0, 10.0, 38.0),
            ],
        }
    }

    pub fn pterodactyl() -> Self {
        Self {
            width:  46.0,
            height: 40.0,
            boxes:  vec![
                CollisionBox::new(15.0, 15.0, 16.0, 5.0),
                CollisionBox::new(18.0, 21.0, 24.0, 6.0),
                CollisionBox::new(2.0, 14.0, 4.0, 3.0),
                CollisionBox::new(6.0, 10.0, 4.0, 7.0),
                CollisionBox::new(10.0, 8.0, 6.0, 9.0),
            ],
        }
    }

    /// A kind whose only collision box covers its whole footprint.
    pub fn solid(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            boxes: vec![CollisionBox::new(0.0, 0.0, width, height)],
        }
    }
}

// ── Obstacle ──────────────────────────────────────────────────────────────────

/// One obstacle instance in the world.
///
/// `x` and `y` are the draw origin and are advanced by the world collaborator
/// every frame; everything else is fixed at spawn time.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub id: ObstacleId,
    pub x:  f64,
    pub y:  f64,
    base_width:  f64,
    base_height: f64,
    size:        u32,
    boxes:       Vec<CollisionBox>,
}

impl Obstacle {
    /// Spawn an obstacle of `kind` made of `size` side-by-side units.
    ///
    /// `size` is clamped to at least 1.  For multi-unit obstacles with three or
    /// more boxes the middle box is stretched and the last box moved so the
    /// box list spans the effective width.
    pub fn new(id: ObstacleId, kind: &ObstacleKind, size: u32, x: f64, y: f64) -> Self {
        let size = size.max(1);
        let mut boxes = kind.boxes.clone();
        let width = kind.width * size as f64;
        if size > 1 && boxes.len() >= 3 {
            let first = boxes[0].width;
            let last = boxes[2].width;
            boxes[1].width = width - first - last;
            boxes[2].x = width - last;
        }
        Self {
            id,
            x,
            y,
            base_width: kind.width,
            base_height: kind.height,
            size,
            boxes,
        }
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn base_width(&self) -> f64 {
        self.base_width
    }

    /// Width used for collision and sensing: base width × size.
    #[inline]
    pub fn effective_width(&self) -> f64 {
        self.base_width * self.size as f64
    }

    /// Height is not affected by the size multiplier.
    #[inline]
    pub fn height(&self) -> f64 {
        self.base_height
    }

    /// Collision boxes relative to the obstacle origin, already scaled.
    #[inline]
    pub fn boxes(&self) -> &[CollisionBox] {
        &self.boxes
    }

    /// Outer bounds with the 1-pixel sprite border trimmed off.
    pub fn outer_box(&self) -> CollisionBox {
        CollisionBox::new(
            self.x + 1.0,
            self.y + 1.0,
            self.effective_width() - 2.0,
            self.base_height - 2.0,
        )
    }

    /// `true` once the obstacle's right edge has scrolled past `x`.
    #[inline]
    pub fn is_behind(&self, x: f64) -> bool {
        self.x + self.effective_width() < x
    }
}
