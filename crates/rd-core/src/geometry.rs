//! Axis-aligned collision boxes.
//!
//! Boxes are stored relative to an entity's draw origin and translated to
//! world space only for the duration of a test.  Overlap is **strict**: two
//! boxes that merely share an edge do not collide; a strictly positive
//! intersection is required along both axes.

/// An axis-aligned rectangle: offset `(x, y)` and extent `(width, height)`.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionBox {
    pub x:      f64,
    pub y:      f64,
    pub width:  f64,
    pub height: f64,
}

impl CollisionBox {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// This box moved by `(dx, dy)`.
    #[inline]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy, ..self }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Strict axis-aligned intersection test.
    #[inline]
    pub fn intersects(&self, other: &CollisionBox) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// `true` if any box of `a`, translated by `a_origin`, intersects any box of
/// `b`, translated by `b_origin`.
///
/// Empty lists never collide.  The test is symmetric in its two arguments.
pub fn overlaps(
    a:        &[CollisionBox],
    a_origin: (f64, f64),
    b:        &[CollisionBox],
    b_origin: (f64, f64),
) -> bool {
    a.iter().any(|ab| {
        let ab = ab.translated(a_origin.0, a_origin.1);
        b.iter()
            .any(|bb| ab.intersects(&bb.translated(b_origin.0, b_origin.1)))
    })
}
