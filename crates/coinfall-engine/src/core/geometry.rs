use glam::Vec2;

/// Axis-aligned rectangle, top-left anchored, in a Y-down world.
/// All collision in the simulation runs over these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner in world space.
    pub pos: Vec2,
    /// Width and height. Positive for every rectangle the simulation touches;
    /// enforced at config validation, not here.
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle with the given size, centered on `center`.
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size * 0.5,
            size,
        }
    }

    // -- Edge accessors --

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    // -- Edge setters: translate the rectangle so the named edge lands on `v` --

    pub fn set_left(&mut self, v: f32) {
        self.pos.x = v;
    }

    pub fn set_right(&mut self, v: f32) {
        self.pos.x = v - self.size.x;
    }

    pub fn set_top(&mut self, v: f32) {
        self.pos.y = v;
    }

    pub fn set_bottom(&mut self, v: f32) {
        self.pos.y = v - self.size.y;
    }

    /// Strict AABB overlap test. Rectangles that merely touch along an edge
    /// do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
