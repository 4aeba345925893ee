use crate::core::geometry::Rect;
use crate::core::level::Level;

/// Player bounding-box side length.
pub const PLAYER_SIZE: f32 = 64.0;
/// Horizontal walk speed (units/frame). Set by commands, never accumulated.
pub const WALK_SPEED: f32 = 4.0;
/// Gravity increment per frame once falling.
pub const GRAVITY: f32 = 0.35;
/// Vertical velocity assigned on the first frame of a fall.
pub const FALL_START: f32 = 1.0;
/// Vertical velocity assigned by a granted jump.
pub const JUMP_VELOCITY: f32 = -10.0;
/// How far below the body the jump-eligibility probe reaches. Two units, not
/// one: a one-unit probe misses contact against a platform that is itself
/// moving downward.
pub const JUMP_PROBE_DEPTH: f32 = 2.0;

/// The kinematic body the shell steers. Horizontal velocity is a discrete
/// walk speed; vertical velocity is continuous and accumulated by gravity.
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    pub vel_x: f32,
    pub vel_y: f32,
}

impl Player {
    /// A player at the world origin with zero velocity.
    pub fn new() -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, PLAYER_SIZE, PLAYER_SIZE),
            vel_x: 0.0,
            vel_y: 0.0,
        }
    }

    /// One frame of integration: gravity, then horizontal move-and-resolve,
    /// then vertical move-and-resolve. The axis split is what keeps a corner
    /// hit from snapping the body along the wrong axis.
    pub fn update(&mut self, level: &Level) {
        self.apply_gravity(level);

        self.rect.pos.x += self.vel_x;
        for block in level.hits(&self.rect) {
            if self.vel_x > 0.0 {
                self.rect.set_right(block.left());
            } else if self.vel_x < 0.0 {
                self.rect.set_left(block.right());
            }
        }
        // Horizontal velocity survives a wall hit. Only the vertical axis
        // zeroes velocity on contact; the body keeps pushing against the wall
        // and resumes the moment the way is clear.

        // Judge the snap direction from this frame's motion, not from the
        // (zeroed) velocity: with several overlapping hits, every platform
        // snaps and the last one registered wins.
        let descending = self.vel_y > 0.0;
        let ascending = self.vel_y < 0.0;
        self.rect.pos.y += self.vel_y;
        for block in level.hits(&self.rect) {
            if descending {
                self.rect.set_bottom(block.top());
            } else if ascending {
                self.rect.set_top(block.bottom());
            }
            self.vel_y = 0.0;
        }
    }

    /// Gravity with the exact-zero quirk: a body whose vertical velocity was
    /// zeroed by contact takes one flat-fall frame at FALL_START before
    /// acceleration resumes. The floor clamp runs here, before any movement,
    /// so a resting body never integrates through the floor.
    fn apply_gravity(&mut self, level: &Level) {
        if self.vel_y == 0.0 {
            self.vel_y = FALL_START;
        } else {
            self.vel_y += GRAVITY;
        }

        if self.rect.bottom() >= level.floor_y() && self.vel_y >= 0.0 {
            self.vel_y = 0.0;
            self.rect.set_bottom(level.floor_y());
        }
    }

    /// Jump-eligibility probe: a pure query against a copy of the body
    /// displaced JUMP_PROBE_DEPTH units down. The body itself never moves.
    /// Grounded means the probe touches a platform, or the body rests at or
    /// beyond the floor.
    pub fn grounded(&self, level: &Level) -> bool {
        let mut probe = self.rect;
        probe.pos.y += JUMP_PROBE_DEPTH;
        !level.hits(&probe).is_empty() || self.rect.bottom() >= level.floor_y()
    }

    /// Jump if grounded. Re-assigns JUMP_VELOCITY outright: there is no
    /// queuing, buffering or double-jump cap.
    pub fn jump(&mut self, level: &Level) {
        if self.grounded(level) {
            self.vel_y = JUMP_VELOCITY;
        }
    }

    // -- Movement commands (one per discrete input event) --

    pub fn go_left(&mut self) {
        self.vel_x = -WALK_SPEED;
    }

    pub fn go_right(&mut self) {
        self.vel_x = WALK_SPEED;
    }

    pub fn stop(&mut self) {
        self.vel_x = 0.0;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
