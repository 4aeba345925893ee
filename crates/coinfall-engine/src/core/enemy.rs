use glam::Vec2;

use crate::core::geometry::Rect;

/// Enemy bounding-box side length.
pub const ENEMY_SIZE: f32 = 64.0;
/// Patrol speed magnitude (units/frame).
pub const PATROL_SPEED: f32 = 5.0;
/// Vertical center of the patrol path in the reference world.
pub const PATROL_CENTER_Y: f32 = 570.0;

/// A patrolling hazard: fixed-speed horizontal oscillation bounded by the
/// screen edges. It ignores platforms entirely, and contact with the player
/// is the driver's business, not this type's.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub rect: Rect,
    pub vel_x: f32,
}

impl Enemy {
    /// An enemy centered on `center`, initially patrolling rightward.
    pub fn new(center: Vec2) -> Self {
        Self {
            rect: Rect::centered(center, Vec2::splat(ENEMY_SIZE)),
            vel_x: PATROL_SPEED,
        }
    }

    /// Move one frame and reverse on the world edges. The reversal fires
    /// exactly when an edge has been exceeded, never on mere contact.
    pub fn update(&mut self, world_width: f32) {
        self.rect.pos.x += self.vel_x;
        if self.rect.right() > world_width || self.rect.left() < 0.0 {
            self.vel_x = -self.vel_x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_centered() {
        let e = Enemy::new(Vec2::new(400.0, 570.0));
        assert_eq!(e.rect.pos, Vec2::new(368.0, 538.0));
        assert_eq!(e.vel_x, PATROL_SPEED);
    }

    #[test]
    fn patrols_rightward_until_past_the_edge() {
        let mut e = Enemy::new(Vec2::new(400.0, 570.0));
        e.rect.pos.x = 728.0;
        e.update(800.0);
        // right == 797: inside, no reversal
        assert_eq!(e.vel_x, PATROL_SPEED);
        e.update(800.0);
        // right == 802 > 800: reversed
        assert_eq!(e.vel_x, -PATROL_SPEED);
        e.update(800.0);
        assert_eq!(e.rect.pos.x, 733.0, "moves back left after reversing");
    }

    #[test]
    fn reverses_on_left_edge() {
        let mut e = Enemy::new(Vec2::new(400.0, 570.0));
        e.vel_x = -PATROL_SPEED;
        e.rect.pos.x = 3.0;
        e.update(800.0);
        assert_eq!(e.rect.pos.x, -2.0, "the overshoot frame is kept");
        assert_eq!(e.vel_x, PATROL_SPEED);
    }

    #[test]
    fn edge_contact_alone_does_not_reverse() {
        let mut e = Enemy::new(Vec2::new(400.0, 570.0));
        e.rect.pos.x = 731.0;
        e.update(800.0);
        // right == exactly 800
        assert_eq!(e.rect.right(), 800.0);
        assert_eq!(e.vel_x, PATROL_SPEED, "reversal requires right > width");
    }
}
