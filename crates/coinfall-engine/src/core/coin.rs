use crate::core::geometry::Rect;
use crate::core::rng::Rng;

/// Coin bounding-box side length.
pub const COIN_SIZE: f32 = 32.0;
/// Fall speeds a coin can be born with (units/frame).
pub const FALL_SPEEDS: [f32; 2] = [1.0, 2.0];
/// Respawn band above the top edge: y is drawn from [RESPAWN_MIN_Y, 0).
pub const RESPAWN_MIN_Y: f32 = -15.0;

/// A falling collectible. Coins rain: one that leaves the bottom of the
/// world reappears above the top at a fresh horizontal position. Only a
/// pickup removes a coin from the world, and that removal happens in the
/// driver, not here.
#[derive(Debug, Clone)]
pub struct Coin {
    pub rect: Rect,
    pub vel_y: f32,
}

impl Coin {
    /// A coin at a random on-screen position with a random fall speed.
    pub fn spawn(rng: &mut Rng, world_width: f32, world_height: f32) -> Self {
        let x = rng.range_f32(0.0, world_width - COIN_SIZE);
        let y = rng.range_f32(0.0, world_height - COIN_SIZE);
        Self {
            rect: Rect::new(x, y, COIN_SIZE, COIN_SIZE),
            vel_y: *rng.pick(&FALL_SPEEDS),
        }
    }

    /// Fall one frame; past the bottom edge, respawn just above the top.
    /// The fall speed is kept across respawns.
    pub fn update(&mut self, rng: &mut Rng, world_width: f32, world_height: f32) {
        self.rect.pos.y += self.vel_y;
        if self.rect.pos.y > world_height {
            self.rect.pos.x = rng.range_f32(0.0, world_width);
            self.rect.pos.y = rng.range_f32(RESPAWN_MIN_Y, 0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_is_on_screen_with_known_speed() {
        let mut rng = Rng::new(42);
        for _ in 0..100 {
            let c = Coin::spawn(&mut rng, 800.0, 600.0);
            assert!(c.rect.pos.x >= 0.0 && c.rect.pos.x < 800.0 - COIN_SIZE);
            assert!(c.rect.pos.y >= 0.0 && c.rect.pos.y < 600.0 - COIN_SIZE);
            assert!(FALL_SPEEDS.contains(&c.vel_y));
        }
    }

    #[test]
    fn falls_by_its_speed() {
        let mut rng = Rng::new(1);
        let mut c = Coin::spawn(&mut rng, 800.0, 600.0);
        c.rect.pos.y = 100.0;
        c.vel_y = 2.0;
        c.update(&mut rng, 800.0, 600.0);
        assert_eq!(c.rect.pos.y, 102.0);
    }

    #[test]
    fn respawns_above_the_top_after_leaving_the_bottom() {
        let mut rng = Rng::new(3);
        let mut c = Coin::spawn(&mut rng, 800.0, 600.0);
        c.vel_y = 2.0;
        c.rect.pos.y = 599.5;
        c.update(&mut rng, 800.0, 600.0);
        assert!(
            (RESPAWN_MIN_Y..0.0).contains(&c.rect.pos.y),
            "respawn y out of band: {}",
            c.rect.pos.y
        );
        assert!(
            (0.0..800.0).contains(&c.rect.pos.x),
            "respawn x out of world: {}",
            c.rect.pos.x
        );
        assert_eq!(c.vel_y, 2.0, "fall speed survives the respawn");
    }

    #[test]
    fn exactly_at_the_bottom_is_not_past_it() {
        let mut rng = Rng::new(3);
        let mut c = Coin::spawn(&mut rng, 800.0, 600.0);
        c.vel_y = 1.0;
        c.rect.pos.y = 599.0;
        c.update(&mut rng, 800.0, 600.0);
        assert_eq!(c.rect.pos.y, 600.0, "y == height does not trigger a respawn");
    }

    #[test]
    fn seeded_rain_is_reproducible() {
        let mut a = Rng::new(77);
        let mut b = Rng::new(77);
        let mut ca = Coin::spawn(&mut a, 800.0, 600.0);
        let mut cb = Coin::spawn(&mut b, 800.0, 600.0);
        for _ in 0..2000 {
            ca.update(&mut a, 800.0, 600.0);
            cb.update(&mut b, 800.0, 600.0);
            assert_eq!(ca.rect.pos, cb.rect.pos);
        }
    }
}
