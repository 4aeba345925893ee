use glam::Vec2;

use crate::api::config::{ConfigError, WorldConfig};
use crate::api::types::SimEvent;
use crate::core::coin::Coin;
use crate::core::enemy::{Enemy, PATROL_CENTER_Y};
use crate::core::geometry::Rect;
use crate::core::level::Level;
use crate::core::player::Player;
use crate::core::rng::Rng;
use crate::input::queue::{Command, InputQueue};

/// The simulation driver. Owns every piece of mutable state (player, level,
/// enemies, coins, score) and advances it one fixed tick per `step` call in
/// a strict order: input, player physics, world clamp, patrols, coin rain,
/// pickups, hazard check.
///
/// The world is headless. A shell pushes `Command`s into an `InputQueue`,
/// calls `step` once per tick, then reads rectangles, score, events and the
/// over-flag back out for drawing.
pub struct World {
    config: WorldConfig,
    level: Level,
    player: Player,
    enemies: Vec<Enemy>,
    coins: Vec<Coin>,
    rng: Rng,
    score: u32,
    over: bool,
    events: Vec<SimEvent>,
}

impl World {
    /// Validate the configuration and build the starting state: the player
    /// at the origin, one patrol enemy on its reference path, and the
    /// configured number of coins at seeded random positions.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let level = Level::from_config(&config);
        let mut rng = Rng::new(config.seed);

        let enemies = vec![Enemy::new(Vec2::new(
            config.width / 2.0,
            PATROL_CENTER_Y,
        ))];
        let coins = (0..config.coin_count)
            .map(|_| Coin::spawn(&mut rng, config.width, config.height))
            .collect::<Vec<_>>();

        log::info!(
            "world ready: {}x{}, {} platforms, {} coins, seed {}",
            config.width,
            config.height,
            level.platforms().len(),
            coins.len(),
            config.seed
        );

        Ok(Self {
            config,
            level,
            player: Player::new(),
            enemies,
            coins,
            rng,
            score: 0,
            over: false,
            events: Vec::new(),
        })
    }

    /// Advance the simulation by one fixed tick. Drains the input queue
    /// first, so everything the shell observed since the last tick is
    /// applied before physics integration runs.
    pub fn step(&mut self, input: &mut InputQueue) {
        self.events.clear();
        let commands = input.drain();
        if self.over {
            return;
        }

        for command in commands {
            self.apply(command);
        }

        self.player.update(&self.level);

        // Horizontal world clamp runs after integration so the player never
        // reports an edge outside the world.
        let width = self.level.width();
        if self.player.rect.right() > width {
            self.player.rect.set_right(width);
        }
        if self.player.rect.left() < 0.0 {
            self.player.rect.set_left(0.0);
        }

        for enemy in &mut self.enemies {
            enemy.update(width);
        }
        for coin in &mut self.coins {
            coin.update(&mut self.rng, width, self.level.height());
        }

        self.collect_coins();
        self.check_hazard();
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::MoveLeft => self.player.go_left(),
            Command::MoveRight => self.player.go_right(),
            // Release only stops motion in the released direction: letting
            // go of "left" while already moving right must not halt the run.
            Command::ReleaseLeft => {
                if self.player.vel_x < 0.0 {
                    self.player.stop();
                }
            }
            Command::ReleaseRight => {
                if self.player.vel_x > 0.0 {
                    self.player.stop();
                }
            }
            Command::Jump => self.player.jump(&self.level),
        }
    }

    /// Remove every coin overlapping the player, bumping the score once per
    /// coin. Removed coins are gone for good; the rain thins as you collect.
    fn collect_coins(&mut self) {
        let player_rect = self.player.rect;
        let score = &mut self.score;
        let events = &mut self.events;
        self.coins.retain(|coin| {
            if coin.rect.intersects(&player_rect) {
                *score += 1;
                log::debug!("coin collected, score {score}");
                events.push(SimEvent::CoinCollected { score: *score });
                false
            } else {
                true
            }
        });
    }

    fn check_hazard(&mut self) {
        if self
            .enemies
            .iter()
            .any(|enemy| enemy.rect.intersects(&self.player.rect))
        {
            self.over = true;
            self.events.push(SimEvent::GameOver);
            log::info!("game over at score {}", self.score);
        }
    }

    // -- Read API: the render contract --

    pub fn player_rect(&self) -> Rect {
        self.player.rect
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn platforms(&self) -> &[Rect] {
        self.level.platforms()
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Events emitted by the most recent step.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }
}
