pub mod api;
pub mod core;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::{ConfigError, PlatformDesc, WorldConfig};
pub use api::types::SimEvent;
pub use api::world::World;
pub use core::coin::{Coin, COIN_SIZE};
pub use core::enemy::{Enemy, ENEMY_SIZE, PATROL_SPEED};
pub use core::geometry::Rect;
pub use core::level::Level;
pub use core::player::{Player, JUMP_VELOCITY, PLAYER_SIZE, WALK_SPEED};
pub use core::rng::Rng;
pub use core::time::FrameClock;
pub use input::queue::{Command, InputQueue};
