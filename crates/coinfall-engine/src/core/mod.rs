pub mod coin;
pub mod enemy;
pub mod geometry;
pub mod level;
pub mod player;
pub mod rng;
pub mod time;
