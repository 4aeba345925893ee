use crate::api::config::WorldConfig;
use crate::core::geometry::Rect;

/// Static level geometry: the ordered platform registry plus the world
/// bounds. Platforms are immutable after construction; registration order is
/// the tie-break order for simultaneous collisions, so storage is an ordered
/// Vec rather than any kind of set.
#[derive(Debug, Clone)]
pub struct Level {
    platforms: Vec<Rect>,
    width: f32,
    height: f32,
    floor_y: f32,
}

impl Level {
    /// Build the level from an already-validated configuration.
    pub fn from_config(config: &WorldConfig) -> Self {
        let platforms = config
            .platforms
            .iter()
            .map(|p| Rect::new(p.x, p.y, p.width, p.height))
            .collect();
        Self {
            platforms,
            width: config.width,
            height: config.height,
            floor_y: config.floor_y,
        }
    }

    pub fn platforms(&self) -> &[Rect] {
        &self.platforms
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn floor_y(&self) -> f32 {
        self.floor_y
    }

    /// All platforms overlapping `subject`, in registration order.
    /// The list is materialized up front: collision resolution mutates the
    /// subject while walking it, and later snaps must not see a hit list
    /// recomputed mid-resolution.
    pub fn hits(&self, subject: &Rect) -> Vec<Rect> {
        self.platforms
            .iter()
            .filter(|p| subject.intersects(p))
            .copied()
            .collect()
    }
}
