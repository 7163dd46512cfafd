use bevy::math::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in window coordinates, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingRectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}
impl BoundingRectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
    pub fn is_empty(&self) -> bool {
        return !(self.width > 0.0 && self.height > 0.0);
    }
    pub fn aspect_ratio(&self) -> f64 {
        return self.width / self.height;
    }
    pub fn contains(&self, point: &DVec2) -> bool {
        return point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height;
    }
}
