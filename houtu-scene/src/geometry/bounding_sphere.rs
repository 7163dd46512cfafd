use bevy::math::DVec3;

#[derive(Debug, Clone, PartialEq, Copy, Default)]
pub struct BoundingSphere {
    pub center: DVec3,
    pub radius: f64,
}
impl BoundingSphere {
    pub fn new(center: DVec3, radius: f64) -> Self {
        Self { center, radius }
    }
}
