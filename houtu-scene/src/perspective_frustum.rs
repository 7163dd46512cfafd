#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveFrustum {
    /// Field of view along the wider axis, in radians.
    pub fov: f64,
    pub aspect_ratio: f64,
    pub near: f64,
    pub far: f64,
}
impl Default for PerspectiveFrustum {
    fn default() -> Self {
        Self::new((60.0_f64).to_radians(), 1.0, 1.0, 500000000.0)
    }
}
impl PerspectiveFrustum {
    pub fn new(fov: f64, aspect_ratio: f64, near: f64, far: f64) -> Self {
        Self {
            fov,
            aspect_ratio,
            near,
            far,
        }
    }
    pub fn get_fovy(&self) -> f64 {
        if self.aspect_ratio <= 1.0 {
            return self.fov;
        }
        return ((self.fov * 0.5).tan() / self.aspect_ratio).atan() * 2.0;
    }
}
