use bevy::math::DVec3;

use crate::math::Cartesian3;
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}
impl Ray {
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }
    pub fn get_point(&self, t: f64) -> DVec3 {
        let temp = self.direction.multiply_by_scalar(t);
        return self.origin + temp;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_point() {
        let ray = Ray::new(DVec3::new(1.0, 2.0, 3.0), DVec3::X);
        assert_eq!(ray.get_point(0.0), ray.origin);
        assert_eq!(ray.get_point(2.5), DVec3::new(3.5, 2.0, 3.0));
    }
}
