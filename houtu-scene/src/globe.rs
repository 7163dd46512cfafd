use bevy::math::DVec3;

use crate::{Ellipsoid, IntersectionTests, Ray};

/// The terrain surface. Without terrain tiles the surface is the ellipsoid itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Globe {
    pub ellipsoid: Ellipsoid,
}
impl Globe {
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self { ellipsoid }
    }
    /// Distance along `ray` to the first surface intersection in front of it.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let intersection = IntersectionTests::ray_ellipsoid(ray, Some(&self.ellipsoid))?;
        let t = if intersection.start > 0.0 {
            intersection.start
        } else {
            intersection.stop
        };
        return Some(t);
    }
    pub fn pick(&self, ray: &Ray) -> Option<DVec3> {
        return self.intersect(ray).map(|t| ray.get_point(t));
    }
}

#[cfg(test)]
mod tests {
    use bevy::math::DVec2;

    use super::*;
    use crate::{BoundingRectangle, Camera, Cartographic};

    #[test]
    fn pick_ellipsoid() {
        let globe = Globe::default();
        let camera = Camera::default();
        let viewport = BoundingRectangle::new(0.0, 0.0, 1024.0, 768.0);
        let window_coord = DVec2::new(viewport.width * 0.5, viewport.height * 0.5);

        let ray = camera.get_pick_ray(&window_coord, &viewport).unwrap();
        let p = globe.pick(&ray).unwrap();
        let c = globe.ellipsoid.cartesian_to_cartographic(&p).unwrap();
        assert!(c.equals_epsilon(&Cartographic::ZERO, 1e-6));

        let ray = camera.get_pick_ray(&DVec2::ZERO, &viewport).unwrap();
        assert!(globe.pick(&ray).is_none());
    }
    #[test]
    fn pick_from_inside() {
        let globe = Globe::new(Ellipsoid::UNIT_SPHERE);
        let ray = Ray::new(DVec3::ZERO, DVec3::Y);
        let p = globe.pick(&ray).unwrap();
        assert_eq!(p, DVec3::Y);
    }
}
