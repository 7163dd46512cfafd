use bevy::math::{DVec2, DVec3};

use crate::{BoundingRectangle, Cartesian3, Ellipsoid, PerspectiveFrustum, Ray};

/// A perspective camera in world (Earth-fixed) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: DVec3,
    pub direction: DVec3,
    pub up: DVec3,
    pub right: DVec3,
    pub frustum: PerspectiveFrustum,
}
impl Default for Camera {
    fn default() -> Self {
        let position = DVec3::X.multiply_by_scalar(2.0 * Ellipsoid::WGS84.maximum_radius);
        let direction = position.negate().normalize();
        let up = DVec3::Z;
        Self {
            position,
            direction,
            up,
            right: direction.cross(up),
            frustum: PerspectiveFrustum::default(),
        }
    }
}
impl Camera {
    /// Builds an orthonormal camera frame. `None` when `direction` or `up` is
    /// degenerate or the two are parallel.
    pub fn look(
        position: DVec3,
        direction: DVec3,
        up: DVec3,
        frustum: PerspectiveFrustum,
    ) -> Option<Self> {
        let direction = direction.try_normalize()?;
        let right = direction.cross(up).try_normalize()?;
        let up = right.cross(direction);
        return Some(Self {
            position,
            direction,
            up,
            right,
            frustum,
        });
    }
    /// Creates a ray from the camera position through `window_position`.
    ///
    /// Returns `None` when the viewport has no area or the position is not
    /// a finite point inside the viewport.
    pub fn get_pick_ray(
        &self,
        window_position: &DVec2,
        viewport: &BoundingRectangle,
    ) -> Option<Ray> {
        if viewport.is_empty() || !window_position.is_finite() {
            return None;
        }
        if !viewport.contains(window_position) {
            bevy::log::trace!(
                "window position {:?} is outside the viewport {:?}",
                window_position,
                viewport
            );
            return None;
        }
        return Some(self.get_pick_ray_perspective(window_position, viewport));
    }
    fn get_pick_ray_perspective(
        &self,
        window_position: &DVec2,
        viewport: &BoundingRectangle,
    ) -> Ray {
        let width = viewport.width;
        let height = viewport.height;
        let aspect_ratio = viewport.aspect_ratio();
        let tan_phi = (self.frustum.get_fovy() * 0.5).tan();
        let tan_theta = aspect_ratio * tan_phi;
        let near = self.frustum.near;

        let x = (2.0 / width) * (window_position.x - viewport.x) - 1.0;
        let y = (2.0 / height) * (height - (window_position.y - viewport.y)) - 1.0;

        let position = self.position;
        let near_center = position + self.direction.multiply_by_scalar(near);
        let x_dir = self.right.multiply_by_scalar(x * near * tan_theta);
        let y_dir = self.up.multiply_by_scalar(y * near * tan_phi);
        let direction = (near_center + x_dir + y_dir - position).normalize();
        return Ray::new(position, direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON14;

    fn viewport() -> BoundingRectangle {
        BoundingRectangle::new(0.0, 0.0, 1024.0, 768.0)
    }
    #[test]
    fn default_frame_is_orthonormal() {
        let camera = Camera::default();
        assert!(camera.right.equals_epsilon(DVec3::Y, None, Some(EPSILON14)));
        assert!(camera.direction.dot(camera.up).abs() < EPSILON14);
        assert!((1.0 - camera.direction.magnitude()).abs() < EPSILON14);
    }
    #[test]
    fn look_rejects_parallel_up() {
        let frustum = PerspectiveFrustum::default();
        assert!(Camera::look(DVec3::X, DVec3::Z, DVec3::Z, frustum).is_none());
        assert!(Camera::look(DVec3::X, DVec3::ZERO, DVec3::Z, frustum).is_none());
        let camera = Camera::look(DVec3::X, DVec3::X.negate(), DVec3::new(0.1, 0.0, 1.0), frustum)
            .unwrap();
        assert!(camera.up.equals_epsilon(DVec3::Z, None, Some(EPSILON14)));
    }
    #[test]
    fn pick_ray_through_center() {
        let camera = Camera::default();
        let viewport = viewport();
        let center = DVec2::new(viewport.width * 0.5, viewport.height * 0.5);
        let ray = camera.get_pick_ray(&center, &viewport).unwrap();
        assert_eq!(ray.origin, camera.position);
        assert!(ray.direction.equals_epsilon(camera.direction, None, Some(EPSILON14)));
    }
    #[test]
    fn pick_ray_top_left_points_up_and_left() {
        let camera = Camera::default();
        let ray = camera.get_pick_ray(&DVec2::ZERO, &viewport()).unwrap();
        assert!(ray.direction.dot(camera.up) > 0.0);
        assert!(ray.direction.dot(camera.right) < 0.0);
        assert!((1.0 - ray.direction.magnitude()).abs() < EPSILON14);
    }
    #[test]
    fn pick_ray_respects_viewport_offset() {
        let camera = Camera::default();
        let viewport = BoundingRectangle::new(100.0, 50.0, 1024.0, 768.0);
        let center = DVec2::new(100.0 + 512.0, 50.0 + 384.0);
        let ray = camera.get_pick_ray(&center, &viewport).unwrap();
        assert!(ray.direction.equals_epsilon(camera.direction, None, Some(EPSILON14)));
    }
    #[test]
    fn no_pick_ray() {
        let camera = Camera::default();
        assert!(camera
            .get_pick_ray(&DVec2::new(-1.0, 10.0), &viewport())
            .is_none());
        assert!(camera
            .get_pick_ray(&DVec2::new(f64::NAN, 10.0), &viewport())
            .is_none());
        assert!(camera
            .get_pick_ray(&DVec2::ZERO, &BoundingRectangle::default())
            .is_none());
    }
}
