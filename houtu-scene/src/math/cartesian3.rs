use bevy::math::DVec3;

use crate::{ellipsoid::Ellipsoid, math::*};

/// Cesium-style helpers on top of `DVec3`, which stands in for `Cartesian3`
/// everywhere in the engine.
pub trait Cartesian3 {
    fn from_radians(
        longitude: f64,
        latitude: f64,
        height: Option<f64>,
        radii_squared: Option<DVec3>,
    ) -> DVec3;
    fn from_degrees(
        longitude: f64,
        latitude: f64,
        height: Option<f64>,
        radii_squared: Option<DVec3>,
    ) -> DVec3;
    fn equals_epsilon(
        &self,
        right: DVec3,
        relative_epsilon: Option<f64>,
        absolute_epsilon: Option<f64>,
    ) -> bool;
    fn multiply_components(&self, right: &DVec3) -> DVec3;
    fn multiply_by_scalar(&self, scalar: f64) -> DVec3;
    fn divide_by_scalar(&self, scalar: f64) -> DVec3;
    fn magnitude_squared(&self) -> f64;
    fn magnitude(&self) -> f64;
    fn negate(&self) -> DVec3;
}
impl Cartesian3 for DVec3 {
    fn negate(&self) -> DVec3 {
        return DVec3::new(-self.x, -self.y, -self.z);
    }
    fn magnitude(&self) -> f64 {
        return self.length();
    }
    fn magnitude_squared(&self) -> f64 {
        return self.length_squared();
    }
    fn equals_epsilon(
        &self,
        right: DVec3,
        relative_epsilon: Option<f64>,
        absolute_epsilon: Option<f64>,
    ) -> bool {
        return self.eq(&right)
            || equals_epsilon(self.x, right.x, relative_epsilon, absolute_epsilon)
                && equals_epsilon(self.y, right.y, relative_epsilon, absolute_epsilon)
                && equals_epsilon(self.z, right.z, relative_epsilon, absolute_epsilon);
    }
    fn multiply_components(&self, right: &DVec3) -> DVec3 {
        return DVec3::new(self.x * right.x, self.y * right.y, self.z * right.z);
    }
    fn multiply_by_scalar(&self, scalar: f64) -> DVec3 {
        return DVec3::new(self.x * scalar, self.y * scalar, self.z * scalar);
    }
    fn divide_by_scalar(&self, scalar: f64) -> DVec3 {
        return DVec3::new(self.x / scalar, self.y / scalar, self.z / scalar);
    }
    fn from_degrees(
        longitude: f64,
        latitude: f64,
        height: Option<f64>,
        radii_squared: Option<DVec3>,
    ) -> DVec3 {
        return DVec3::from_radians(
            longitude.to_radians(),
            latitude.to_radians(),
            height,
            radii_squared,
        );
    }
    fn from_radians(
        longitude: f64,
        latitude: f64,
        height: Option<f64>,
        radii_squared: Option<DVec3>,
    ) -> DVec3 {
        let radii_squared = radii_squared.unwrap_or(Ellipsoid::WGS84.radii_squared);
        let height = height.unwrap_or(0.0);
        let cos_latitude = latitude.cos();
        let mut scratch_n = DVec3::new(
            cos_latitude * longitude.cos(),
            cos_latitude * longitude.sin(),
            latitude.sin(),
        )
        .normalize();
        let mut scratch_k = radii_squared.multiply_components(&scratch_n);
        let gamma = scratch_n.dot(scratch_k).sqrt();
        scratch_k = scratch_k.divide_by_scalar(gamma);
        scratch_n = scratch_n.multiply_by_scalar(height);
        return scratch_k + scratch_n;
    }
}
