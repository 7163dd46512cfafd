use bevy::math::DVec3;

use crate::math::*;

/// A quadratic surface `(x / a)^2 + (y / b)^2 + (z / c)^2 = 1` used as the
/// reference surface for geodetic conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    pub radii: DVec3,
    pub radii_squared: DVec3,
    pub one_over_radii: DVec3,
    pub one_over_radii_squared: DVec3,
    pub minimum_radius: f64,
    pub maximum_radius: f64,
    pub center_tolerance_squared: f64,
}
impl Default for Ellipsoid {
    fn default() -> Self {
        return Ellipsoid::WGS84;
    }
}
impl Ellipsoid {
    pub const WGS84: Ellipsoid = Ellipsoid::new(6378137.0, 6378137.0, 6356752.3142451793);
    pub const UNIT_SPHERE: Ellipsoid = Ellipsoid::new(1.0, 1.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        let min_xy = if x < y { x } else { y };
        let max_xy = if x > y { x } else { y };
        Ellipsoid {
            radii: DVec3::new(x, y, z),
            radii_squared: DVec3::new(x * x, y * y, z * z),
            one_over_radii: DVec3::new(1.0 / x, 1.0 / y, 1.0 / z),
            one_over_radii_squared: DVec3::new(1.0 / (x * x), 1.0 / (y * y), 1.0 / (z * z)),
            minimum_radius: if min_xy < z { min_xy } else { z },
            maximum_radius: if max_xy > z { max_xy } else { z },
            center_tolerance_squared: EPSILON1,
        }
    }
    pub fn from_vec3(radii: DVec3) -> Self {
        return Ellipsoid::new(radii.x, radii.y, radii.z);
    }
    pub fn geodetic_surface_normal_cartographic(&self, cartographic: &Cartographic) -> DVec3 {
        let longitude = cartographic.longitude;
        let latitude = cartographic.latitude;
        let cos_latitude = latitude.cos();
        let x = cos_latitude * longitude.cos();
        let y = cos_latitude * longitude.sin();
        let z = latitude.sin();
        return DVec3::new(x, y, z).normalize();
    }
    pub fn geodetic_surface_normal(&self, cartesian: &DVec3) -> Option<DVec3> {
        if cartesian.equals_epsilon(DVec3::ZERO, None, Some(EPSILON14)) {
            return None;
        }
        return Some(
            cartesian
                .multiply_components(&self.one_over_radii_squared)
                .normalize(),
        );
    }
    pub fn cartographic_to_cartesian(&self, cartographic: &Cartographic) -> DVec3 {
        let mut n = self.geodetic_surface_normal_cartographic(cartographic);
        let mut k = self.radii_squared.multiply_components(&n);
        let gamma = n.dot(k).sqrt();
        k = k.divide_by_scalar(gamma);
        n = n.multiply_by_scalar(cartographic.height);
        return k + n;
    }
    pub fn cartesian_to_cartographic(&self, cartesian: &DVec3) -> Option<Cartographic> {
        let p = self.scale_to_geodetic_surface(cartesian)?;
        let n = self.geodetic_surface_normal(&p)?;
        let h = *cartesian - p;
        let longitude = n.y.atan2(n.x);
        let latitude = n.z.asin();
        let height = h.dot(*cartesian).signum() * h.magnitude();
        return Some(Cartographic::new(longitude, latitude, height));
    }
    /// Scales `cartesian` along the geodetic surface normal so it lies on the
    /// surface. `None` when the position is at the center, where the normal
    /// is undefined, or when it is not finite or too far out to square
    /// without overflow.
    pub fn scale_to_geodetic_surface(&self, cartesian: &DVec3) -> Option<DVec3> {
        if !cartesian.is_finite() {
            return None;
        }
        let position_x = cartesian.x;
        let position_y = cartesian.y;
        let position_z = cartesian.z;

        let one_over_radii = self.one_over_radii;
        let x2 = position_x * position_x * one_over_radii.x * one_over_radii.x;
        let y2 = position_y * position_y * one_over_radii.y * one_over_radii.y;
        let z2 = position_z * position_z * one_over_radii.z * one_over_radii.z;

        let squared_norm = x2 + y2 + z2;
        if !squared_norm.is_finite() {
            return None;
        }
        let ratio = (1.0 / squared_norm).sqrt();

        let intersection = cartesian.multiply_by_scalar(ratio);

        // Too close to the center to iterate.
        if squared_norm < self.center_tolerance_squared {
            return if ratio.is_finite() {
                Some(intersection)
            } else {
                None
            };
        }

        let one_over_radii_squared = self.one_over_radii_squared;
        let gradient = DVec3::new(
            intersection.x * one_over_radii_squared.x * 2.0,
            intersection.y * one_over_radii_squared.y * 2.0,
            intersection.z * one_over_radii_squared.z * 2.0,
        );

        let mut lambda = ((1.0 - ratio) * cartesian.magnitude()) / (0.5 * gradient.magnitude());
        let mut correction = 0.0;

        let mut x_multiplier;
        let mut y_multiplier;
        let mut z_multiplier;
        loop {
            lambda -= correction;

            x_multiplier = 1.0 / (1.0 + lambda * one_over_radii_squared.x);
            y_multiplier = 1.0 / (1.0 + lambda * one_over_radii_squared.y);
            z_multiplier = 1.0 / (1.0 + lambda * one_over_radii_squared.z);

            let x_multiplier2 = x_multiplier * x_multiplier;
            let y_multiplier2 = y_multiplier * y_multiplier;
            let z_multiplier2 = z_multiplier * z_multiplier;

            let x_multiplier3 = x_multiplier2 * x_multiplier;
            let y_multiplier3 = y_multiplier2 * y_multiplier;
            let z_multiplier3 = z_multiplier2 * z_multiplier;

            let func = x2 * x_multiplier2 + y2 * y_multiplier2 + z2 * z_multiplier2 - 1.0;

            let denominator = x2 * x_multiplier3 * one_over_radii_squared.x
                + y2 * y_multiplier3 * one_over_radii_squared.y
                + z2 * z_multiplier3 * one_over_radii_squared.z;

            let derivative = -2.0 * denominator;
            correction = func / derivative;
            if func.is_nan() || func.abs() <= EPSILON12 {
                break;
            }
        }
        let surface = DVec3::new(
            position_x * x_multiplier,
            position_y * y_multiplier,
            position_z * z_multiplier,
        );
        if !surface.is_finite() {
            return None;
        }
        return Some(surface);
    }
}
