use std::fmt;

use bevy::math::DVec3;

use crate::ellipsoid::Ellipsoid;
use crate::math::*;

/// A position on an ellipsoid, longitude and latitude in radians, height in meters.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Cartographic {
    pub longitude: f64,
    pub latitude: f64,
    pub height: f64,
}
impl Cartographic {
    pub const ZERO: Cartographic = Cartographic {
        longitude: 0.0,
        latitude: 0.0,
        height: 0.0,
    };
    pub fn new(longitude: f64, latitude: f64, height: f64) -> Self {
        Cartographic::from_radians(longitude, latitude, height)
    }
    pub fn from_radians(longitude: f64, latitude: f64, height: f64) -> Self {
        Cartographic {
            longitude,
            latitude,
            height,
        }
    }
    pub fn from_degrees(longitude: f64, latitude: f64, height: f64) -> Self {
        Cartographic {
            longitude: longitude * RADIANS_PER_DEGREE,
            latitude: latitude * RADIANS_PER_DEGREE,
            height,
        }
    }
    /// Returns `None` when `cartesian` is at the center of the ellipsoid.
    pub fn from_cartesian(cartesian: &DVec3, ellipsoid: Option<&Ellipsoid>) -> Option<Self> {
        let ellipsoid = ellipsoid.unwrap_or(&Ellipsoid::WGS84);
        return ellipsoid.cartesian_to_cartographic(cartesian);
    }
    pub fn to_cartesian(&self, ellipsoid: Option<&Ellipsoid>) -> DVec3 {
        return DVec3::from_radians(
            self.longitude,
            self.latitude,
            Some(self.height),
            ellipsoid.map(|e| e.radii_squared),
        );
    }
    pub fn longitude_degrees(&self) -> f64 {
        return self.longitude * DEGREES_PER_RADIAN;
    }
    pub fn latitude_degrees(&self) -> f64 {
        return self.latitude * DEGREES_PER_RADIAN;
    }
    pub fn equals_epsilon(&self, right: &Cartographic, epsilon: f64) -> bool {
        return (self.longitude - right.longitude).abs() <= epsilon
            && (self.latitude - right.latitude).abs() <= epsilon
            && (self.height - right.height).abs() <= epsilon;
    }
}
impl fmt::Display for Cartographic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.longitude, self.latitude, self.height)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    const SURFACE_CARTOGRAPHIC: Cartographic = Cartographic {
        longitude: 25.0 * PI / 180.0,
        latitude: 45.0 * PI / 180.0,
        height: 0.0,
    };

    const SURFACE_CARTESIAN: DVec3 = DVec3 {
        x: 4094327.7921465295,
        y: 1909216.4044747739,
        z: 4487348.4088659193,
    };
    #[test]
    fn to_cartesian() {
        let lon = 150.0_f64.to_radians();
        let lat = -40.0_f64.to_radians();
        let height = 100000.0;
        let ellipsoid = Ellipsoid::WGS84;
        let actual = Cartographic::new(lon, lat, height).to_cartesian(None);
        let expected = ellipsoid.cartographic_to_cartesian(&Cartographic::new(lon, lat, height));
        assert!(actual.equals_epsilon(expected, Some(EPSILON14), None));
    }
    #[test]
    fn from_cartesian() {
        let c = Cartographic::from_cartesian(&SURFACE_CARTESIAN, None).unwrap();
        assert!(c.equals_epsilon(&SURFACE_CARTOGRAPHIC, 1e-5));
    }
    #[test]
    fn from_cartesian_at_center() {
        assert!(Cartographic::from_cartesian(&DVec3::ZERO, None).is_none());
    }
    #[test]
    fn degrees() {
        let c = Cartographic::from_degrees(25.0, 45.0, 7.0);
        assert!(equals_epsilon(c.longitude_degrees(), 25.0, Some(EPSILON14), None));
        assert!(equals_epsilon(c.latitude_degrees(), 45.0, Some(EPSILON14), None));
        assert_eq!(c.height, 7.0);
        assert_eq!(c.to_string(), format!("({}, {}, 7)", c.longitude, c.latitude));
    }
}
