use houtu_scene::Cartographic;
use serde::{Deserialize, Serialize};

/// Longitude and latitude in degrees, height in meters above the ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Geodetic {
    pub longitude: f64,
    pub latitude: f64,
    #[serde(default)]
    pub height: f64,
}
impl Geodetic {
    pub fn new(longitude: f64, latitude: f64, height: f64) -> Self {
        Self {
            longitude,
            latitude,
            height,
        }
    }
    pub fn from_cartographic(cartographic: &Cartographic) -> Self {
        Self {
            longitude: cartographic.longitude_degrees(),
            latitude: cartographic.latitude_degrees(),
            height: cartographic.height,
        }
    }
    pub fn equals_epsilon(&self, right: &Geodetic, degrees: f64, meters: f64) -> bool {
        return (self.longitude - right.longitude).abs() <= degrees
            && (self.latitude - right.latitude).abs() <= degrees
            && (self.height - right.height).abs() <= meters;
    }
}

/// A geodetic coordinate as callers hand it over, any field may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeodeticInput {
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub height: Option<f64>,
}
impl GeodeticInput {
    pub fn new(longitude: f64, latitude: f64, height: Option<f64>) -> Self {
        Self {
            longitude: Some(longitude),
            latitude: Some(latitude),
            height,
        }
    }
}
impl From<Geodetic> for GeodeticInput {
    fn from(geodetic: Geodetic) -> Self {
        GeodeticInput::new(geodetic.longitude, geodetic.latitude, Some(geodetic.height))
    }
}
