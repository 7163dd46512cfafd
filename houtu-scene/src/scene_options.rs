use serde::{Deserialize, Serialize};

use crate::{BoundingRectangle, Ellipsoid, SceneError};

/// What a pickable primitive represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    /// A discrete feature of a 3D tileset, such as a building.
    TilesetFeature,
    Model,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraOptions {
    pub position: [f64; 3],
    pub direction: [f64; 3],
    pub up: [f64; 3],
}
impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [2.0 * Ellipsoid::WGS84.maximum_radius, 0.0, 0.0],
            direction: [-1.0, 0.0, 0.0],
            up: [0.0, 0.0, 1.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrustumOptions {
    /// Radians.
    pub fov: f64,
    pub near: f64,
    pub far: f64,
}
impl Default for FrustumOptions {
    fn default() -> Self {
        Self {
            fov: (60.0_f64).to_radians(),
            near: 1.0,
            far: 500000000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveOptions {
    pub id: u64,
    pub kind: PrimitiveKind,
    pub center: [f64; 3],
    pub radius: f64,
}

/// Everything needed to build a [`crate::GlobeScene`]. Missing fields fall
/// back to a WGS84 globe seen from twice its radius above the prime meridian.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneOptions {
    pub ellipsoid: [f64; 3],
    pub camera: CameraOptions,
    pub frustum: FrustumOptions,
    pub viewport: BoundingRectangle,
    pub pick_position_supported: bool,
    pub primitives: Vec<PrimitiveOptions>,
}
impl Default for SceneOptions {
    fn default() -> Self {
        let radii = Ellipsoid::WGS84.radii;
        Self {
            ellipsoid: [radii.x, radii.y, radii.z],
            camera: CameraOptions::default(),
            frustum: FrustumOptions::default(),
            viewport: BoundingRectangle::new(0.0, 0.0, 1920.0, 1080.0),
            pick_position_supported: true,
            primitives: Vec::new(),
        }
    }
}
impl SceneOptions {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let options: SceneOptions = serde_json::from_str(json)?;
        return Ok(options);
    }
}
