use bevy::math::{DVec2, DVec3};
use bevy::prelude::Resource;

use crate::{
    BoundingRectangle, BoundingSphere, Camera, Ellipsoid, Globe, IntersectionTests,
    PerspectiveFrustum, PrimitiveKind, Ray, SceneError, SceneOptions,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    pub id: u64,
    pub kind: PrimitiveKind,
    pub bounding_sphere: BoundingSphere,
}
impl Primitive {
    pub fn new(id: u64, kind: PrimitiveKind, bounding_sphere: BoundingSphere) -> Self {
        Self {
            id,
            kind,
            bounding_sphere,
        }
    }
}

/// Camera, globe and the pickable primitives rendered on top of the globe.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GlobeScene {
    pub camera: Camera,
    pub globe: Globe,
    pub viewport: BoundingRectangle,
    /// Whether positions can be read back from the depth buffer.
    pub pick_position_supported: bool,
    pub primitives: Vec<Primitive>,
}
impl Default for GlobeScene {
    fn default() -> Self {
        let viewport = SceneOptions::default().viewport;
        let mut camera = Camera::default();
        camera.frustum.aspect_ratio = viewport.aspect_ratio();
        Self {
            camera,
            globe: Globe::default(),
            viewport,
            pick_position_supported: true,
            primitives: Vec::new(),
        }
    }
}
impl GlobeScene {
    pub fn new(camera: Camera, globe: Globe, viewport: BoundingRectangle) -> Self {
        Self {
            camera,
            globe,
            viewport,
            pick_position_supported: true,
            primitives: Vec::new(),
        }
    }
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        return GlobeScene::from_options(&SceneOptions::from_json(json)?);
    }
    pub fn from_options(options: &SceneOptions) -> Result<Self, SceneError> {
        if !options.ellipsoid.iter().all(|r| r.is_finite() && *r > 0.0) {
            bevy::log::warn!("rejecting ellipsoid radii {:?}", options.ellipsoid);
            return Err(SceneError::InvalidEllipsoid(options.ellipsoid));
        }
        let ellipsoid = Ellipsoid::from_vec3(DVec3::from_array(options.ellipsoid));

        let frustum_options = &options.frustum;
        if !(frustum_options.fov > 0.0 && frustum_options.fov < std::f64::consts::PI) {
            return Err(SceneError::InvalidFrustum("fov must be in (0, PI)"));
        }
        if !(frustum_options.near > 0.0 && frustum_options.near < frustum_options.far) {
            return Err(SceneError::InvalidFrustum("expected 0 < near < far"));
        }
        let aspect_ratio = if options.viewport.is_empty() {
            1.0
        } else {
            options.viewport.aspect_ratio()
        };
        let frustum = PerspectiveFrustum::new(
            frustum_options.fov,
            aspect_ratio,
            frustum_options.near,
            frustum_options.far,
        );

        let camera_options = &options.camera;
        let camera = Camera::look(
            DVec3::from_array(camera_options.position),
            DVec3::from_array(camera_options.direction),
            DVec3::from_array(camera_options.up),
            frustum,
        )
        .ok_or(SceneError::InvalidCamera(
            "direction and up must be non-zero and not parallel",
        ))?;

        let mut scene = GlobeScene::new(camera, Globe::new(ellipsoid), options.viewport);
        scene.pick_position_supported = options.pick_position_supported;
        for primitive in &options.primitives {
            scene.add_primitive(Primitive::new(
                primitive.id,
                primitive.kind,
                BoundingSphere::new(DVec3::from_array(primitive.center), primitive.radius),
            ));
        }
        return Ok(scene);
    }
    pub fn add_primitive(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }
    pub fn ellipsoid(&self) -> &Ellipsoid {
        return &self.globe.ellipsoid;
    }
    pub fn pick_ray(&self, window_position: &DVec2) -> Option<Ray> {
        return self.camera.get_pick_ray(window_position, &self.viewport);
    }
    /// Returns the front-most primitive under `window_position`. Primitives
    /// hidden behind the globe are not picked.
    pub fn pick(&self, window_position: &DVec2) -> Option<&Primitive> {
        let ray = self.pick_ray(window_position)?;
        let (primitive, t) = self.nearest_primitive(&ray)?;
        if let Some(globe_t) = self.globe.intersect(&ray) {
            if globe_t < t {
                return None;
            }
        }
        return Some(primitive);
    }
    /// Returns the position of the front-most surface under
    /// `window_position`, primitive or globe. Always `None` when
    /// `pick_position_supported` is false.
    pub fn pick_position(&self, window_position: &DVec2) -> Option<DVec3> {
        if !self.pick_position_supported {
            bevy::log::debug!("pick position requested but depth picking is not supported");
            return None;
        }
        let ray = self.pick_ray(window_position)?;
        let primitive_t = self.nearest_primitive(&ray).map(|(_, t)| t);
        let globe_t = self.globe.intersect(&ray);
        let t = match (primitive_t, globe_t) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => return None,
        };
        return Some(ray.get_point(t));
    }
    fn nearest_primitive(&self, ray: &Ray) -> Option<(&Primitive, f64)> {
        return self
            .primitives
            .iter()
            .filter_map(|primitive| {
                IntersectionTests::ray_sphere(ray, &primitive.bounding_sphere)
                    .map(|interval| (primitive, interval.start))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cartesian3, EPSILON6};

    fn center(scene: &GlobeScene) -> DVec2 {
        DVec2::new(scene.viewport.width * 0.5, scene.viewport.height * 0.5)
    }
    fn scene_with_feature(radius_above_surface: f64) -> GlobeScene {
        let mut scene = GlobeScene::default();
        let a = scene.ellipsoid().radii.x;
        scene.add_primitive(Primitive::new(
            42,
            PrimitiveKind::TilesetFeature,
            BoundingSphere::new(DVec3::new(a, 0.0, 0.0), radius_above_surface),
        ));
        scene
    }
    #[test]
    fn pick_position_hits_globe() {
        let scene = GlobeScene::default();
        let p = scene.pick_position(&center(&scene)).unwrap();
        assert!(p.equals_epsilon(
            DVec3::new(Ellipsoid::WGS84.radii.x, 0.0, 0.0),
            None,
            Some(EPSILON6)
        ));
        assert!(scene.pick(&center(&scene)).is_none());
    }
    #[test]
    fn pick_position_hits_primitive_first() {
        let scene = scene_with_feature(100.0);
        let p = scene.pick_position(&center(&scene)).unwrap();
        assert!(p.equals_epsilon(
            DVec3::new(Ellipsoid::WGS84.radii.x + 100.0, 0.0, 0.0),
            None,
            Some(EPSILON6)
        ));
        let picked = scene.pick(&center(&scene)).unwrap();
        assert_eq!(picked.id, 42);
        assert_eq!(picked.kind, PrimitiveKind::TilesetFeature);
    }
    #[test]
    fn primitive_behind_globe_is_not_picked() {
        let mut scene = GlobeScene::default();
        let a = scene.ellipsoid().radii.x;
        scene.add_primitive(Primitive::new(
            1,
            PrimitiveKind::Model,
            BoundingSphere::new(DVec3::new(-a, 0.0, 0.0), 10.0),
        ));
        assert!(scene.pick(&center(&scene)).is_none());
    }
    #[test]
    fn pick_position_not_supported() {
        let mut scene = scene_with_feature(100.0);
        scene.pick_position_supported = false;
        assert!(scene.pick_position(&center(&scene)).is_none());
        assert!(scene.pick(&center(&scene)).is_some());
    }
    #[test]
    fn nothing_under_corner() {
        let scene = GlobeScene::default();
        assert!(scene.pick_position(&DVec2::ZERO).is_none());
        assert!(scene.pick_position(&DVec2::new(-5.0, -5.0)).is_none());
    }
    #[test]
    fn from_options_builds_scene() {
        let scene = GlobeScene::from_json(
            r#"{
                "primitives": [
                    { "id": 3, "kind": "model", "center": [6378137.0, 0.0, 0.0], "radius": 5.0 }
                ],
                "pick_position_supported": false
            }"#,
        )
        .unwrap();
        assert_eq!(scene.primitives.len(), 1);
        assert_eq!(scene.primitives[0].kind, PrimitiveKind::Model);
        assert!(!scene.pick_position_supported);
        assert_eq!(*scene.ellipsoid(), Ellipsoid::WGS84);
        assert!(scene.camera.right.equals_epsilon(DVec3::Y, None, Some(1e-14)));
        assert_eq!(scene.camera.frustum.aspect_ratio, 1920.0 / 1080.0);
    }
    #[test]
    fn from_options_rejects_invalid() {
        let mut options = SceneOptions::default();
        options.ellipsoid = [0.0, 1.0, 1.0];
        assert!(matches!(
            GlobeScene::from_options(&options),
            Err(SceneError::InvalidEllipsoid(_))
        ));

        let mut options = SceneOptions::default();
        options.frustum.near = options.frustum.far;
        assert!(matches!(
            GlobeScene::from_options(&options),
            Err(SceneError::InvalidFrustum(_))
        ));

        let mut options = SceneOptions::default();
        options.camera.up = options.camera.direction;
        assert!(matches!(
            GlobeScene::from_options(&options),
            Err(SceneError::InvalidCamera(_))
        ));
    }
}
