use bevy::math::{DVec2, DVec3};
use houtu_scene::{Ellipsoid, GlobeScene, Primitive, PrimitiveKind, Ray};

/// What sits under a window position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickedObject {
    TilesetFeature { feature_id: u64 },
    Primitive { id: u64 },
}
impl From<&Primitive> for PickedObject {
    fn from(primitive: &Primitive) -> Self {
        match primitive.kind {
            PrimitiveKind::TilesetFeature => PickedObject::TilesetFeature {
                feature_id: primitive.id,
            },
            PrimitiveKind::Model => PickedObject::Primitive { id: primitive.id },
        }
    }
}

/// The picking and ellipsoid capabilities the conversions need from a scene.
pub trait Scene {
    fn ellipsoid(&self) -> &Ellipsoid;
    /// The object rendered under `window_position`. Terrain is never an object.
    fn pick(&self, window_position: &DVec2) -> Option<PickedObject>;
    fn pick_position_supported(&self) -> bool;
    /// The position of whatever is rendered under `window_position`.
    fn pick_position(&self, window_position: &DVec2) -> Option<DVec3>;
    fn pick_ray(&self, window_position: &DVec2) -> Option<Ray>;
    /// Intersects `ray` with the terrain surface.
    fn pick_globe(&self, ray: &Ray) -> Option<DVec3>;
}

impl Scene for GlobeScene {
    fn ellipsoid(&self) -> &Ellipsoid {
        return GlobeScene::ellipsoid(self);
    }
    fn pick(&self, window_position: &DVec2) -> Option<PickedObject> {
        return GlobeScene::pick(self, window_position).map(PickedObject::from);
    }
    fn pick_position_supported(&self) -> bool {
        return self.pick_position_supported;
    }
    fn pick_position(&self, window_position: &DVec2) -> Option<DVec3> {
        return GlobeScene::pick_position(self, window_position);
    }
    fn pick_ray(&self, window_position: &DVec2) -> Option<Ray> {
        return GlobeScene::pick_ray(self, window_position);
    }
    fn pick_globe(&self, ray: &Ray) -> Option<DVec3> {
        return self.globe.pick(ray);
    }
}

#[cfg(test)]
mod tests {
    use houtu_scene::BoundingSphere;

    use super::*;

    #[test]
    fn picked_object_from_primitive() {
        let sphere = BoundingSphere::new(DVec3::ZERO, 1.0);
        let feature = Primitive::new(5, PrimitiveKind::TilesetFeature, sphere);
        assert_eq!(
            PickedObject::from(&feature),
            PickedObject::TilesetFeature { feature_id: 5 }
        );
        let model = Primitive::new(6, PrimitiveKind::Model, sphere);
        assert_eq!(PickedObject::from(&model), PickedObject::Primitive { id: 6 });
    }
    #[test]
    fn globe_scene_as_scene() {
        let scene = GlobeScene::default();
        let center = DVec2::new(scene.viewport.width * 0.5, scene.viewport.height * 0.5);
        let as_scene: &dyn Scene = &scene;
        assert!(as_scene.pick_position_supported());
        assert!(as_scene.pick(&center).is_none());
        let ray = as_scene.pick_ray(&center).unwrap();
        assert_eq!(as_scene.pick_globe(&ray), as_scene.pick_position(&center));
        assert_eq!(*as_scene.ellipsoid(), Ellipsoid::WGS84);
    }
}
