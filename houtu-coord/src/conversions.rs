use bevy::math::{DVec2, DVec3};
use houtu_scene::{Cartesian3, Cartographic, Ellipsoid};

use crate::{CoordError, Geodetic, GeodeticInput, PickedObject, PointerMovement, Scene};

/// Converts WGS84 degrees to a Cartesian position. Returns `DVec3::ZERO`
/// when longitude or latitude is missing; a missing height is 0.
pub fn geodetic_to_cartesian(geodetic: &GeodeticInput) -> DVec3 {
    match (geodetic.longitude, geodetic.latitude) {
        (Some(longitude), Some(latitude)) => DVec3::from_degrees(
            longitude,
            latitude,
            Some(geodetic.height.unwrap_or(0.0)),
            Some(Ellipsoid::WGS84.radii_squared),
        ),
        _ => DVec3::ZERO,
    }
}

/// Converts degrees to radians. `None` gives `Cartographic::ZERO`.
pub fn geodetic_to_cartographic(geodetic: Option<&GeodeticInput>) -> Cartographic {
    let Some(geodetic) = geodetic else {
        return Cartographic::ZERO;
    };
    return Cartographic::from_degrees(
        geodetic.longitude.unwrap_or(0.0),
        geodetic.latitude.unwrap_or(0.0),
        geodetic.height.unwrap_or(0.0),
    );
}

/// Converts a Cartesian position to radians on the scene's ellipsoid.
pub fn cartesian_to_cartographic(scene: &impl Scene, cartesian: &DVec3) -> Option<Cartographic> {
    return scene.ellipsoid().cartesian_to_cartographic(cartesian);
}

/// Converts a Cartesian position to WGS84 degrees.
pub fn cartesian_to_geodetic(cartesian: &DVec3) -> Result<Geodetic, CoordError> {
    let cartographic = Ellipsoid::WGS84
        .cartesian_to_cartographic(cartesian)
        .ok_or(CoordError::DegeneratePosition(*cartesian))?;
    return Ok(Geodetic::from_cartographic(&cartographic));
}

/// Converts every position, in order. `None` gives an empty list.
pub fn cartesian_array_to_geodetic_array(
    cartesians: Option<&[DVec3]>,
) -> Result<Vec<Geodetic>, CoordError> {
    let Some(cartesians) = cartesians else {
        return Ok(Vec::new());
    };
    return cartesians.iter().map(cartesian_to_geodetic).collect();
}

/// Finds the Cartesian position under a window position.
///
/// When an object is rendered there and the scene can read depth, that
/// object's exact position is used. Otherwise the camera ray through the
/// point is intersected with the globe surface.
pub fn screen_point_to_cartesian(scene: &impl Scene, window_position: &DVec2) -> Option<DVec3> {
    let picked = scene.pick(window_position);
    if scene.pick_position_supported() && picked.is_some() {
        return scene.pick_position(window_position);
    }
    let Some(ray) = scene.pick_ray(window_position) else {
        bevy::log::trace!("no pick ray through {}", window_position);
        return None;
    };
    return scene.pick_globe(&ray);
}

/// Finds the Cartesian position under a pointer event.
///
/// Positions on a tileset feature are rebuilt from their longitude, latitude
/// and height. The rebuilt position keeps the picked height; it normalizes
/// how precisely feature picks land compared to terrain.
///
/// Both the read into degrees and the rebuild use the scene ellipsoid, not
/// WGS84, so a feature on any globe comes back where it was picked.
pub fn pointer_event_to_cartesian(
    scene: &impl Scene,
    movement: &PointerMovement,
) -> Result<DVec3, CoordError> {
    let window_position = movement
        .window_position()
        .ok_or(CoordError::NoPointerPosition)?;
    let cartesian = scene
        .pick_position(&window_position)
        .ok_or(CoordError::NothingPicked(window_position))?;
    let Some(PickedObject::TilesetFeature { feature_id }) = scene.pick(&window_position) else {
        return Ok(cartesian);
    };
    let ellipsoid = scene.ellipsoid();
    let cartographic = ellipsoid
        .cartesian_to_cartographic(&cartesian)
        .ok_or(CoordError::DegeneratePosition(cartesian))?;
    bevy::log::trace!(
        "re-deriving position of tileset feature {} at height {}",
        feature_id,
        cartographic.height
    );
    return Ok(DVec3::from_degrees(
        cartographic.longitude_degrees(),
        cartographic.latitude_degrees(),
        Some(cartographic.height),
        Some(ellipsoid.radii_squared),
    ));
}

/// Finds the WGS84 degrees under a pointer event.
pub fn pointer_event_to_geodetic(
    scene: &impl Scene,
    movement: &PointerMovement,
) -> Result<Geodetic, CoordError> {
    let window_position = movement
        .window_position()
        .ok_or(CoordError::NoPointerPosition)?;
    let cartesian = scene
        .pick_position(&window_position)
        .ok_or(CoordError::NothingPicked(window_position))?;
    return cartesian_to_geodetic(&cartesian);
}
