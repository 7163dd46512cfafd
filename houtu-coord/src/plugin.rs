use bevy::math::{DVec2, DVec3};
use bevy::prelude::*;
use houtu_scene::GlobeScene;

use crate::{cartesian_to_geodetic, pointer_event_to_cartesian, Geodetic, PointerMovement};

/// Sent for every [`PointerMovement`] that lands on something in the scene.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PickedCoordinate {
    pub window_position: DVec2,
    pub cartesian: DVec3,
    pub geodetic: Geodetic,
}

pub struct CoordinatePlugin;

impl Plugin for CoordinatePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PointerMovement>();
        app.add_event::<PickedCoordinate>();
        app.add_systems(Update, pick_coordinate_system);
    }
}

pub fn pick_coordinate_system(
    scene: Option<Res<GlobeScene>>,
    mut movements: EventReader<PointerMovement>,
    mut picked: EventWriter<PickedCoordinate>,
) {
    let Some(scene) = scene else {
        return;
    };
    for movement in movements.iter() {
        let Some(window_position) = movement.window_position() else {
            continue;
        };
        let result = pointer_event_to_cartesian(&*scene, movement)
            .and_then(|cartesian| Ok((cartesian, cartesian_to_geodetic(&cartesian)?)));
        match result {
            Ok((cartesian, geodetic)) => picked.send(PickedCoordinate {
                window_position,
                cartesian,
                geodetic,
            }),
            Err(e) => bevy::log::debug!("dropping pointer movement: {}", e),
        }
    }
}
