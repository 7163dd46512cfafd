use bevy::math::{DVec2, DVec3};

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum CoordError {
    #[error("pointer event carries no position")]
    NoPointerPosition,
    #[error("nothing was picked at window position {0}")]
    NothingPicked(DVec2),
    /// At the ellipsoid center or not finite.
    #[error("position {0} has no geodetic coordinates")]
    DegeneratePosition(DVec3),
}
