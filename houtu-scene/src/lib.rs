mod bounding_rectangle;
mod camera;
mod ellipsoid;
mod error;
mod geometry;
mod globe;
mod globe_scene;
mod math;
mod perspective_frustum;
mod scene_options;

pub use bounding_rectangle::*;
pub use camera::*;
pub use ellipsoid::*;
pub use error::*;
pub use geometry::*;
pub use globe::*;
pub use globe_scene::*;
pub use intersection_tests::*;
pub use math::*;
pub use perspective_frustum::*;
pub use scene_options::*;
