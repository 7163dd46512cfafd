mod cartesian3;
mod cartographic;
mod epsilon;
mod vec3;

pub use cartesian3::*;
pub use cartographic::*;
pub use epsilon::*;
pub use vec3::*;
