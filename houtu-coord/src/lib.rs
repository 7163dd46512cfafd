//! Conversions between geodetic degrees, Earth-fixed Cartesian positions,
//! window positions and pointer events on a houtu globe.

mod conversions;
mod error;
mod geodetic;
mod plugin;
mod pointer;
mod scene;

pub use conversions::*;
pub use error::*;
pub use geodetic::*;
pub use plugin::*;
pub use pointer::*;
pub use scene::*;
