mod bounding_sphere;
mod ray;

pub use bounding_sphere::*;
pub use ray::*;
