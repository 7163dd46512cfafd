#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    #[error("could not parse scene options: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("ellipsoid radii must be positive and finite, got {0:?}")]
    InvalidEllipsoid([f64; 3]),
    #[error("invalid frustum: {0}")]
    InvalidFrustum(&'static str),
    #[error("invalid camera: {0}")]
    InvalidCamera(&'static str),
}
