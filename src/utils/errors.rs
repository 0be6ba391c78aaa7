use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrimError {
    #[error("degenerate thrust geometry: no usable thrust axis this step")]
    DegenerateGeometry,

    #[error("no trim-enabled thrust is currently firing")]
    NoAlignedThrust,

    #[error("unreachable correction: trim angle {angle} has no defined rotation")]
    UnreachableCorrection { angle: f64 },

    #[error("Config error: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_yaml::Error),
}
