use thiserror::Error;

/// Recoverable failures surfaced while building materials and scattering points.
#[derive(Debug, Error)]
pub enum ScatterError {
    #[error("material \"{0}\" is already defined")]
    DuplicateMaterial(String),
    #[error("material \"{0}\" is not defined")]
    UnknownMaterial(String),
    #[error("material \"{material}\": invalid parameter \"{name}\": {reason}")]
    InvalidParameter {
        material: String,
        name: String,
        reason: String,
    },
    #[error("degenerate shading frame")]
    DegenerateFrame,
    #[error("material library: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScatterError {
    pub fn invalid_parameter(material: &str, name: &str, reason: &str) -> Self {
        ScatterError::InvalidParameter {
            material: material.to_string(),
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScatterError>;
