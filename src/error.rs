use thiserror::Error;

/// Errors raised by the photocell simulator.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("unknown cathode material: {0}")]
    UnknownMaterial(String),

    #[error("invalid slider range: max {max} must be greater than min {min}")]
    InvalidSliderRange { min: f64, max: f64 },

    #[error("a single-select group needs at least one button")]
    EmptyMenu,

    #[error("could not read settings file {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("could not decode sprite {path}: {source}")]
    Asset {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, SimError>;
