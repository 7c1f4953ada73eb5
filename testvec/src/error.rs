use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors surfaced by the generators. Parameter errors are raised before any
/// generation work; write errors discard the run.
#[derive(Debug, Error)]
pub enum TestVecError {
    #[error("element width must be positive")]
    ZeroWidth,

    #[error("element width {0} is greater than 64")]
    WidthTooLarge(u32),

    #[error("element width {0} is not a whole number of hex digits (multiple of 4)")]
    WidthNotNibbleAligned(u32),

    #[error("dimension {name} must be positive")]
    ZeroDimension { name: &'static str },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("line length {len} is not a multiple of the {digits}-digit field width")]
    FieldAlignment { len: usize, digits: usize },

    #[error("invalid field {field:?}")]
    FieldParse { field: String },
}
