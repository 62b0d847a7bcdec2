/// Load-time failures.  Once a level has loaded the simulation has no
/// fallible paths, so nothing here is raised from `Level::update`.

use std::path::PathBuf;

use thiserror::Error;

use crate::entities::EntityTag;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing configuration key `{0}`")]
    Missing(String),

    #[error("configuration key `{key}` must be {expected}")]
    WrongType { key: String, expected: &'static str },

    #[error("cannot read configuration {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("line {line}: expected `TAG,x,y`, found {found} field(s)")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: unrecognised entity tag `{tag}`")]
    UnknownTag { line: usize, tag: String },

    #[error("line {line}: coordinate `{value}` is not an integer")]
    BadCoordinate { line: usize, value: String },

    #[error("level has no {0} record")]
    Missing(EntityTag),

    #[error("level has more than one {0} record")]
    Duplicate(EntityTag),

    #[error("cannot read level {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LevelError {
    /// True for errors caused by a single bad line of the placement file.
    pub fn is_malformed_record(&self) -> bool {
        matches!(
            self,
            LevelError::FieldCount { .. }
                | LevelError::UnknownTag { .. }
                | LevelError::BadCoordinate { .. }
        )
    }
}
