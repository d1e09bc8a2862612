use std::path::PathBuf;

/// Convenience result type used across spritepack.
pub type PackResult<T> = Result<T, SpritePackError>;

/// Top-level error taxonomy used by pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum SpritePackError {
    /// The discovery glob matched no source sheets.
    #[error("no files matching {pattern}")]
    NoSources {
        /// Glob pattern that was expanded.
        pattern: String,
    },

    /// Invalid configuration or frame data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Decode or encode failure reported by the `image` crate.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Filesystem error tied to a specific path.
    #[error("io error at '{}': {source}", .path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Wrapped lower-level error with context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpritePackError {
    /// Build a [`SpritePackError::NoSources`] value.
    pub fn no_sources(pattern: impl Into<String>) -> Self {
        Self::NoSources {
            pattern: pattern.into(),
        }
    }

    /// Build a [`SpritePackError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpritePackError::Io`] value.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
