//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`; the CLI
//! boundary in `main.rs` uses `anyhow` for convenient propagation.

use std::path::PathBuf;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error, aggregating subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Tag read error for {path}: {message}")]
    Tags { path: PathBuf, message: String },

    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn tags(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Tags {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to `Result`s.
pub trait ResultExt<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_error_includes_path_and_message() {
        let err = Error::tags("/music/song.mp3", "unsupported format");
        let msg = err.to_string();
        assert!(msg.contains("song.mp3"));
        assert!(msg.contains("unsupported format"));
    }

    #[test]
    fn context_wraps_and_preserves_source_message() {
        let err = Error::tags("/music/song.mp3", "bad frame").context("during rescan");
        let msg = err.to_string();
        assert!(msg.contains("during rescan"));
        assert!(msg.contains("bad frame"));
    }

    #[test]
    fn result_ext_attaches_context() {
        let result: Result<()> = Err(Error::tags("/x.mp3", "oops"));
        let with_ctx = result.with_context("while scanning");
        assert!(with_ctx.unwrap_err().to_string().contains("while scanning"));
    }
}
