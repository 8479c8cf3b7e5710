use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum WordSearchError {
    #[error("error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading words: {0}")]
    Read(#[from] io::Error),

    #[error("invalid word file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("no word files match {0}")]
    NoMatch(String),
}

impl WordSearchError {
    pub fn with_path(self, path: PathBuf) -> Self {
        match self {
            WordSearchError::Read(source) => WordSearchError::Io { path, source },
            other => other,
        }
    }
}
