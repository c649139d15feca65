use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Invalid JSON in {}: {source}", path.display())]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialize error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            StoreError::FileNotFound(path)
        } else {
            StoreError::Io { path, source }
        }
    }
}
