use std::path::PathBuf;

/// Ways a marking job can fail.
#[derive(Debug, thiserror::Error)]
pub enum MarkError {
    /// The input image does not exist.
    #[error("The file {} was not found.", .0.display())]
    SourceNotFound(PathBuf),

    /// Decoding, drawing or writing failed.
    #[error("An error occurred: {0:#}")]
    Processing(anyhow::Error),
}

impl MarkError {
    pub fn is_source_not_found(&self) -> bool {
        matches!(self, MarkError::SourceNotFound(_))
    }
}

impl From<anyhow::Error> for MarkError {
    fn from(err: anyhow::Error) -> Self {
        MarkError::Processing(err)
    }
}
