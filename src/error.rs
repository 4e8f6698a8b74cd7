use std::path::PathBuf;

pub type SplitResult<T> = Result<T, SplitError>;

/// Failures a split can end with.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    /// Input file does not exist
    #[error("The file '{}' does not exist.", path.display())]
    NotFound { path: PathBuf },

    /// Malformed range token
    #[error("Invalid page range '{token}': {reason}")]
    Parse { token: String, reason: String },

    /// Requested 1-based page is outside the document
    #[error("Page {page} is out of range. The PDF has {total} pages.")]
    Range { page: i64, total: usize },

    /// Nothing left to write
    #[error("No pages to extract")]
    NoPages,

    #[error("Malformed PDF: {0}")]
    Malformed(String),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Parse,
    Range,
    Unexpected,
}

impl SplitError {
    pub fn parse(token: &str, reason: impl Into<String>) -> Self {
        SplitError::Parse {
            token: token.to_string(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SplitError::NotFound { .. } => ErrorKind::NotFound,
            SplitError::Parse { .. } | SplitError::NoPages => ErrorKind::Parse,
            SplitError::Range { .. } => ErrorKind::Range,
            SplitError::Malformed(_) | SplitError::Pdf(_) | SplitError::Io(_) => {
                ErrorKind::Unexpected
            }
        }
    }
}
