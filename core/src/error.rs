use std::path::PathBuf;

use thiserror::Error;

use crate::DocumentId;

pub type Result<T> = std::result::Result<T, IndexError>;

/// Every way an index build can fail. All variants are terminal.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("there are no files in the provided corpus")]
    EmptyCorpus,

    #[error("there are no .{0} files in the provided corpus")]
    NoTextFiles(String),

    #[error("the text files in the corpus are all empty")]
    NoNonEmptyTextFiles,

    #[error("file name contains no usable number: {0}")]
    UnidentifiableDocument(String),

    #[error("document id {0} is shared by more than one file")]
    DuplicateDocumentId(DocumentId),

    #[error("the corpus contains only stopwords and/or common words")]
    EmptyVocabulary,

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
