use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{IndexError, Result};
use crate::DocumentId;

/// A file handed over by the filesystem collaborator: its name, its already
/// read content and the size the filesystem reported for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    pub name: String,
    pub text: String,
    pub size: u64,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let size = text.len() as u64;
        Self { name: name.into(), text, size }
    }

    fn has_extension(&self, extension: &str) -> bool {
        Path::new(&self.name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    pub id: DocumentId,
    pub text: String,
}

/// Every digit of the file name, in order, read as one number.
/// `"test_file1.txt"` is document 1, `"a1b2.txt"` is document 12.
pub fn document_id_from_name(name: &str) -> Option<DocumentId> {
    let digits: String = name.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Validate the raw file set and return its documents sorted by id.
pub fn validate_corpus(files: &[SourceFile], text_extension: &str) -> Result<Vec<RawDocument>> {
    if files.is_empty() {
        return Err(IndexError::EmptyCorpus);
    }

    let text_files: Vec<&SourceFile> = files.iter().filter(|f| f.has_extension(text_extension)).collect();
    if text_files.is_empty() {
        return Err(IndexError::NoTextFiles(text_extension.to_string()));
    }

    let non_empty: Vec<&SourceFile> = text_files.into_iter().filter(|f| f.size > 0).collect();
    if non_empty.is_empty() {
        return Err(IndexError::NoNonEmptyTextFiles);
    }

    let mut docs = Vec::with_capacity(non_empty.len());
    for file in &non_empty {
        let id = document_id_from_name(&file.name)
            .ok_or_else(|| IndexError::UnidentifiableDocument(file.name.clone()))?;
        docs.push(RawDocument { id, text: file.text.clone() });
    }

    let mut seen = HashSet::with_capacity(docs.len());
    for doc in &docs {
        if !seen.insert(doc.id) {
            return Err(IndexError::DuplicateDocumentId(doc.id));
        }
    }

    docs.sort_by_key(|d| d.id);
    tracing::debug!(
        files = files.len(),
        documents = docs.len(),
        skipped = files.len() - docs.len(),
        "validated corpus"
    );
    Ok(docs)
}
