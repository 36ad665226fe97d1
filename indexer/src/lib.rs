//! Filesystem and output side of the indexer: reads a corpus directory into
//! `SourceFile`s and writes finished reports as CSV or JSON.

use sentindex_core::{IndexError, Report, SourceFile};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

fn io_error(path: &Path, source: std::io::Error) -> IndexError {
    IndexError::Io { path: path.to_path_buf(), source }
}

/// Read every regular file directly inside `dir`, in file-name order.
/// Subdirectories are not descended into.
pub fn load_corpus_dir(dir: &Path) -> Result<Vec<SourceFile>, IndexError> {
    if !dir.is_dir() {
        return Err(IndexError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            let source = e.into_io_error().unwrap_or_else(|| std::io::Error::other("filesystem loop"));
            io_error(&path, source)
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let size = entry.metadata().map_err(|e| {
            let source = e.into_io_error().unwrap_or_else(|| std::io::Error::other("metadata unavailable"));
            io_error(path, source)
        })?.len();
        let bytes = fs::read(path).map_err(|e| io_error(path, e))?;
        files.push(SourceFile {
            name: entry.file_name().to_string_lossy().into_owned(),
            text: String::from_utf8_lossy(&bytes).into_owned(),
            size,
        });
    }
    tracing::debug!(dir = %dir.display(), files = files.len(), "loaded corpus directory");
    Ok(files)
}

#[derive(Serialize)]
struct CsvRow<'a> {
    lemma: &'a str,
    frequency: u64,
    sentences: String,
    documents: String,
}

/// One record per term. The sentence and document lists are JSON arrays
/// inside a single cell.
pub fn write_csv<W: Write>(report: &Report, writer: W) -> anyhow::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in &report.rows {
        csv.serialize(CsvRow {
            lemma: &row.term,
            frequency: row.frequency,
            sentences: serde_json::to_string(&row.sentences)?,
            documents: serde_json::to_string(&row.documents)?,
        })?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(report: &Report, mut writer: W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    Ok(())
}

pub fn write_report<W: Write>(report: &Report, format: OutputFormat, writer: W) -> anyhow::Result<()> {
    match format {
        OutputFormat::Csv => write_csv(report, writer),
        OutputFormat::Json => write_json(report, writer),
    }
}

/// Extra noise words, one per line; blank lines and `#` comments are skipped.
pub fn read_word_list(path: &Path) -> Result<Vec<String>, IndexError> {
    let text = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect())
}
