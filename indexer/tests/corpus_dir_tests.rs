use indexer::{load_corpus_dir, read_word_list, write_csv, write_json};
use sentindex_core::{build_index, IndexConfig, IndexError, LanguageModels};
use std::fs;
use tempfile::tempdir;

#[test]
fn it_loads_only_top_level_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("speech2.txt"), "Peace today.").unwrap();
    fs::write(dir.path().join("speech1.txt"), "").unwrap();
    fs::write(dir.path().join("notes.md"), "# notes").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested/speech3.txt"), "Despair.").unwrap();

    let files = load_corpus_dir(dir.path()).unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["notes.md", "speech1.txt", "speech2.txt"]);
    assert_eq!(files[1].size, 0);
    assert_eq!(files[2].size, 12);
    assert_eq!(files[2].text, "Peace today.");
}

#[test]
fn it_reports_missing_directory() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    assert!(matches!(load_corpus_dir(&missing), Err(IndexError::DirectoryNotFound(p)) if p == missing));
}

#[test]
fn it_reads_invalid_utf8_lossily() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("doc1.txt"), [b'p', b'e', b'a', b'c', b'e', 0xff, b'.']).unwrap();
    let files = load_corpus_dir(dir.path()).unwrap();
    assert_eq!(files[0].text, "peace\u{fffd}.");
    assert_eq!(files[0].size, 7);
}

#[test]
fn it_writes_csv_with_json_cells() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("doc1.txt"), "Peace today. \"Peace\" again.").unwrap();
    fs::write(dir.path().join("doc2.txt"), "Despair.").unwrap();

    let files = load_corpus_dir(dir.path()).unwrap();
    let report = build_index(&files, &LanguageModels::english(), &IndexConfig::default()).unwrap();
    let mut out = Vec::new();
    write_csv(&report, &mut out).unwrap();

    let mut reader = csv::Reader::from_reader(out.as_slice());
    assert_eq!(reader.headers().unwrap(), vec!["lemma", "frequency", "sentences", "documents"]);
    let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(&records[0][0], "peace");
    assert_eq!(&records[0][1], "2");
    let sentences: Vec<String> = serde_json::from_str(&records[0][2]).unwrap();
    assert_eq!(sentences, vec!["Peace today.", "\"Peace\" again."]);
    assert_eq!(&records[0][3], "[1]");
    assert_eq!(records.len(), 3);
}

#[test]
fn it_writes_json_report() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("doc7.txt"), "Despair.").unwrap();
    let files = load_corpus_dir(dir.path()).unwrap();
    let report = build_index(&files, &LanguageModels::english(), &IndexConfig::default()).unwrap();

    let mut out = Vec::new();
    write_json(&report, &mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["documents"], 1);
    assert_eq!(value["rows"][0]["lemma"], "despair");
    assert_eq!(value["rows"][0]["documents"], serde_json::json!([7]));
}

#[test]
fn it_reads_word_lists() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("extra.txt");
    fs::write(&path, "# custom\npeace\n\n  Despair \n").unwrap();
    assert_eq!(read_word_list(&path).unwrap(), vec!["peace", "Despair"]);
}
