use std::fs;

use lightning_core::DictionaryDocument;
use lightning_core::fs::read_json;

use crate::convert::{Converter, write_outputs};
use crate::types::{Cell, SheetRow};
use crate::validate::{ValidationError, validate_output};

fn sample_document() -> DictionaryDocument {
    let rows = ["the", "of", "good", "run"].iter().enumerate().map(|(i, word)| {
        SheetRow::new(
            i + 2,
            vec![
                Cell::Int(i as i64 + 1),
                Cell::Text(word.to_string()),
                Cell::Text("n".into()),
                Cell::Int(1_000_000 - i as i64),
            ],
        )
    });
    Converter::new(10, "data/wordFrequency.xlsx").convert(rows).document
}

#[test]
fn both_outputs_decode_to_the_same_document() {
    let dir = tempfile::tempdir().unwrap();
    let pretty = dir.path().join("processed/dictionary.json");
    let minified = dir.path().join("processed/dictionary.min.json");
    let document = sample_document();

    write_outputs(&document, &pretty, &minified).unwrap();

    let a: DictionaryDocument = read_json(&pretty).unwrap();
    let b: DictionaryDocument = read_json(&minified).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, document);
    assert!(fs::metadata(&minified).unwrap().len() < fs::metadata(&pretty).unwrap().len());

    let summary = validate_output(&pretty).unwrap();
    assert_eq!(summary.total_words, 4);
}

#[test]
fn failed_first_write_skips_the_second() {
    let dir = tempfile::tempdir().unwrap();
    // a directory where the file should go makes the rename fail
    let pretty = dir.path().join("dictionary.json");
    fs::create_dir(&pretty).unwrap();
    fs::write(pretty.join("keep"), "x").unwrap();
    let minified = dir.path().join("dictionary.min.json");

    let result = write_outputs(&sample_document(), &pretty, &minified);

    assert!(result.is_err());
    assert!(!minified.exists());
}

#[test]
fn validation_rejects_incomplete_documents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dictionary.json");

    fs::write(&path, r#"{"version": "1.0", "metadata": {}, "words": {}}"#).unwrap();
    assert!(matches!(
        validate_output(&path),
        Err(ValidationError::MissingKey("statistics"))
    ));

    fs::write(
        &path,
        r#"{"version": "1.0", "metadata": {}, "statistics": {}, "words": {}}"#,
    )
    .unwrap();
    assert!(matches!(validate_output(&path), Err(ValidationError::NoWords)));

    fs::write(
        &path,
        r#"{"version": "1.0", "metadata": {}, "statistics": {}, "words": {"a": {"rank": 1}}}"#,
    )
    .unwrap();
    assert!(matches!(
        validate_output(&path),
        Err(ValidationError::MissingWordKey { key: "pos", .. })
    ));
}
