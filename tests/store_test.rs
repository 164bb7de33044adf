use std::fs;

use cake_tower::core::{settle, HighScoreStore};
use cake_tower::store::{FileHighScore, ScoreRecord};

#[test]
fn best_score_survives_a_new_store_instance() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best.json");

    let mut first = FileHighScore::new(&path);
    assert!(settle(&mut first, 8).is_new_record);

    let mut second = FileHighScore::new(&path);
    assert_eq!(second.read_high_score(), 8);
    let result = settle(&mut second, 5);
    assert!(!result.is_new_record);
    assert_eq!(result.best, 8);
}

#[test]
fn file_format_is_plain_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best.json");
    FileHighScore::new(&path)
        .save(&ScoreRecord { best: 31 })
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(value["best"], 31);
}

#[test]
fn unwritable_location_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    // A file where a directory is expected.
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, b"").unwrap();

    let mut store = FileHighScore::new(blocker.join("best.json"));
    assert!(store.save(&ScoreRecord { best: 1 }).is_err());
    let result = settle(&mut store, 3);
    assert!(result.is_new_record);
    assert_eq!(store.read_high_score(), 0);
}
