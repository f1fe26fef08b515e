use std::fs;
use std::path::Path;

use reward_store::{FileRewardRepository, RewardError, RewardRecord, RewardStore};
use tempfile::TempDir;

const REWARDS_JSON: &str = r#"[
  { "code": "A1", "name": "trial2d", "claimed": true },
  { "code": "A2", "name": "trial2d", "claimed": false },
  { "code": "B1", "name": "Premium7D", "claimed": false },
  { "code": "A3", "name": "trial2d", "claimed": false },
  { "code": "B2", "name": "Premium7D", "claimed": false },
  { "code": "A4", "name": "trial2d", "claimed": false }
]"#;

fn write_rewards(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("rewards.json");
    fs::write(&path, REWARDS_JSON).unwrap();
    path
}

fn open(path: &Path) -> RewardStore<FileRewardRepository> {
    RewardStore::open(FileRewardRepository::new(path)).unwrap()
}

#[test]
fn test_claims_survive_reload() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_rewards(&temp_dir);

    let mut store = open(&path);
    let claimed = store.claim_by_type_id(0, 2).unwrap();
    assert_eq!(claimed, vec!["A2", "A3"]);

    let reloaded = open(&path);
    assert_eq!(reloaded.records().len(), 6);
    assert_eq!(reloaded.records(), store.records());
    assert_eq!(reloaded.unclaimed_codes("trial2d"), ["A4"]);

    let claimed_codes: Vec<&str> = reloaded
        .records()
        .iter()
        .filter(|r| r.claimed)
        .map(|r| r.code.as_str())
        .collect();
    assert_eq!(claimed_codes, vec!["A1", "A2", "A3"]);
}

#[test]
fn test_failed_claim_leaves_file_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_rewards(&temp_dir);
    let before = fs::read(&path).unwrap();

    let mut store = open(&path);

    let err = store.claim_by_type_id(1, 3).unwrap_err();
    assert!(matches!(
        err,
        RewardError::InsufficientSupply {
            requested: 3,
            available: 2,
            ..
        }
    ));
    assert_eq!(err.to_string(), "I don't have 3 codes for premium, only 2 left");

    let err = store.claim_by_type_id(7, 1).unwrap_err();
    assert!(matches!(err, RewardError::UnknownRewardType { id: 7 }));

    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_round_trip_without_claims() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_rewards(&temp_dir);

    let store = open(&path);
    let original = store.records().to_vec();
    store.persist().unwrap();

    let reloaded = open(&path);
    assert_eq!(reloaded.records(), original.as_slice());
    assert_eq!(reloaded.list_types(), store.list_types());
}

#[test]
fn test_ids_survive_reload_while_types_have_codes() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_rewards(&temp_dir);

    let mut store = open(&path);
    store.claim_by_type_id(1, 2).unwrap();
    assert_eq!(store.list_types()[1].remaining, 0);

    // A fresh load drops the exhausted type from the listing.
    let reloaded = open(&path);
    let listing = reloaded.list_types();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].display_name, "trial");
    assert_eq!(listing[0].remaining, 3);
}

#[test]
fn test_missing_and_corrupt_files() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rewards.json");

    let result = RewardStore::open(FileRewardRepository::new(&path));
    assert!(matches!(result, Err(RewardError::NotFound(_))));

    fs::write(&path, r#"[{ "code": "A1", "name": "trial2d" }]"#).unwrap();
    let result = RewardStore::open(FileRewardRepository::new(&path));
    assert!(matches!(result, Err(RewardError::Load(_))));
}

#[test]
fn test_import_into_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rewards.json");

    let mut store = RewardStore::open_or_empty(FileRewardRepository::new(&path)).unwrap();
    let added = store
        .import(vec![
            RewardRecord::new("C1", "bonus1d"),
            RewardRecord::new("C2", "bonus1d"),
        ])
        .unwrap();
    assert_eq!(added, 2);

    let mut reloaded = open(&path);
    assert_eq!(reloaded.claim_by_type_id(0, 1).unwrap(), vec!["C1"]);
}
