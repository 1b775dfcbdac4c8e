use super::*;
use crate::helpers::models::create_trained_model;
use crate::helpers::utils::test_logger;
use crate::persistence::{load_policy, save_policy};
use crate::models::PolicyModel;
use tempfile::TempDir;

fn create_policy() -> PersistedPolicy {
    let mut model = create_trained_model(vec![vec![0., -1.5], vec![-2.25, 0.]]);
    model.episodes_trained = 10;

    PersistedPolicy::from_model(&model)
}

fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("cannot create temp dir")
}

#[test]
fn can_save_and_load_policy_file() {
    let dir = create_temp_dir();
    let storage = FilePolicyStorage::new(dir.path().join("models").join("route_model.json"));
    let policy = create_policy();

    storage.save(&policy).unwrap();
    let loaded = storage.load().unwrap();

    assert_eq!(loaded, Some(policy));
    assert!(storage.path().exists());
    assert!(!dir.path().join("models").join("route_model.json.tmp").exists());
}

#[test]
fn can_replace_previous_policy_file() {
    let dir = create_temp_dir();
    let storage = FilePolicyStorage::new(dir.path().join("route_model.json"));
    let mut policy = create_policy();

    storage.save(&policy).unwrap();
    policy.episodes_trained = 20;
    storage.save(&policy).unwrap();

    assert_eq!(storage.load().unwrap().map(|policy| policy.episodes_trained), Some(20));
}

#[test]
fn can_return_none_for_missing_file() {
    let dir = create_temp_dir();
    let storage = FilePolicyStorage::new(dir.path().join("missing.json"));

    assert_eq!(storage.load().unwrap(), None);
}

#[test]
fn can_return_error_for_corrupted_file() {
    let dir = create_temp_dir();
    let path = dir.path().join("route_model.json");
    fs::write(&path, "{\"policy_table\": [[0.0,").unwrap();

    let result = FilePolicyStorage::new(path).load();

    assert!(result.is_err());
}

#[test]
fn can_keep_previous_file_when_save_fails() {
    let dir = create_temp_dir();
    let path = dir.path().join("route_model.json");
    let storage = FilePolicyStorage::new(path.clone());
    let policy = create_policy();
    storage.save(&policy).unwrap();
    // a directory in place of the temp file makes the write fail
    fs::create_dir(dir.path().join("route_model.json.tmp")).unwrap();

    let result = storage.save(&PersistedPolicy { episodes_trained: 99, ..policy.clone() });

    assert!(result.is_err());
    assert_eq!(storage.load().unwrap(), Some(policy));
}

#[test]
fn can_describe_file_storage() {
    let storage = FilePolicyStorage::new("models/route_model.json");

    assert_eq!(storage.describe(), "'models/route_model.json'");
}

#[test]
fn can_save_and_load_policy_in_memory() {
    let storage = InMemoryPolicyStorage::default();
    let policy = create_policy();

    assert_eq!(storage.load().unwrap(), None);

    storage.save(&policy).unwrap();

    assert_eq!(storage.load().unwrap(), Some(policy));
    assert!(storage.blob().is_some_and(|blob| !blob.is_empty()));
}

#[test]
fn can_return_error_for_corrupted_blob() {
    let storage = InMemoryPolicyStorage::with_blob(b"not a json".to_vec());

    assert!(storage.load().is_err());
}

#[test]
fn can_load_untrained_model_from_corrupted_storage() {
    let storage = InMemoryPolicyStorage::with_blob(br#"{"policy_table": [[0.0, 1.0]], "episodes_trained": 1, "learning_rate": 0.1, "discount_factor": 0.9, "saved_at": "2024-05-01T10:00:00Z"}"#.to_vec());

    assert!(load_policy(&storage, &test_logger()).is_none());
}

#[test]
fn can_save_model_through_helper() {
    let storage = InMemoryPolicyStorage::default();
    let model = PolicyModel { episodes_trained: 3, ..create_trained_model(vec![vec![0.]]) };

    save_policy(&storage, &model, &test_logger()).unwrap();
    let loaded = load_policy(&storage, &test_logger());

    assert_eq!(loaded, Some(model));
}
