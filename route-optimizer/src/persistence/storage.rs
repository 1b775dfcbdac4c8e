#[cfg(test)]
#[path = "../../tests/unit/persistence/storage_test.rs"]
mod storage_test;

use super::{PersistedPolicy, deserialize_policy, serialize_policy};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tabula::utils::{GenericError, GenericResult};

/// A storage of the persisted policy.
pub trait PolicyStorage: Send + Sync {
    /// Loads the policy. Returns `None` if nothing was saved yet.
    fn load(&self) -> GenericResult<Option<PersistedPolicy>>;

    /// Saves the policy replacing the previous one.
    fn save(&self, policy: &PersistedPolicy) -> GenericResult<()>;

    /// Returns a short description used in log messages.
    fn describe(&self) -> String;
}

/// Keeps the policy in a json file. Saving writes a sibling temporary file first and renames it
/// over the target, so a failed save keeps the previous file intact.
pub struct FilePolicyStorage {
    path: PathBuf,
}

impl FilePolicyStorage {
    /// Creates a new instance of `FilePolicyStorage`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");

        PathBuf::from(name)
    }
}

impl PolicyStorage for FilePolicyStorage {
    fn load(&self) -> GenericResult<Option<PersistedPolicy>> {
        match File::open(&self.path) {
            Ok(file) => deserialize_policy(BufReader::new(file)).map(Some),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(GenericError::from(err).context("cannot open policy file")),
        }
    }

    fn save(&self, policy: &PersistedPolicy) -> GenericResult<()> {
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.temp_path();
        let result = write_policy_file(temp_path.as_path(), policy)
            .and_then(|_| fs::rename(&temp_path, &self.path).map_err(GenericError::from));

        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }

        result
    }

    fn describe(&self) -> String {
        format!("'{}'", self.path.display())
    }
}

fn write_policy_file(path: &Path, policy: &PersistedPolicy) -> GenericResult<()> {
    let file = File::create(path)?;
    serialize_policy(BufWriter::new(&file), policy)?;
    file.sync_all()?;

    Ok(())
}

/// Keeps the serialized policy in memory.
#[derive(Default)]
pub struct InMemoryPolicyStorage {
    blob: Mutex<Option<Vec<u8>>>,
}

impl InMemoryPolicyStorage {
    /// Creates a storage with the given serialized content.
    pub fn with_blob(blob: Vec<u8>) -> Self {
        Self { blob: Mutex::new(Some(blob)) }
    }

    /// Returns serialized content, if any.
    pub fn blob(&self) -> Option<Vec<u8>> {
        self.blob.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl PolicyStorage for InMemoryPolicyStorage {
    fn load(&self) -> GenericResult<Option<PersistedPolicy>> {
        self.blob().map(|blob| deserialize_policy(BufReader::new(blob.as_slice()))).transpose()
    }

    fn save(&self, policy: &PersistedPolicy) -> GenericResult<()> {
        let mut buffer = Vec::new();
        serialize_policy(BufWriter::new(&mut buffer), policy)?;

        *self.blob.lock().unwrap_or_else(PoisonError::into_inner) = Some(buffer);

        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
