//! Contains load and save logic of the learned policy model.

mod model;
pub use self::model::{PersistedPolicy, deserialize_policy, serialize_policy};

mod storage;
pub use self::storage::{FilePolicyStorage, InMemoryPolicyStorage, PolicyStorage};

use crate::models::PolicyModel;
use tabula::utils::{GenericResult, InfoLogger};

/// Loads policy model from the storage. Any failure is logged and reported as `None`, so the
/// caller continues with an untrained model.
pub fn load_policy(storage: &dyn PolicyStorage, logger: &InfoLogger) -> Option<PolicyModel> {
    let result = storage.load().and_then(|persisted| persisted.map(PersistedPolicy::into_model).transpose());

    match result {
        Ok(Some(model)) => {
            logger(&format!(
                "route policy is loaded from {}: {} episodes trained, {} positions",
                storage.describe(),
                model.episodes_trained,
                model.capacity()
            ));
            Some(model)
        }
        Ok(None) => {
            logger(&format!("no route policy is saved in {}", storage.describe()));
            None
        }
        Err(err) => {
            logger(&format!("cannot load route policy from {}, continue untrained: {err}", storage.describe()));
            None
        }
    }
}

/// Saves policy model into the storage.
pub fn save_policy(storage: &dyn PolicyStorage, model: &PolicyModel, logger: &InfoLogger) -> GenericResult<()> {
    storage.save(&PersistedPolicy::from_model(model))?;
    logger(&format!("route policy is saved to {}", storage.describe()));

    Ok(())
}
