#[cfg(test)]
#[path = "../../tests/unit/persistence/model_test.rs"]
mod model_test;

use crate::models::PolicyModel;
use crate::utils::{now_rfc3339, parse_rfc3339};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};
use tabula::algorithms::rl::QTable;
use tabula::utils::{Float, GenericError, GenericResult};

/// A persisted representation of the policy model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedPolicy {
    /// Action values as rows of a square matrix.
    pub policy_table: Vec<Vec<Float>>,
    /// Cumulative amount of trained episodes.
    pub episodes_trained: usize,
    /// Learning rate.
    pub learning_rate: Float,
    /// Discount factor.
    pub discount_factor: Float,
    /// RFC 3339 timestamp.
    pub saved_at: String,
}

impl PersistedPolicy {
    /// Creates persisted representation of the model stamped with current time.
    pub fn from_model(model: &PolicyModel) -> Self {
        Self {
            policy_table: model.table.as_ref().map(QTable::to_rows).unwrap_or_default(),
            episodes_trained: model.episodes_trained,
            learning_rate: model.learning_rate,
            discount_factor: model.discount_factor,
            saved_at: now_rfc3339(),
        }
    }

    /// Restores the model. Fails if the table is not square or the timestamp is malformed.
    pub fn into_model(self) -> GenericResult<PolicyModel> {
        parse_rfc3339(self.saved_at.as_str())?;

        let table = QTable::from_rows(self.policy_table)?;

        Ok(PolicyModel {
            table: Some(table),
            episodes_trained: self.episodes_trained,
            learning_rate: self.learning_rate,
            discount_factor: self.discount_factor,
        })
    }
}

/// Serializes persisted policy as json.
pub fn serialize_policy<W: Write>(mut writer: BufWriter<W>, policy: &PersistedPolicy) -> GenericResult<()> {
    serde_json::to_writer(&mut writer, policy).map_err(|err| GenericError::from(format!("cannot serialize policy: {err}")))?;
    writer.flush()?;

    Ok(())
}

/// Deserializes persisted policy from json.
pub fn deserialize_policy<R: Read>(reader: BufReader<R>) -> GenericResult<PersistedPolicy> {
    serde_json::from_reader(reader).map_err(|err| GenericError::from(format!("cannot deserialize policy: {err}")))
}
