//! Optimizer configuration.

#[cfg(test)]
#[path = "../tests/unit/config/config_test.rs"]
mod config_test;

use crate::models::Hyperparams;
use crate::training::SyntheticSettings;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};
use std::path::PathBuf;
use tabula::utils::{Float, GenericError, GenericResult};

/// Default average vehicle speed used for time estimates.
pub const DEFAULT_AVERAGE_SPEED_KMH: Float = 30.;

/// Default share of tour distance reported as an estimated saving.
pub const DEFAULT_SAVINGS_RATIO: Float = 0.2;

/// Default location of the persisted model.
pub const DEFAULT_MODEL_PATH: &str = "models/route_model.json";

/// An optimizer configuration. Every missing value falls back to its default.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerConfig {
    /// Specifies learning hyper parameters.
    pub learning: Option<LearningConfig>,
    /// Specifies synthetic episodes generation.
    pub synthetic: Option<SyntheticConfig>,
    /// Specifies fleet estimates.
    pub fleet: Option<FleetConfig>,
    /// Specifies model persistence.
    pub persistence: Option<PersistenceConfig>,
}

/// Learning hyper parameters. When alpha or gamma are missing, the values stored with the
/// persisted model are used.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningConfig {
    /// Learning rate in (0, 1]. Default is 0.1.
    pub alpha: Option<Float>,
    /// Discount factor in [0, 1]. Default is 0.95.
    pub gamma: Option<Float>,
    /// Exploration probability in [0, 1]. Default is 0.1.
    pub epsilon: Option<Float>,
}

/// Synthetic episodes configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntheticConfig {
    /// Amount of episodes in synthetic corpus. Default is 10.
    pub routes: Option<usize>,
    /// Min locations per episode, depot included. Default is 5.
    pub min_locations: Option<usize>,
    /// Max locations per episode, depot included. Default is 9.
    pub max_locations: Option<usize>,
    /// Depot latitude.
    pub reference_lat: Option<Float>,
    /// Depot longitude.
    pub reference_lon: Option<Float>,
    /// Max coordinate offset in degrees. Default is 0.1.
    pub jitter: Option<Float>,
}

/// Fleet estimates configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetConfig {
    /// Average speed in km/h. Default is 30.
    pub average_speed_kmh: Option<Float>,
    /// Share of tour distance reported as an estimated saving. Default is 0.2.
    pub savings_ratio: Option<Float>,
}

/// Persistence configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistenceConfig {
    /// Path to the model file.
    pub model_path: Option<String>,
}

impl OptimizerConfig {
    /// Returns hyper parameters using given values for missing alpha and gamma.
    pub fn hyperparams_or(&self, alpha: Float, gamma: Float) -> Hyperparams {
        let defaults = Hyperparams::default();
        let learning = self.learning.clone().unwrap_or_default();

        Hyperparams {
            alpha: learning.alpha.unwrap_or(alpha),
            gamma: learning.gamma.unwrap_or(gamma),
            epsilon: learning.epsilon.unwrap_or(defaults.epsilon),
        }
    }

    /// Returns hyper parameters with defaults for missing values.
    pub fn hyperparams(&self) -> Hyperparams {
        let defaults = Hyperparams::default();
        self.hyperparams_or(defaults.alpha, defaults.gamma)
    }

    /// Returns synthetic episodes settings.
    pub fn synthetic_settings(&self) -> SyntheticSettings {
        let defaults = SyntheticSettings::default();
        let config = self.synthetic.clone().unwrap_or_default();

        SyntheticSettings {
            routes: config.routes.unwrap_or(defaults.routes),
            min_locations: config.min_locations.unwrap_or(defaults.min_locations),
            max_locations: config.max_locations.unwrap_or(defaults.max_locations),
            reference_lat: config.reference_lat.unwrap_or(defaults.reference_lat),
            reference_lon: config.reference_lon.unwrap_or(defaults.reference_lon),
            jitter: config.jitter.unwrap_or(defaults.jitter),
        }
    }

    /// Returns average speed in km/h.
    pub fn average_speed_kmh(&self) -> Float {
        self.fleet.as_ref().and_then(|fleet| fleet.average_speed_kmh).unwrap_or(DEFAULT_AVERAGE_SPEED_KMH)
    }

    /// Returns savings ratio.
    pub fn savings_ratio(&self) -> Float {
        self.fleet.as_ref().and_then(|fleet| fleet.savings_ratio).unwrap_or(DEFAULT_SAVINGS_RATIO)
    }

    /// Returns model path.
    pub fn model_path(&self) -> PathBuf {
        PathBuf::from(
            self.persistence.as_ref().and_then(|persistence| persistence.model_path.as_deref()).unwrap_or(DEFAULT_MODEL_PATH),
        )
    }

    /// Validates configuration values.
    pub fn validate(&self) -> GenericResult<()> {
        let hyperparams = self.hyperparams();
        let synthetic = self.synthetic_settings();

        let errors = [
            (hyperparams.alpha > 0. && hyperparams.alpha <= 1., "alpha must be in (0, 1]"),
            ((0. ..=1.).contains(&hyperparams.gamma), "gamma must be in [0, 1]"),
            ((0. ..=1.).contains(&hyperparams.epsilon), "epsilon must be in [0, 1]"),
            (synthetic.routes > 0, "synthetic routes must be positive"),
            (synthetic.min_locations > 0, "synthetic min locations must be positive"),
            (synthetic.min_locations <= synthetic.max_locations, "synthetic min locations must not exceed max"),
            (synthetic.max_locations <= i32::MAX as usize, "synthetic max locations is too big"),
            (synthetic.jitter.is_finite() && synthetic.jitter >= 0., "synthetic jitter must be non-negative"),
            (
                synthetic.reference_lat.abs() + synthetic.jitter <= 90.,
                "synthetic reference latitude with jitter must be within [-90, 90]",
            ),
            (
                synthetic.reference_lon.abs() + synthetic.jitter <= 180.,
                "synthetic reference longitude with jitter must be within [-180, 180]",
            ),
            (self.average_speed_kmh().is_finite() && self.average_speed_kmh() > 0., "average speed must be positive"),
            ((0. ..=1.).contains(&self.savings_ratio()), "savings ratio must be in [0, 1]"),
        ]
        .into_iter()
        .filter(|(is_valid, _)| !is_valid)
        .map(|(_, message)| message)
        .collect::<Vec<_>>();

        if errors.is_empty() { Ok(()) } else { Err(GenericError::from(format!("invalid config: {}", errors.join(", ")))) }
    }
}

/// Reads and validates config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<OptimizerConfig> {
    let config: OptimizerConfig =
        serde_json::from_reader(reader).map_err(|err| GenericError::from(format!("cannot read config: {err}")))?;
    config.validate()?;

    Ok(config)
}
