//! Contains episodic tabular Q-learning of the stop ordering policy.

mod synthetic;
pub use self::synthetic::{SyntheticSettings, generate_synthetic_episodes};

mod trainer;
pub use self::trainer::Trainer;
