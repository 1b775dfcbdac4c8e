#[cfg(test)]
#[path = "../../tests/unit/training/synthetic_test.rs"]
mod synthetic_test;

use crate::models::{Location, TrainingEpisode};
use tabula::utils::{Float, Random};

/// Specifies how synthetic training episodes are generated.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntheticSettings {
    /// Amount of distinct episodes in the generated corpus.
    pub routes: usize,
    /// Min amount of locations (depot included) per episode.
    pub min_locations: usize,
    /// Max amount of locations (depot included) per episode.
    pub max_locations: usize,
    /// Depot latitude, all other locations are spread around it.
    pub reference_lat: Float,
    /// Depot longitude.
    pub reference_lon: Float,
    /// Max offset in degrees applied to both coordinates.
    pub jitter: Float,
}

impl Default for SyntheticSettings {
    fn default() -> Self {
        Self {
            routes: 10,
            min_locations: 5,
            max_locations: 9,
            reference_lat: -12.046374,
            reference_lon: -77.042793,
            jitter: 0.1,
        }
    }
}

/// Generates a corpus of synthetic episodes with the depot at the reference coordinate and
/// other locations uniformly jittered around it.
pub fn generate_synthetic_episodes(settings: &SyntheticSettings, random: &(dyn Random + Send + Sync)) -> Vec<TrainingEpisode> {
    (0..settings.routes)
        .map(|_| {
            let size = random.uniform_int(settings.min_locations as i32, settings.max_locations as i32) as usize;

            let depot = Location::new("0", settings.reference_lat, settings.reference_lon).with_label("depot");
            let locations = std::iter::once(depot)
                .chain((1..size).map(|idx| {
                    Location::new(
                        idx.to_string(),
                        settings.reference_lat + jitter(random, settings.jitter),
                        settings.reference_lon + jitter(random, settings.jitter),
                    )
                }))
                .collect();

            TrainingEpisode::new(locations)
        })
        .collect()
}

fn jitter(random: &(dyn Random + Send + Sync), amplitude: Float) -> Float {
    if amplitude > 0. { random.uniform_real(-amplitude, amplitude) } else { 0. }
}
