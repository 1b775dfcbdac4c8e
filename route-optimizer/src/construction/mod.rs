//! Contains logic to build a single ordered tour over a location list: an exploitation of the
//! learned policy and a nearest neighbor heuristic used as a fallback.

mod composer;
pub use self::composer::RouteComposer;

mod greedy;
pub use self::greedy::complete_with_nearest_neighbor;

mod tour;
pub use self::tour::Tour;
pub(crate) use self::tour::estimate_time_min;
