/// Alias to a scalar floating type.
///
/// NOTE: keep `f64` as distances are accumulated over many legs and q-values over many episodes.
pub type Float = f64;
