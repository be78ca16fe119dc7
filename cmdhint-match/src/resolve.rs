use crate::aggregate::{MatchState, scan_index};
use crate::distance::DistanceError;
use cmdhint_types::{Classification, CommandIndex, Resolution};
use tracing::debug;

/// Largest edit distance still worth suggesting. Fixed configuration value,
/// not derived from anything.
pub const SUGGEST_THRESHOLD: u32 = 3;

/// Run the aggregator over every index, in the catalog's priority order,
/// and return the final resolution. A [`DistanceError`] aborts the remaining
/// indexes immediately.
pub fn resolve(query: &str, indexes: &[CommandIndex]) -> Result<Resolution, DistanceError> {
    let mut state = MatchState::new();
    for index in indexes {
        scan_index(query, index, &mut state)?;
        debug!(
            channel = %index.tag(),
            binaries = index.binary_count(),
            best = ?state.best_distance(),
            "scanned index"
        );
    }
    Ok(state.into_resolution())
}

/// Classify a resolution for presentation.
pub fn classify(resolution: &Resolution) -> Classification {
    match resolution.best_distance {
        Some(0) => Classification::Installable,
        Some(best) if best <= SUGGEST_THRESHOLD => Classification::Suggest,
        _ => Classification::NotFound,
    }
}
