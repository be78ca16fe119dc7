use crate::distance::{DistanceError, distance};
use cmdhint_types::{Candidate, ChannelTag, CommandIndex, Resolution};
use std::collections::BTreeMap;

/// Running best-match accumulator, threaded through successive index scans.
///
/// Constructed fresh for every query; there is no global state. The driver
/// passes it by exclusive reference to [`scan_index`] once per index, then
/// converts it into the final [`Resolution`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchState {
    best_distance: Option<u32>,
    candidates: BTreeMap<String, Candidate>,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn best_distance(&self) -> Option<u32> {
        self.best_distance
    }

    pub fn into_resolution(self) -> Resolution {
        Resolution {
            best_distance: self.best_distance,
            candidates: self.candidates,
        }
    }

    /// Apply the update policy for one observed (package, binary) distance.
    ///
    /// - equal to the best: keep existing entries, insert this one; an
    ///   already-present package keeps its first-seen binary and channel;
    /// - strictly better (or first observation): drop everything, start a
    ///   new tie set at this distance;
    /// - worse: discard.
    fn record(&mut self, observed: u32, package: &str, binary: &str, tag: &ChannelTag) {
        match self.best_distance {
            Some(best) if observed == best => {
                self.candidates
                    .entry(package.to_string())
                    .or_insert_with(|| Candidate {
                        binary: binary.to_string(),
                        channel: tag.clone(),
                    });
            }
            Some(best) if observed > best => {}
            _ => {
                self.candidates.clear();
                self.best_distance = Some(observed);
                self.candidates.insert(
                    package.to_string(),
                    Candidate {
                        binary: binary.to_string(),
                        channel: tag.clone(),
                    },
                );
            }
        }
    }
}

/// Scan every (package, binary) pair of one index against `query`, updating
/// `state`. No I/O, no side effects beyond the accumulator. A distance-table
/// allocation failure aborts the scan immediately.
pub fn scan_index(
    query: &str,
    index: &CommandIndex,
    state: &mut MatchState,
) -> Result<(), DistanceError> {
    for (package, binary) in index.pairs() {
        let observed = distance(query, binary)?;
        state.record(observed, package, binary, index.tag());
    }
    Ok(())
}
