use crate::channel::ChannelTag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The winning binary inside a package, plus the channel that provides it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub binary: String,
    pub channel: ChannelTag,
}

/// Outcome of scanning every configured index for a query.
///
/// `best_distance` of `None` is the no-match sentinel: no binary was ever
/// compared (all indexes empty). The candidate map holds every package tied
/// at the best distance, keyed by package name, so iteration order is
/// deterministic and ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub best_distance: Option<u32>,
    pub candidates: BTreeMap<String, Candidate>,
}

/// How a resolution should be presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// No known binary is close enough to suggest anything.
    NotFound,
    /// The command exists verbatim in some package; it is just not installed.
    Installable,
    /// Close-but-not-exact matches worth offering as typo corrections.
    Suggest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_iterate_in_package_order() {
        let mut resolution = Resolution {
            best_distance: Some(1),
            ..Default::default()
        };
        for package in ["zsh", "bash", "mksh"] {
            resolution.candidates.insert(
                package.to_string(),
                Candidate {
                    binary: package.to_string(),
                    channel: ChannelTag::default_channel(),
                },
            );
        }
        let order: Vec<_> = resolution.candidates.keys().cloned().collect();
        assert_eq!(order, vec!["bash", "mksh", "zsh"]);
    }

    #[test]
    fn classification_serializes_snake_case() {
        let json = serde_json::to_string(&Classification::NotFound).unwrap();
        assert_eq!(json, "\"not_found\"");
    }
}
