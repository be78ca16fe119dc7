use crate::channel::ChannelTag;
use serde::{Deserialize, Serialize};

/// One package and the binaries it provides, in index order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageBinaries {
    pub package: String,
    pub binaries: Vec<String>,
}

/// An immutable, parsed command index for one channel.
///
/// Built once at startup by the index loader and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandIndex {
    tag: ChannelTag,
    entries: Vec<PackageBinaries>,
}

impl CommandIndex {
    pub fn new(tag: ChannelTag, entries: Vec<PackageBinaries>) -> Self {
        Self { tag, entries }
    }

    pub fn tag(&self) -> &ChannelTag {
        &self.tag
    }

    pub fn entries(&self) -> &[PackageBinaries] {
        &self.entries
    }

    pub fn package_count(&self) -> usize {
        self.entries.len()
    }

    pub fn binary_count(&self) -> usize {
        self.entries.iter().map(|e| e.binaries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All (package, binary) pairs in index order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|entry| {
            entry
                .binaries
                .iter()
                .map(move |binary| (entry.package.as_str(), binary.as_str()))
        })
    }
}
