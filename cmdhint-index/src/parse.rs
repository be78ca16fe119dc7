use cmdhint_types::{ChannelTag, CommandIndex, PackageBinaries};

/// Parse the flat index format into a [`CommandIndex`] for `tag`.
///
/// A line with no leading indentation starts a new package record; every
/// following line with exactly one leading space names a binary belonging to
/// it. Exactly one indent character is stripped, nothing else is trimmed.
/// Blank lines are skipped. A binary line appearing before any package line
/// is malformed input and is ignored rather than rejected.
pub fn parse_index(tag: ChannelTag, text: &str) -> CommandIndex {
    let mut entries: Vec<PackageBinaries> = Vec::new();

    for line in text.lines() {
        if line.is_empty() {
            continue;
        }
        if let Some(binary) = line.strip_prefix(' ') {
            // Orphan binary lines have no package to belong to.
            if let Some(current) = entries.last_mut() {
                current.binaries.push(binary.to_string());
            }
        } else {
            entries.push(PackageBinaries {
                package: line.to_string(),
                binaries: Vec::new(),
            });
        }
    }

    CommandIndex::new(tag, entries)
}
