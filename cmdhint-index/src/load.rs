use crate::config::ChannelSpec;
use crate::parse::parse_index;
use camino::{Utf8Path, Utf8PathBuf};
use cmdhint_types::CommandIndex;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum IndexLoadError {
    #[error("read index file {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Load and parse one channel's index file from `index_dir`.
pub fn load_channel(
    index_dir: &Utf8Path,
    spec: &ChannelSpec,
) -> Result<CommandIndex, IndexLoadError> {
    let path = index_dir.join(&spec.file);
    let contents = fs_err::read_to_string(&path).map_err(|source| IndexLoadError::Io {
        path: path.clone(),
        source,
    })?;

    let index = parse_index(spec.tag.clone(), &contents);
    debug!(
        channel = %spec.tag,
        path = %path,
        packages = index.package_count(),
        binaries = index.binary_count(),
        "loaded index"
    );
    Ok(index)
}

/// Load every channel of the catalog, preserving catalog order (which is the
/// scan priority order). The first missing or unreadable index file aborts
/// the load.
pub fn load_catalog(
    index_dir: &Utf8Path,
    catalog: &[ChannelSpec],
) -> Result<Vec<CommandIndex>, IndexLoadError> {
    catalog
        .iter()
        .map(|spec| load_channel(index_dir, spec))
        .collect()
}
