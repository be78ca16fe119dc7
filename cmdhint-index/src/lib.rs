//! Index ingestion for cmdhint: the flat "package / indented binary" text
//! format, per-channel file loading, and the channel catalog configuration.
//!
//! Loading happens once at startup; the matching core only ever sees the
//! parsed, immutable [`cmdhint_types::CommandIndex`] tables.

mod config;
mod load;
mod parse;

pub use config::{
    ChannelSpec, CmdhintConfig, PathsConfig, default_channels, discover_config, load_config,
    load_or_default, parse_config, CONFIG_FILE_NAME,
};
pub use load::{IndexLoadError, load_catalog, load_channel};
pub use parse::parse_index;
