use camino::Utf8PathBuf;
use cmdhint_types::ChannelTag;

/// Read-only probe answering "is this repository already enabled?".
///
/// Consulted only by the presenter, after ranking is complete; the matching
/// core never sees it.
pub trait EnablementProbe {
    fn is_enabled(&self, tag: &ChannelTag) -> bool;
}

/// Filesystem-backed probe: a channel is enabled iff
/// `<sources_dir>/<tag>.list` exists. The default channel is always enabled.
#[derive(Debug, Clone)]
pub struct FsEnablementProbe {
    sources_dir: Utf8PathBuf,
}

impl FsEnablementProbe {
    pub fn new(sources_dir: Utf8PathBuf) -> Self {
        Self { sources_dir }
    }
}

impl EnablementProbe for FsEnablementProbe {
    fn is_enabled(&self, tag: &ChannelTag) -> bool {
        tag.is_default() || self.sources_dir.join(format!("{tag}.list")).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn default_channel_is_always_enabled() {
        let probe = FsEnablementProbe::new(Utf8PathBuf::from("/nonexistent"));
        assert!(probe.is_enabled(&ChannelTag::default_channel()));
    }

    #[test]
    fn marker_file_controls_enablement() {
        let temp = tempfile::tempdir().unwrap();
        let dir = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        let probe = FsEnablementProbe::new(dir.clone());

        let tag = ChannelTag::new("x11");
        assert!(!probe.is_enabled(&tag));

        fs::write(dir.join("x11.list"), "deb ...\n").unwrap();
        assert!(probe.is_enabled(&tag));
    }
}
