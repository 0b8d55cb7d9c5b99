//! Mod-relative resource path resolution.
//!
//! Packs never hard-code absolute resource paths; they resolve them
//! through a locator rooted at the host's content directory for the mod.
//! Only path construction happens here; reading the resource (texture
//! loading, audio decoding) stays host-side.

use std::path::{Path, PathBuf};

/// Resolves resource paths relative to one mod's content directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModResourceLocator {
    root: PathBuf,
}

impl ModResourceLocator {
    /// Locator rooted at the named mod's content directory.
    pub fn for_mod(mod_name: &str) -> Self {
        Self {
            root: Path::new("mods").join(mod_name),
        }
    }

    /// A locator one directory deeper.
    pub fn sub_dir(&self, dir: &str) -> Self {
        Self {
            root: self.root.join(dir),
        }
    }

    /// Full path of a resource file under this locator.
    pub fn path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    pub fn as_path(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_stay_mod_relative() {
        let icons = ModResourceLocator::for_mod("foundations").sub_dir("icons");
        assert_eq!(
            icons.path("Foundation_4x4.png"),
            Path::new("mods/foundations/icons/Foundation_4x4.png")
        );
        assert_eq!(icons.as_path(), Path::new("mods/foundations/icons"));
    }
}
