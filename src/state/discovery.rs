/// Asset discovery
///
/// Lists image files under a named root and keys them by a `/`-separated
/// path starting with `/<root>/`, so keyword patterns such as `/Freelance/`
/// can be tested against the key. The catalog builder only ever sees the
/// resulting map, which keeps it testable without a filesystem.

use std::collections::BTreeMap;
#[cfg(test)]
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Discovered assets: path key -> resolved image reference
pub type AssetMap = BTreeMap<String, String>;

/// Image file extensions picked up by discovery
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

/// Capability to list image assets under a root, keyed by path
pub trait AssetSource {
    fn list_images(&self, root: &str) -> AssetMap;
}

/// Merge the listings of several roots, later roots winning on equal keys
pub fn collect<S: AssetSource + ?Sized>(source: &S, roots: &[String]) -> AssetMap {
    let mut merged = AssetMap::new();
    for root in roots {
        merged.extend(source.list_images(root));
    }
    merged
}

/// Check the extension of a file name against `IMAGE_EXTENSIONS`
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Walks directories under a base folder on disk
#[derive(Debug, Clone)]
pub struct FsAssetSource {
    base: PathBuf,
}

impl FsAssetSource {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl AssetSource for FsAssetSource {
    fn list_images(&self, root: &str) -> AssetMap {
        let dir = self.base.join(root);
        let mut found = AssetMap::new();

        if !dir.is_dir() {
            log::debug!("Asset root {} does not exist", dir.display());
            return found;
        }

        for entry in WalkDir::new(&dir).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable asset entry under {}: {}", dir.display(), e);
                    continue;
                }
            };

            if !entry.file_type().is_file() || !is_image_file(entry.path()) {
                continue;
            }

            let relative = match entry.path().strip_prefix(&dir) {
                Ok(relative) => relative,
                Err(_) => continue,
            };

            // Keys always use forward slashes, whatever the platform
            let mut key = format!("/{}", root);
            for component in relative.components() {
                key.push('/');
                key.push_str(&component.as_os_str().to_string_lossy());
            }

            let reference = entry
                .path()
                .canonicalize()
                .unwrap_or_else(|_| entry.path().to_path_buf());

            log::debug!("Discovered {}", key);
            found.insert(key, reference.to_string_lossy().to_string());
        }

        found
    }
}

/// In-memory listings per root
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StaticAssetSource {
    roots: HashMap<String, AssetMap>,
}

#[cfg(test)]
impl StaticAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an asset under `root`; `relative` is the path below the root
    pub fn with(mut self, root: &str, relative: &str, reference: &str) -> Self {
        let key = format!("/{}/{}", root, relative.trim_start_matches('/'));
        self.roots
            .entry(root.to_string())
            .or_default()
            .insert(key, reference.to_string());
        self
    }
}

#[cfg(test)]
impl AssetSource for StaticAssetSource {
    fn list_images(&self, root: &str) -> AssetMap {
        self.roots.get(root).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file(Path::new("a/b/logo.PNG")));
        assert!(is_image_file(Path::new("poster.jpeg")));
        assert!(!is_image_file(Path::new("notes.txt")));
        assert!(!is_image_file(Path::new("README")));
    }

    #[test]
    fn test_fs_source_walks_subfolders() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("FreelancePersonalProjects");
        touch(&root.join("Freelance/cafe-menu.png"));
        touch(&root.join("Personal/self_portrait.webp"));
        touch(&root.join("Personal/notes.txt"));

        let source = FsAssetSource::new(tmp.path());
        let found = source.list_images("FreelancePersonalProjects");

        let keys: Vec<&str> = found.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "/FreelancePersonalProjects/Freelance/cafe-menu.png",
                "/FreelancePersonalProjects/Personal/self_portrait.webp",
            ]
        );
        for reference in found.values() {
            assert!(Path::new(reference).is_file());
        }
    }

    #[test]
    fn test_fs_source_missing_root_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let source = FsAssetSource::new(tmp.path());
        assert!(source.list_images("branding").is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_fs_source_follows_links_and_skips_broken_ones() {
        use std::os::unix::fs::symlink;

        let tmp = tempfile::tempdir().unwrap();
        let shared = tmp.path().join("shared");
        touch(&shared.join("flyer.jpg"));

        let root = tmp.path().join("branding");
        touch(&root.join("logo.png"));
        symlink(root.join("missing.png"), root.join("broken.png")).unwrap();
        symlink(&shared, root.join("linked")).unwrap();

        let source = FsAssetSource::new(tmp.path());
        let found = source.list_images("branding");

        let keys: Vec<&str> = found.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["/branding/linked/flyer.jpg", "/branding/logo.png"]);
    }

    #[test]
    fn test_collect_merges_roots_in_order() {
        let source = StaticAssetSource::new()
            .with("The Wol Collective", "tee.png", "new/tee.png")
            .with("branding", "poster.png", "old/poster.png");

        let merged = collect(
            &source,
            &["The Wol Collective".to_string(), "branding".to_string()],
        );

        assert_eq!(merged.len(), 2);
        assert_eq!(merged["/The Wol Collective/tee.png"], "new/tee.png");
        assert_eq!(merged["/branding/poster.png"], "old/poster.png");
    }
}
