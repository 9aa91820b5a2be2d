//! Project root discovery.

use std::path::Path;

use serde::Serialize;

use crate::config::ConfigValidator;
use crate::error::{Error, Result};
use crate::path::normalize;
use crate::path::{PathResolver, TargetKind};
use crate::project::marker::{Marker, MarkerSet};

/// A discovered project root and the marker that identified it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRoot {
    /// The resolved root directory.
    pub path: String,
    /// The marker found in that directory.
    pub marker: Marker,
}

/// Walks up the directory tree looking for project markers.
///
/// # Examples
///
/// ```no_run
/// use pathkit::project::{Marker, MarkerSet, ProjectRootLocator};
///
/// let locator = ProjectRootLocator::new(MarkerSet::new([Marker::file("Cargo.toml")]));
/// let root = locator.find(Some("src/path")).unwrap();
/// println!("crate root: {root}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProjectRootLocator {
    markers: MarkerSet,
    resolver: PathResolver,
}

impl ProjectRootLocator {
    /// Create a locator for the given marker set.
    #[must_use]
    pub fn new(markers: MarkerSet) -> Self {
        Self {
            markers,
            resolver: PathResolver::new(),
        }
    }

    /// Use `resolver` to resolve the starting point.
    #[must_use]
    pub fn with_resolver(mut self, resolver: PathResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// The markers this locator looks for.
    #[must_use]
    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    /// Find the nearest project root at or above `start`.
    ///
    /// `start` defaults to the current working directory.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `Validation` if the marker set is empty or a marker does not name a
    ///   single directory entry (such as `..` or `a/b`)
    /// - `NotFound` if the filesystem root is passed without finding a marker
    /// - `PermissionDenied` if a directory on the way up cannot be searched
    /// - any error from resolving `start`
    pub fn find(&self, start: Option<&str>) -> Result<String> {
        self.find_with_marker(start).map(|root| root.path)
    }

    /// Like [`ProjectRootLocator::find`], but also report which marker matched.
    ///
    /// # Errors
    ///
    /// Same as [`ProjectRootLocator::find`].
    pub fn find_with_marker(&self, start: Option<&str>) -> Result<ProjectRoot> {
        ConfigValidator::validate_marker_set(&self.markers)?;
        let resolved = self.resolver.resolve(start.unwrap_or("."))?;

        // A file cannot hold markers; begin at its directory.
        let first = match resolved.kind() {
            TargetKind::File => normalize::split_leaf(resolved.path())
                .map_or_else(|| resolved.path().to_string(), |(parent, _)| parent),
            _ => resolved.path().to_string(),
        };

        let mut current = Some(first);
        while let Some(dir) = current {
            log::debug!("checking {dir} for {}", self.markers);
            if let Some(marker) = self.markers.find_in(Path::new(&dir))? {
                log::debug!("found {marker} in {dir}");
                return Ok(ProjectRoot {
                    path: dir,
                    marker: marker.clone(),
                });
            }
            current = normalize::split_leaf(&dir).map(|(parent, _)| parent);
        }

        Err(Error::NotFound {
            start: resolved.into_string(),
            markers: self.markers.to_string(),
        })
    }
}

/// Find the nearest project root using the default marker set.
///
/// # Errors
///
/// Same as [`ProjectRootLocator::find`].
pub fn find_project_root(start: Option<&str>) -> Result<String> {
    ProjectRootLocator::default().find(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    const UNLIKELY: &str = ".pathkit-test-marker-4f1c";

    fn canonical(dir: &TempDir) -> String {
        fs::canonicalize(dir.path())
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    }

    fn locator(marker: Marker) -> ProjectRootLocator {
        ProjectRootLocator::new(MarkerSet::new([marker]))
    }

    #[test]
    fn test_finds_marker_in_ancestor() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("proj").join(UNLIKELY)).unwrap();
        let deep = dir.path().join("proj").join("a").join("b");
        fs::create_dir_all(&deep).unwrap();

        let root = locator(Marker::directory(UNLIKELY))
            .find(deep.to_str())
            .unwrap();
        assert_eq!(root, format!("{}/proj", canonical(&dir)));
    }

    #[test]
    fn test_start_directory_itself_can_be_root() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(UNLIKELY), "").unwrap();

        let root = locator(Marker::file(UNLIKELY))
            .find_with_marker(dir.path().to_str())
            .unwrap();
        assert_eq!(root.path, canonical(&dir));
        assert_eq!(root.marker.name(), UNLIKELY);
    }

    #[test]
    fn test_nearest_marker_wins() {
        let dir = tempdir().unwrap();
        let outer = dir.path().join("outer");
        let inner = outer.join("inner");
        fs::create_dir_all(outer.join(UNLIKELY)).unwrap();
        fs::create_dir_all(inner.join(UNLIKELY)).unwrap();
        fs::create_dir_all(inner.join("src")).unwrap();

        let root = locator(Marker::any(UNLIKELY))
            .find(inner.join("src").to_str())
            .unwrap();
        assert_eq!(root, format!("{}/outer/inner", canonical(&dir)));
    }

    #[test]
    fn test_start_at_file_checks_its_directory() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(UNLIKELY)).unwrap();
        let file = dir.path().join("main.rs");
        fs::write(&file, "fn main() {}").unwrap();

        let root = locator(Marker::directory(UNLIKELY))
            .find(file.to_str())
            .unwrap();
        assert_eq!(root, canonical(&dir));
    }

    #[test]
    fn test_wrong_kind_does_not_match() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join(UNLIKELY), "").unwrap();
        fs::create_dir(dir.path().join(UNLIKELY)).unwrap();

        let root = locator(Marker::directory(UNLIKELY))
            .find(nested.to_str())
            .unwrap();
        assert_eq!(root, canonical(&dir));
    }

    #[test]
    fn test_not_found_when_no_marker() {
        let dir = tempdir().unwrap();
        let err = locator(Marker::any(UNLIKELY))
            .find(dir.path().to_str())
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains(UNLIKELY));
    }

    #[test]
    fn test_invalid_marker_names_rejected() {
        let dir = tempdir().unwrap();
        for name in ["..", ".", "a/b", "", "   "] {
            let err = locator(Marker::any(name))
                .find(dir.path().to_str())
                .unwrap_err();
            assert!(
                matches!(err, Error::Validation { .. }),
                "{name:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_empty_marker_set_rejected() {
        let dir = tempdir().unwrap();
        let err = ProjectRootLocator::new(MarkerSet::new([]))
            .find(dir.path().to_str())
            .unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_unsearchable_start_is_permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users bypass directory permissions.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = locator(Marker::any(UNLIKELY)).find(locked.to_str());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(result.unwrap_err().is_permission_denied());
    }

    #[test]
    fn test_missing_start_walks_lexically() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(UNLIKELY)).unwrap();
        let missing = dir.path().join("not").join("created").join("yet");

        let root = locator(Marker::directory(UNLIKELY))
            .find(missing.to_str())
            .unwrap();
        assert_eq!(
            fs::canonicalize(&root).unwrap(),
            fs::canonicalize(dir.path()).unwrap()
        );
    }

    #[test]
    fn test_relative_start_uses_resolver_base() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a").join(UNLIKELY)).unwrap();
        fs::create_dir_all(dir.path().join("a").join("b")).unwrap();

        let resolver = PathResolver::new().with_base(dir.path().to_str().unwrap());
        let root = locator(Marker::directory(UNLIKELY))
            .with_resolver(resolver)
            .find(Some("a/b"))
            .unwrap();
        assert_eq!(root, format!("{}/a", canonical(&dir)));
    }
}
