//! Relative resource paths below a base directory.

use std::{
    ffi::{OsStr, OsString},
    path::{Component, Path, PathBuf},
};

/// Relative path of a resource: a list of directory components plus an optional file name.
///
/// Components are normalised lexically when the [`Resource`] is built: empty segments, `.` and
/// root components are dropped, so a resource always stays relative and `"."` means "directly
/// inside the base directory". `..` is kept as is.
///
/// ```rust
/// # use basedirs::config_files::resource::Resource;
/// # use std::path::Path;
/// let settings = Resource::file(["app"], "settings.toml");
/// assert_eq!(settings.relative_path(), Path::new("app/settings.toml"));
///
/// let top_level = Resource::file(["."], "app.toml");
/// assert_eq!(top_level.relative_path(), Path::new("app.toml"));
///
/// // An empty file name only ensures the directory.
/// assert_eq!(Resource::file(["app"], ""), Resource::dir(["app"]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Resource {
    dirs: Vec<OsString>,
    file: Option<OsString>,
}

fn normal_components(segment: &Path) -> impl Iterator<Item = OsString> + '_ {
    segment.components().filter_map(|component| match component {
        Component::Normal(name) => Some(name.to_os_string()),
        Component::ParentDir => Some(OsString::from("..")),
        Component::Prefix(_) | Component::RootDir | Component::CurDir => None,
    })
}

impl Resource {
    /// Directory-only resource. Each segment may itself contain separators.
    pub fn dir<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let dirs = segments
            .into_iter()
            .flat_map(|segment| normal_components(segment.as_ref()).collect::<Vec<_>>())
            .collect();
        Self { dirs, file: None }
    }

    /// File `name` inside the directory built from `segments`.
    ///
    /// An empty `name` yields the same resource as [`Resource::dir`].
    pub fn file<I, S>(segments: I, name: impl AsRef<OsStr>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let mut resource = Self::dir(segments);
        let name = name.as_ref();
        if !name.is_empty() {
            // A name with separators contributes its leading parts as directories.
            let mut parts: Vec<_> = normal_components(Path::new(name)).collect();
            resource.file = parts.pop();
            resource.dirs.append(&mut parts);
        }
        resource
    }

    /// Split `path` into its parent components and a trailing file name.
    ///
    /// ```rust
    /// # use basedirs::config_files::resource::Resource;
    /// assert_eq!(
    ///     Resource::from_relative_path("app/cache/index"),
    ///     Resource::file(["app", "cache"], "index"),
    /// );
    /// ```
    pub fn from_relative_path(path: impl AsRef<Path>) -> Self {
        let mut dirs: Vec<_> = normal_components(path.as_ref()).collect();
        let file = dirs.pop();
        Self { dirs, file }
    }

    /// `true` if the resource has neither directory components nor a file name.
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.file.is_none()
    }

    pub fn file_name(&self) -> Option<&OsStr> {
        self.file.as_deref()
    }

    /// Directory part, relative.
    pub fn dir_path(&self) -> PathBuf {
        self.dirs.iter().collect()
    }

    /// Full relative path, file name included.
    pub fn relative_path(&self) -> PathBuf {
        self.dirs.iter().chain(&self.file).collect()
    }

    /// `base` joined with the directory part. Returns `base` unchanged for an empty resource.
    pub(crate) fn dir_under(&self, base: &Path) -> PathBuf {
        let mut path = base.to_path_buf();
        path.extend(&self.dirs);
        path
    }

    /// `base` joined with the full relative path.
    pub(crate) fn under(&self, base: &Path) -> PathBuf {
        let mut path = self.dir_under(base);
        path.extend(&self.file);
        path
    }
}
