//! XDG Base Directory Specification support.
//!
//! Implements path resolution for the data, config and cache base directories: an environment
//! override, a default below the user's home, and (for data and config) an ordered list of
//! system-wide search directories.

use std::{
    ffi::OsStr,
    io,
    os::unix::ffi::OsStrExt,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, trace};

use crate::config_files::{resource::Resource, user_home};
use crate::fs::{MkdirOptions, PathExt};
use crate::os::env::Env;

/// Errors encountered while resolving or materialising XDG paths.
#[derive(Debug, Error)]
pub enum XdgError {
    /// Neither `$HOME` nor the user database yield a home directory. Nothing else can be
    /// resolved without one.
    #[error("unable to determine the home directory: `$HOME` is unset and the user database has no entry")]
    HomeUnresolvable,

    /// A lookup was asked for a resource with no path components.
    #[error("resource path is empty")]
    EmptyResource,

    /// The resource exists in none of the searched directories.
    #[error("`{}` not found in any of {} search directories", resource.display(), searched.len())]
    NotFound {
        resource: PathBuf,
        searched: Vec<PathBuf>,
    },

    /// Creating a directory or file failed. Anything created before the failure is left in
    /// place.
    #[error("failed to create `{}`", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl XdgError {
    /// `true` for errors no caller can work around, i.e. [`XdgError::HomeUnresolvable`].
    pub fn is_fatal(&self) -> bool {
        matches!(self, XdgError::HomeUnresolvable)
    }
}

impl From<XdgError> for io::Error {
    fn from(err: XdgError) -> Self {
        let kind = match &err {
            XdgError::NotFound { .. } => io::ErrorKind::NotFound,
            XdgError::Create { source, .. } => source.kind(),
            XdgError::EmptyResource => io::ErrorKind::InvalidInput,
            XdgError::HomeUnresolvable => io::ErrorKind::Other,
        };
        io::Error::new(kind, err)
    }
}

/// One category of XDG base directories.
///
/// The category is described by the environment variables that override it and the defaults
/// used when they are unset or empty. [`DATA`], [`CONFIG`] and [`CACHE`] are the standard
/// categories; other ones can be built with [`BaseDirectory::new`] and
/// [`BaseDirectory::with_dirs`].
///
/// ```rust,no_run
/// # use basedirs::config_files::{resource::Resource, xdg};
/// # use basedirs::os::env::Env;
/// # fn main() -> Result<(), xdg::XdgError> {
/// let env = Env::new();
///
/// let _settings = xdg::CONFIG.first_existing(&env, &Resource::file(["app"], "settings.toml"))?;
/// let _history = xdg::DATA.ensure_first(&env, &Resource::file(["app"], "history"))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct BaseDirectory {
    home_var: &'static str,
    home_default: &'static str,
    dirs_var: Option<&'static str>,
    dirs_default: &'static str,
}

/// `$XDG_DATA_HOME`, searched together with `$XDG_DATA_DIRS`.
pub const DATA: BaseDirectory = BaseDirectory::with_dirs(
    "XDG_DATA_HOME",
    ".local/share",
    "XDG_DATA_DIRS",
    "/usr/local/share:/usr/share",
);

/// `$XDG_CONFIG_HOME`, searched together with `$XDG_CONFIG_DIRS`.
pub const CONFIG: BaseDirectory =
    BaseDirectory::with_dirs("XDG_CONFIG_HOME", ".config", "XDG_CONFIG_DIRS", "/etc/xdg");

/// `$XDG_CACHE_HOME`. Has no system-wide search directories.
pub const CACHE: BaseDirectory = BaseDirectory::new("XDG_CACHE_HOME", ".cache");

fn split_path_list(list: &OsStr) -> impl Iterator<Item = PathBuf> + '_ {
    list.as_bytes()
        .split(|&byte| byte == b':')
        .filter(|dir| !dir.is_empty())
        .map(|dir| PathBuf::from(OsStr::from_bytes(dir)))
}

impl BaseDirectory {
    /// Category without search directories: [`BaseDirectory::dirs`] is always just
    /// [`BaseDirectory::home`].
    pub const fn new(home_var: &'static str, home_default: &'static str) -> Self {
        Self {
            home_var,
            home_default,
            dirs_var: None,
            dirs_default: "",
        }
    }

    /// Category with search directories read from `dirs_var`, a colon-separated list, falling
    /// back to `dirs_default`.
    pub const fn with_dirs(
        home_var: &'static str,
        home_default: &'static str,
        dirs_var: &'static str,
        dirs_default: &'static str,
    ) -> Self {
        Self {
            home_var,
            home_default,
            dirs_var: Some(dirs_var),
            dirs_default,
        }
    }

    pub const fn home_var(&self) -> &'static str {
        self.home_var
    }

    pub const fn home_default(&self) -> &'static str {
        self.home_default
    }

    pub const fn dirs_var(&self) -> Option<&'static str> {
        self.dirs_var
    }

    pub const fn dirs_default(&self) -> &'static str {
        self.dirs_default
    }

    /// Get the user-specific directory of this category.
    ///
    /// A non-empty override variable is returned verbatim, otherwise the default is joined onto
    /// [`user_home`]. The directory is not required to exist.
    ///
    /// # Errors
    /// [`XdgError::HomeUnresolvable`] if the override is unset and no home directory is known.
    pub fn home(&self, env: &Env) -> Result<PathBuf, XdgError> {
        if let Some(dir) = env.get_non_empty_os(self.home_var) {
            debug!(var = self.home_var, "home directory overridden by environment");
            return Ok(PathBuf::from(dir));
        }
        let home = user_home(env)?;
        debug!(default = self.home_default, "using default below home");
        Ok(home.join(self.home_default))
    }

    /// Get the preference-ordered search path of this category, starting with
    /// [`BaseDirectory::home`].
    ///
    /// Empty entries of the colon-separated list are skipped; duplicates are kept.
    pub fn dirs(&self, env: &Env) -> Result<Vec<PathBuf>, XdgError> {
        let mut dirs = vec![self.home(env)?];
        if let Some(var) = self.dirs_var {
            let list = env
                .get_non_empty_os(var)
                .unwrap_or_else(|| OsStr::new(self.dirs_default));
            dirs.extend(split_path_list(list));
        }
        Ok(dirs)
    }

    /// Find `resource` in the first directory of [`BaseDirectory::dirs`] that contains it.
    ///
    /// # Errors
    /// [`XdgError::EmptyResource`] for an empty `resource`, [`XdgError::NotFound`] when no
    /// directory contains it.
    pub fn first_existing(&self, env: &Env, resource: &Resource) -> Result<PathBuf, XdgError> {
        if resource.is_empty() {
            return Err(XdgError::EmptyResource);
        }
        let searched = self.dirs(env)?;
        for dir in &searched {
            let candidate = resource.under(dir);
            trace!(candidate = %candidate.display(), "checking candidate");
            if candidate.exists() {
                return Ok(candidate);
            }
        }
        Err(XdgError::NotFound {
            resource: resource.relative_path(),
            searched,
        })
    }

    /// Make sure `resource` exists below [`BaseDirectory::home`], creating it if absent.
    ///
    /// Directories are created with mode `0700`, the file (if `resource` names one) with mode
    /// `0600`. Existing files are left untouched, so calling this repeatedly is harmless.
    ///
    /// # Returns
    /// Path of the file, or of the directory when `resource` has no file name.
    ///
    /// # Errors
    /// [`XdgError::Create`] if any creation fails.
    pub fn ensure_first(&self, env: &Env, resource: &Resource) -> Result<PathBuf, XdgError> {
        let home = self.home(env)?;
        let dir = resource.dir_under(&home);
        dir.mkdir(MkdirOptions::WithParents)
            .map_err(|source| XdgError::Create {
                path: dir.clone(),
                source,
            })?;
        let Some(name) = resource.file_name() else {
            return Ok(dir);
        };
        let file = dir.join(name);
        file.touch().map_err(|source| XdgError::Create {
            path: file.clone(),
            source,
        })?;
        debug!(path = %file.display(), "ensured");
        Ok(file)
    }

    /// [`BaseDirectory::first_existing`] for a relative path whose last component is a file.
    pub fn find(&self, env: &Env, suffix: impl AsRef<Path>) -> Result<PathBuf, XdgError> {
        self.first_existing(env, &Resource::from_relative_path(suffix))
    }

    /// [`BaseDirectory::ensure_first`] for a relative path whose last component is a file.
    pub fn ensure(&self, env: &Env, suffix: impl AsRef<Path>) -> Result<PathBuf, XdgError> {
        self.ensure_first(env, &Resource::from_relative_path(suffix))
    }
}
