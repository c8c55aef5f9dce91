//! Configuration, data and cache file locations.
//!
//! Provides helpers for locating files following the XDG Base Directory layout.
//!
//! ```rust,no_run
//! # use basedirs::config_files::{resource::Resource, xdg};
//! # use basedirs::os::env::Env;
//! # fn foo() -> Result<(), xdg::XdgError> {
//! let env = Env::new();
//!
//! let _config_dirs = xdg::CONFIG.dirs(&env)?;
//! let _cache = xdg::CACHE.ensure_first(&env, &Resource::dir(["app"]))?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::os::{env::Env, user};

pub mod resource;
pub mod xdg;

/// Home directory of the current user: a non-empty `$HOME` from `env`, otherwise the entry in
/// the user database.
///
/// # Errors
/// [`XdgError::HomeUnresolvable`](xdg::XdgError::HomeUnresolvable) if neither is available.
pub fn user_home(env: &Env) -> Result<PathBuf, xdg::XdgError> {
    if let Some(home) = env.get_non_empty_os("HOME") {
        return Ok(PathBuf::from(home));
    }
    tracing::debug!("`$HOME` is unset, asking the user database");
    user::home_dir().ok_or(xdg::XdgError::HomeUnresolvable)
}
