use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

/// Immutable snapshot of the process environment.
///
/// Resolution never consults [`std::env`] directly, it reads from an [`Env`] instead. This
/// lets callers inject their own overrides without touching process-global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Env {
    keys: HashMap<OsString, OsString>,
}

impl Env {
    /// Create new [`Env`] from [`std::env::vars_os`].
    pub fn new() -> Self {
        Self::new_from(std::env::vars_os().collect())
    }

    /// Create new [`Env`] using `env` as existing environmental variables.
    pub fn new_from(env: HashMap<OsString, OsString>) -> Self {
        Self { keys: env }
    }

    /// Reload environmental variables from `env`.
    pub fn reload_from(&mut self, env: HashMap<OsString, OsString>) {
        self.keys = env;
    }

    /// Reload environmental variables from [`std::env::vars_os`].
    pub fn reload(&mut self) {
        self.reload_from(std::env::vars_os().collect())
    }

    /// Get environmental variable pointed by `key`.
    ///
    /// # Returns
    /// `Option<&OsStr>`. `None` variant indicates missing key, `Some`: existing key.
    ///
    /// # Examples
    /// ```rust
    /// use basedirs::os::env::Env;
    ///
    /// let env = Env::from_iter([("FOO", "bar")]);
    /// assert_eq!(env.get_os("FOO"), Some("bar".as_ref()));
    /// assert_eq!(env.get_os("BAR"), None);
    /// ```
    pub fn get_os(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.keys.get(key.as_ref()).map(OsString::as_os_str)
    }

    /// Like [`Env::get_os`], but a variable set to an empty string counts as unset.
    ///
    /// # Examples
    /// ```rust
    /// use basedirs::os::env::Env;
    ///
    /// let env = Env::from_iter([("EMPTY", ""), ("FULL", "x")]);
    /// assert_eq!(env.get_non_empty_os("EMPTY"), None);
    /// assert_eq!(env.get_non_empty_os("FULL"), Some("x".as_ref()));
    /// ```
    pub fn get_non_empty_os(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.get_os(key).filter(|value| !value.is_empty())
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for Env
where
    K: Into<OsString>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new_from(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
