//! Lookups in the platform user database.

use std::{
    ffi::{CStr, OsStr},
    mem::MaybeUninit,
    os::unix::ffi::OsStrExt,
    path::PathBuf,
    ptr,
};

// Used when `sysconf` gives no hint.
const INITIAL_BUFFER: usize = 1024;
const MAX_BUFFER: usize = 1 << 20;

/// Home directory of the current user, as recorded in the user database.
///
/// Unlike [`std::env::home_dir`] this never looks at `$HOME`.
///
/// # Returns
/// [`None`] if the database has no entry for the current uid, the lookup fails, or the
/// recorded home directory is empty.
pub fn home_dir() -> Option<PathBuf> {
    // SAFETY: `getuid` is always successful.
    let uid = unsafe { libc::getuid() };
    // SAFETY: `sysconf` has no preconditions.
    let hint = unsafe { libc::sysconf(libc::_SC_GETPW_R_SIZE_MAX) };
    let mut len = usize::try_from(hint)
        .ok()
        .filter(|&len| len > 0)
        .unwrap_or(INITIAL_BUFFER);

    loop {
        let mut buf: Vec<libc::c_char> = vec![0; len];
        let mut passwd = MaybeUninit::<libc::passwd>::uninit();
        let mut result: *mut libc::passwd = ptr::null_mut();
        // SAFETY: `passwd` points to writable storage for one `passwd`, `buf` is valid for `len`
        // bytes and outlives every pointer stored into `passwd`.
        let rc = unsafe {
            libc::getpwuid_r(uid, passwd.as_mut_ptr(), buf.as_mut_ptr(), len, &mut result)
        };
        if rc == libc::ERANGE && len < MAX_BUFFER {
            len *= 2;
            continue;
        }
        if rc != 0 || result.is_null() {
            tracing::debug!(uid, rc, "no user database entry");
            return None;
        }
        // SAFETY: a non-null `result` means `getpwuid_r` initialised `passwd`.
        let passwd = unsafe { passwd.assume_init() };
        if passwd.pw_dir.is_null() {
            return None;
        }
        // SAFETY: `pw_dir` is a NUL-terminated string inside `buf`, which is still alive.
        let dir = unsafe { CStr::from_ptr(passwd.pw_dir) }.to_bytes();
        if dir.is_empty() {
            return None;
        }
        return Some(PathBuf::from(OsStr::from_bytes(dir)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_dir_is_absolute_when_known() {
        if let Some(home) = home_dir() {
            assert!(home.is_absolute(), "{home:?}");
        }
    }

    #[test]
    fn home_dir_is_stable() {
        assert_eq!(home_dir(), home_dir());
    }
}
