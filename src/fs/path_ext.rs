use std::{
    fs::{DirBuilder, File, OpenOptions},
    io,
    os::unix::fs::{DirBuilderExt, OpenOptionsExt},
    path::Path,
};

/// Mode for directories created by [`PathExt::mkdir`]: owner-only `rwx`.
pub const DIR_MODE: u32 = 0o700;

/// Mode for files created by [`PathExt::touch`]: owner-only `rw`.
pub const FILE_MODE: u32 = 0o600;

/// Options for controlling [`PathExt::mkdir`]
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum MkdirOptions {
    /// Equivalent of `mkdir -m 700 $path`.
    WithoutParents,
    /// Equivalent of `mkdir -p -m 700 $path`.
    WithParents,
}

mod sealed {
    use std::path::Path;

    pub trait Sealed {}
    impl Sealed for Path {}
}

/// Extension trait for [`Path`] with the private-by-default creation primitives used by
/// [`BaseDirectory::ensure_first`](crate::config_files::xdg::BaseDirectory::ensure_first).
///
/// ```rust,no_run
/// # use basedirs::fs::*;
/// # use std::path::Path;
/// # fn main() -> std::io::Result<()> {
/// let dir = Path::new("/tmp/app/state");
/// dir.mkdir(MkdirOptions::WithParents)?;
/// let _file = dir.join("db").touch()?;
/// # Ok(())
/// # }
/// ```
pub trait PathExt: sealed::Sealed {
    /// Open the file at `self` read-only, creating it with [`FILE_MODE`] if absent.
    ///
    /// Existing files are never truncated, and no write permission on them is required.
    /// Parent directories are __not__ created.
    ///
    /// # Returns
    /// [`Ok(File)`](std::fs::File) on success, otherwise error as reported by
    /// [`OpenOptions::open`].
    fn touch(&self) -> io::Result<File>;

    /// Create directories at given [`Path`] with [`DIR_MODE`].
    ///
    /// # Returns
    /// [`Ok(())`](Ok) if created successfully, otherwise error as reported by [`DirBuilder`].
    ///
    /// Note that this function will return `Ok(())` if `self` already is a directory, even when
    /// another thread or process created it concurrently. A non-directory at `self` is an error.
    fn mkdir(&self, opts: MkdirOptions) -> io::Result<()>;
}

impl PathExt for Path {
    fn touch(&self) -> io::Result<File> {
        // `OpenOptions::create` insists on write access, so ask for `O_CREAT` directly.
        OpenOptions::new()
            .read(true)
            .custom_flags(libc::O_CREAT)
            .mode(FILE_MODE)
            .open(self)
    }

    fn mkdir(&self, opts: MkdirOptions) -> io::Result<()> {
        let result = DirBuilder::new()
            .recursive(matches!(opts, MkdirOptions::WithParents))
            .mode(DIR_MODE)
            .create(self);
        match result {
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && self.is_dir() => Ok(()),
            _ => result,
        }
    }
}
