//! Bootstrap of the application home directory.
//!
//! [`ensure_directory`] makes sure a directory exists and that its owner can
//! read, write and enter it. It is safe to call on every start-up: once the
//! directory is in shape, further calls change nothing.

use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use crate::msg_debug;
use std::fs;
use std::io;
use std::path::Path;

/// Owner read, write and execute bits.
#[cfg(unix)]
pub const OWNER_RWX: u32 = 0o700;

/// Ensures a usable directory exists at `path`.
///
/// - Nothing at `path`: the directory (and any missing parents) is created
///   with mode `0o777` minus the umask, then owner bits are topped up.
/// - A directory: missing owner rwx bits are added; other bits are kept.
/// - Anything else: fails with an I/O error and leaves the entry untouched.
///
/// # Example
///
/// ```rust,no_run
/// use orgnice::libs::directory::ensure_directory;
///
/// ensure_directory(std::path::Path::new("/home/me/.orgnice"))?;
/// # Ok::<(), orgnice::libs::error::Error>(())
/// ```
pub fn ensure_directory(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => repair_permissions(path, meta.permissions()),
        Ok(_) => Err(Error::io(
            path,
            io::Error::new(io::ErrorKind::AlreadyExists, "path exists and is not a directory"),
        )),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            create(path)?;
            msg_debug!(Message::DirectoryCreated(path.to_path_buf()));
            let meta = fs::metadata(path).map_err(|e| Error::io(path, e))?;
            repair_permissions(path, meta.permissions())
        }
        Err(err) => Err(Error::io(path, err)),
    }
}

#[cfg(unix)]
fn create(path: &Path) -> Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new()
        .recursive(true)
        .mode(0o777)
        .create(path)
        .map_err(|e| Error::io(path, e))
}

#[cfg(not(unix))]
fn create(path: &Path) -> Result<()> {
    fs::DirBuilder::new().recursive(true).create(path).map_err(|e| Error::io(path, e))
}

#[cfg(unix)]
fn repair_permissions(path: &Path, mut permissions: fs::Permissions) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = permissions.mode();
    if mode & OWNER_RWX == OWNER_RWX {
        return Ok(());
    }

    // Keep file-type and group/other bits, only add what the owner lacks.
    let repaired = (mode | OWNER_RWX) & 0o7777;
    permissions.set_mode(repaired);
    fs::set_permissions(path, permissions).map_err(|e| Error::io(path, e))?;
    msg_debug!(Message::DirectoryPermissionsRepaired(path.to_path_buf(), repaired));
    Ok(())
}

#[cfg(not(unix))]
fn repair_permissions(path: &Path, mut permissions: fs::Permissions) -> Result<()> {
    if !permissions.readonly() {
        return Ok(());
    }

    #[allow(clippy::permissions_set_readonly_false)]
    permissions.set_readonly(false);
    fs::set_permissions(path, permissions).map_err(|e| Error::io(path, e))?;
    msg_debug!(Message::DirectoryPermissionsRepaired(path.to_path_buf(), 0));
    Ok(())
}
