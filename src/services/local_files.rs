use std::io;
use std::path::Path;

use futures::TryStreamExt;
use tokio::io::AsyncWriteExt;

use crate::{
    domain::errors::{CheckResult, LocalIoError},
    ports::storage::ObjectBody,
};

/// Mode of downloaded files before the umask is applied
#[cfg(unix)]
const DOWNLOAD_MODE: u32 = 0o644;

/// Whether a regular file already exists at `path`.
///
/// A missing path is `false`. Anything else that stops us from answering,
/// including a directory sitting where the file should go, is an error.
pub async fn local_file_exists(path: &Path) -> Result<bool, LocalIoError> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) if metadata.is_file() => Ok(true),
        Ok(_) => Err(LocalIoError::new(
            path,
            "stat",
            io::Error::new(
                io::ErrorKind::Other,
                "destination exists but is not a regular file",
            ),
        )),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(LocalIoError::new(path, "stat", err)),
    }
}

/// Stream `body` into `destination` without ever exposing a partial file.
///
/// Content goes to a hidden temporary file next to the destination, is synced,
/// then renamed into place. On unix the file is created `0644` less the
/// umask, like any plain file create. With `overwrite` off the rename refuses
/// to replace a file that appeared in the meantime. On failure the temporary file is
/// removed and the destination is left untouched. Returns the bytes written.
pub async fn write_atomically(
    mut body: ObjectBody,
    destination: &Path,
    overwrite: bool,
) -> CheckResult<u64> {
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let prefix = destination
        .file_name()
        .map(|name| format!(".{}.", name.to_string_lossy()))
        .unwrap_or_else(|| ".download.".to_string());

    let mut builder = tempfile::Builder::new();
    builder.prefix(&prefix).suffix(".part");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(DOWNLOAD_MODE));
    }
    let temp = builder
        .tempfile_in(dir)
        .map_err(|e| LocalIoError::new(dir, "create temporary file in", e))?;

    let handle = temp
        .as_file()
        .try_clone()
        .map_err(|e| LocalIoError::new(temp.path(), "open", e))?;
    let mut file = tokio::fs::File::from_std(handle);

    let mut written = 0u64;
    while let Some(chunk) = body.try_next().await? {
        file.write_all(&chunk)
            .await
            .map_err(|e| LocalIoError::new(temp.path(), "write", e))?;
        written += chunk.len() as u64;
    }
    file.flush()
        .await
        .map_err(|e| LocalIoError::new(temp.path(), "flush", e))?;
    file.sync_all()
        .await
        .map_err(|e| LocalIoError::new(temp.path(), "sync", e))?;
    drop(file);

    let persisted = if overwrite {
        temp.persist(destination)
    } else {
        temp.persist_noclobber(destination)
    };
    persisted.map_err(|e| LocalIoError::new(destination, "rename", e.error))?;

    Ok(written)
}
