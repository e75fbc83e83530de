use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::fs_utils::{ensure_parent_dir, ensure_writable};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the backing file to `dest_file`.
    ///
    /// With `compress` the copy is a `.zip` archive next to `dest_file`
    /// (extension replaced) holding the events file under its own name.
    /// Returns the path of the file produced.
    pub fn backup(
        events_file: &Path,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        let dest = Path::new(dest_file);

        if !dest.is_absolute() {
            return Err(io::Error::other(format!(
                "Backup file path must be absolute: {dest_file}"
            ))
            .into());
        }

        // 1. The events file must exist
        if !events_file.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Events file not found: {}", events_file.display()),
            )
            .into());
        }

        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        // 2. Destination folder, overwrite confirmation
        ensure_parent_dir(&target)?;
        ensure_writable(&target, force)?;

        // 3. Copy or compress
        if compress {
            compress_backup(events_file, &target)?;
        } else {
            fs::copy(events_file, &target)?;
        }

        success(format!("Backup created: {}", target.display()));
        Ok(target)
    }
}

/// Write `src` into a new deflated .zip archive at `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "events.csv".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(entry, options).map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    debug!(path = %zip_path.display(), "backup compressed");
    Ok(())
}
