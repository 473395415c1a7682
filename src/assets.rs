//! Copy page-local `js`/`css` files from the content tree into the output tree.
//!
//! ```text
//! content/js/app.js          ──►  output/js/app.js
//! content/js/vendor/x.js     ──►  output/js/vendor/x.js
//! content/css/theme.css      ──►  output/css/theme.css
//! content/css/notes.txt          (skipped: wrong extension)
//! ```

use crate::{log, resolve::AssetDirs};
use std::{
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};
use thiserror::Error;
use walkdir::WalkDir;

/// Files to ignore during directory traversal
pub const IGNORED_FILES: &[&str] = &[".DS_Store"];

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to copy `{}` to `{}`", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory `{}`", .0.display())]
    CreateDir(PathBuf, #[source] std::io::Error),

    #[error("failed to walk asset directory")]
    Walk(#[from] walkdir::Error),
}

/// Outcome of one [`copy_assets`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub copied: usize,
    pub skipped: usize,
}

impl CopyReport {
    fn merge(&mut self, other: Self) {
        self.copied += other.copied;
        self.skipped += other.skipped;
    }
}

/// Copy `<content>/<js dir>/**/*.js` and `<content>/<css dir>/**/*.css` into
/// the same subdirectories of `output`.
///
/// Destination subdirectories are created even when there is nothing to copy.
/// A missing source directory is not an error. Unless `clean` is set, files
/// whose destination is at least as new as the source are skipped.
pub fn copy_assets(
    content: &Path,
    output: &Path,
    dirs: &AssetDirs,
    clean: bool,
) -> Result<CopyReport, AssetError> {
    let mut report = CopyReport::default();
    for (dir, ext) in [(dirs.js.as_str(), "js"), (dirs.css.as_str(), "css")] {
        let source = content.join(dir);
        let dest = output.join(dir);
        report.merge(copy_dir(&source, &dest, ext, clean)?);
    }
    Ok(report)
}

fn copy_dir(source: &Path, dest: &Path, ext: &str, clean: bool) -> Result<CopyReport, AssetError> {
    fs::create_dir_all(dest).map_err(|err| AssetError::CreateDir(dest.to_path_buf(), err))?;

    let mut report = CopyReport::default();
    if !source.is_dir() {
        return Ok(report);
    }

    for file in collect_files(source, ext)? {
        let Ok(relative) = file.strip_prefix(source) else {
            continue;
        };
        let target = dest.join(relative);

        if !clean && is_up_to_date(&file, &target) {
            report.skipped += 1;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| AssetError::CreateDir(parent.to_path_buf(), err))?;
        }
        fs::copy(&file, &target).map_err(|err| AssetError::Copy {
            from: file.clone(),
            to: target.clone(),
            source: err,
        })?;

        log!("assets"; "{}", relative.display());
        report.copied += 1;
    }

    Ok(report)
}

/// Collect files under `dir` with extension `ext`, sorted by path.
pub fn collect_files(dir: &Path, ext: &str) -> Result<Vec<PathBuf>, AssetError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_str().unwrap_or_default();
        if IGNORED_FILES.contains(&name) {
            continue;
        }
        if entry.path().extension().is_some_and(|e| e == ext) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Check if destination exists and is not older than the source
pub fn is_up_to_date(src: &Path, dst: &Path) -> bool {
    let modified = |path: &Path| -> Option<SystemTime> { path.metadata().ok()?.modified().ok() };

    match (modified(src), modified(dst)) {
        (Some(src_time), Some(dst_time)) => src_time <= dst_time,
        _ => false,
    }
}
