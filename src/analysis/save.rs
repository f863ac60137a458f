use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use chrono::{DateTime, Local};
use image::{DynamicImage, ImageFormat};

use crate::error::AnalyzerError;

/// Monotonic index used to tell apart successive partial crops saved within
/// the same timestamp. Clones share the same underlying count.
#[derive(Debug, Clone, Default)]
pub struct SaveCounter {
    next: Arc<AtomicUsize>,
}

impl SaveCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide counter for callers that want one sequence across all
    /// analyzers.
    pub fn global() -> Self {
        static GLOBAL: OnceLock<SaveCounter> = OnceLock::new();
        GLOBAL.get_or_init(SaveCounter::new).clone()
    }

    pub fn next(&self) -> usize {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    pub fn peek(&self) -> usize {
        self.next.load(Ordering::Relaxed)
    }
}

/// Filesystem-safe stem for `time`, e.g. `2026-10-19_14-03-22.517`.
pub fn timestamp_stem(time: &DateTime<Local>) -> String {
    sanitize_stem(&time.format("%Y-%m-%d %H:%M:%S%.3f").to_string())
}

pub fn sanitize_stem(formatted: &str) -> String {
    formatted.replace(':', "-").replace(' ', "_")
}

/// File names for one save call, relative to the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePaths {
    pub raw: PathBuf,
    pub draw: PathBuf,
}

impl SavePaths {
    pub fn new(dir: &Path, stem: &str, index: Option<usize>) -> Self {
        let index = index.map(|i| format!("_{i}")).unwrap_or_default();
        Self {
            raw: dir.join(format!("{stem}{index}_raw.png")),
            draw: dir.join(format!("{stem}_draw.png")),
        }
    }
}

pub(crate) fn ensure_dir(dir: &Path) -> Result<(), AnalyzerError> {
    std::fs::create_dir_all(dir).map_err(|e| AnalyzerError::CreateDir(e, dir.to_path_buf()))
}

pub(crate) fn write_png(image: &DynamicImage, path: &Path) -> Result<(), AnalyzerError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(AnalyzerError::EmptyFrame);
    }
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
