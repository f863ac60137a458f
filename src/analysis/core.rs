use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{error, trace, warn};

use super::overlay::DebugOverlay;
use super::roi::correct_rect;
use super::save::{ensure_dir, timestamp_stem, write_png, SaveCounter, SavePaths};
use crate::common::{Frame, Rect};
use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;

/// Startup-resolved settings every analyzer is built from.
#[derive(Debug, Clone)]
pub struct AnalyzerOptions {
    pub debug_overlay: bool,
    pub debug_dir: PathBuf,
    pub save_counter: SaveCounter,
}

impl AnalyzerOptions {
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self {
            debug_overlay: config.debug_overlay,
            debug_dir: config.debug_dir.clone(),
            save_counter: SaveCounter::new(),
        }
    }

    pub fn with_debug_overlay(mut self, enabled: bool) -> Self {
        self.debug_overlay = enabled;
        self
    }

    pub fn with_debug_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.debug_dir = dir.into();
        self
    }

    pub fn with_save_counter(mut self, counter: SaveCounter) -> Self {
        self.save_counter = counter;
        self
    }
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self::from_config(&AnalyzerConfig::default())
    }
}

/// The frame and region one analyzer reads from.
///
/// Each analyzer owns exactly one core, and the core is neither `Clone` nor
/// `Copy`. Only the pixel data inside [`Frame`] is shared.
pub struct AnalyzerCore {
    frame: Frame,
    roi: Rect,
    overlay: Option<DebugOverlay>,
    options: AnalyzerOptions,
}

impl AnalyzerCore {
    pub fn new(frame: Frame, options: &AnalyzerOptions) -> Self {
        Self::with_roi(frame, Rect::default(), options)
    }

    pub fn with_roi(frame: Frame, roi: Rect, options: &AnalyzerOptions) -> Self {
        let roi = correct_rect(roi, &frame);
        let overlay = options
            .debug_overlay
            .then(|| DebugOverlay::from_frame(&frame));
        Self {
            frame,
            roi,
            overlay,
            options: options.clone(),
        }
    }

    /// Swaps in a new frame. The current region is kept as is; call
    /// [`AnalyzerCore::set_roi`] to fit it to the new frame.
    pub fn set_frame(&mut self, frame: Frame) {
        if let Some(overlay) = self.overlay.as_mut() {
            *overlay = DebugOverlay::from_frame(&frame);
        }
        self.frame = frame;
    }

    pub fn set_roi(&mut self, roi: Rect) {
        self.roi = correct_rect(roi, &self.frame);
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn roi(&self) -> Rect {
        self.roi
    }

    pub fn overlay(&self) -> Option<&DebugOverlay> {
        self.overlay.as_ref()
    }

    pub fn overlay_mut(&mut self) -> Option<&mut DebugOverlay> {
        self.overlay.as_mut()
    }

    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    /// Writes the frame (or the region when `full_frame` is false) to
    /// `<dir>/<timestamp>[_<index>]_raw.png`, plus `<timestamp>_draw.png` from
    /// the overlay when one exists. Returns whether the raw image was written.
    pub fn save_image(&self, dir: impl AsRef<Path>, full_frame: bool) -> bool {
        let stem = timestamp_stem(&Local::now());
        self.save_image_with_stem(dir.as_ref(), &stem, full_frame)
    }

    /// [`AnalyzerCore::save_image`] into the configured debug directory.
    pub fn save_debug_image(&self, full_frame: bool) -> bool {
        self.save_image(&self.options().debug_dir, full_frame)
    }

    pub(crate) fn save_image_with_stem(&self, dir: &Path, stem: &str, full_frame: bool) -> bool {
        if let Err(e) = ensure_dir(dir) {
            warn!("{}", e);
        }
        let index = (!full_frame).then(|| self.options.save_counter.next());
        let paths = SavePaths::new(dir, stem, index);

        trace!(path = %paths.raw.display(), "Save image");
        let saved = match self.write_raw(&paths.raw, full_frame) {
            Ok(()) => true,
            Err(e) => {
                error!(path = %paths.raw.display(), "Failed to save image: {}", e);
                false
            }
        };

        if let Some(overlay) = &self.overlay {
            if let Err(e) = self.write_overlay(overlay, &paths.draw, full_frame) {
                warn!(path = %paths.draw.display(), "Failed to save overlay: {}", e);
            }
        }

        saved
    }

    fn write_raw(&self, path: &Path, full_frame: bool) -> Result<(), AnalyzerError> {
        if full_frame {
            write_png(self.frame.image(), path)
        } else {
            write_png(&self.frame.crop(&self.roi)?, path)
        }
    }

    fn write_overlay(
        &self,
        overlay: &DebugOverlay,
        path: &Path,
        full_frame: bool,
    ) -> Result<(), AnalyzerError> {
        if full_frame {
            write_png(&overlay.to_image(), path)
        } else {
            write_png(&overlay.crop(&self.roi)?, path)
        }
    }
}

impl std::fmt::Debug for AnalyzerCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzerCore")
            .field("frame", &self.frame)
            .field("roi", &self.roi)
            .field("overlay", &self.overlay.is_some())
            .finish()
    }
}
