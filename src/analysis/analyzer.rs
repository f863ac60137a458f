use std::path::Path;

use super::core::AnalyzerCore;
use crate::common::{Frame, Rect};

/// Region-bounded analysis over one frame.
///
/// Implementors own an [`AnalyzerCore`] and supply [`ImageAnalyzer::analyze`];
/// the provided methods route frame/region updates and debug saves through
/// the core so every analyzer gets the same region clamping.
pub trait ImageAnalyzer {
    fn core(&self) -> &AnalyzerCore;
    fn core_mut(&mut self) -> &mut AnalyzerCore;

    /// Runs the analysis over the current frame and region. `false` means
    /// nothing was found or the analysis could not run; it must not panic.
    fn analyze(&mut self) -> bool;

    fn name(&self) -> &'static str;

    fn frame(&self) -> &Frame {
        self.core().frame()
    }

    fn roi(&self) -> Rect {
        self.core().roi()
    }

    fn set_frame(&mut self, frame: Frame) {
        self.core_mut().set_frame(frame);
    }

    fn set_roi(&mut self, roi: Rect) {
        self.core_mut().set_roi(roi);
    }

    fn save_image(&self, dir: &Path, full_frame: bool) -> bool {
        self.core().save_image(dir, full_frame)
    }

    fn save_debug_image(&self, full_frame: bool) -> bool {
        self.core().save_debug_image(full_frame)
    }
}
