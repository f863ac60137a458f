use std::collections::HashMap;

use image::{Rgb, Rgba};
use tracing::debug;

use super::analyzer::ImageAnalyzer;
use super::core::{AnalyzerCore, AnalyzerOptions};
use crate::common::{Frame, Rect};

const ROI_OUTLINE: Rgba<u8> = Rgba([255, 0, 255, 255]);

/// Result of a successful [`DominantColorAnalyzer`] run.
#[derive(Debug, Clone, PartialEq)]
pub struct DominantColor {
    pub color: Rgb<u8>,
    pub share: f32,
}

/// Finds the most common quantized colour inside the region.
pub struct DominantColorAnalyzer {
    core: AnalyzerCore,
    levels: u8,
    min_share: f32,
    result: Option<DominantColor>,
}

impl DominantColorAnalyzer {
    pub fn new(frame: Frame, options: &AnalyzerOptions) -> Self {
        Self::from_core(AnalyzerCore::new(frame, options))
    }

    pub fn with_roi(frame: Frame, roi: Rect, options: &AnalyzerOptions) -> Self {
        Self::from_core(AnalyzerCore::with_roi(frame, roi, options))
    }

    fn from_core(core: AnalyzerCore) -> Self {
        Self {
            core,
            levels: 16,
            min_share: 0.5,
            result: None,
        }
    }

    pub fn with_min_share(mut self, min_share: f32) -> Self {
        self.min_share = min_share;
        self
    }

    /// `levels` per channel; must divide 256 evenly (e.g. 8, 16, 32).
    pub fn with_levels(mut self, levels: u8) -> Self {
        self.levels = levels;
        self
    }

    pub fn result(&self) -> Option<&DominantColor> {
        self.result.as_ref()
    }

    fn quantize(&self, px: &Rgb<u8>) -> (u8, u8, u8) {
        let step = 256 / self.levels.max(1) as usize;
        let q = |c: u8| ((c as usize / step) * step).min(255) as u8;
        (q(px[0]), q(px[1]), q(px[2]))
    }

    fn dominant_in_region(&self) -> Option<DominantColor> {
        let (x, y, width, height) = self
            .core
            .roi()
            .to_crop_bounds(self.core.frame().width(), self.core.frame().height())?;
        let rgb = self.core.frame().image().crop_imm(x, y, width, height).to_rgb8();

        let mut counts: HashMap<(u8, u8, u8), u32> = HashMap::new();
        for px in rgb.pixels() {
            *counts.entry(self.quantize(px)).or_insert(0) += 1;
        }
        let total: u32 = counts.values().sum();
        let ((r, g, b), count) = counts.into_iter().max_by_key(|&(_, c)| c)?;

        Some(DominantColor {
            color: Rgb([r, g, b]),
            share: count as f32 / total as f32,
        })
    }
}

impl ImageAnalyzer for DominantColorAnalyzer {
    fn core(&self) -> &AnalyzerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AnalyzerCore {
        &mut self.core
    }

    fn analyze(&mut self) -> bool {
        self.result = None;
        let roi = self.core.roi();
        if let Some(overlay) = self.core.overlay_mut() {
            overlay.draw_rect(&roi, ROI_OUTLINE);
        }

        let Some(found) = self.dominant_in_region() else {
            debug!(roi = %roi, "No pixels to analyze");
            return false;
        };
        debug!(
            roi = %roi,
            color = ?found.color.0,
            share = found.share,
            "Dominant color"
        );
        if found.share < self.min_share {
            return false;
        }
        self.result = Some(found);
        true
    }

    fn name(&self) -> &'static str {
        "DominantColorAnalyzer"
    }
}
