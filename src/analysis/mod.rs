pub mod analyzer;
pub mod color;
pub mod core;
pub mod overlay;
pub mod roi;
pub mod save;

pub use analyzer::ImageAnalyzer;
pub use color::{DominantColor, DominantColorAnalyzer};
pub use self::core::{AnalyzerCore, AnalyzerOptions};
pub use overlay::DebugOverlay;
pub use roi::correct_rect;
pub use save::{timestamp_stem, SaveCounter, SavePaths};
