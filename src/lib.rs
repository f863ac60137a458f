pub mod analysis;
pub mod common;
pub mod config;
pub mod error;

pub use analysis::{
    correct_rect, AnalyzerCore, AnalyzerOptions, DebugOverlay, DominantColorAnalyzer,
    ImageAnalyzer, SaveCounter,
};
pub use common::{Frame, Rect};
pub use config::AnalyzerConfig;
pub use error::AnalyzerError;
