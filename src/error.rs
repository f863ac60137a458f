use std::path::PathBuf;

use thiserror::Error;

use crate::common::rect::Rect;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Failed to create directory {1}: {0}")]
    CreateDir(std::io::Error, PathBuf),
    #[error("Image Error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Region {0} cannot be cropped from a {1}x{2} frame")]
    InvalidCrop(Rect, i32, i32),
    #[error("The frame is empty.")]
    EmptyFrame,
    #[error("Config Error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Usage: {0}")]
    Usage(String),
}
