use std::path::PathBuf;

use region_analyzer::{
    AnalyzerConfig, AnalyzerError, AnalyzerOptions, DominantColorAnalyzer, Frame, ImageAnalyzer,
    Rect,
};

const USAGE: &str = "region-analyzer <image> [x y width height] [--partial]";

struct Args {
    image: PathBuf,
    roi: Rect,
    full_frame: bool,
}

fn parse_args() -> Result<Args, AnalyzerError> {
    let mut full_frame = true;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--partial" {
            full_frame = false;
        } else {
            positional.push(arg);
        }
    }

    let mut positional = positional.into_iter();
    let image = positional
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| AnalyzerError::Usage(USAGE.to_string()))?;
    let coords = positional
        .map(|v| v.parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| AnalyzerError::Usage(USAGE.to_string()))?;
    let roi = match coords.as_slice() {
        [] => Rect::default(),
        [x, y, width, height] => Rect::new(*x, *y, *width, *height),
        _ => return Err(AnalyzerError::Usage(USAGE.to_string())),
    };

    Ok(Args {
        image,
        roi,
        full_frame,
    })
}

fn init_logging(config: &AnalyzerConfig) {
    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .init();
}

fn main() -> Result<(), AnalyzerError> {
    let config_path = std::env::var_os("REGION_ANALYZER_CONFIG").map(PathBuf::from);
    let configuration = AnalyzerConfig::load(config_path.as_deref())?;
    init_logging(&configuration);

    let args = parse_args()?;
    let options = AnalyzerOptions::from_config(&configuration);
    let frame = Frame::open(&args.image)?;
    tracing::info!(
        frame_id = %frame.frame_id(),
        width = frame.width(),
        height = frame.height(),
        "Loaded {}",
        args.image.display()
    );

    let mut analyzer = DominantColorAnalyzer::with_roi(frame, args.roi, &options);
    if analyzer.analyze() {
        if let Some(found) = analyzer.result() {
            tracing::info!(
                roi = %analyzer.roi(),
                color = ?found.color.0,
                share = found.share,
                "Found dominant color"
            );
        }
    } else {
        tracing::info!(roi = %analyzer.roi(), "No dominant color");
    }

    if !analyzer.save_debug_image(args.full_frame) {
        tracing::error!(
            "Failed to save debug image to {}",
            options.debug_dir.display()
        );
    }
    Ok(())
}
