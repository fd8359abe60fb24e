use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

pub mod bars;
pub mod histogram;

pub use bars::save_bar_chart;
pub use histogram::{HistogramData, HistogramSeries, save_histogram};

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("unsupported output format `{0}` (use svg or png)")]
    UnsupportedFormat(String),
    #[error("invalid chart data: {0}")]
    InvalidData(String),
    #[error("failed to set up drawing area: {0}")]
    Backend(String),
    #[error("failed to draw chart: {0}")]
    Draw(String),
    #[error("failed to save chart: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "svg" => Ok(ImageFormat::Svg),
            "png" => Ok(ImageFormat::Png),
            other => Err(PlotError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Where a rendered chart goes: `{dir}/{name}.{format}`.
#[derive(Debug, Clone)]
pub struct ChartDest {
    pub dir: PathBuf,
    pub name: String,
    pub format: ImageFormat,
}

impl ChartDest {
    pub fn new(dir: &Path, name: &str, format: ImageFormat) -> Self {
        Self {
            dir: dir.to_path_buf(),
            name: name.to_string(),
            format,
        }
    }

    pub fn file_path(&self) -> PathBuf {
        self.dir
            .join(format!("{}.{}", self.name, self.format.extension()))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/plot/tests.rs"]
mod tests;
