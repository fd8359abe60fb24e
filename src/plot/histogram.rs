use plotters::coord::Shift;
use plotters::prelude::*;

use crate::plot::{ChartDest, ImageFormat, PlotError};

const HISTOGRAM_SIZE: (u32, u32) = (1000, 600);

// matplotlib tab10 C0/C1: alive in blue, active in orange
const SERIES_COLORS: [RGBColor; 2] = [RGBColor(31, 119, 180), RGBColor(255, 127, 14)];

// dashed vertical guides sit on multiples of this many years
const GUIDE_SPACING: i32 = 50;

#[derive(Debug, Clone)]
pub struct HistogramSeries {
    pub label: String,
    /// Weighted bar height per bin, in the same order as [`HistogramData::bins`].
    pub heights: Vec<f64>,
}

/// A binned, weighted histogram ready to draw. Bins are half-open
/// `[lo, hi)` year intervals; the caller has already applied the
/// `1/step` weighting.
#[derive(Debug, Clone)]
pub struct HistogramData {
    pub bins: Vec<(i32, i32)>,
    pub series: Vec<HistogramSeries>,
    pub start: i32,
    pub stop: i32,
    pub step: i32,
    pub y_label: String,
}

/// Renders an overlaid histogram (semi-transparent series, legend when more
/// than one) and saves it to `{dest.dir}/{dest.name}.{dest.format}`.
pub fn save_histogram(data: &HistogramData, dest: &ChartDest) -> Result<(), PlotError> {
    if data.bins.is_empty() || data.series.is_empty() {
        return Err(PlotError::InvalidData(
            "histogram needs at least one bin and one series".to_string(),
        ));
    }
    for series in &data.series {
        if series.heights.len() != data.bins.len() {
            return Err(PlotError::InvalidData(format!(
                "series `{}` has {} heights for {} bins",
                series.label,
                series.heights.len(),
                data.bins.len()
            )));
        }
    }

    let path = dest.file_path();
    match dest.format {
        ImageFormat::Svg => {
            let root = SVGBackend::new(&path, HISTOGRAM_SIZE).into_drawing_area();
            draw(&root, data)?;
            root.present()
                .map_err(|e| PlotError::Draw(e.to_string()))?;
        }
        ImageFormat::Png => {
            let root = BitMapBackend::new(&path, HISTOGRAM_SIZE).into_drawing_area();
            draw(&root, data)?;
            root.present()
                .map_err(|e| PlotError::Draw(e.to_string()))?;
        }
    }

    tracing::info!("wrote {}", path.display());
    Ok(())
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &HistogramData,
) -> Result<(), PlotError> {
    root.fill(&WHITE)
        .map_err(|e| PlotError::Backend(e.to_string()))?;

    let max_height = data
        .series
        .iter()
        .flat_map(|s| s.heights.iter().copied())
        .fold(0.0_f64, f64::max);
    let y_max = (max_height * 1.1).max(1.0);

    let x_label = if data.step == 1 {
        "Year".to_string()
    } else {
        format!("Year ({}-year average)", data.step)
    };

    let boundary_count = ((data.stop - data.start) / data.step + 1) as usize;

    let mut chart = ChartBuilder::on(root)
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(55)
        .build_cartesian_2d(data.start..data.stop, 0.0..y_max)
        .map_err(|e| PlotError::Backend(e.to_string()))?;

    let rotated = ("serif", 16).into_font().transform(FontTransform::Rotate90);

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(x_label)
        .x_labels(boundary_count / 2 + 1)
        .x_label_style(rotated)
        .y_desc(data.y_label.clone())
        .y_labels((y_max / 5.0).ceil() as usize + 1)
        .y_label_formatter(&|v| format!("{v:.0}"))
        .y_label_style(("serif", 16))
        .axis_desc_style(("serif", 20))
        .draw()
        .map_err(|e| PlotError::Draw(e.to_string()))?;

    for (idx, series) in data.series.iter().enumerate() {
        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
        let anno = chart
            .draw_series(data.bins.iter().zip(&series.heights).map(|(&(lo, hi), &h)| {
                Rectangle::new([(lo, 0.0), (hi, h)], color.mix(0.5).filled())
            }))
            .map_err(|e| PlotError::Draw(e.to_string()))?;
        if data.series.len() > 1 {
            anno.label(series.label.as_str()).legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.mix(0.5).filled())
            });
        }
    }

    // dashed year guides strictly inside the plotted range
    for k in (data.start / GUIDE_SPACING + 1)..(data.stop / GUIDE_SPACING) {
        let x = k * GUIDE_SPACING;
        chart
            .draw_series(DashedLineSeries::new(
                [(x, 0.0), (x, y_max)],
                8,
                6,
                BLACK.stroke_width(1),
            ))
            .map_err(|e| PlotError::Draw(e.to_string()))?;
    }

    if data.series.len() > 1 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("serif", 18))
            .draw()
            .map_err(|e| PlotError::Draw(e.to_string()))?;
    }

    Ok(())
}
