use plotters::coord::Shift;
use plotters::prelude::*;

use crate::plot::{ChartDest, ImageFormat, PlotError};

const BAR_CHART_SIZE: (u32, u32) = (1500, 1000);

// matplotlib tab10 C0, for continuity with the original figures
const BAR_BLUE: RGBColor = RGBColor(31, 119, 180);

/// Draws one horizontal bar per `(label, count)` pair, first pair at the top,
/// and saves the chart to `{dest.dir}/{dest.name}.{dest.format}`.
///
/// Labels get underscores replaced by spaces and a two-space indent so they
/// clear the axis line.
pub fn save_bar_chart(
    title: &str,
    counts: &[(String, usize)],
    dest: &ChartDest,
) -> Result<(), PlotError> {
    if counts.is_empty() {
        return Err(PlotError::InvalidData(format!("no counts for `{title}`")));
    }

    let path = dest.file_path();
    match dest.format {
        ImageFormat::Svg => {
            let root = SVGBackend::new(&path, BAR_CHART_SIZE).into_drawing_area();
            draw(&root, title, counts)?;
            root.present()
                .map_err(|e| PlotError::Draw(e.to_string()))?;
        }
        ImageFormat::Png => {
            let root = BitMapBackend::new(&path, BAR_CHART_SIZE).into_drawing_area();
            draw(&root, title, counts)?;
            root.present()
                .map_err(|e| PlotError::Draw(e.to_string()))?;
        }
    }

    tracing::info!("wrote {}", path.display());
    Ok(())
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    title: &str,
    counts: &[(String, usize)],
) -> Result<(), PlotError> {
    root.fill(&WHITE)
        .map_err(|e| PlotError::Backend(e.to_string()))?;

    let n = counts.len() as i32;
    let max_count = counts.iter().map(|(_, c)| *c).max().unwrap_or(0);
    let x_max = (max_count as f64 * 1.05).max(1.0);

    let labels: Vec<String> = counts
        .iter()
        .map(|(label, _)| format!("  {}", label.replace('_', " ")))
        .collect();

    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .x_label_area_size(80)
        .y_label_area_size(280)
        .build_cartesian_2d(0.0..x_max, (0..n).into_segmented())
        .map_err(|e| PlotError::Backend(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(format!("{title} in the corpus"))
        .x_label_style(("serif", 28))
        .x_label_formatter(&|v| format!("{v:.0}"))
        .y_labels(counts.len())
        .y_label_style(("serif", 24))
        .y_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(slot) => {
                let row = (n - 1 - *slot) as usize;
                labels.get(row).cloned().unwrap_or_default()
            }
            _ => String::new(),
        })
        .draw()
        .map_err(|e| PlotError::Draw(e.to_string()))?;

    chart
        .draw_series(counts.iter().enumerate().map(|(row, (_, count))| {
            // first row renders in the topmost slot
            let slot = n - 1 - row as i32;
            Rectangle::new(
                [
                    (0.0, SegmentValue::Exact(slot)),
                    (*count as f64, SegmentValue::Exact(slot + 1)),
                ],
                BAR_BLUE.filled(),
            )
        }))
        .map_err(|e| PlotError::Draw(e.to_string()))?;

    Ok(())
}
