use std::path::Path;

use crate::input::{self, ComposerRecord};
use crate::plot::{self, ChartDest, HistogramData, HistogramSeries};
use crate::report::ReportError;

/// Approximate career start: lifespan minus an assumed first 20 years.
pub const CAREER_START_OFFSET: i32 = 20;

#[derive(Debug, Clone)]
pub struct LifespanConfig {
    /// First year to be counted.
    pub start: i32,
    /// First year that will not be counted (last + 1).
    pub stop: i32,
    /// Sampling interval width in years.
    pub step: i32,
    /// Overlay the active-years approximation on the histogram.
    pub include_active: bool,
}

impl Default for LifespanConfig {
    fn default() -> Self {
        Self {
            start: 1730,
            stop: 1950,
            step: 5,
            include_active: true,
        }
    }
}

/// Half-open `[start, end)` range of years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearInterval {
    pub start: i32,
    pub end: i32,
}

impl YearInterval {
    pub fn contains(&self, year: i32) -> bool {
        year >= self.start && year < self.end
    }
}

/// Raw per-year samples: one entry per composer per year. `active` is present
/// only when the active-years approximation was requested.
#[derive(Debug, Clone, Default)]
pub struct LifespanSamples {
    pub alive: Vec<i32>,
    pub active: Option<Vec<i32>>,
}

/// Expands each fully-dated composer into the inclusive year sequence
/// `[born, died]` (and `[born + 20, died]` for the active series). A record
/// missing either year contributes nothing to either series.
pub fn compute_lifespans(
    composers: &[(String, ComposerRecord)],
    include_active: bool,
) -> LifespanSamples {
    let mut alive = Vec::new();
    let mut active = include_active.then(Vec::new);

    for (_, composer) in composers {
        let (Some(born), Some(died)) = (composer.born, composer.died) else {
            continue;
        };
        alive.extend(born..=died);
        if let Some(active) = active.as_mut() {
            active.extend(born + CAREER_START_OFFSET..=died);
        }
    }

    LifespanSamples { alive, active }
}

/// Partitions `[start, stop)` into `step`-wide intervals. The final interval
/// is widened by one year so the inclusive upper boundary lands inside it
/// instead of spawning an extra near-empty bin.
pub fn year_intervals(start: i32, stop: i32, step: i32) -> Vec<YearInterval> {
    assert!(step > 0, "interval step must be positive");
    assert!(stop > start, "stop must lie after start");

    let mut intervals = Vec::with_capacity(((stop - start) / step + 1) as usize);
    let mut lo = start;
    while lo < stop {
        let end = (lo + step).min(stop);
        intervals.push(YearInterval { start: lo, end });
        lo += step;
    }
    if let Some(last) = intervals.last_mut() {
        last.end += 1;
    }
    intervals
}

/// Counts samples per interval and weights each by `1/step`, so bar heights
/// approximate an average count per year regardless of step size. Samples
/// outside every interval are dropped.
pub fn weighted_heights(samples: &[i32], intervals: &[YearInterval], step: i32) -> Vec<f64> {
    let mut counts = vec![0usize; intervals.len()];
    if intervals.is_empty() {
        return Vec::new();
    }
    let start = intervals[0].start;

    for &year in samples {
        if year < start {
            continue;
        }
        let idx = (((year - start) / step) as usize).min(intervals.len() - 1);
        if intervals[idx].contains(year) {
            counts[idx] += 1;
        }
    }

    counts
        .into_iter()
        .map(|c| c as f64 / step as f64)
        .collect()
}

/// Loads the composer records, bins their lifespans, and renders the
/// histogram to `{dest.dir}/{dest.name}.{dest.format}`.
pub fn composer_dates(
    data_dir: &Path,
    cfg: &LifespanConfig,
    dest: &ChartDest,
) -> Result<(), ReportError> {
    let composers = input::load_composers(data_dir)?;
    let samples = compute_lifespans(&composers, cfg.include_active);
    let intervals = year_intervals(cfg.start, cfg.stop, cfg.step);

    let mut series = vec![HistogramSeries {
        label: "Alive".to_string(),
        heights: weighted_heights(&samples.alive, &intervals, cfg.step),
    }];
    if let Some(active) = &samples.active {
        series.push(HistogramSeries {
            label: "Active (approx.)".to_string(),
            heights: weighted_heights(active, &intervals, cfg.step),
        });
    }

    let y_label = if samples.active.is_some() {
        "# composers"
    } else {
        "Number of corpus composers alive"
    };

    let data = HistogramData {
        bins: intervals.iter().map(|iv| (iv.start, iv.end)).collect(),
        series,
        start: cfg.start,
        stop: cfg.stop,
        step: cfg.step,
        y_label: y_label.to_string(),
    };
    plot::save_histogram(&data, dest)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/lifespan.rs"]
mod tests;
