use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{
    LifespanConfig, compute_lifespans, composer_dates, weighted_heights, year_intervals,
};
use crate::input::ComposerRecord;
use crate::plot::{ChartDest, ImageFormat};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("corpus_plots_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn composer(born: Option<i32>, died: Option<i32>) -> ComposerRecord {
    ComposerRecord {
        born,
        died,
        desc: "Somewhere composer.".to_string(),
    }
}

#[test]
fn test_alive_expansion_length_and_range() {
    let composers = vec![("A".to_string(), composer(Some(1700), Some(1750)))];
    let samples = compute_lifespans(&composers, false);

    assert_eq!(samples.alive.len(), (1750 - 1700 + 1) as usize);
    assert!(samples.alive.iter().all(|&y| (1700..=1750).contains(&y)));
    assert!(samples.active.is_none());
}

#[test]
fn test_missing_either_year_contributes_nothing() {
    let composers = vec![
        ("no_died".to_string(), composer(Some(1800), None)),
        ("no_born".to_string(), composer(None, Some(1870))),
        ("neither".to_string(), composer(None, None)),
    ];
    let samples = compute_lifespans(&composers, true);
    assert!(samples.alive.is_empty());
    assert!(samples.active.unwrap().is_empty());
}

#[test]
fn test_active_years_drop_first_twenty() {
    let composers = vec![("A".to_string(), composer(Some(1800), Some(1850)))];
    let samples = compute_lifespans(&composers, true);

    let active = samples.active.unwrap();
    assert_eq!(active.len(), (1850 - 1820 + 1) as usize);
    assert_eq!(active.first(), Some(&1820));
    assert_eq!(active.last(), Some(&1850));
}

#[test]
fn test_active_years_empty_for_short_life() {
    let composers = vec![("A".to_string(), composer(Some(1800), Some(1815)))];
    let samples = compute_lifespans(&composers, true);
    assert_eq!(samples.alive.len(), 16);
    assert!(samples.active.unwrap().is_empty());
}

#[test]
fn test_year_intervals_partition_default_range() {
    let intervals = year_intervals(1730, 1950, 5);

    assert_eq!(intervals.len(), 44);
    assert_eq!(intervals[0].end - intervals[0].start, 5);
    let last = intervals.last().unwrap();
    assert_eq!(last.end - last.start, 6);
    assert!(last.contains(1945));
    assert!(last.contains(1949));

    // every year in [1730, 1950) falls in exactly one interval
    for year in 1730..1950 {
        let hits = intervals.iter().filter(|iv| iv.contains(year)).count();
        assert_eq!(hits, 1, "year {year} covered {hits} times");
    }
}

#[test]
fn test_year_intervals_uneven_tail() {
    let intervals = year_intervals(0, 13, 5);
    let bounds: Vec<(i32, i32)> = intervals.iter().map(|iv| (iv.start, iv.end)).collect();
    assert_eq!(bounds, vec![(0, 5), (5, 10), (10, 14)]);
}

#[test]
fn test_weighted_heights() {
    let intervals = year_intervals(1730, 1950, 5);

    // five samples in the first bin weigh in at 5 * (1/5) = 1.0
    let samples = vec![1730, 1731, 1732, 1733, 1734];
    let heights = weighted_heights(&samples, &intervals, 5);
    assert_eq!(heights.len(), intervals.len());
    assert!((heights[0] - 1.0).abs() < 1e-9);
    assert!(heights[1..].iter().all(|&h| h == 0.0));

    // samples outside the range are dropped, the widened tail still counts
    let samples = vec![1700, 1949, 1950, 1951];
    let heights = weighted_heights(&samples, &intervals, 5);
    let total: f64 = heights.iter().sum();
    assert!((total - 2.0 / 5.0).abs() < 1e-9);
    assert!(heights.last().unwrap() > &0.0);
}

#[test]
fn test_compute_end_to_end_fixture() {
    let composers = vec![
        ("incomplete".to_string(), composer(Some(1700), None)),
        ("first".to_string(), composer(Some(1720), Some(1770))),
        ("second".to_string(), composer(Some(1800), Some(1840))),
    ];
    let samples = compute_lifespans(&composers, true);

    let expected_alive = (1770 - 1720 + 1) + (1840 - 1800 + 1);
    let expected_active = (1770 - 1740 + 1) + (1840 - 1820 + 1);
    assert_eq!(samples.alive.len(), expected_alive as usize);
    assert_eq!(samples.active.unwrap().len(), expected_active as usize);

    // lifespans do not overlap, so every year appears at most once
    let mut seen = HashMap::new();
    for &year in &samples.alive {
        *seen.entry(year).or_insert(0) += 1;
    }
    assert!(seen.values().all(|&n| n == 1));
}

#[test]
#[ignore = "Font rendering not available in test environment"]
fn test_composer_dates_writes_chart() {
    let data_dir = make_temp_dir();
    fs::write(
        data_dir.join("composers.yaml"),
        "A:\n  born: 1750\n  died: 1820\n  desc: Austrian composer.\n\
         B:\n  born: 1800\n  died: 1870\n  desc: French composer.\n",
    )
    .unwrap();

    let out_dir = make_temp_dir();
    let dest = ChartDest::new(&out_dir, "composer_dates", ImageFormat::Svg);
    composer_dates(&data_dir, &LifespanConfig::default(), &dest).unwrap();

    assert!(dest.file_path().exists());
}
