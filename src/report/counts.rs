use std::collections::HashMap;
use std::path::Path;

use crate::input;
use crate::plot::{self, ChartDest};
use crate::report::ReportError;

/// Default cutoff for the scores chart: the composers with more than two
/// scores in the reference corpus.
pub const SCORES_TOP_N: usize = 7;

/// Default cutoff for the nationalities chart: all of them.
pub const NATIONALITIES_TOP_N: usize = 13;

/// Counts occurrences per label, returning `(label, count)` pairs in
/// first-encounter order.
pub fn count_frequencies<I, S>(labels: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for label in labels {
        let label = label.into();
        match counts.get_mut(&label) {
            Some(count) => *count += 1,
            None => {
                counts.insert(label.clone(), 1);
                order.push(label);
            }
        }
    }

    order
        .into_iter()
        .map(|label| {
            let count = counts[&label];
            (label, count)
        })
        .collect()
}

/// The `n` highest counts, descending. The sort is stable, so ties keep
/// their first-encounter order.
pub fn top_n(mut counts: Vec<(String, usize)>, n: usize) -> Vec<(String, usize)> {
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(n);
    counts
}

/// Renders the number of scores per composer for those with the most.
pub fn scores_per_composer(
    data_dir: &Path,
    how_many: usize,
    dest: &ChartDest,
) -> Result<(), ReportError> {
    let scores = input::load_scores(data_dir)?;
    let counts = count_frequencies(scores.iter().map(|(_, score)| score.composer().to_string()));
    plot::save_bar_chart("Scores", &top_n(counts, how_many), dest)?;
    Ok(())
}

/// Renders the most common composer nationalities in the corpus.
pub fn composer_nationalities(
    data_dir: &Path,
    how_many: usize,
    dest: &ChartDest,
) -> Result<(), ReportError> {
    let composers = input::load_composers(data_dir)?;
    let counts = count_frequencies(
        composers
            .iter()
            .filter_map(|(_, composer)| composer.nationality().map(str::to_string)),
    );
    plot::save_bar_chart("Nationalities", &top_n(counts, how_many), dest)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/counts.rs"]
mod tests;
