use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// The closed set of corpus metadata files this tool knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Composers,
    Corpus,
    Sets,
    Scores,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Composers,
        Category::Corpus,
        Category::Sets,
        Category::Scores,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Composers => "composers",
            Category::Corpus => "corpus",
            Category::Sets => "sets",
            Category::Scores => "scores",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.yaml", self.as_str())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| DataError::InvalidCategory(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("invalid category `{0}`: must be one of composers, corpus, sets, scores")]
    InvalidCategory(String),
    #[error("missing input file: {0}")]
    NotFound(PathBuf),
    #[error("failed to parse {path}: {detail}")]
    Parse { path: PathBuf, detail: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One entry of `composers.yaml`. Extra fields in the file are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ComposerRecord {
    #[serde(default)]
    pub born: Option<i32>,
    #[serde(default)]
    pub died: Option<i32>,
    #[serde(default)]
    pub desc: String,
}

impl ComposerRecord {
    /// Nationality is the first whitespace-delimited token of the description.
    pub fn nationality(&self) -> Option<&str> {
        self.desc.split_whitespace().next()
    }
}

/// One entry of `scores.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRecord {
    pub path: String,
}

impl ScoreRecord {
    /// The first path segment names the owning composer.
    pub fn composer(&self) -> &str {
        self.path.split('/').next().unwrap_or(self.path.as_str())
    }
}

fn category_path(data_dir: &Path, category: Category) -> PathBuf {
    data_dir.join(category.file_name())
}

/// Reads a category file and returns its top-level mapping with file order
/// preserved. Record order matters downstream: frequency ranking breaks ties
/// by first-encounter order.
pub fn load_raw(data_dir: &Path, category: Category) -> Result<Mapping, DataError> {
    let path = category_path(data_dir, category);
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(DataError::NotFound(path));
        }
        Err(err) => return Err(DataError::Io(err)),
    };

    let value: Value = serde_yaml::from_str(&text).map_err(|err| DataError::Parse {
        path: path.clone(),
        detail: err.to_string(),
    })?;

    match value {
        Value::Mapping(mapping) => {
            tracing::info!(
                "loaded {} {} records from {}",
                mapping.len(),
                category,
                path.display()
            );
            Ok(mapping)
        }
        _ => Err(DataError::Parse {
            path,
            detail: "top level is not a mapping".to_string(),
        }),
    }
}

pub fn load_composers(data_dir: &Path) -> Result<Vec<(String, ComposerRecord)>, DataError> {
    load_typed(data_dir, Category::Composers)
}

pub fn load_scores(data_dir: &Path) -> Result<Vec<(String, ScoreRecord)>, DataError> {
    load_typed(data_dir, Category::Scores)
}

fn load_typed<R: for<'de> Deserialize<'de>>(
    data_dir: &Path,
    category: Category,
) -> Result<Vec<(String, R)>, DataError> {
    let path = category_path(data_dir, category);
    let mapping = load_raw(data_dir, category)?;

    let mut records = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let key = key
            .as_str()
            .ok_or_else(|| DataError::Parse {
                path: path.clone(),
                detail: format!("record key is not a string: {key:?}"),
            })?
            .to_string();
        let record = serde_yaml::from_value(value).map_err(|err| DataError::Parse {
            path: path.clone(),
            detail: format!("record `{key}`: {err}"),
        })?;
        records.push((key, record));
    }
    Ok(records)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
