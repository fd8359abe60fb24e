use thiserror::Error;

use crate::input::DataError;
use crate::plot::PlotError;

pub mod counts;
pub mod lifespan;

/// A report fails either while loading corpus data or while rendering the
/// chart. Both are fatal to the invocation.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Plot(#[from] PlotError),
}
