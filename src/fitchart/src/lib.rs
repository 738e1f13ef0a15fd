#[macro_use]
extern crate log;

mod samples;
pub use samples::{load_samples, parse_samples};

mod report;
pub use report::ChartReport;

mod series;
pub use series::{SeriesPoint, build_series};
